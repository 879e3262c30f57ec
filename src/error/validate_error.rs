#[derive(Debug)]
/// Represents all errors that can be raised by the pre-evaluation syntax
/// checks.
///
/// Every variant corresponds to one of the documented checks, in the order
/// they run. A failed check means the expression is rejected outright; the
/// caller is expected to re-prompt with a new string rather than attempt any
/// recovery.
pub enum ValidateError {
    /// The expression is empty once whitespace is removed.
    EmptyExpression,
    /// Found a character outside the allowed set `0-9 + - * / % ( ) .`.
    IllegalCharacter {
        /// The offending character.
        character: char,
    },
    /// Found an alphabetic character.
    AlphabeticCharacter {
        /// The offending character.
        character: char,
    },
    /// Two identical characters from the set `+ * / % . -` appear next to
    /// each other, such as `++` or `..`.
    ///
    /// Mixed pairs like `+-` deliberately pass this check; they fail later,
    /// during evaluation.
    RepeatedOperator {
        /// The repeated character.
        character: char,
    },
    /// A numeric literal contains more than one decimal point.
    MultipleDecimalPoints,
    /// The expression starts with one of `+ * / %`.
    LeadingOperator {
        /// The offending character.
        character: char,
    },
    /// The expression ends with one of `+ - * / % .`.
    TrailingOperator {
        /// The offending character.
        character: char,
    },
    /// The running count of `(` minus `)` went negative or did not end at
    /// zero.
    UnbalancedParentheses,
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression is empty."),

            Self::IllegalCharacter { character } => {
                write!(f, "Illegal character '{character}'. Only numbers, + - * / % . ( ) are allowed.")
            },

            Self::AlphabeticCharacter { character } => {
                write!(f, "Alphabetic character '{character}' is not allowed.")
            },

            Self::RepeatedOperator { character } => {
                write!(f, "Repeated operator '{character}{character}'.")
            },

            Self::MultipleDecimalPoints => {
                write!(f, "A number contains more than one decimal point.")
            },

            Self::LeadingOperator { character } => {
                write!(f, "Expression cannot start with '{character}'.")
            },

            Self::TrailingOperator { character } => {
                write!(f, "Expression cannot end with '{character}'.")
            },

            Self::UnbalancedParentheses => write!(f, "Parentheses are not balanced."),
        }
    }
}

impl std::error::Error for ValidateError {}
