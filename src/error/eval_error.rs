#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// Grouping turned out to be unbalanced during evaluation, despite the
    /// aggregate balance check having passed.
    MismatchedParentheses,
    /// Attempted division by a divisor whose magnitude is exactly zero.
    DivisionByZero,
    /// Attempted modulo by a divisor whose magnitude is exactly zero.
    ModuloByZero,
    /// A numeric token failed to parse. Validation normally prevents this;
    /// hitting it indicates a gap in the syntax checks.
    MalformedLiteral {
        /// The token that failed to parse.
        literal: String,
    },
    /// The scan met a character that is neither part of a number, an
    /// operator, nor a parenthesis. Validation normally prevents this.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
    },
    /// A bounded backend refused a push that would have written past its
    /// fixed capacity.
    CapacityExceeded {
        /// The backend's fixed capacity.
        capacity: usize,
    },
    /// A stack underflowed or the final stack state held anything other than
    /// exactly one value. Never expected for well-formed input.
    Internal {
        /// Details about the violated invariant.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::ModuloByZero => write!(f, "Modulo by zero."),

            Self::MalformedLiteral { literal } => {
                write!(f, "Malformed numeric literal '{literal}'.")
            },

            Self::UnexpectedCharacter { character } => {
                write!(f, "Invalid character encountered: '{character}'.")
            },

            Self::CapacityExceeded { capacity } => {
                write!(f, "Stack capacity of {capacity} entries exceeded.")
            },

            Self::Internal { details } => write!(f, "Internal evaluator error: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
