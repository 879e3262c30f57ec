use crate::error::ValidateError;

/// Characters that may not appear twice in a row.
const NO_REPEAT: [char; 6] = ['+', '*', '/', '%', '.', '-'];

/// Removes every whitespace character from an expression.
///
/// The shells strip input before validating; library callers can use this to
/// do the same.
#[must_use]
pub fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Runs the syntax checks an expression must pass before evaluation.
///
/// Whitespace is removed first, then the checks run in a fixed order:
///
/// 1. the expression is non-empty
/// 2. no alphabetic characters
/// 3. every character is one of `0-9 + - * / % ( ) .`
/// 4. no two identical consecutive characters from `+ * / % . -`
/// 5. no run of digits and dots containing two or more dots
/// 6. no leading `+ * / %` and no trailing `+ - * / % .`
/// 7. parentheses balance never goes negative and ends at zero
///
/// The checks are deliberately narrow and are kept as the compatibility
/// baseline: mixed adjacent operators such as `+-` pass here and fail during
/// evaluation instead. Validation is stateless and idempotent.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Returns
/// - `Ok(())`: The expression may be handed to the engine.
/// - `Err(ValidateError)`: The first check that failed.
///
/// # Example
/// ```
/// use infixa::engine::validate::validate;
///
/// assert!(validate("2+3*(4-1)").is_ok());
/// assert!(validate("2++3").is_err());
/// assert!(validate("(2+3").is_err());
/// ```
pub fn validate(expression: &str) -> Result<(), ValidateError> {
    let expr: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();

    if expr.is_empty() {
        return Err(ValidateError::EmptyExpression);
    }

    for &character in &expr {
        if character.is_alphabetic() {
            return Err(ValidateError::AlphabeticCharacter { character });
        }
        if !character.is_ascii_digit()
           && !matches!(character, '+' | '-' | '*' | '/' | '%' | '(' | ')' | '.')
        {
            return Err(ValidateError::IllegalCharacter { character });
        }
    }

    for pair in expr.windows(2) {
        if pair[0] == pair[1] && NO_REPEAT.contains(&pair[0]) {
            return Err(ValidateError::RepeatedOperator { character: pair[0] });
        }
    }

    // Dots are counted per digit/dot run, so `1.2+3.4` passes while `1.2.3`
    // does not.
    let mut dots_in_run = 0;
    for &character in &expr {
        if character == '.' {
            dots_in_run += 1;
            if dots_in_run > 1 {
                return Err(ValidateError::MultipleDecimalPoints);
            }
        } else if !character.is_ascii_digit() {
            dots_in_run = 0;
        }
    }

    let first = expr[0];
    if matches!(first, '+' | '*' | '/' | '%') {
        return Err(ValidateError::LeadingOperator { character: first });
    }
    let last = expr[expr.len() - 1];
    if matches!(last, '+' | '-' | '*' | '/' | '%' | '.') {
        return Err(ValidateError::TrailingOperator { character: last });
    }

    let mut balance = 0_i32;
    for &character in &expr {
        match character {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {},
        }
        if balance < 0 {
            return Err(ValidateError::UnbalancedParentheses);
        }
    }
    if balance != 0 {
        return Err(ValidateError::UnbalancedParentheses);
    }

    Ok(())
}
