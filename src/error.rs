/// Validation errors.
///
/// Defines all error types that can occur while checking an expression
/// before evaluation. Validation errors include illegal characters, repeated
/// operators, misplaced operators, and unbalanced parentheses — everything
/// detected by the syntax checks that run before the stacks are touched.
pub mod validate_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while an expression is being
/// evaluated. Evaluation errors include things like division by zero,
/// mismatched parentheses, malformed literals, and exceeded stack capacity.
pub mod eval_error;

pub use eval_error::EvalError;
pub use validate_error::ValidateError;
