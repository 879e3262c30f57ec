//! # infixa
//!
//! infixa is a stack-backed infix arithmetic calculator written in Rust.
//! It validates and evaluates flat expressions over `+ - * / %` with
//! parentheses and implicit multiplication, preserves the integer-or-float
//! character of every literal through arithmetic, and runs the same
//! two-stack algorithm over three interchangeable storage strategies.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::{
    backend::core::BackendKind,
    eval::Engine,
    number::Number,
    validate::{strip_whitespace, validate},
};

/// Inspects the literals of an expression.
///
/// This module provides the side views a shell can print next to a result:
/// the expression's numeric literals fed into capacity-bounded queues with
/// an even/odd partition, and aggregate statistics over them.
///
/// # Responsibilities
/// - Extracts literals from an expression in reading order.
/// - Groups them into bounded queues and splits them by parity.
/// - Computes sum, average, minimum, maximum and product.
pub mod analysis;
/// Validates and evaluates expressions.
///
/// This module ties together lexing, validation, the tagged numeric value
/// type, the two-stack evaluation engine, and the interchangeable storage
/// backends. It exposes the public API for checking and evaluating
/// expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, validator, engine, backends.
/// - Provides entry points for validating and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod engine;
/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors that can be raised while checking or
/// evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures for user feedback.
///
/// # Responsibilities
/// - Defines error enums for both failure phases.
/// - Attaches offending characters and details for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// General utilities for safe numeric conversion.
///
/// This module provides the conversion helpers shared by the display rules
/// and the parity partition.
///
/// # Responsibilities
/// - Truncates floating-point magnitudes to integers without panicking.
pub mod util;

/// Validates and evaluates an expression with the chosen backend.
///
/// This is the convenience entry point wiring the full pipeline: whitespace
/// stripping, the syntax checks, then the two-stack evaluation. Shells that
/// need finer control (observers, reused engines, typed errors per phase)
/// call the pieces in [`engine`] directly.
///
/// # Errors
/// Returns the validation or evaluation failure as a boxed error.
///
/// # Examples
/// ```
/// use infixa::{engine::backend::core::BackendKind, eval_expression};
///
/// let result = eval_expression("2+3*4", BackendKind::Array).unwrap();
/// assert_eq!(result.to_string(), "14");
///
/// // A float-tagged literal floats the whole result.
/// let result = eval_expression("2 + 3.5", BackendKind::Queue).unwrap();
/// assert_eq!(result.to_string(), "5.50");
///
/// // Implicit multiplication is rewritten before the scan.
/// let result = eval_expression("2(3+4)", BackendKind::Linked).unwrap();
/// assert_eq!(result.to_string(), "14");
///
/// assert!(eval_expression("2++3", BackendKind::Array).is_err());
/// ```
pub fn eval_expression(source: &str,
                       kind: BackendKind)
                       -> Result<Number, Box<dyn std::error::Error>> {
    let expression = strip_whitespace(source);
    validate(&expression)?;

    let mut engine = Engine::new(kind);
    let value = engine.evaluate(&expression)?;

    Ok(value)
}
