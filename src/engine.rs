/// The lexer module tokenizes an expression for the scan.
///
/// The lexer reads the raw expression text and produces a stream of tokens:
/// maximal runs of digits and decimal points, the five operators, and
/// parentheses. Whitespace is skipped. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Captures literal runs whole so malformed ones surface as parse errors.
/// - Surfaces unrecognized characters as lexical errors.
pub mod lexer;
/// The validate module runs the pre-evaluation syntax checks.
///
/// Validation rejects expressions before the stacks are touched: illegal
/// characters, repeated operators, multiple decimal points in one literal,
/// misplaced leading/trailing operators, and unbalanced parentheses. The
/// checks are heuristic by design and are preserved as the compatibility
/// baseline for the accepted language.
///
/// # Responsibilities
/// - Runs the seven documented checks in a fixed order.
/// - Reports the first failure as a typed [`ValidateError`](crate::error::ValidateError).
/// - Stays stateless and idempotent.
pub mod validate;
/// The number module defines the runtime value type.
///
/// A value is a 64-bit magnitude plus a float tag that decides display
/// formatting and propagates through arithmetic. The module provides literal
/// parsing, operator application with zero-divisor checks, and the display
/// rules.
///
/// # Responsibilities
/// - Defines [`Number`](number::Number) and its parsing and arithmetic.
/// - Preserves the integer-or-float character of every computation.
/// - Renders values per the display rules (truncated vs. two decimals).
pub mod number;
/// The eval module drives the two-stack scan.
///
/// The engine rewrites implicit multiplication, clears its stacks, then
/// scans tokens left to right, reducing by operator precedence. It is
/// parameterized over a storage backend and accepts an optional observer
/// that sees every reduction step.
///
/// # Responsibilities
/// - Owns the scan loop, precedence climbing, and final reduction.
/// - Coordinates backend storage and the observer hook.
/// - Reports evaluation failures as typed errors, never panics.
pub mod eval;
/// The backend module provides interchangeable stack storage.
///
/// Three strategies implement the same LIFO contract: fixed-capacity
/// arrays, doubly-linked lists, and deques driven at the tail. Selection is
/// configuration; the algorithm never changes with the backend.
///
/// # Responsibilities
/// - Defines the [`StackBackend`](backend::core::StackBackend) contract.
/// - Implements the array, linked-list, and deque strategies.
/// - Exposes [`BackendKind`](backend::core::BackendKind) for configuration.
pub mod backend;
