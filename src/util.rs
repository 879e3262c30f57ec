/// Numeric conversion helpers.
///
/// This module provides the conversion routines shared across the engine and
/// the analysis helpers. The display rules and the even/odd partition both
/// truncate a floating-point magnitude to an integer; doing it in one place
/// keeps the two behaviors identical.
pub mod num;
