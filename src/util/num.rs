/// Truncates an `f64` magnitude to an `i64`, saturating at the `i64` bounds.
///
/// The fractional part is discarded (truncation toward zero, not rounding).
/// Values beyond the `i64` range clamp to `i64::MIN`/`i64::MAX`, and `NaN`
/// becomes `0`; no conversion ever panics.
///
/// ## Parameters
/// - `value`: The floating-point value to truncate.
///
/// ## Returns
/// The truncated integer value.
///
/// ## Example
/// ```
/// use infixa::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(3.9), 3);
/// assert_eq!(truncate_to_i64(-2.7), -2);
/// assert_eq!(truncate_to_i64(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}
