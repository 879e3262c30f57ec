use ordered_float::OrderedFloat;

use crate::engine::number::Number;

/// Aggregate statistics over a sequence of numeric values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    /// Sum of every value.
    pub sum:     f64,
    /// Arithmetic mean.
    pub average: f64,
    /// Smallest value.
    pub min:     f64,
    /// Largest value.
    pub max:     f64,
    /// Product of every value.
    pub product: f64,
}

/// Computes sum, average, minimum, maximum and product over the values.
///
/// Minimum and maximum go through [`OrderedFloat`] for a total order over
/// the magnitudes.
///
/// # Parameters
/// - `values`: The values to aggregate.
///
/// # Returns
/// - `Some(Aggregates)`: The computed statistics.
/// - `None`: If `values` is empty.
///
/// # Example
/// ```
/// use infixa::{analysis::stats::aggregate, engine::number::Number};
///
/// let values: Vec<Number> = [1, 2, 3, 4].into_iter().map(Number::from).collect();
/// let stats = aggregate(&values).unwrap();
///
/// assert_eq!(stats.sum, 10.0);
/// assert_eq!(stats.average, 2.5);
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 4.0);
/// assert_eq!(stats.product, 24.0);
///
/// assert!(aggregate(&[]).is_none());
/// ```
#[must_use]
pub fn aggregate(values: &[Number]) -> Option<Aggregates> {
    if values.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut product = 1.0;
    let mut min = OrderedFloat(f64::INFINITY);
    let mut max = OrderedFloat(f64::NEG_INFINITY);

    for value in values {
        let v = value.value();
        sum += v;
        product *= v;
        min = min.min(OrderedFloat(v));
        max = max.max(OrderedFloat(v));
    }

    #[allow(clippy::cast_precision_loss)]
    let average = sum / values.len() as f64;

    Some(Aggregates { sum,
                      average,
                      min: min.0,
                      max: max.0,
                      product })
}

impl std::fmt::Display for Aggregates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Sum     = {}", self.sum)?;
        writeln!(f, "  Average = {}", self.average)?;
        writeln!(f, "  Minimum = {}", self.min)?;
        writeln!(f, "  Maximum = {}", self.max)?;
        write!(f, "  Product = {}", self.product)
    }
}
