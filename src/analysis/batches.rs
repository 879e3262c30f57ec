use std::{collections::VecDeque, num::NonZeroUsize};

use logos::Logos;

use crate::{
    engine::{eval::EvalResult, lexer::Token, number::Number},
    util::num::truncate_to_i64,
};

/// Collects every numeric literal of an expression, in reading order.
///
/// Operators, parentheses and unrecognized characters are skipped; only the
/// literal runs are kept.
///
/// # Parameters
/// - `expression`: The expression text.
///
/// # Returns
/// - `Ok(Vec<Number>)`: The literals in the order they appear.
/// - `Err(EvalError::MalformedLiteral)`: If a literal run does not parse.
///
/// # Example
/// ```
/// use infixa::analysis::batches::extract_literals;
///
/// let literals = extract_literals("12+3.5*(4)").unwrap();
/// let rendered: Vec<String> = literals.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["12", "3.50", "4"]);
/// ```
pub fn extract_literals(expression: &str) -> EvalResult<Vec<Number>> {
    let mut literals = Vec::new();

    for token in Token::lexer(expression).filter_map(Result::ok) {
        if let Token::Literal(raw) = token {
            literals.push(Number::parse(&raw)?);
        }
    }

    Ok(literals)
}

/// An ordered list of capacity-bounded queues.
///
/// Each pushed value goes to the last queue; a new queue is opened whenever
/// the last one is full. The display form lists one `Q<n> => [..]` line per
/// queue.
#[derive(Debug, Clone)]
pub struct BatchList {
    capacity: NonZeroUsize,
    batches:  Vec<VecDeque<Number>>,
}

impl BatchList {
    /// Creates an empty list whose queues hold at most `capacity` values.
    #[must_use]
    pub const fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity,
               batches: Vec::new() }
    }
    /// Appends a value, opening a new queue when the last one is full.
    pub fn push(&mut self, value: Number) {
        if self.batches.last().map_or(true, |last| last.len() >= self.capacity.get()) {
            self.batches.push(VecDeque::new());
        }
        if let Some(last) = self.batches.last_mut() {
            last.push_back(value);
        }
    }
    /// The queues in insertion order.
    #[must_use]
    pub fn batches(&self) -> &[VecDeque<Number>] {
        &self.batches
    }
    /// Total number of stored values across all queues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.iter().map(VecDeque::len).sum()
    }
    /// Returns `true` when no values have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl std::fmt::Display for BatchList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, batch) in self.batches.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "  Q{} => [", index + 1)?;
            for (i, value) in batch.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

/// Splits literals into even and odd batch lists.
///
/// Parity is judged on the truncated magnitude, so `2.9` counts as even and
/// `3.1` as odd.
///
/// # Parameters
/// - `literals`: The values to split, usually from [`extract_literals`].
/// - `capacity`: Queue capacity for both output lists.
///
/// # Returns
/// The even list and the odd list, in that order.
///
/// # Example
/// ```
/// use std::num::NonZeroUsize;
///
/// use infixa::analysis::batches::{extract_literals, partition_even_odd};
///
/// let literals = extract_literals("1+2+3+4").unwrap();
/// let capacity = NonZeroUsize::new(10).unwrap();
/// let (even, odd) = partition_even_odd(&literals, capacity);
///
/// assert_eq!(even.to_string(), "  Q1 => [2, 4]");
/// assert_eq!(odd.to_string(), "  Q1 => [1, 3]");
/// ```
#[must_use]
pub fn partition_even_odd(literals: &[Number], capacity: NonZeroUsize) -> (BatchList, BatchList) {
    let mut even = BatchList::new(capacity);
    let mut odd = BatchList::new(capacity);

    for &value in literals {
        if truncate_to_i64(value.value()) % 2 == 0 {
            even.push(value);
        } else {
            odd.push(value);
        }
    }

    (even, odd)
}
