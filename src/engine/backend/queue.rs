use std::collections::VecDeque;

use crate::engine::{backend::core::StackBackend, eval::EvalResult, number::Number};

/// Double-ended queues behaving as stacks.
///
/// Pushes append at the tail and pops and peeks operate on the tail, so the
/// queue-shaped storage satisfies the LIFO contract. Unbounded.
pub struct QueueBackend {
    values: VecDeque<Number>,
    ops:    VecDeque<char>,
}

#[allow(clippy::new_without_default)]
impl QueueBackend {
    /// Creates a backend with both stacks empty.
    #[must_use]
    pub fn new() -> Self {
        Self { values: VecDeque::new(),
               ops:    VecDeque::new(), }
    }
}

impl StackBackend for QueueBackend {
    fn push_value(&mut self, value: Number) -> EvalResult<()> {
        self.values.push_back(value);
        Ok(())
    }

    fn pop_value(&mut self) -> Option<Number> {
        self.values.pop_back()
    }

    fn push_op(&mut self, op: char) -> EvalResult<()> {
        self.ops.push_back(op);
        Ok(())
    }

    fn pop_op(&mut self) -> Option<char> {
        self.ops.pop_back()
    }

    fn peek_op(&self) -> Option<char> {
        self.ops.back().copied()
    }

    fn is_op_empty(&self) -> bool {
        self.ops.is_empty()
    }

    fn clear(&mut self) {
        self.values.clear();
        self.ops.clear();
    }
}
