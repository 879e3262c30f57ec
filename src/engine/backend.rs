/// The stack contract and backend selection.
///
/// Declares the `StackBackend` trait every storage strategy implements, and
/// the `BackendKind` enum used to pick one from configuration.
pub mod core;
/// Fixed-capacity array storage.
///
/// Two plain arrays with explicit top indices. Bounded: pushing past the
/// fixed capacity is refused with a typed error.
pub mod array;
/// Doubly-linked-list storage.
///
/// Two linked lists used as deques, pushing and popping at the front.
pub mod linked;
/// Deque storage behaving as a stack.
///
/// Two double-ended queues whose pushes append at the tail and whose pops
/// and peeks operate on the tail, so the queue-shaped storage satisfies the
/// same LIFO contract.
pub mod queue;
