/// Capacity-bounded literal queues and even/odd partitioning.
///
/// Feeds an expression's numeric literals into fixed-size queues and splits
/// them by parity. Extraction is lexer-driven and keeps literals in reading
/// order.
pub mod batches;
/// Aggregate statistics over extracted literals.
///
/// Sum, average, minimum, maximum and product over a slice of values, for
/// the report the shells can print next to a result.
pub mod stats;
