use thiserror::Error;

/// Errors surfaced by the sequence protocol.
///
/// Failures are immediate and local: nothing is retried or recovered
/// internally, and errors raised inside consumer-supplied callbacks propagate
/// as panics without being caught or wrapped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `advance` was called on a cursor whose `has_next` is false
    #[error("sequence is exhausted, no next element")]
    Exhausted,
    /// A numeric range was constructed with a step of zero
    #[error("range step must not be zero")]
    ZeroStep,
}
