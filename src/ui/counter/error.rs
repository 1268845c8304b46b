use thiserror::Error;

/// Invariant violations in the counter state.
///
/// None of these are expected at runtime; they abort the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("Range was improperly initialized. Could not find min and max.")]
    RangeUninitialized,
}
