//! Rejection reasons returned by supply operations.
//!
//! Every variant is recoverable. Preconditions are checked before any
//! mutation, so a rejected operation leaves the supply untouched. The one
//! exception is [`SupplyError::Full`], which only ever appears inside a
//! [`crate::Replenish`] after the removal half of a play or reserve completed.

/// Why an operation (or the replenishment half of one) was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SupplyError {
    #[error("queue is empty: no piece to play")]
    Empty,

    #[error("queue is full: replacement piece not generated")]
    Full,

    #[error("queue is empty: no piece to move")]
    QueueEmpty,

    #[error("reserve stack is full")]
    StackFull,

    #[error("reserve stack is empty")]
    StackEmpty,

    #[error("queue holds fewer than 3 pieces")]
    QueueTooShort,

    #[error("reserve stack holds fewer than 3 pieces")]
    StackTooShort,
}

impl SupplyError {
    /// Stable snake_case identifier, used by JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyError::Empty => "empty",
            SupplyError::Full => "full",
            SupplyError::QueueEmpty => "queue_empty",
            SupplyError::StackFull => "stack_full",
            SupplyError::StackEmpty => "stack_empty",
            SupplyError::QueueTooShort => "queue_too_short",
            SupplyError::StackTooShort => "stack_too_short",
        }
    }
}
