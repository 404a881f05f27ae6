//! Writer errors

use confp_types::KindMismatch;

/// Outcome of a writer refusing a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    /// The schema has no place for this capability; callers skip it
    #[error("capability not supported by this schema")]
    Unsupported,

    /// The schema has a place for the capability but cannot hold this value
    #[error("value rejected: {reason}")]
    Rejected {
        /// Why the value cannot be represented
        reason: String,
    },

    /// A present value of the wrong kind reached the writer
    #[error(transparent)]
    Kind(#[from] KindMismatch),
}

impl WriteError {
    /// Create a rejection
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Whether the caller may skip the capability and carry on
    #[inline]
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}
