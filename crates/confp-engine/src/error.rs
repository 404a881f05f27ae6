//! Engine errors

use confp_types::ValueKind;

/// Conversion failure; aborts the call, earlier writes stay in place
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Source reader kind cannot be written by the destination writer
    #[error("incompatible capability type for {capability}: source {source_kind}, destination {destination_kind}")]
    IncompatibleCapabilityType {
        /// Offending capability
        capability: String,
        /// Kind the source produces
        source_kind: ValueKind,
        /// Kind the destination accepts
        destination_kind: ValueKind,
    },

    /// Destination has a place for the capability but cannot hold the value
    #[error("unrepresentable value for {capability}: {reason}")]
    UnrepresentableValue {
        /// Offending capability
        capability: String,
        /// Writer's explanation
        reason: String,
    },
}

impl ConvertError {
    /// Create an incompatible-type error
    pub fn incompatible(
        capability: impl Into<String>,
        source_kind: ValueKind,
        destination_kind: ValueKind,
    ) -> Self {
        Self::IncompatibleCapabilityType {
            capability: capability.into(),
            source_kind,
            destination_kind,
        }
    }

    /// Create an unrepresentable-value error
    pub fn unrepresentable(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnrepresentableValue {
            capability: capability.into(),
            reason: reason.into(),
        }
    }

    /// Capability the error names
    #[must_use]
    pub fn capability(&self) -> &str {
        match self {
            Self::IncompatibleCapabilityType { capability, .. }
            | Self::UnrepresentableValue { capability, .. } => capability,
        }
    }
}

/// Two schedules disagree on a fork that is already active
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mismatching {what} (stored {}, new {}, rewind to {rewind_to})", fmt_block(.stored), fmt_block(.new))]
pub struct CompatError {
    /// Capability that differs
    pub what: String,
    /// Activation in the stored schedule
    pub stored: Option<u64>,
    /// Activation in the new schedule
    pub new: Option<u64>,
    /// Highest block that is still valid under both schedules
    pub rewind_to: u64,
}

impl CompatError {
    /// Create a compatibility error, deriving the rewind point
    pub fn new(what: impl Into<String>, stored: Option<u64>, new: Option<u64>) -> Self {
        let earliest = match (stored, new) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => 0,
        };
        Self {
            what: what.into(),
            stored,
            new,
            rewind_to: earliest.saturating_sub(1),
        }
    }
}

/// Declared fork order violated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForkOrderError {
    /// A later fork activates before an earlier one
    #[error("unsupported fork ordering: {earlier} enabled at {earlier_block}, but {later} enabled at {later_block}")]
    OutOfOrder {
        /// Fork declared first
        earlier: String,
        /// Its activation
        earlier_block: u64,
        /// Fork declared after it
        later: String,
        /// Its activation
        later_block: u64,
    },

    /// A fork is set although one declared before it is not
    #[error("unsupported fork ordering: {unset} not enabled, but {set} enabled at {block}")]
    Gap {
        /// Unset fork declared first
        unset: String,
        /// Set fork declared after it
        set: String,
        /// Its activation
        block: u64,
    },
}

fn fmt_block(block: &Option<u64>) -> String {
    block.map_or_else(|| "nil".to_string(), |b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewind_is_before_earliest() {
        let err = CompatError::new("EIP155Transition", Some(10), Some(20));
        assert_eq!(err.rewind_to, 9);
        let err = CompatError::new("EIP155Transition", None, Some(0));
        assert_eq!(err.rewind_to, 0);
    }

    #[test]
    fn messages_name_capability() {
        let err = ConvertError::incompatible("ChainID", ValueKind::BigInt, ValueKind::Uint64);
        assert_eq!(err.capability(), "ChainID");
        assert!(err.to_string().contains("source bigint, destination uint64"));
        let err = CompatError::new("EIP7Transition", Some(5), None);
        assert_eq!(
            err.to_string(),
            "mismatching EIP7Transition (stored 5, new nil, rewind to 4)"
        );
    }
}
