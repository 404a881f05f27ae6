//! confp value types
//!
//! The vocabulary shared by the capability registry, the engine and every
//! schema collaborator.
//!
//! # Core Concepts
//!
//! - [`CapabilityValue`]: tagged, possibly-absent value of one capability
//! - [`ValueKind`]: the representation a reader produces or a writer accepts
//! - [`ConsensusEngine`]: the sealing engine a chain configuration selects
//! - [`Hash32`]: 32-byte hash used by genesis header fields
//! - [`HexOrDecimal64`] / [`HexOrDecimal256`] / [`DecimalBig`] / [`HexBytes`]:
//!   lenient JSON codecs for quantities as spelled by different clients
//!
//! # Example
//!
//! ```rust
//! use confp_types::{CapabilityValue, ValueKind};
//!
//! let fork = CapabilityValue::from(Some(1_150_000u64));
//! let widened = fork.clone().widen(ValueKind::BigInt).unwrap();
//! assert!(fork.agrees_with(&widened));
//! assert!(!CapabilityValue::Absent.agrees_with(&fork));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod hash;
mod quantity;
mod value;

// Re-exports
pub use dashu::integer::UBig;
pub use hash::{Hash32, HashError};
pub use quantity::{
    parse_big, parse_u64, DecimalBig, HexBytes, HexOrDecimal256, HexOrDecimal64, QuantityError,
};
pub use value::{CapabilityValue, ConsensusEngine, KindMismatch, ValueKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
