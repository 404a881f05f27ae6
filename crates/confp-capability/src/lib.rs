//! confp capability registry
//!
//! Declared interfaces and the per-schema accessor tables that stand in for
//! runtime reflection.
//!
//! # Core Concepts
//!
//! - [`Interface`]: a named, composable set of `{name, kind}` declarations
//! - [`AccessorTable`]: typed reader/writer closures registered per schema type
//! - [`Configurable`]: schema types point at their static table
//! - [`Configurator`]: object-safe view the engine works through
//! - [`enumerate`] / [`pair`]: lexical capability descriptors and
//!   source-to-destination pairings
//!
//! # Example
//!
//! ```rust
//! use confp_capability::{catalog, AccessorTable, Configurable, Configurator};
//! use once_cell::sync::Lazy;
//!
//! #[derive(Default)]
//! struct Tiny {
//!     network_id: Option<u64>,
//! }
//!
//! static TABLE: Lazy<AccessorTable<Tiny>> = Lazy::new(|| {
//!     AccessorTable::new("Tiny").uint64(
//!         catalog::names::NETWORK_ID,
//!         |t: &Tiny| t.network_id,
//!         |t: &mut Tiny, v| t.network_id = v,
//!     )
//! });
//!
//! impl Configurable for Tiny {
//!     fn accessors() -> &'static AccessorTable<Self> {
//!         &TABLE
//!     }
//! }
//!
//! let tiny = Tiny { network_id: Some(314_159) };
//! assert!(confp_capability::satisfies(&catalog::NETWORK_IDENTITY, &tiny));
//! assert_eq!(tiny.read("NetworkID").as_u64(), Some(314_159));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod accessor;
pub mod catalog;
mod configurable;
mod enumerator;
mod error;
mod interface;

// Re-exports
pub use accessor::{AccessorTable, Reader, Writer};
pub use configurable::{Configurable, Configurator};
pub use enumerator::{
    enumerate, pair, satisfies, unsatisfied, CapabilityDescriptor, Pairing, PairingStatus,
};
pub use error::WriteError;
pub use interface::{is_transition, CapabilitySpec, Interface, TRANSITION_SUFFIX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
