//! confp engine
//!
//! Generic conversion, equivalence, identity and transition enumeration over
//! any pair of schema objects that implement
//! [`Configurator`](confp_capability::Configurator).
//!
//! # Core Concepts
//!
//! - [`convert`] / [`convert_with`]: additive copy from one schema into another
//! - [`equal`]: per-capability differences over a declared interface
//! - [`identical`]: short-circuit comparison over a named subset
//! - [`transitions`]: late-bound fork-activation thresholds in lexical order
//! - [`schedule`]: fork heights, compatibility and ordering checks
//!
//! No component keeps state between calls; every pairing is rebuilt from the
//! static accessor tables on each call.
//!
//! # Example
//!
//! ```rust
//! use confp_engine::{convert, equal, identical};
//! use confp_capability::catalog::CHAIN_IDENTITY;
//! use confp_schemas::{CoreGethChainConfig, ParityChainSpec};
//!
//! let mut src = CoreGethChainConfig::default();
//! src.network_id = Some(314_159);
//! src.chain_id = Some(61u64.into());
//!
//! let mut dst = ParityChainSpec::default();
//! convert(&src, &mut dst).unwrap();
//!
//! assert!(equal(&CHAIN_IDENTITY, &src, &dst).is_empty());
//! assert!(identical(&src, &dst, &["ChainID", "NetworkID"]));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod convert;
mod equal;
mod error;
pub mod schedule;
mod transitions;

// Re-exports
pub use convert::{convert, convert_with};
pub use equal::{equal, identical, Difference};
pub use error::{CompatError, ConvertError, ForkOrderError};
pub use schedule::{check_fork_order, compatible, fork_blocks, ForkSchedule};
pub use transitions::{transition_names, transition_values, transitions, TransitionFn};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
