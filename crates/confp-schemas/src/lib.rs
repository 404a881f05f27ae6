//! confp schemas
//!
//! Client chain-configuration formats, each registering capability
//! accessors so the engine can read and write them by name.
//!
//! # Core Concepts
//!
//! - [`CoreGethChainConfig`]: one flat field per protocol change
//! - [`GoEthereumChainConfig`]: named forks that bundle several changes
//! - [`ParityChainSpec`]: nested engine params, builtins and bomb delays
//! - [`Genesis`]: a genesis header around a core-geth config
//! - [`SchemaKind`] / [`SchemaDocument`]: pick and parse a schema at runtime
//!
//! A schema that cannot store a capability simply has no accessor for it, or
//! a writer that declines present values.
//!
//! # Example
//!
//! ```rust
//! use confp_capability::catalog::names;
//! use confp_capability::Configurator;
//! use confp_schemas::SchemaKind;
//!
//! let doc = SchemaKind::CoreGeth
//!     .from_json(r#"{"networkId": 61, "eip155Block": 3000000}"#)
//!     .unwrap();
//! let config = doc.as_configurator();
//! assert_eq!(config.read(names::EIP155).as_u64(), Some(3_000_000));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod common;
mod coregeth;
mod document;
mod error;
mod genesis;
mod goethereum;
pub mod parity;

// Re-exports
pub use common::{CliqueConfig, ConsensusEngine, EthashConfig};
pub use coregeth::CoreGethChainConfig;
pub use document::{Schema, SchemaDocument, SchemaKind};
pub use error::SchemaError;
pub use genesis::Genesis;
pub use goethereum::GoEthereumChainConfig;
pub use parity::ParityChainSpec;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
