//! confp command-line support
//!
//! Argument-independent pieces of the `confp` binary: run configuration,
//! logging setup and the subcommands themselves.
//!
//! # Example
//!
//! ```rust
//! use confp_cli::{OutputFormat, ReconcileConfig};
//!
//! let config = ReconcileConfig::new()
//!     .with_strict(true)
//!     .with_output(OutputFormat::Yaml);
//! assert_eq!(config.interface.name(), "Configurator");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod commands;
mod config;
mod error;
mod logging;

// Re-exports
pub use config::{LogFormat, OutputFormat, ReconcileConfig};
pub use error::CliError;
pub use logging::init_tracing;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
