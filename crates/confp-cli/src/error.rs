//! CLI errors

use thiserror::Error;

/// Failures specific to the command-line surface
#[derive(Debug, Error)]
pub enum CliError {
    /// Interface name not in the catalog
    #[error("unknown interface '{0}'")]
    UnknownInterface(String),

    /// Output or log format not recognised
    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    /// Strict conversion left differences behind
    #[error("conversion left {count} difference(s):\n{report}")]
    Mismatch {
        /// Number of differing capabilities
        count: usize,
        /// One line per difference
        report: String,
    },
}
