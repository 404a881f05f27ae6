//! Run configuration assembled from command-line arguments

use std::fmt::{self, Display};
use std::str::FromStr;

use confp_capability::catalog::{interface_by_name, CONFIGURATOR};
use confp_capability::Interface;

use crate::error::CliError;

/// Document format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// Settings shared by every subcommand
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Interface conversions and comparisons run over
    pub interface: &'static Interface,
    /// Fail a conversion when the result differs from its source
    pub strict: bool,
    /// Document output format
    pub output: OutputFormat,
    /// Log output format
    pub log_format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ReconcileConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With interface
    #[inline]
    #[must_use]
    pub fn with_interface(mut self, interface: &'static Interface) -> Self {
        self.interface = interface;
        self
    }

    /// With interface looked up by name
    ///
    /// # Errors
    /// Returns [`CliError::UnknownInterface`] for names outside the catalog.
    pub fn with_interface_name(self, name: &str) -> Result<Self, CliError> {
        let interface =
            interface_by_name(name).ok_or_else(|| CliError::UnknownInterface(name.to_string()))?;
        Ok(self.with_interface(interface))
    }

    /// With strict mode
    #[inline]
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// With output format
    #[inline]
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// With log format
    #[inline]
    #[must_use]
    pub fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// With default log filter
    #[inline]
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            interface: &CONFIGURATOR,
            strict: false,
            output: OutputFormat::Json,
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}

impl Display for ReconcileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "interface={} strict={} output={:?}",
            self.interface.name(),
            self.strict,
            self.output
        )
    }
}
