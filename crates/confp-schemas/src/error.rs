//! Schema document errors

use thiserror::Error;

/// Failure to parse or print a schema document
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Malformed or mistyped JSON
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed or mistyped YAML
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Schema name not recognised
    #[error("unknown schema '{name}' (expected one of: coregeth, geth, parity, genesis)")]
    UnknownSchema {
        /// Name as given
        name: String,
    },
}

impl SchemaError {
    /// Create an unknown-schema error
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownSchema { name: name.into() }
    }
}
