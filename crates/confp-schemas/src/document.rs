//! Type-erased schema documents
//!
//! The engine works on anything that implements `Configurator`; callers that
//! pick a schema at runtime (the CLI) hold a `Box<dyn SchemaDocument>` and
//! borrow it as one.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use confp_capability::{Configurable, Configurator};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::coregeth::CoreGethChainConfig;
use crate::error::SchemaError;
use crate::genesis::Genesis;
use crate::goethereum::GoEthereumChainConfig;
use crate::parity::ParityChainSpec;

/// Supported document schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// core-geth `config` object
    CoreGeth,
    /// go-ethereum `config` object
    GoEthereum,
    /// Parity / OpenEthereum chain spec
    Parity,
    /// Genesis file around a core-geth config
    Genesis,
}

impl SchemaKind {
    /// Every schema, in display order
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::CoreGeth,
        SchemaKind::GoEthereum,
        SchemaKind::Parity,
        SchemaKind::Genesis,
    ];

    /// Canonical short name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoreGeth => "coregeth",
            Self::GoEthereum => "geth",
            Self::Parity => "parity",
            Self::Genesis => "genesis",
        }
    }

    /// Fresh document with nothing set
    #[must_use]
    pub fn empty(self) -> Box<dyn SchemaDocument> {
        match self {
            Self::CoreGeth => Box::new(CoreGethChainConfig::default()),
            Self::GoEthereum => Box::new(GoEthereumChainConfig::default()),
            Self::Parity => Box::new(ParityChainSpec::default()),
            Self::Genesis => Box::new(Genesis::default()),
        }
    }

    /// Parse a JSON document of this schema
    ///
    /// # Errors
    /// Returns [`SchemaError::Json`] when the input does not deserialize.
    pub fn from_json(self, input: &str) -> Result<Box<dyn SchemaDocument>, SchemaError> {
        let doc: Box<dyn SchemaDocument> = match self {
            Self::CoreGeth => Box::new(serde_json::from_str::<CoreGethChainConfig>(input)?),
            Self::GoEthereum => Box::new(serde_json::from_str::<GoEthereumChainConfig>(input)?),
            Self::Parity => Box::new(serde_json::from_str::<ParityChainSpec>(input)?),
            Self::Genesis => Box::new(serde_json::from_str::<Genesis>(input)?),
        };
        debug!(schema = self.as_str(), "parsed json document");
        Ok(doc)
    }

    /// Parse a YAML document of this schema
    ///
    /// # Errors
    /// Returns [`SchemaError::Yaml`] when the input does not deserialize.
    pub fn from_yaml(self, input: &str) -> Result<Box<dyn SchemaDocument>, SchemaError> {
        let doc: Box<dyn SchemaDocument> = match self {
            Self::CoreGeth => Box::new(serde_yaml::from_str::<CoreGethChainConfig>(input)?),
            Self::GoEthereum => Box::new(serde_yaml::from_str::<GoEthereumChainConfig>(input)?),
            Self::Parity => Box::new(serde_yaml::from_str::<ParityChainSpec>(input)?),
            Self::Genesis => Box::new(serde_yaml::from_str::<Genesis>(input)?),
        };
        debug!(schema = self.as_str(), "parsed yaml document");
        Ok(doc)
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coregeth" | "core-geth" | "multigeth" => Ok(Self::CoreGeth),
            "geth" | "goethereum" | "go-ethereum" => Ok(Self::GoEthereum),
            "parity" | "openethereum" => Ok(Self::Parity),
            "genesis" => Ok(Self::Genesis),
            _ => Err(SchemaError::unknown(s)),
        }
    }
}

/// A concrete schema type known to [`SchemaKind`]
pub trait Schema: Configurable + Serialize + DeserializeOwned + Debug {
    /// Kind tag for this type
    const KIND: SchemaKind;
}

impl Schema for CoreGethChainConfig {
    const KIND: SchemaKind = SchemaKind::CoreGeth;
}

impl Schema for GoEthereumChainConfig {
    const KIND: SchemaKind = SchemaKind::GoEthereum;
}

impl Schema for ParityChainSpec {
    const KIND: SchemaKind = SchemaKind::Parity;
}

impl Schema for Genesis {
    const KIND: SchemaKind = SchemaKind::Genesis;
}

/// Parsed document of a schema chosen at runtime
pub trait SchemaDocument: Debug {
    /// Schema of this document
    fn kind(&self) -> SchemaKind;

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// Returns [`SchemaError::Json`] if serialization fails.
    fn to_json(&self) -> Result<String, SchemaError>;

    /// YAML rendering
    ///
    /// # Errors
    /// Returns [`SchemaError::Yaml`] if serialization fails.
    fn to_yaml(&self) -> Result<String, SchemaError>;

    /// Borrow as a capability object
    fn as_configurator(&self) -> &dyn Configurator;

    /// Borrow mutably as a capability object
    fn as_configurator_mut(&mut self) -> &mut dyn Configurator;
}

impl<T: Schema> SchemaDocument for T {
    fn kind(&self) -> SchemaKind {
        T::KIND
    }

    fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn as_configurator(&self) -> &dyn Configurator {
        self
    }

    fn as_configurator_mut(&mut self) -> &mut dyn Configurator {
        self
    }
}
