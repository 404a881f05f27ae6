//! Capability values
//!
//! A [`CapabilityValue`] is the tagged form in which every configuration
//! parameter crosses the engine boundary. Absence is a first-class variant:
//! an unset fork block is [`CapabilityValue::Absent`], never a zero.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use dashu::integer::UBig;

use crate::hash::Hash32;

/// Underlying representation of a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// Optional unsigned 64-bit integer (block heights, network ids)
    Uint64,

    /// Optional arbitrary-precision unsigned integer (chain ids, difficulty)
    BigInt,

    /// Optional 32-byte hash
    Hash,

    /// Optional byte string
    Bytes,

    /// Optional consensus engine selection
    Engine,

    /// Optional block-indexed schedule of big integers (block rewards)
    Schedule,
}

impl ValueKind {
    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uint64 => "uint64",
            Self::BigInt => "bigint",
            Self::Hash => "hash",
            Self::Bytes => "bytes",
            Self::Engine => "engine",
            Self::Schedule => "schedule",
        }
    }

    /// Whether a value of this kind can be written where `target` is expected
    ///
    /// Identical kinds are compatible; the only widening is `Uint64 -> BigInt`.
    #[inline]
    #[must_use]
    pub const fn widens_to(self, target: ValueKind) -> bool {
        matches!(
            (self, target),
            (Self::Uint64, Self::Uint64)
                | (Self::Uint64, Self::BigInt)
                | (Self::BigInt, Self::BigInt)
                | (Self::Hash, Self::Hash)
                | (Self::Bytes, Self::Bytes)
                | (Self::Engine, Self::Engine)
                | (Self::Schedule, Self::Schedule)
        )
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consensus engine a configuration selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ConsensusEngine {
    /// No engine section present
    #[default]
    Unknown,
    /// Proof of work
    Ethash,
    /// Proof of authority
    Clique,
}

impl ConsensusEngine {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Ethash => "ethash",
            Self::Clique => "clique",
        }
    }

    /// `None` for [`ConsensusEngine::Unknown`]
    #[must_use]
    pub const fn known(self) -> Option<Self> {
        match self {
            Self::Unknown => None,
            engine => Some(engine),
        }
    }
}

impl Display for ConsensusEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capability value observed on (or destined for) a configuration object
///
/// The derived `PartialEq` is structural: `Uint64(5) != BigInt(5)`. Use
/// [`CapabilityValue::agrees_with`] for the semantic comparison the
/// equivalence checker relies on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CapabilityValue {
    /// Not set on the object
    #[default]
    Absent,

    /// Present u64
    Uint64(u64),

    /// Present big unsigned integer
    BigInt(UBig),

    /// Present 32-byte hash
    Hash(Hash32),

    /// Present byte string
    Bytes(Vec<u8>),

    /// Present engine selection, never [`ConsensusEngine::Unknown`]
    Engine(ConsensusEngine),

    /// Present schedule, keyed by activation block
    Schedule(BTreeMap<u64, UBig>),
}

impl CapabilityValue {
    /// Kind of a present value, `None` when absent
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Absent => None,
            Self::Uint64(_) => Some(ValueKind::Uint64),
            Self::BigInt(_) => Some(ValueKind::BigInt),
            Self::Hash(_) => Some(ValueKind::Hash),
            Self::Bytes(_) => Some(ValueKind::Bytes),
            Self::Engine(_) => Some(ValueKind::Engine),
            Self::Schedule(_) => Some(ValueKind::Schedule),
        }
    }

    /// Returns true when the value is not set
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true when the value is set
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Semantic equality
    ///
    /// Absent agrees only with absent. Integers compare numerically across
    /// `Uint64` and `BigInt`. Every other kind compares structurally within
    /// itself.
    #[must_use]
    pub fn agrees_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Uint64(a), Self::Uint64(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Uint64(a), Self::BigInt(b)) | (Self::BigInt(b), Self::Uint64(a)) => {
                UBig::from(*a) == *b
            }
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Engine(a), Self::Engine(b)) => a == b,
            (Self::Schedule(a), Self::Schedule(b)) => a == b,
            _ => false,
        }
    }

    /// Convert to `target` kind
    ///
    /// Absent stays absent. Only [`ValueKind::widens_to`] conversions succeed.
    ///
    /// # Errors
    /// Returns [`KindMismatch`] when the value cannot be represented as `target`.
    pub fn widen(self, target: ValueKind) -> Result<Self, KindMismatch> {
        match (self, target) {
            (Self::Absent, _) => Ok(Self::Absent),
            (Self::Uint64(n), ValueKind::BigInt) => Ok(Self::BigInt(UBig::from(n))),
            (value, target) => match value.kind() {
                Some(kind) if kind == target => Ok(value),
                Some(found) => Err(KindMismatch {
                    expected: target,
                    found,
                }),
                None => Ok(Self::Absent),
            },
        }
    }

    /// Numeric view as u64
    ///
    /// `BigInt` values that do not fit yield `None`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint64(n) => Some(*n),
            Self::BigInt(b) => u64::try_from(b.clone()).ok(),
            _ => None,
        }
    }

    /// Unpack an optional u64, as a writer of that kind expects
    ///
    /// # Errors
    /// Returns [`KindMismatch`] for present values of another kind.
    pub fn into_u64(self) -> Result<Option<u64>, KindMismatch> {
        match self {
            Self::Absent => Ok(None),
            Self::Uint64(n) => Ok(Some(n)),
            other => Err(other.mismatch(ValueKind::Uint64)),
        }
    }

    /// Unpack an optional big integer, widening u64
    ///
    /// # Errors
    /// Returns [`KindMismatch`] for present non-integer values.
    pub fn into_big(self) -> Result<Option<UBig>, KindMismatch> {
        match self {
            Self::Absent => Ok(None),
            Self::Uint64(n) => Ok(Some(UBig::from(n))),
            Self::BigInt(b) => Ok(Some(b)),
            other => Err(other.mismatch(ValueKind::BigInt)),
        }
    }

    /// Unpack an optional hash
    ///
    /// # Errors
    /// Returns [`KindMismatch`] for present values of another kind.
    pub fn into_hash(self) -> Result<Option<Hash32>, KindMismatch> {
        match self {
            Self::Absent => Ok(None),
            Self::Hash(h) => Ok(Some(h)),
            other => Err(other.mismatch(ValueKind::Hash)),
        }
    }

    /// Unpack an optional byte string
    ///
    /// # Errors
    /// Returns [`KindMismatch`] for present values of another kind.
    pub fn into_bytes(self) -> Result<Option<Vec<u8>>, KindMismatch> {
        match self {
            Self::Absent => Ok(None),
            Self::Bytes(b) => Ok(Some(b)),
            other => Err(other.mismatch(ValueKind::Bytes)),
        }
    }

    /// Unpack an optional engine; `Unknown` reads as none
    ///
    /// # Errors
    /// Returns [`KindMismatch`] for present values of another kind.
    pub fn into_engine(self) -> Result<Option<ConsensusEngine>, KindMismatch> {
        match self {
            Self::Absent => Ok(None),
            Self::Engine(e) => Ok(e.known()),
            other => Err(other.mismatch(ValueKind::Engine)),
        }
    }

    /// Unpack an optional schedule
    ///
    /// # Errors
    /// Returns [`KindMismatch`] for present values of another kind.
    pub fn into_schedule(self) -> Result<Option<BTreeMap<u64, UBig>>, KindMismatch> {
        match self {
            Self::Absent => Ok(None),
            Self::Schedule(s) => Ok(Some(s)),
            other => Err(other.mismatch(ValueKind::Schedule)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> KindMismatch {
        KindMismatch {
            expected,
            // only called on present values
            found: self.kind().unwrap_or(expected),
        }
    }
}

impl Display for CapabilityValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("<absent>"),
            Self::Uint64(n) => write!(f, "{n}"),
            Self::BigInt(b) => write!(f, "{b}"),
            Self::Hash(h) => write!(f, "{h}"),
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::Engine(e) => write!(f, "{e}"),
            Self::Schedule(s) => {
                f.write_str("{")?;
                for (i, (block, value)) in s.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{block}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<Option<u64>> for CapabilityValue {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Absent, Self::Uint64)
    }
}

impl From<Option<UBig>> for CapabilityValue {
    fn from(value: Option<UBig>) -> Self {
        value.map_or(Self::Absent, Self::BigInt)
    }
}

impl From<Option<Hash32>> for CapabilityValue {
    fn from(value: Option<Hash32>) -> Self {
        value.map_or(Self::Absent, Self::Hash)
    }
}

impl From<Option<Vec<u8>>> for CapabilityValue {
    fn from(value: Option<Vec<u8>>) -> Self {
        value.map_or(Self::Absent, Self::Bytes)
    }
}

impl From<Option<ConsensusEngine>> for CapabilityValue {
    fn from(value: Option<ConsensusEngine>) -> Self {
        value
            .and_then(ConsensusEngine::known)
            .map_or(Self::Absent, Self::Engine)
    }
}

impl From<Option<BTreeMap<u64, UBig>>> for CapabilityValue {
    fn from(value: Option<BTreeMap<u64, UBig>>) -> Self {
        value.map_or(Self::Absent, Self::Schedule)
    }
}

/// A present value did not have the kind an accessor expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {found}")]
pub struct KindMismatch {
    /// Kind the accessor accepts
    pub expected: ValueKind,
    /// Kind that was supplied
    pub found: ValueKind,
}
