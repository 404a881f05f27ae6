//! Fixed-width hash primitives
//!
//! Provides [`Hash32`], a strongly-typed 32-byte hash used for genesis header
//! fields (parent hash, mix hash) across every schema.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte hash
///
/// Rendered and parsed as `0x`-prefixed lowercase hex. Cheap to clone (Copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash32([u8; 32]);

impl Hash32 {
    /// The all-zero hash
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a new hash from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to byte array (consumes self)
    #[inline]
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Create hash from byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 32 bytes
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HashError> {
        if bytes.len() != 32 {
            return Err(HashError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Short string representation (first 8 bytes, hex)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        format!("0x{}", hex::encode(&self.0[..8]))
    }

    /// Check if hash is all zeros
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Display for Hash32 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Hash32 {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Hash32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Hash32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

// Serde implementations for compact serialization
impl serde::Serialize for Hash32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Hash32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Hash32Visitor;

        impl<'de> serde::de::Visitor<'de> for Hash32Visitor {
            type Value = Hash32;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 32-byte hash as 0x-prefixed hex string or byte array")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Hash32::from_slice(value).map_err(serde::de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut arr = [0u8; 32];
                for (i, byte) in arr.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"32 bytes"))?;
                }
                Ok(Hash32::new(arr))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Hash32Visitor)
        } else {
            deserializer.deserialize_bytes(Hash32Visitor)
        }
    }
}

/// Errors that can occur when parsing hashes
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Invalid hash length
    #[error("invalid hash length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required byte length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_new_and_access() {
        let bytes = [1u8; 32];
        let hash = Hash32::new(bytes);
        assert_eq!(hash.as_bytes(), &bytes);
        assert_eq!(hash.into_bytes(), bytes);
    }

    #[test]
    fn hash_from_slice_invalid_length() {
        let result = Hash32::from_slice(&[1u8; 31]);
        assert!(matches!(
            result,
            Err(HashError::InvalidLength {
                expected: 32,
                actual: 31
            })
        ));
    }

    #[test]
    fn hash_parse_with_and_without_prefix() {
        let hex_str = "ca12c63534f565899681965528d536c52cb05b7c48e269c2a6cb77ad864d878a";
        let a: Hash32 = hex_str.parse().unwrap();
        let b: Hash32 = format!("0x{hex_str}").parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), format!("0x{hex_str}"));
    }

    #[test]
    fn hash_short() {
        let hash = Hash32::new([0xab; 32]);
        assert_eq!(hash.short(), "0xabababababababab");
    }

    #[test]
    fn hash_is_zero() {
        assert!(Hash32::ZERO.is_zero());
        assert!(Hash32::default().is_zero());
        assert!(!Hash32::new([7u8; 32]).is_zero());
    }

    #[test]
    fn hash_serde_json_is_prefixed_hex() {
        let hash = Hash32::new([0x11; 32]);
        let json = serde_json::to_string(&hash).unwrap();
        assert!(json.starts_with("\"0x"));
        let decoded: Hash32 = serde_json::from_str(&json).unwrap();
        assert_eq!(hash, decoded);
    }
}
