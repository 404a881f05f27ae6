//! Hex-or-decimal quantity codecs
//!
//! Chain specs written by different clients spell the same number as a JSON
//! number, a decimal string or a `0x` hex string. These newtypes accept all
//! three and pick one canonical output form each.

use std::fmt::{self, Formatter};

use dashu::integer::UBig;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors while parsing a quantity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Input was empty or only a prefix
    #[error("empty quantity")]
    Empty,

    /// Digits did not parse in the detected radix
    #[error("invalid quantity '{input}': {reason}")]
    Invalid {
        /// Offending input
        input: String,
        /// Parser message
        reason: String,
    },
}

fn split_radix(input: &str) -> Result<(&str, u32), QuantityError> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() {
        return Err(QuantityError::Empty);
    }
    Ok((digits, radix))
}

/// Parse a `0x` hex or decimal string into a u64
///
/// # Errors
/// Returns [`QuantityError`] on empty or malformed input, or overflow.
pub fn parse_u64(input: &str) -> Result<u64, QuantityError> {
    let (digits, radix) = split_radix(input)?;
    u64::from_str_radix(digits, radix).map_err(|e| QuantityError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a `0x` hex or decimal string into a big unsigned integer
///
/// # Errors
/// Returns [`QuantityError`] on empty or malformed input.
pub fn parse_big(input: &str) -> Result<UBig, QuantityError> {
    let (digits, radix) = split_radix(input)?;
    UBig::from_str_radix(digits, radix).map_err(|e| QuantityError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// u64 quantity, serialized as `0x` hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexOrDecimal64(pub u64);

impl HexOrDecimal64 {
    /// Inner value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for HexOrDecimal64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Serialize for HexOrDecimal64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:#x}", self.0))
    }
}

impl<'de> Deserialize<'de> for HexOrDecimal64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct U64Visitor;

        impl Visitor<'_> for U64Visitor {
            type Value = HexOrDecimal64;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("a u64 as number, decimal string or 0x hex string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(HexOrDecimal64(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u64::try_from(value)
                    .map(HexOrDecimal64)
                    .map_err(|_| E::custom(format!("negative quantity: {value}")))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                parse_u64(value).map(HexOrDecimal64).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(U64Visitor)
    }
}

/// Big unsigned quantity, serialized as `0x` hex
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexOrDecimal256(pub UBig);

impl HexOrDecimal256 {
    /// Inner value
    #[inline]
    #[must_use]
    pub fn get(&self) -> &UBig {
        &self.0
    }

    /// Consume into the inner value
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> UBig {
        self.0
    }
}

impl From<UBig> for HexOrDecimal256 {
    fn from(value: UBig) -> Self {
        Self(value)
    }
}

impl From<u64> for HexOrDecimal256 {
    fn from(value: u64) -> Self {
        Self(UBig::from(value))
    }
}

impl Serialize for HexOrDecimal256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{:x}", self.0))
    }
}

impl<'de> Deserialize<'de> for HexOrDecimal256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(BigVisitor)
            .map(HexOrDecimal256)
    }
}

/// Big unsigned quantity, serialized as a JSON number when it fits in u64
///
/// Matches the `chainId` spelling of geth-style configs; larger values fall
/// back to a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalBig(pub UBig);

impl DecimalBig {
    /// Inner value
    #[inline]
    #[must_use]
    pub fn get(&self) -> &UBig {
        &self.0
    }

    /// Consume into the inner value
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> UBig {
        self.0
    }
}

impl From<UBig> for DecimalBig {
    fn from(value: UBig) -> Self {
        Self(value)
    }
}

impl From<u64> for DecimalBig {
    fn from(value: u64) -> Self {
        Self(UBig::from(value))
    }
}

impl Serialize for DecimalBig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match u64::try_from(self.0.clone()) {
            Ok(n) => serializer.serialize_u64(n),
            Err(_) => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for DecimalBig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigVisitor).map(DecimalBig)
    }
}

struct BigVisitor;

impl Visitor<'_> for BigVisitor {
    type Value = UBig;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("an unsigned integer as number, decimal string or 0x hex string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(UBig::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(UBig::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map(UBig::from)
            .map_err(|_| E::custom(format!("negative quantity: {value}")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        parse_big(value).map_err(E::custom)
    }
}

/// Byte string, serialized as `0x` hex
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    /// Borrow the bytes
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(&self.0)))
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(&raw);
        hex::decode(digits).map(HexBytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_u64_forms() {
        assert_eq!(parse_u64("0x4cb2e").unwrap(), 314_158);
        assert_eq!(parse_u64("314158").unwrap(), 314_158);
        assert_eq!(parse_u64(" 0X10 ").unwrap(), 16);
        assert_eq!(parse_u64("0x"), Err(QuantityError::Empty));
        assert!(matches!(parse_u64("0xzz"), Err(QuantityError::Invalid { .. })));
    }

    #[test]
    fn parse_big_beyond_u64() {
        let big = parse_big("0x10000000000000000").unwrap();
        assert_eq!(big, UBig::from(u128::from(u64::MAX) + 1));
    }

    #[test]
    fn hex64_accepts_number_and_strings() {
        let a: HexOrDecimal64 = serde_json::from_value(json!(42)).unwrap();
        let b: HexOrDecimal64 = serde_json::from_value(json!("42")).unwrap();
        let c: HexOrDecimal64 = serde_json::from_value(json!("0x2a")).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(serde_json::to_value(c).unwrap(), json!("0x2a"));
    }

    #[test]
    fn hex64_rejects_negative() {
        assert!(serde_json::from_value::<HexOrDecimal64>(json!(-1)).is_err());
    }

    #[test]
    fn hex256_serializes_as_hex() {
        let v = HexOrDecimal256::from(0x20000u64);
        assert_eq!(serde_json::to_value(&v).unwrap(), json!("0x20000"));
        let back: HexOrDecimal256 = serde_json::from_value(json!("131072")).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn decimal_big_prefers_number() {
        let small = DecimalBig::from(61u64);
        assert_eq!(serde_json::to_value(&small).unwrap(), json!(61));

        let huge = DecimalBig(parse_big("0x10000000000000000").unwrap());
        assert_eq!(
            serde_json::to_value(&huge).unwrap(),
            json!("18446744073709551616")
        );
        let back: DecimalBig = serde_json::from_value(json!("18446744073709551616")).unwrap();
        assert_eq!(back, huge);
    }

    #[test]
    fn hex_bytes_roundtrip_with_and_without_prefix() {
        let a: HexBytes = serde_json::from_value(json!("0xdeadbeef")).unwrap();
        let b: HexBytes = serde_json::from_value(json!("deadbeef")).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_value(&a).unwrap(), json!("0xdeadbeef"));
        let empty: HexBytes = serde_json::from_value(json!("0x")).unwrap();
        assert!(empty.as_slice().is_empty());
    }
}
