//! Genesis file
//!
//! A core-geth `config` object wrapped in the genesis header. The allocation
//! is carried through untouched.

use std::collections::BTreeMap;

use confp_capability::catalog::names;
use confp_capability::{AccessorTable, Configurable};
use confp_types::{Hash32, HexBytes, HexOrDecimal256, HexOrDecimal64};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::coregeth::CoreGethChainConfig;

/// Genesis document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    /// Chain configuration
    #[serde(default)]
    pub config: CoreGethChainConfig,

    /// Proof-of-work nonce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<HexOrDecimal64>,

    /// Header timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<HexOrDecimal64>,

    /// Header extra data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<HexBytes>,

    /// Header gas limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<HexOrDecimal64>,

    /// Header difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<HexOrDecimal256>,

    /// Proof-of-work mix digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_hash: Option<Hash32>,

    /// Beneficiary address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<String>,

    /// Parent hash, zero for real genesis blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<Hash32>,

    /// Block number, used by tests that start mid-chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<HexOrDecimal64>,

    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<HexOrDecimal64>,

    /// Initial state
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alloc: BTreeMap<String, serde_json::Value>,
}

type G = Genesis;

static ACCESSORS: Lazy<AccessorTable<Genesis>> = Lazy::new(|| {
    AccessorTable::new("Genesis")
        .embed(
            CoreGethChainConfig::accessors(),
            |g: &G| &g.config,
            |g: &mut G| &mut g.config,
        )
        .uint64(
            names::GENESIS_NONCE,
            |g: &G| g.nonce.map(HexOrDecimal64::get),
            |g: &mut G, v| g.nonce = v.map(HexOrDecimal64),
        )
        .uint64(
            names::GENESIS_TIMESTAMP,
            |g: &G| g.timestamp.map(HexOrDecimal64::get),
            |g: &mut G, v| g.timestamp = v.map(HexOrDecimal64),
        )
        .uint64(
            names::GENESIS_GAS_LIMIT,
            |g: &G| g.gas_limit.map(HexOrDecimal64::get),
            |g: &mut G, v| g.gas_limit = v.map(HexOrDecimal64),
        )
        .bytes(
            names::GENESIS_EXTRA_DATA,
            |g: &G| g.extra_data.as_ref().map(|b| b.0.clone()),
            |g: &mut G, v| g.extra_data = v.map(HexBytes),
        )
        .bigint(
            names::GENESIS_DIFFICULTY,
            |g: &G| g.difficulty.as_ref().map(|d| d.get().clone()),
            |g: &mut G, v| g.difficulty = v.map(HexOrDecimal256),
        )
        .hash(names::GENESIS_MIX_HASH, |g: &G| g.mix_hash, |g: &mut G, v| g.mix_hash = v)
        .hash(
            names::GENESIS_PARENT_HASH,
            |g: &G| g.parent_hash,
            |g: &mut G, v| g.parent_hash = v,
        )
});

impl Configurable for Genesis {
    fn accessors() -> &'static AccessorTable<Self> {
        &ACCESSORS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confp_capability::catalog::CONFIGURATOR;
    use confp_capability::{satisfies, Configurator};
    use confp_types::CapabilityValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn implements_full_configurator() {
        assert!(satisfies(&CONFIGURATOR, &Genesis::default()));
    }

    #[test]
    fn chain_capabilities_reach_the_config() {
        let mut genesis = Genesis::default();
        genesis
            .write(names::EIP155, CapabilityValue::Uint64(3_000_000))
            .unwrap();
        assert_eq!(genesis.config.eip155_block, Some(3_000_000));
        assert_eq!(genesis.read(names::EIP155).as_u64(), Some(3_000_000));
    }

    #[test]
    fn header_fields_from_json() {
        let genesis: Genesis = serde_json::from_value(json!({
            "config": { "chainId": 61, "eip150Block": 2_500_000 },
            "nonce": "0x0000000000000042",
            "timestamp": "0x0",
            "extraData": "0x11bbe8db4e347b4e8c937c1c8370e4b5ed33adb3db69cbdb7a38e1e50b1b82fa",
            "gasLimit": "0x1388",
            "difficulty": "0x400000000",
            "alloc": { "0x0000000000000000000000000000000000000001": { "balance": "0x1" } }
        }))
        .unwrap();
        assert_eq!(genesis.read(names::GENESIS_NONCE).as_u64(), Some(0x42));
        assert_eq!(genesis.read(names::GENESIS_GAS_LIMIT).as_u64(), Some(5000));
        assert_eq!(genesis.read(names::EIP150).as_u64(), Some(2_500_000));
        assert_eq!(genesis.read(names::GENESIS_MIX_HASH), CapabilityValue::Absent);
        assert_eq!(genesis.alloc.len(), 1);
    }
}
