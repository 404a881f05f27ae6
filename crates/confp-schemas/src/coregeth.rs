//! core-geth chain configuration
//!
//! One flat field per protocol change: `eip155Block`, `eip140FBlock` and so
//! on. Block numbers are plain JSON numbers; the chain id is a number or a
//! decimal string when it outgrows u64.

use std::collections::BTreeMap;

use confp_capability::catalog::names;
use confp_capability::{AccessorTable, Configurable, WriteError};
use confp_types::{DecimalBig, Hash32};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::common::{
    big, clique_for_write, engine_of, ethash_for_write, rewards_from, schedule_of,
    select_engine, CliqueConfig, ConsensusEngine, EthashConfig, RewardSchedule,
};

/// core-geth `config` object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CoreGethChainConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<DecimalBig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_code_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_start_nonce: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_extra_data_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_gas_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit_bound_divisor: Option<u64>,

    // Homestead
    #[serde(default, rename = "eip2FBlock", skip_serializing_if = "Option::is_none")]
    pub eip2_f_block: Option<u64>,
    #[serde(default, rename = "eip7FBlock", skip_serializing_if = "Option::is_none")]
    pub eip7_f_block: Option<u64>,

    // DAO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao_fork_block: Option<u64>,

    // Tangerine Whistle, Spurious Dragon
    #[serde(default, rename = "eip150Block", skip_serializing_if = "Option::is_none")]
    pub eip150_block: Option<u64>,
    #[serde(default, rename = "eip155Block", skip_serializing_if = "Option::is_none")]
    pub eip155_block: Option<u64>,
    #[serde(default, rename = "eip160FBlock", skip_serializing_if = "Option::is_none")]
    pub eip160_f_block: Option<u64>,
    #[serde(default, rename = "eip161FBlock", skip_serializing_if = "Option::is_none")]
    pub eip161_f_block: Option<u64>,
    #[serde(default, rename = "eip170FBlock", skip_serializing_if = "Option::is_none")]
    pub eip170_f_block: Option<u64>,

    // Byzantium
    #[serde(default, rename = "eip100FBlock", skip_serializing_if = "Option::is_none")]
    pub eip100_f_block: Option<u64>,
    #[serde(default, rename = "eip140FBlock", skip_serializing_if = "Option::is_none")]
    pub eip140_f_block: Option<u64>,
    #[serde(default, rename = "eip198FBlock", skip_serializing_if = "Option::is_none")]
    pub eip198_f_block: Option<u64>,
    #[serde(default, rename = "eip211FBlock", skip_serializing_if = "Option::is_none")]
    pub eip211_f_block: Option<u64>,
    #[serde(default, rename = "eip212FBlock", skip_serializing_if = "Option::is_none")]
    pub eip212_f_block: Option<u64>,
    #[serde(default, rename = "eip213FBlock", skip_serializing_if = "Option::is_none")]
    pub eip213_f_block: Option<u64>,
    #[serde(default, rename = "eip214FBlock", skip_serializing_if = "Option::is_none")]
    pub eip214_f_block: Option<u64>,
    #[serde(default, rename = "eip649FBlock", skip_serializing_if = "Option::is_none")]
    pub eip649_f_block: Option<u64>,
    #[serde(default, rename = "eip658FBlock", skip_serializing_if = "Option::is_none")]
    pub eip658_f_block: Option<u64>,

    // Constantinople, Petersburg
    #[serde(default, rename = "eip145FBlock", skip_serializing_if = "Option::is_none")]
    pub eip145_f_block: Option<u64>,
    #[serde(default, rename = "eip1014FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1014_f_block: Option<u64>,
    #[serde(default, rename = "eip1052FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1052_f_block: Option<u64>,
    #[serde(default, rename = "eip1234FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1234_f_block: Option<u64>,
    #[serde(default, rename = "eip1283FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1283_f_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petersburg_block: Option<u64>,

    // Istanbul, Muir Glacier
    #[serde(default, rename = "eip152FBlock", skip_serializing_if = "Option::is_none")]
    pub eip152_f_block: Option<u64>,
    #[serde(default, rename = "eip1108FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1108_f_block: Option<u64>,
    #[serde(default, rename = "eip1344FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1344_f_block: Option<u64>,
    #[serde(default, rename = "eip1884FBlock", skip_serializing_if = "Option::is_none")]
    pub eip1884_f_block: Option<u64>,
    #[serde(default, rename = "eip2028FBlock", skip_serializing_if = "Option::is_none")]
    pub eip2028_f_block: Option<u64>,
    #[serde(default, rename = "eip2200FBlock", skip_serializing_if = "Option::is_none")]
    pub eip2200_f_block: Option<u64>,
    #[serde(default, rename = "eip2384FBlock", skip_serializing_if = "Option::is_none")]
    pub eip2384_f_block: Option<u64>,
    #[serde(default, rename = "eip2537FBlock", skip_serializing_if = "Option::is_none")]
    pub eip2537_f_block: Option<u64>,

    // Classic
    #[serde(default, rename = "ecip1010PauseBlock", skip_serializing_if = "Option::is_none")]
    pub ecip1010_pause_block: Option<u64>,
    /// Blocks the difficulty bomb stays paused; the continue block is
    /// `ecip1010PauseBlock + ecip1010Length`
    #[serde(default, rename = "ecip1010Length", skip_serializing_if = "Option::is_none")]
    pub ecip1010_length: Option<u64>,
    #[serde(default, rename = "ecip1017FBlock", skip_serializing_if = "Option::is_none")]
    pub ecip1017_f_block: Option<u64>,
    #[serde(default, rename = "ecip1017EraRounds", skip_serializing_if = "Option::is_none")]
    pub ecip1017_era_rounds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposal_block: Option<u64>,

    /// Block reward per activation block
    #[serde(default, rename = "blockReward", skip_serializing_if = "BTreeMap::is_empty")]
    pub block_reward_schedule: RewardSchedule,

    /// Block hashes a syncing node must see
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub require_block_hashes: BTreeMap<u64, Hash32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethash: Option<EthashConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clique: Option<CliqueConfig>,
}

impl CoreGethChainConfig {
    /// Consensus engine selected by the `ethash` / `clique` sections
    #[must_use]
    pub fn consensus_engine(&self) -> ConsensusEngine {
        engine_of(self.ethash.as_ref(), self.clique.as_ref())
    }

    /// Block at which the ECIP-1010 pause ends
    #[must_use]
    pub fn ecip1010_continue_block(&self) -> Option<u64> {
        let length = self.ecip1010_length?;
        self.ecip1010_pause_block.unwrap_or(0).checked_add(length)
    }

    /// Move the continue block, keeping the pause block
    fn set_ecip1010_continue(&mut self, block: Option<u64>) -> Result<(), WriteError> {
        let Some(block) = block else {
            self.ecip1010_length = None;
            return Ok(());
        };
        let pause = self.ecip1010_pause_block.unwrap_or(0);
        let length = block
            .checked_sub(pause)
            .ok_or_else(|| WriteError::rejected("ECIP-1010 continue block precedes pause"))?;
        self.ecip1010_length = Some(length);
        Ok(())
    }

    /// Move the pause block, keeping the continue block
    fn set_ecip1010_pause(&mut self, block: Option<u64>) -> Result<(), WriteError> {
        if let Some(continue_block) = self.ecip1010_continue_block() {
            let length = continue_block
                .checked_sub(block.unwrap_or(0))
                .ok_or_else(|| WriteError::rejected("ECIP-1010 pause block follows continue"))?;
            self.ecip1010_length = Some(length);
        }
        self.ecip1010_pause_block = block;
        Ok(())
    }
}

type C = CoreGethChainConfig;

/// Register one plain u64 field per capability
macro_rules! blocks {
    ($table:ident; $($name:expr => $field:ident),* $(,)?) => {
        $( $table = $table.uint64($name, |c: &C| c.$field, |c: &mut C, v| c.$field = v); )*
    };
}

/// Register u64 fields that only mean something under ethash
///
/// Readers report absent on other engines; setting a value selects ethash.
macro_rules! ethash_blocks {
    ($table:ident; $($name:expr => $field:ident),* $(,)?) => {
        $(
            $table = $table
                .read_u64($name, |c: &C| c.ethash.as_ref().and(c.$field))
                .write_u64($name, |c: &mut C, v| {
                    ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())?;
                    c.$field = v;
                    Ok(())
                });
        )*
    };
}

/// Register one clique parameter, creating the section on write
macro_rules! clique_param {
    ($table:ident; $name:expr => $field:ident) => {
        $table = $table
            .read_u64($name, |c: &C| c.clique.as_ref().and_then(|q| q.$field))
            .write_u64($name, |c: &mut C, v| {
                if let Some(q) = clique_for_write(&mut c.clique, c.ethash.as_ref(), v.is_some())? {
                    q.$field = v;
                }
                Ok(())
            });
    };
}

/// Register one ethash parameter, creating the section on write
macro_rules! ethash_param {
    ($table:ident; $name:expr => $field:ident) => {
        $table = $table
            .read_big($name, |c: &C| c.ethash.as_ref().and_then(|e| big(e.$field.as_ref())))
            .write_big($name, |c: &mut C, v| {
                if let Some(e) = ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())? {
                    e.$field = v.map(DecimalBig);
                }
                Ok(())
            });
    };
}

static ACCESSORS: Lazy<AccessorTable<CoreGethChainConfig>> = Lazy::new(|| {
    let mut table = AccessorTable::new("CoreGethChainConfig")
        .bigint(
            names::CHAIN_ID,
            |c: &C| big(c.chain_id.as_ref()),
            |c: &mut C, v| c.chain_id = v.map(DecimalBig),
        )
        .read_engine(names::CONSENSUS_ENGINE, C::consensus_engine)
        .write_engine(names::CONSENSUS_ENGINE, |c: &mut C, v| {
            select_engine(&mut c.ethash, &mut c.clique, v)
        });
    clique_param! { table; names::CLIQUE_PERIOD => period }
    clique_param! { table; names::CLIQUE_EPOCH => epoch }
    blocks! { table;
        names::NETWORK_ID => network_id,
        names::MAX_CODE_SIZE => max_code_size,
        names::ACCOUNT_START_NONCE => account_start_nonce,
        names::MAXIMUM_EXTRA_DATA_SIZE => maximum_extra_data_size,
        names::MIN_GAS_LIMIT => min_gas_limit,
        names::GAS_LIMIT_BOUND_DIVISOR => gas_limit_bound_divisor,
        names::EIP7 => eip7_f_block,
        names::EIP150 => eip150_block,
        names::EIP155 => eip155_block,
        names::EIP160 => eip160_f_block,
        // one field carries both halves of EIP-161
        names::EIP161ABC => eip161_f_block,
        names::EIP161D => eip161_f_block,
        names::EIP170 => eip170_f_block,
        names::EIP140 => eip140_f_block,
        names::EIP198 => eip198_f_block,
        names::EIP211 => eip211_f_block,
        names::EIP212 => eip212_f_block,
        names::EIP213 => eip213_f_block,
        names::EIP214 => eip214_f_block,
        names::EIP658 => eip658_f_block,
        names::EIP145 => eip145_f_block,
        names::EIP1014 => eip1014_f_block,
        names::EIP1052 => eip1052_f_block,
        names::EIP1283 => eip1283_f_block,
        names::EIP1283_DISABLE => petersburg_block,
        names::EIP152 => eip152_f_block,
        names::EIP1108 => eip1108_f_block,
        names::EIP1344 => eip1344_f_block,
        names::EIP1884 => eip1884_f_block,
        names::EIP2028 => eip2028_f_block,
        names::EIP2200 => eip2200_f_block,
        names::EIP2537 => eip2537_f_block,
    }
    ethash_blocks! { table;
        names::ETHASH_HOMESTEAD => eip2_f_block,
        names::ETHASH_EIP779 => dao_fork_block,
        names::ETHASH_EIP100B => eip100_f_block,
        names::ETHASH_EIP649 => eip649_f_block,
        names::ETHASH_EIP1234 => eip1234_f_block,
        names::ETHASH_EIP2384 => eip2384_f_block,
        names::ETHASH_ECIP1017 => ecip1017_f_block,
        names::ETHASH_ECIP1017_ERA_ROUNDS => ecip1017_era_rounds,
        names::ETHASH_ECIP1041 => disposal_block,
    }
    table = table
        .read_u64(names::ETHASH_ECIP1010_PAUSE, |c: &C| {
            c.ethash.as_ref().and(c.ecip1010_pause_block)
        })
        .write_u64(names::ETHASH_ECIP1010_PAUSE, |c: &mut C, v| {
            ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())?;
            c.set_ecip1010_pause(v)
        })
        .read_u64(names::ETHASH_ECIP1010_CONTINUE, |c: &C| {
            c.ethash.as_ref().and(c.ecip1010_continue_block())
        })
        .write_u64(names::ETHASH_ECIP1010_CONTINUE, |c: &mut C, v| {
            ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())?;
            c.set_ecip1010_continue(v)
        })
        .read_schedule(names::ETHASH_BLOCK_REWARD_SCHEDULE, |c: &C| {
            c.ethash.as_ref().and(schedule_of(&c.block_reward_schedule))
        })
        .write_schedule(names::ETHASH_BLOCK_REWARD_SCHEDULE, |c: &mut C, v| {
            ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())?;
            c.block_reward_schedule = rewards_from(v);
            Ok(())
        });
    ethash_param! { table; names::ETHASH_MINIMUM_DIFFICULTY => minimum_difficulty }
    ethash_param! { table; names::ETHASH_DIFFICULTY_BOUND_DIVISOR => difficulty_bound_divisor }
    ethash_param! { table; names::ETHASH_DURATION_LIMIT => duration_limit }
    table
});

impl Configurable for CoreGethChainConfig {
    fn accessors() -> &'static AccessorTable<Self> {
        &ACCESSORS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confp_capability::catalog::CHAIN_CONFIGURATOR;
    use confp_capability::{satisfies, Configurator};
    use confp_types::{CapabilityValue, UBig};
    use serde_json::json;

    #[test]
    fn implements_chain_configurator() {
        assert!(satisfies(&CHAIN_CONFIGURATOR, &CoreGethChainConfig::default()));
    }

    #[test]
    fn json_field_names() {
        let config: CoreGethChainConfig = serde_json::from_value(json!({
            "networkId": 1,
            "chainId": 61,
            "eip2FBlock": 1_150_000,
            "eip150Block": 2_500_000,
            "eip140FBlock": 8_772_000,
            "ecip1017EraRounds": 5_000_000,
            "ethash": {}
        }))
        .unwrap();
        assert_eq!(config.read(names::CHAIN_ID), CapabilityValue::BigInt(UBig::from(61u64)));
        assert_eq!(config.read(names::ETHASH_HOMESTEAD).as_u64(), Some(1_150_000));
        assert_eq!(config.read(names::EIP140).as_u64(), Some(8_772_000));
        assert_eq!(config.consensus_engine(), ConsensusEngine::Ethash);

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["eip150Block"], json!(2_500_000));
        assert!(back.get("eip155Block").is_none());
    }

    #[test]
    fn eip161_halves_share_a_field() {
        let mut config = CoreGethChainConfig::default();
        config
            .write(names::EIP161D, CapabilityValue::Uint64(8_772_000))
            .unwrap();
        assert_eq!(config.read(names::EIP161ABC).as_u64(), Some(8_772_000));
    }

    #[test]
    fn ethash_params_rejected_on_clique() {
        let mut config = CoreGethChainConfig {
            clique: Some(CliqueConfig {
                period: Some(15),
                epoch: Some(30_000),
            }),
            ..CoreGethChainConfig::default()
        };
        let err = config
            .write(names::ETHASH_MINIMUM_DIFFICULTY, CapabilityValue::Uint64(131_072))
            .unwrap_err();
        assert!(matches!(err, WriteError::Rejected { .. }));
        // clearing is a no-op
        config
            .write(names::ETHASH_MINIMUM_DIFFICULTY, CapabilityValue::Absent)
            .unwrap();
        assert!(config.ethash.is_none());
    }

    #[test]
    fn ethash_section_created_on_demand() {
        let mut config = CoreGethChainConfig::default();
        assert_eq!(config.consensus_engine(), ConsensusEngine::Unknown);
        config
            .write(names::ETHASH_DURATION_LIMIT, CapabilityValue::Uint64(13))
            .unwrap();
        assert_eq!(config.consensus_engine(), ConsensusEngine::Ethash);
    }

    #[test]
    fn ethash_transitions_hidden_on_clique() {
        let config: CoreGethChainConfig = serde_json::from_value(json!({
            "chainId": 5,
            "eip2FBlock": 0,
            "eip7FBlock": 0,
            "eip649FBlock": 0,
            "clique": {"period": 15, "epoch": 30_000}
        }))
        .unwrap();
        assert_eq!(
            config.read(names::CONSENSUS_ENGINE),
            CapabilityValue::Engine(ConsensusEngine::Clique)
        );
        assert_eq!(config.read(names::CLIQUE_PERIOD).as_u64(), Some(15));
        assert_eq!(config.read(names::EIP7).as_u64(), Some(0));
        assert!(config.read(names::ETHASH_HOMESTEAD).is_absent());
        assert!(config.read(names::ETHASH_EIP649).is_absent());
    }

    #[test]
    fn engine_selection_creates_sections() {
        let mut config = CoreGethChainConfig::default();
        assert!(config.read(names::CONSENSUS_ENGINE).is_absent());
        config
            .write(
                names::CONSENSUS_ENGINE,
                CapabilityValue::Engine(ConsensusEngine::Clique),
            )
            .unwrap();
        config.write(names::CLIQUE_EPOCH, CapabilityValue::Uint64(30_000)).unwrap();
        assert_eq!(config.clique.as_ref().and_then(|q| q.epoch), Some(30_000));

        let err = config
            .write(names::ETHASH_EIP649, CapabilityValue::Uint64(0))
            .unwrap_err();
        assert!(matches!(err, WriteError::Rejected { .. }));
        let err = config
            .write(
                names::CONSENSUS_ENGINE,
                CapabilityValue::Engine(ConsensusEngine::Ethash),
            )
            .unwrap_err();
        assert!(matches!(err, WriteError::Rejected { .. }));
    }

    #[test]
    fn ecip1010_continue_is_pause_plus_length() {
        let mut config: CoreGethChainConfig = serde_json::from_value(json!({
            "ecip1010PauseBlock": 3_000_000,
            "ecip1010Length": 2_000_000,
            "ethash": {}
        }))
        .unwrap();
        assert_eq!(config.read(names::ETHASH_ECIP1010_CONTINUE).as_u64(), Some(5_000_000));

        // moving the pause keeps the continue block
        config
            .write(names::ETHASH_ECIP1010_PAUSE, CapabilityValue::Uint64(4_000_000))
            .unwrap();
        assert_eq!(config.ecip1010_length, Some(1_000_000));
        assert_eq!(config.read(names::ETHASH_ECIP1010_CONTINUE).as_u64(), Some(5_000_000));

        config
            .write(names::ETHASH_ECIP1010_CONTINUE, CapabilityValue::Uint64(7_000_000))
            .unwrap();
        assert_eq!(config.ecip1010_length, Some(3_000_000));

        let err = config
            .write(names::ETHASH_ECIP1010_CONTINUE, CapabilityValue::Uint64(1))
            .unwrap_err();
        assert!(matches!(err, WriteError::Rejected { .. }));

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["ecip1010Length"], json!(3_000_000));
        assert!(back.get("ecip1010ContinueBlock").is_none());
    }

    #[test]
    fn ecip1010_continue_written_before_pause() {
        let mut config = CoreGethChainConfig::default();
        config
            .write(names::ETHASH_ECIP1010_CONTINUE, CapabilityValue::Uint64(5_000_000))
            .unwrap();
        config
            .write(names::ETHASH_ECIP1010_PAUSE, CapabilityValue::Uint64(3_000_000))
            .unwrap();
        assert_eq!(config.ecip1010_pause_block, Some(3_000_000));
        assert_eq!(config.ecip1010_length, Some(2_000_000));
    }

    #[test]
    fn disposal_block_is_ecip1041() {
        let config: CoreGethChainConfig = serde_json::from_value(json!({
            "disposalBlock": 5_900_000,
            "blockReward": {"0x0": "0x4563918244f40000"},
            "ethash": {}
        }))
        .unwrap();
        assert_eq!(config.read(names::ETHASH_ECIP1041).as_u64(), Some(5_900_000));
        assert_eq!(
            config.read(names::ETHASH_BLOCK_REWARD_SCHEDULE).to_string(),
            "{0: 5000000000000000000}"
        );
    }
}
