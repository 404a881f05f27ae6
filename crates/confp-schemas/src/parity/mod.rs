//! Parity / OpenEthereum chain specification
//!
//! A full document: engine parameters, protocol `params`, the genesis header
//! and the builtin precompile accounts. Quantities are hex-or-decimal.

mod bombs;
mod builtin;

use std::collections::BTreeMap;

use confp_capability::catalog::names;
use confp_capability::{AccessorTable, Configurable, WriteError};
use confp_types::{parse_u64, Hash32, HexBytes, HexOrDecimal256, HexOrDecimal64, UBig};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{clique_for_write, rewards_from, schedule_of, select_engine, ConsensusEngine};
use builtin::Precompiles;

/// Parity chain specification document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityChainSpec {
    /// Chain name
    #[serde(default)]
    pub name: String,

    /// Data directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Consensus engine
    #[serde(default)]
    pub engine: ParityEngine,

    /// Protocol parameters
    #[serde(default)]
    pub params: ParityParams,

    /// Genesis header
    #[serde(default)]
    pub genesis: ParityGenesis,

    /// Bootnodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    /// Genesis accounts, including builtin precompiles
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accounts: BTreeMap<String, ParityAccount>,
}

/// `engine` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityEngine {
    /// Proof-of-work engine
    #[serde(rename = "Ethash", default, skip_serializing_if = "Option::is_none")]
    pub ethash: Option<ParityEthash>,

    /// Proof-of-authority engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clique: Option<ParityClique>,
}

/// `engine.Ethash`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityEthash {
    /// Engine parameters
    #[serde(default)]
    pub params: ParityEthashParams,
}

/// `engine.Ethash.params`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ParityEthashParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_difficulty: Option<HexOrDecimal256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_bound_divisor: Option<HexOrDecimal256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_limit: Option<HexOrDecimal256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reward: Option<BlockReward>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip100b_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao_hardfork_transition: Option<HexOrDecimal64>,
    /// Block to summed bomb delay
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub difficulty_bomb_delays: BTreeMap<HexOrDecimal64, HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecip1010_pause_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecip1010_continue_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecip1017_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecip1017_era_rounds: Option<HexOrDecimal64>,
    /// ECIP-1041 difficulty bomb removal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bomb_defuse_transition: Option<HexOrDecimal64>,
}

/// `blockReward`: one reward from genesis, or a reward per activation block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockReward {
    /// Constant reward
    Single(HexOrDecimal256),
    /// Block to reward
    Schedule(BTreeMap<HexOrDecimal64, HexOrDecimal256>),
}

impl BlockReward {
    fn schedule(&self) -> Option<BTreeMap<u64, UBig>> {
        match self {
            Self::Single(reward) => Some(BTreeMap::from([(0, reward.get().clone())])),
            Self::Schedule(rewards) => schedule_of(rewards),
        }
    }
}

/// `engine.clique`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityClique {
    /// Engine parameters
    #[serde(default)]
    pub params: ParityCliqueParams,
}

/// `engine.clique.params`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityCliqueParams {
    /// Seconds between blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,

    /// Checkpoint interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
}

/// `params` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ParityParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_start_nonce: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_extra_data_size: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_gas_limit: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit_bound_divisor: Option<HexOrDecimal64>,
    #[serde(default, rename = "networkID", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<HexOrDecimal64>,
    #[serde(default, rename = "chainID", skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_code_size: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_code_size_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip150_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip155_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip160_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip161abc_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip161d_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip140_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip211_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip214_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip658_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip145_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1014_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1052_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1283_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1283_disable_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1283_reenable_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1344_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1706_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1884_transition: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip2028_transition: Option<HexOrDecimal64>,
}

/// `genesis` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ParityGenesis {
    #[serde(default)]
    pub seal: ParitySeal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<HexOrDecimal256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<Hash32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<HexBytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<HexOrDecimal64>,
}

/// `genesis.seal`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParitySeal {
    /// Proof-of-work seal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethereum: Option<EthereumSeal>,
}

/// `genesis.seal.ethereum`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthereumSeal {
    /// Eight-byte nonce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<SealNonce>,

    /// Mix hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_hash: Option<Hash32>,
}

/// Genesis nonce, written as sixteen hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SealNonce(pub u64);

impl Serialize for SealNonce {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{:016x}", self.0))
    }
}

impl<'de> Deserialize<'de> for SealNonce {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_u64(&raw).map(SealNonce).map_err(serde::de::Error::custom)
    }
}

/// Genesis account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ParityAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<HexOrDecimal256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<HexOrDecimal64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<HexBytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<Builtin>,
}

impl ParityAccount {
    /// Nothing but an address
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance.is_none()
            && self.nonce.is_none()
            && self.code.is_none()
            && self.storage.is_none()
            && self.builtin.is_none()
    }
}

/// Builtin precompile definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builtin {
    /// Precompile name, e.g. `modexp`
    pub name: String,

    /// Activation block; unset means never scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activate_at: Option<HexOrDecimal64>,

    /// EIP-1108 repricing block for the alt_bn128 family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip1108_transition: Option<HexOrDecimal64>,

    /// Pricing schedule, carried as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<serde_json::Value>,
}

impl Builtin {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn is_inert(&self) -> bool {
        self.activate_at.is_none() && self.eip1108_transition.is_none()
    }
}

impl ParityChainSpec {
    /// Consensus engine the chain spec selects
    #[must_use]
    pub fn consensus_engine(&self) -> ConsensusEngine {
        match (&self.engine.ethash, &self.engine.clique) {
            (Some(_), _) => ConsensusEngine::Ethash,
            (None, Some(_)) => ConsensusEngine::Clique,
            (None, None) => ConsensusEngine::Unknown,
        }
    }

    fn ethash_params(&self) -> Option<&ParityEthashParams> {
        self.engine.ethash.as_ref().map(|e| &e.params)
    }

    /// Ethash parameters to write into
    ///
    /// Clearing never creates the engine section; setting one on a clique
    /// chain is rejected.
    fn ethash_params_for_write(
        &mut self,
        present: bool,
    ) -> Result<Option<&mut ParityEthashParams>, WriteError> {
        if !present {
            return Ok(self.engine.ethash.as_mut().map(|e| &mut e.params));
        }
        if self.engine.ethash.is_none() && self.engine.clique.is_some() {
            return Err(WriteError::rejected("ethash parameter on a clique chain"));
        }
        let ethash = self.engine.ethash.get_or_insert_with(ParityEthash::default);
        Ok(Some(&mut ethash.params))
    }

    /// Homestead rules apply from genesis on every engine but ethash
    fn homestead_block(&self) -> Option<u64> {
        match self.consensus_engine() {
            ConsensusEngine::Ethash => {
                self.ethash_params().and_then(|e| get(e.homestead_transition))
            }
            ConsensusEngine::Clique => Some(0),
            ConsensusEngine::Unknown => None,
        }
    }

    fn set_homestead_block(&mut self, block: Option<u64>) -> Result<(), WriteError> {
        if self.consensus_engine() == ConsensusEngine::Clique {
            return match block {
                None | Some(0) => Ok(()),
                Some(_) => Err(WriteError::rejected(
                    "clique chains apply homestead rules from genesis",
                )),
            };
        }
        if let Some(e) = self.ethash_params_for_write(block.is_some())? {
            e.homestead_transition = put(block);
        }
        Ok(())
    }

    fn seal_mut(&mut self) -> &mut EthereumSeal {
        self.genesis.seal.ethereum.get_or_insert_with(EthereumSeal::default)
    }
}

type P = ParityChainSpec;
type Quantity = Option<HexOrDecimal64>;

fn get(q: Quantity) -> Option<u64> {
    q.map(HexOrDecimal64::get)
}

fn put(v: Option<u64>) -> Quantity {
    v.map(HexOrDecimal64)
}

fn to_u64(name: &str, v: Option<UBig>) -> Result<Option<u64>, WriteError> {
    v.map(|b| {
        u64::try_from(b).map_err(|_| WriteError::rejected(format!("{name} does not fit in u64")))
    })
    .transpose()
}

/// Register plain `params` quantities
macro_rules! params {
    ($table:ident; $($name:expr => $field:ident),* $(,)?) => {
        $( $table = $table.uint64(
            $name,
            |s: &P| get(s.params.$field),
            |s: &mut P, v| s.params.$field = put(v),
        ); )*
    };
}

/// Register an ethash parameter; writes create the engine section
macro_rules! ethash {
    ($table:ident; big $($name:expr => $field:ident),* $(,)?) => {
        $( $table = $table
            .read_big($name, |s: &P| {
                s.ethash_params().and_then(|e| e.$field.as_ref().map(|q| q.get().clone()))
            })
            .write_big($name, |s: &mut P, v| {
                if let Some(e) = s.ethash_params_for_write(v.is_some())? {
                    e.$field = v.map(HexOrDecimal256);
                }
                Ok(())
            }); )*
    };
    ($table:ident; $($name:expr => $field:ident),* $(,)?) => {
        $( $table = $table
            .read_u64($name, |s: &P| s.ethash_params().and_then(|e| get(e.$field)))
            .write_u64($name, |s: &mut P, v| {
                if let Some(e) = s.ethash_params_for_write(v.is_some())? {
                    e.$field = put(v);
                }
                Ok(())
            }); )*
    };
}

fn params(mut table: AccessorTable<P>) -> AccessorTable<P> {
    params! { table;
        names::NETWORK_ID => network_id,
        names::MAX_CODE_SIZE => max_code_size,
        names::ACCOUNT_START_NONCE => account_start_nonce,
        names::MAXIMUM_EXTRA_DATA_SIZE => maximum_extra_data_size,
        names::MIN_GAS_LIMIT => min_gas_limit,
        names::GAS_LIMIT_BOUND_DIVISOR => gas_limit_bound_divisor,
        names::EIP170 => max_code_size_transition,
        names::EIP150 => eip150_transition,
        names::EIP155 => eip155_transition,
        names::EIP160 => eip160_transition,
        names::EIP161ABC => eip161abc_transition,
        names::EIP161D => eip161d_transition,
        names::EIP140 => eip140_transition,
        names::EIP211 => eip211_transition,
        names::EIP214 => eip214_transition,
        names::EIP658 => eip658_transition,
        names::EIP145 => eip145_transition,
        names::EIP1014 => eip1014_transition,
        names::EIP1052 => eip1052_transition,
        names::EIP1283 => eip1283_transition,
        names::EIP1283_DISABLE => eip1283_disable_transition,
        names::EIP1344 => eip1344_transition,
        names::EIP1884 => eip1884_transition,
        names::EIP2028 => eip2028_transition,
    }
    table
        .read_big(names::CHAIN_ID, |s: &P| get(s.params.chain_id).map(UBig::from))
        .write_big(names::CHAIN_ID, |s: &mut P, v| {
            s.params.chain_id = put(to_u64(names::CHAIN_ID, v)?);
            Ok(())
        })
        // net gas metering returns with two switches
        .uint64(
            names::EIP2200,
            |s: &P| get(s.params.eip1283_reenable_transition),
            |s: &mut P, v| {
                s.params.eip1283_reenable_transition = put(v);
                s.params.eip1706_transition = put(v);
            },
        )
}

fn engine(table: AccessorTable<P>) -> AccessorTable<P> {
    table
        .read_engine(names::CONSENSUS_ENGINE, P::consensus_engine)
        .write_engine(names::CONSENSUS_ENGINE, |s: &mut P, v| {
            select_engine(&mut s.engine.ethash, &mut s.engine.clique, v)
        })
        .read_u64(names::CLIQUE_PERIOD, |s: &P| {
            s.engine.clique.as_ref().and_then(|q| q.params.period)
        })
        .write_u64(names::CLIQUE_PERIOD, |s: &mut P, v| {
            let engine = &mut s.engine;
            let clique = clique_for_write(&mut engine.clique, engine.ethash.as_ref(), v.is_some())?;
            if let Some(q) = clique {
                q.params.period = v;
            }
            Ok(())
        })
        .read_u64(names::CLIQUE_EPOCH, |s: &P| {
            s.engine.clique.as_ref().and_then(|q| q.params.epoch)
        })
        .write_u64(names::CLIQUE_EPOCH, |s: &mut P, v| {
            let engine = &mut s.engine;
            let clique = clique_for_write(&mut engine.clique, engine.ethash.as_ref(), v.is_some())?;
            if let Some(q) = clique {
                q.params.epoch = v;
            }
            Ok(())
        })
        .read_u64(names::EIP7, P::homestead_block)
        .write_u64(names::EIP7, P::set_homestead_block)
}

fn ethash(mut table: AccessorTable<P>) -> AccessorTable<P> {
    ethash! { table;
        names::ETHASH_HOMESTEAD => homestead_transition,
        names::ETHASH_EIP100B => eip100b_transition,
        names::ETHASH_EIP779 => dao_hardfork_transition,
        names::ETHASH_ECIP1010_PAUSE => ecip1010_pause_transition,
        names::ETHASH_ECIP1010_CONTINUE => ecip1010_continue_transition,
        names::ETHASH_ECIP1017 => ecip1017_transition,
        names::ETHASH_ECIP1017_ERA_ROUNDS => ecip1017_era_rounds,
        names::ETHASH_ECIP1041 => bomb_defuse_transition,
    }
    ethash! { table; big
        names::ETHASH_MINIMUM_DIFFICULTY => minimum_difficulty,
        names::ETHASH_DIFFICULTY_BOUND_DIVISOR => difficulty_bound_divisor,
        names::ETHASH_DURATION_LIMIT => duration_limit,
    }

    let delays: &[(&'static str, u64)] = &[
        (names::ETHASH_EIP649, bombs::EIP649_DELAY),
        (names::ETHASH_EIP1234, bombs::EIP1234_DELAY),
        (names::ETHASH_EIP2384, bombs::EIP2384_DELAY),
    ];
    for &(name, delay) in delays {
        table = table
            .read_u64(name, move |s: &P| {
                s.ethash_params()
                    .and_then(|e| bombs::activation(&e.difficulty_bomb_delays, delay))
            })
            .write_u64(name, move |s: &mut P, v| {
                if let Some(e) = s.ethash_params_for_write(v.is_some())? {
                    bombs::update(&mut e.difficulty_bomb_delays, delay, v);
                }
                Ok(())
            });
    }
    table
        .read_schedule(names::ETHASH_BLOCK_REWARD_SCHEDULE, |s: &P| {
            s.ethash_params()
                .and_then(|e| e.block_reward.as_ref())
                .and_then(BlockReward::schedule)
        })
        .write_schedule(names::ETHASH_BLOCK_REWARD_SCHEDULE, |s: &mut P, v| {
            if let Some(e) = s.ethash_params_for_write(v.is_some())? {
                e.block_reward = v.map(|rewards| BlockReward::Schedule(rewards_from(Some(rewards))));
            }
            Ok(())
        })
}

fn builtins(table: AccessorTable<P>) -> AccessorTable<P> {
    let activations: &[(&'static str, Precompiles)] = &[
        (names::EIP198, builtin::MODEXP),
        (names::EIP213, builtin::ALT_BN128_ADD_MUL),
        (names::EIP212, builtin::ALT_BN128_PAIRING),
        (names::EIP152, builtin::BLAKE2_F),
        (names::EIP2537, builtin::BLS12_381),
    ];

    let mut table = table;
    for &(name, set) in activations {
        table = table.uint64(
            name,
            move |s: &P| builtin::activation(&s.accounts, set),
            move |s: &mut P, v| builtin::update(&mut s.accounts, set, v, builtin::activate_at),
        );
    }
    table.uint64(
        names::EIP1108,
        |s: &P| builtin::repricing(&s.accounts, builtin::ALT_BN128_ALL),
        |s: &mut P, v| {
            builtin::update(
                &mut s.accounts,
                builtin::ALT_BN128_ALL,
                v,
                builtin::eip1108_transition,
            );
        },
    )
}

fn genesis(table: AccessorTable<P>) -> AccessorTable<P> {
    table
        .bigint(
            names::GENESIS_DIFFICULTY,
            |s: &P| s.genesis.difficulty.as_ref().map(|d| d.get().clone()),
            |s: &mut P, v| s.genesis.difficulty = v.map(HexOrDecimal256),
        )
        .bytes(
            names::GENESIS_EXTRA_DATA,
            |s: &P| s.genesis.extra_data.as_ref().map(|b| b.0.clone()),
            |s: &mut P, v| s.genesis.extra_data = v.map(HexBytes),
        )
        .uint64(
            names::GENESIS_GAS_LIMIT,
            |s: &P| get(s.genesis.gas_limit),
            |s: &mut P, v| s.genesis.gas_limit = put(v),
        )
        .uint64(
            names::GENESIS_TIMESTAMP,
            |s: &P| get(s.genesis.timestamp),
            |s: &mut P, v| s.genesis.timestamp = put(v),
        )
        .hash(
            names::GENESIS_PARENT_HASH,
            |s: &P| s.genesis.parent_hash,
            |s: &mut P, v| s.genesis.parent_hash = v,
        )
        .hash(
            names::GENESIS_MIX_HASH,
            |s: &P| s.genesis.seal.ethereum.as_ref().and_then(|e| e.mix_hash),
            |s: &mut P, v| match v {
                Some(h) => s.seal_mut().mix_hash = Some(h),
                None => {
                    if let Some(e) = s.genesis.seal.ethereum.as_mut() {
                        e.mix_hash = None;
                    }
                }
            },
        )
        .uint64(
            names::GENESIS_NONCE,
            |s: &P| {
                s.genesis
                    .seal
                    .ethereum
                    .as_ref()
                    .and_then(|e| e.nonce.map(|n| n.0))
            },
            |s: &mut P, v| match v {
                Some(n) => s.seal_mut().nonce = Some(SealNonce(n)),
                None => {
                    if let Some(e) = s.genesis.seal.ethereum.as_mut() {
                        e.nonce = None;
                    }
                }
            },
        )
}

static ACCESSORS: Lazy<AccessorTable<ParityChainSpec>> = Lazy::new(|| {
    let table = AccessorTable::new("ParityChainSpec");
    genesis(builtins(ethash(engine(params(table)))))
});

impl Configurable for ParityChainSpec {
    fn accessors() -> &'static AccessorTable<Self> {
        &ACCESSORS
    }
}
