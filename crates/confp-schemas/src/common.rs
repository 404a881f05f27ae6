//! Consensus-engine sections shared by the geth-family schemas

use std::collections::BTreeMap;

use confp_capability::WriteError;
use confp_types::{DecimalBig, HexOrDecimal256, HexOrDecimal64, UBig};
use serde::{Deserialize, Serialize};

pub use confp_types::ConsensusEngine;

/// `ethash` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthashConfig {
    /// Difficulty floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_difficulty: Option<DecimalBig>,

    /// Difficulty adjustment divisor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_bound_divisor: Option<DecimalBig>,

    /// Target block time bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_limit: Option<DecimalBig>,
}

/// `clique` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueConfig {
    /// Seconds between blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,

    /// Checkpoint interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u64>,
}

/// Block reward per activation block, as JSON spells it
pub(crate) type RewardSchedule = BTreeMap<HexOrDecimal64, HexOrDecimal256>;

pub(crate) fn engine_of(
    ethash: Option<&EthashConfig>,
    clique: Option<&CliqueConfig>,
) -> ConsensusEngine {
    match (ethash, clique) {
        (Some(_), _) => ConsensusEngine::Ethash,
        (None, Some(_)) => ConsensusEngine::Clique,
        (None, None) => ConsensusEngine::Unknown,
    }
}

/// Select an engine by creating its section
///
/// Switching away from an engine whose section is already present is
/// rejected; clearing removes both sections.
pub(crate) fn select_engine<E: Default, Q: Default>(
    ethash: &mut Option<E>,
    clique: &mut Option<Q>,
    engine: Option<ConsensusEngine>,
) -> Result<(), WriteError> {
    match engine {
        None | Some(ConsensusEngine::Unknown) => {
            *ethash = None;
            *clique = None;
        }
        Some(ConsensusEngine::Ethash) => {
            if ethash.is_none() && clique.is_some() {
                return Err(WriteError::rejected("configuration already runs clique"));
            }
            ethash.get_or_insert_with(E::default);
        }
        Some(ConsensusEngine::Clique) => {
            if ethash.is_some() {
                return Err(WriteError::rejected("configuration already runs ethash"));
            }
            clique.get_or_insert_with(Q::default);
        }
    }
    Ok(())
}

/// Ethash section to write a parameter into
///
/// Clearing never creates the section. Setting creates it unless the
/// configuration already runs clique, which is rejected.
pub(crate) fn ethash_for_write<'a>(
    ethash: &'a mut Option<EthashConfig>,
    clique: Option<&CliqueConfig>,
    present: bool,
) -> Result<Option<&'a mut EthashConfig>, WriteError> {
    if !present {
        return Ok(ethash.as_mut());
    }
    if ethash.is_none() && clique.is_some() {
        return Err(WriteError::rejected("ethash parameter on a clique chain"));
    }
    Ok(Some(ethash.get_or_insert_with(EthashConfig::default)))
}

/// Clique section to write a parameter into, mirroring [`ethash_for_write`]
pub(crate) fn clique_for_write<'a, Q: Default, E>(
    clique: &'a mut Option<Q>,
    ethash: Option<&E>,
    present: bool,
) -> Result<Option<&'a mut Q>, WriteError> {
    if !present {
        return Ok(clique.as_mut());
    }
    if ethash.is_some() {
        return Err(WriteError::rejected("clique parameter on an ethash chain"));
    }
    Ok(Some(clique.get_or_insert_with(Q::default)))
}

pub(crate) fn big(value: Option<&DecimalBig>) -> Option<UBig> {
    value.map(|d| d.get().clone())
}

/// Capability view of a reward schedule; empty reads as absent
pub(crate) fn schedule_of(rewards: &RewardSchedule) -> Option<BTreeMap<u64, UBig>> {
    if rewards.is_empty() {
        return None;
    }
    Some(
        rewards
            .iter()
            .map(|(block, reward)| (block.get(), reward.get().clone()))
            .collect(),
    )
}

pub(crate) fn rewards_from(schedule: Option<BTreeMap<u64, UBig>>) -> RewardSchedule {
    schedule
        .unwrap_or_default()
        .into_iter()
        .map(|(block, reward)| (HexOrDecimal64(block), HexOrDecimal256(reward)))
        .collect()
}
