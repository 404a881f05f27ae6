//! Capability catalog
//!
//! The declared interfaces every schema collaborator is measured against,
//! and the capability names they are built from.

use crate::interface::{CapabilitySpec, Interface};

/// Capability names
///
/// Schemas register accessors under these names; keeping them in one place
/// makes a misspelt registration a compile error instead of a silent skip.
pub mod names {
    #![allow(missing_docs)]

    // Identity
    pub const CHAIN_ID: &str = "ChainID";
    pub const NETWORK_ID: &str = "NetworkID";

    // Consensus engine
    pub const CONSENSUS_ENGINE: &str = "ConsensusEngineType";
    pub const CLIQUE_PERIOD: &str = "CliquePeriod";
    pub const CLIQUE_EPOCH: &str = "CliqueEpoch";

    // Protocol transitions
    pub const EIP7: &str = "EIP7Transition";
    pub const EIP150: &str = "EIP150Transition";
    pub const EIP152: &str = "EIP152Transition";
    pub const EIP155: &str = "EIP155Transition";
    pub const EIP160: &str = "EIP160Transition";
    pub const EIP161ABC: &str = "EIP161abcTransition";
    pub const EIP161D: &str = "EIP161dTransition";
    pub const EIP170: &str = "EIP170Transition";
    pub const EIP140: &str = "EIP140Transition";
    pub const EIP198: &str = "EIP198Transition";
    pub const EIP211: &str = "EIP211Transition";
    pub const EIP212: &str = "EIP212Transition";
    pub const EIP213: &str = "EIP213Transition";
    pub const EIP214: &str = "EIP214Transition";
    pub const EIP658: &str = "EIP658Transition";
    pub const EIP145: &str = "EIP145Transition";
    pub const EIP1014: &str = "EIP1014Transition";
    pub const EIP1052: &str = "EIP1052Transition";
    pub const EIP1283: &str = "EIP1283Transition";
    pub const EIP1283_DISABLE: &str = "EIP1283DisableTransition";
    pub const EIP1108: &str = "EIP1108Transition";
    pub const EIP1344: &str = "EIP1344Transition";
    pub const EIP1884: &str = "EIP1884Transition";
    pub const EIP2028: &str = "EIP2028Transition";
    pub const EIP2200: &str = "EIP2200Transition";
    pub const EIP2537: &str = "EIP2537Transition";

    // Protocol parameters
    pub const MAX_CODE_SIZE: &str = "MaxCodeSize";
    pub const ACCOUNT_START_NONCE: &str = "AccountStartNonce";
    pub const MAXIMUM_EXTRA_DATA_SIZE: &str = "MaximumExtraDataSize";
    pub const MIN_GAS_LIMIT: &str = "MinGasLimit";
    pub const GAS_LIMIT_BOUND_DIVISOR: &str = "GasLimitBoundDivisor";

    // Ethash transitions
    pub const ETHASH_HOMESTEAD: &str = "EthashHomesteadTransition";
    pub const ETHASH_EIP100B: &str = "EthashEIP100BTransition";
    pub const ETHASH_EIP649: &str = "EthashEIP649Transition";
    pub const ETHASH_EIP779: &str = "EthashEIP779Transition";
    pub const ETHASH_EIP1234: &str = "EthashEIP1234Transition";
    pub const ETHASH_EIP2384: &str = "EthashEIP2384Transition";
    pub const ETHASH_ECIP1010_PAUSE: &str = "EthashECIP1010PauseTransition";
    pub const ETHASH_ECIP1010_CONTINUE: &str = "EthashECIP1010ContinueTransition";
    pub const ETHASH_ECIP1017: &str = "EthashECIP1017Transition";
    pub const ETHASH_ECIP1041: &str = "EthashECIP1041Transition";

    // Ethash parameters
    pub const ETHASH_ECIP1017_ERA_ROUNDS: &str = "EthashECIP1017EraRounds";
    pub const ETHASH_MINIMUM_DIFFICULTY: &str = "EthashMinimumDifficulty";
    pub const ETHASH_DIFFICULTY_BOUND_DIVISOR: &str = "EthashDifficultyBoundDivisor";
    pub const ETHASH_DURATION_LIMIT: &str = "EthashDurationLimit";
    pub const ETHASH_BLOCK_REWARD_SCHEDULE: &str = "EthashBlockRewardSchedule";

    // Genesis header
    pub const GENESIS_DIFFICULTY: &str = "GenesisDifficulty";
    pub const GENESIS_EXTRA_DATA: &str = "GenesisExtraData";
    pub const GENESIS_GAS_LIMIT: &str = "GenesisGasLimit";
    pub const GENESIS_MIX_HASH: &str = "GenesisMixHash";
    pub const GENESIS_NONCE: &str = "GenesisNonce";
    pub const GENESIS_PARENT_HASH: &str = "GenesisParentHash";
    pub const GENESIS_TIMESTAMP: &str = "GenesisTimestamp";
}

const NETWORK_IDENTITY_CAPS: &[CapabilitySpec] = &[CapabilitySpec::uint64(names::NETWORK_ID)];

const CHAIN_IDENTITY_CAPS: &[CapabilitySpec] = &[CapabilitySpec::bigint(names::CHAIN_ID)];

const CHAIN_CONFIGURATOR_CAPS: &[CapabilitySpec] = &[
    CapabilitySpec::engine(names::CONSENSUS_ENGINE),
    CapabilitySpec::uint64(names::CLIQUE_PERIOD),
    CapabilitySpec::uint64(names::CLIQUE_EPOCH),
    CapabilitySpec::uint64(names::EIP7),
    CapabilitySpec::uint64(names::EIP150),
    CapabilitySpec::uint64(names::EIP152),
    CapabilitySpec::uint64(names::EIP155),
    CapabilitySpec::uint64(names::EIP160),
    CapabilitySpec::uint64(names::EIP161ABC),
    CapabilitySpec::uint64(names::EIP161D),
    CapabilitySpec::uint64(names::EIP170),
    CapabilitySpec::uint64(names::EIP140),
    CapabilitySpec::uint64(names::EIP198),
    CapabilitySpec::uint64(names::EIP211),
    CapabilitySpec::uint64(names::EIP212),
    CapabilitySpec::uint64(names::EIP213),
    CapabilitySpec::uint64(names::EIP214),
    CapabilitySpec::uint64(names::EIP658),
    CapabilitySpec::uint64(names::EIP145),
    CapabilitySpec::uint64(names::EIP1014),
    CapabilitySpec::uint64(names::EIP1052),
    CapabilitySpec::uint64(names::EIP1283),
    CapabilitySpec::uint64(names::EIP1283_DISABLE),
    CapabilitySpec::uint64(names::EIP1108),
    CapabilitySpec::uint64(names::EIP1344),
    CapabilitySpec::uint64(names::EIP1884),
    CapabilitySpec::uint64(names::EIP2028),
    CapabilitySpec::uint64(names::EIP2200),
    CapabilitySpec::uint64(names::EIP2537),
    CapabilitySpec::uint64(names::MAX_CODE_SIZE),
    CapabilitySpec::uint64(names::ACCOUNT_START_NONCE),
    CapabilitySpec::uint64(names::MAXIMUM_EXTRA_DATA_SIZE),
    CapabilitySpec::uint64(names::MIN_GAS_LIMIT),
    CapabilitySpec::uint64(names::GAS_LIMIT_BOUND_DIVISOR),
    CapabilitySpec::uint64(names::ETHASH_HOMESTEAD),
    CapabilitySpec::uint64(names::ETHASH_EIP100B),
    CapabilitySpec::uint64(names::ETHASH_EIP649),
    CapabilitySpec::uint64(names::ETHASH_EIP779),
    CapabilitySpec::uint64(names::ETHASH_EIP1234),
    CapabilitySpec::uint64(names::ETHASH_EIP2384),
    CapabilitySpec::uint64(names::ETHASH_ECIP1010_PAUSE),
    CapabilitySpec::uint64(names::ETHASH_ECIP1010_CONTINUE),
    CapabilitySpec::uint64(names::ETHASH_ECIP1017),
    CapabilitySpec::uint64(names::ETHASH_ECIP1041),
    CapabilitySpec::uint64(names::ETHASH_ECIP1017_ERA_ROUNDS),
    CapabilitySpec::bigint(names::ETHASH_MINIMUM_DIFFICULTY),
    CapabilitySpec::bigint(names::ETHASH_DIFFICULTY_BOUND_DIVISOR),
    CapabilitySpec::bigint(names::ETHASH_DURATION_LIMIT),
    CapabilitySpec::schedule(names::ETHASH_BLOCK_REWARD_SCHEDULE),
];

const GENESIS_BLOCKER_CAPS: &[CapabilitySpec] = &[
    CapabilitySpec::bigint(names::GENESIS_DIFFICULTY),
    CapabilitySpec::bytes(names::GENESIS_EXTRA_DATA),
    CapabilitySpec::uint64(names::GENESIS_GAS_LIMIT),
    CapabilitySpec::hash(names::GENESIS_MIX_HASH),
    CapabilitySpec::uint64(names::GENESIS_NONCE),
    CapabilitySpec::hash(names::GENESIS_PARENT_HASH),
    CapabilitySpec::uint64(names::GENESIS_TIMESTAMP),
];

/// Network identifier only
pub static NETWORK_IDENTITY: Interface = Interface::new("NetworkIdentity", NETWORK_IDENTITY_CAPS);

static CHAIN_IDENTITY_PARENTS: [&Interface; 1] = [&NETWORK_IDENTITY];

/// Chain id and network id
pub static CHAIN_IDENTITY: Interface =
    Interface::extending("ChainIdentity", CHAIN_IDENTITY_CAPS, &CHAIN_IDENTITY_PARENTS);

static CHAIN_CONFIGURATOR_PARENTS: [&Interface; 1] = [&CHAIN_IDENTITY];

/// Identity, consensus engine, every fork transition and protocol parameters
pub static CHAIN_CONFIGURATOR: Interface = Interface::extending(
    "ChainConfigurator",
    CHAIN_CONFIGURATOR_CAPS,
    &CHAIN_CONFIGURATOR_PARENTS,
);

/// Genesis header fields
pub static GENESIS_BLOCKER: Interface = Interface::new("GenesisBlocker", GENESIS_BLOCKER_CAPS);

static CONFIGURATOR_PARENTS: [&Interface; 2] = [&CHAIN_CONFIGURATOR, &GENESIS_BLOCKER];

/// Full configurator: chain configurator plus genesis blocker
pub static CONFIGURATOR: Interface =
    Interface::extending("Configurator", &[], &CONFIGURATOR_PARENTS);

/// Every declared interface, narrowest first
#[must_use]
pub fn interfaces() -> [&'static Interface; 5] {
    [
        &NETWORK_IDENTITY,
        &CHAIN_IDENTITY,
        &GENESIS_BLOCKER,
        &CHAIN_CONFIGURATOR,
        &CONFIGURATOR,
    ]
}

/// Look up a declared interface by name (case-insensitive)
#[must_use]
pub fn interface_by_name(name: &str) -> Option<&'static Interface> {
    interfaces()
        .into_iter()
        .find(|i| i.name().eq_ignore_ascii_case(name))
}
