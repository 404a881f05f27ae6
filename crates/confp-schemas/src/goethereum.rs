//! go-ethereum chain configuration
//!
//! Protocol changes are bundled into named forks. Every EIP capability reads
//! its bundle's block and writes the whole bundle, so a schedule that splits
//! a bundle cannot survive a trip through this schema. Ethash members of a
//! bundle read as absent unless the `ethash` section is present. Classic-only
//! capabilities have no place here: their writers accept clearing and
//! decline present values.

use confp_capability::catalog::names;
use confp_capability::{AccessorTable, Configurable, WriteError};
use confp_types::{DecimalBig, Hash32};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::common::{
    big, clique_for_write, engine_of, ethash_for_write, select_engine, CliqueConfig,
    ConsensusEngine, EthashConfig,
};

/// go-ethereum `config` object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GoEthereumChainConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<DecimalBig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao_fork_block: Option<u64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dao_fork_support: bool,
    #[serde(default, rename = "eip150Block", skip_serializing_if = "Option::is_none")]
    pub eip150_block: Option<u64>,
    #[serde(default, rename = "eip150Hash", skip_serializing_if = "Option::is_none")]
    pub eip150_hash: Option<Hash32>,
    #[serde(default, rename = "eip155Block", skip_serializing_if = "Option::is_none")]
    pub eip155_block: Option<u64>,
    #[serde(default, rename = "eip158Block", skip_serializing_if = "Option::is_none")]
    pub eip158_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantium_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petersburg_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istanbul_block: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muir_glacier_block: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethash: Option<EthashConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clique: Option<CliqueConfig>,
}

impl GoEthereumChainConfig {
    /// Consensus engine selected by the `ethash` / `clique` sections
    #[must_use]
    pub fn consensus_engine(&self) -> ConsensusEngine {
        engine_of(self.ethash.as_ref(), self.clique.as_ref())
    }
}

type G = GoEthereumChainConfig;

/// Named fork whose block activates a bundle of capabilities
#[derive(Debug, Clone, Copy)]
enum Fork {
    Homestead,
    Eip158,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    MuirGlacier,
}

impl Fork {
    fn block(self, c: &G) -> Option<u64> {
        match self {
            Self::Homestead => c.homestead_block,
            Self::Eip158 => c.eip158_block,
            Self::Byzantium => c.byzantium_block,
            Self::Constantinople => c.constantinople_block,
            Self::Petersburg => c.petersburg_block,
            Self::Istanbul => c.istanbul_block,
            Self::MuirGlacier => c.muir_glacier_block,
        }
    }

    fn block_mut(self, c: &mut G) -> &mut Option<u64> {
        match self {
            Self::Homestead => &mut c.homestead_block,
            Self::Eip158 => &mut c.eip158_block,
            Self::Byzantium => &mut c.byzantium_block,
            Self::Constantinople => &mut c.constantinople_block,
            Self::Petersburg => &mut c.petersburg_block,
            Self::Istanbul => &mut c.istanbul_block,
            Self::MuirGlacier => &mut c.muir_glacier_block,
        }
    }
}

const BUNDLES: &[(&str, Fork)] = &[
    (names::EIP7, Fork::Homestead),
    (names::EIP160, Fork::Eip158),
    (names::EIP161ABC, Fork::Eip158),
    (names::EIP161D, Fork::Eip158),
    (names::EIP170, Fork::Eip158),
    (names::EIP140, Fork::Byzantium),
    (names::EIP198, Fork::Byzantium),
    (names::EIP211, Fork::Byzantium),
    (names::EIP212, Fork::Byzantium),
    (names::EIP213, Fork::Byzantium),
    (names::EIP214, Fork::Byzantium),
    (names::EIP658, Fork::Byzantium),
    (names::EIP145, Fork::Constantinople),
    (names::EIP1014, Fork::Constantinople),
    (names::EIP1052, Fork::Constantinople),
    (names::EIP1283, Fork::Constantinople),
    (names::EIP1283_DISABLE, Fork::Petersburg),
    (names::EIP152, Fork::Istanbul),
    (names::EIP1108, Fork::Istanbul),
    (names::EIP1344, Fork::Istanbul),
    (names::EIP1884, Fork::Istanbul),
    (names::EIP2028, Fork::Istanbul),
    (names::EIP2200, Fork::Istanbul),
];

const ETHASH_BUNDLES: &[(&str, Fork)] = &[
    (names::ETHASH_HOMESTEAD, Fork::Homestead),
    (names::ETHASH_EIP100B, Fork::Byzantium),
    (names::ETHASH_EIP649, Fork::Byzantium),
    (names::ETHASH_EIP1234, Fork::Constantinople),
    (names::ETHASH_EIP2384, Fork::MuirGlacier),
];

const UNSUPPORTED: &[&str] = &[
    names::EIP2537,
    names::ETHASH_ECIP1010_PAUSE,
    names::ETHASH_ECIP1010_CONTINUE,
    names::ETHASH_ECIP1017,
    names::ETHASH_ECIP1017_ERA_ROUNDS,
    names::ETHASH_ECIP1041,
];

fn decline(_: &mut G, value: Option<u64>) -> Result<(), WriteError> {
    match value {
        Some(_) => Err(WriteError::Unsupported),
        None => Ok(()),
    }
}

static ACCESSORS: Lazy<AccessorTable<GoEthereumChainConfig>> = Lazy::new(|| {
    let mut table = AccessorTable::new("GoEthereumChainConfig")
        .uint64(names::NETWORK_ID, |c: &G| c.network_id, |c: &mut G, v| c.network_id = v)
        .bigint(
            names::CHAIN_ID,
            |c: &G| big(c.chain_id.as_ref()),
            |c: &mut G, v| c.chain_id = v.map(DecimalBig),
        )
        .uint64(names::EIP150, |c: &G| c.eip150_block, |c: &mut G, v| c.eip150_block = v)
        .uint64(names::EIP155, |c: &G| c.eip155_block, |c: &mut G, v| c.eip155_block = v)
        .read_engine(names::CONSENSUS_ENGINE, G::consensus_engine)
        .write_engine(names::CONSENSUS_ENGINE, |c: &mut G, v| {
            select_engine(&mut c.ethash, &mut c.clique, v)
        })
        .read_u64(names::CLIQUE_PERIOD, |c: &G| c.clique.as_ref().and_then(|q| q.period))
        .write_u64(names::CLIQUE_PERIOD, |c: &mut G, v| {
            if let Some(q) = clique_for_write(&mut c.clique, c.ethash.as_ref(), v.is_some())? {
                q.period = v;
            }
            Ok(())
        })
        .read_u64(names::CLIQUE_EPOCH, |c: &G| c.clique.as_ref().and_then(|q| q.epoch))
        .write_u64(names::CLIQUE_EPOCH, |c: &mut G, v| {
            if let Some(q) = clique_for_write(&mut c.clique, c.ethash.as_ref(), v.is_some())? {
                q.epoch = v;
            }
            Ok(())
        })
        .read_u64(names::ETHASH_EIP779, |c: &G| {
            c.ethash
                .as_ref()
                .and(c.dao_fork_block.filter(|_| c.dao_fork_support))
        })
        .write_u64(names::ETHASH_EIP779, |c: &mut G, v| {
            ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())?;
            c.dao_fork_block = v;
            c.dao_fork_support = v.is_some();
            Ok(())
        });

    for &(name, fork) in BUNDLES {
        table = table.uint64(
            name,
            move |c: &G| fork.block(c),
            move |c: &mut G, v| *fork.block_mut(c) = v,
        );
    }
    for &(name, fork) in ETHASH_BUNDLES {
        table = table
            .read_u64(name, move |c: &G| c.ethash.as_ref().and(fork.block(c)))
            .write_u64(name, move |c: &mut G, v| {
                ethash_for_write(&mut c.ethash, c.clique.as_ref(), v.is_some())?;
                *fork.block_mut(c) = v;
                Ok(())
            });
    }
    for &name in UNSUPPORTED {
        table = table.write_u64(name, decline);
    }
    table
});

impl Configurable for GoEthereumChainConfig {
    fn accessors() -> &'static AccessorTable<Self> {
        &ACCESSORS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confp_capability::catalog::CHAIN_CONFIGURATOR;
    use confp_capability::{unsatisfied, Configurator};
    use confp_types::CapabilityValue;

    #[test]
    fn bundle_members_read_the_bundle() {
        let config = GoEthereumChainConfig {
            byzantium_block: Some(4_370_000),
            ethash: Some(EthashConfig::default()),
            ..GoEthereumChainConfig::default()
        };
        for name in [names::EIP140, names::EIP658, names::ETHASH_EIP649] {
            assert_eq!(config.read(name).as_u64(), Some(4_370_000));
        }
        assert_eq!(config.read(names::EIP145), CapabilityValue::Absent);
    }

    #[test]
    fn ethash_members_need_ethash() {
        let config = GoEthereumChainConfig {
            homestead_block: Some(0),
            byzantium_block: Some(0),
            clique: Some(CliqueConfig {
                period: Some(15),
                epoch: Some(30_000),
            }),
            ..GoEthereumChainConfig::default()
        };
        assert_eq!(config.read(names::EIP7).as_u64(), Some(0));
        assert_eq!(config.read(names::EIP140).as_u64(), Some(0));
        assert!(config.read(names::ETHASH_HOMESTEAD).is_absent());
        assert!(config.read(names::ETHASH_EIP649).is_absent());
        assert_eq!(
            config.read(names::CONSENSUS_ENGINE),
            CapabilityValue::Engine(ConsensusEngine::Clique)
        );
        assert_eq!(config.read(names::CLIQUE_EPOCH).as_u64(), Some(30_000));
    }

    #[test]
    fn ethash_member_write_selects_ethash() {
        let mut config = GoEthereumChainConfig::default();
        config
            .write(names::ETHASH_EIP1234, CapabilityValue::Uint64(7_280_000))
            .unwrap();
        assert_eq!(config.constantinople_block, Some(7_280_000));
        assert_eq!(config.consensus_engine(), ConsensusEngine::Ethash);

        let mut clique = GoEthereumChainConfig {
            clique: Some(CliqueConfig::default()),
            ..GoEthereumChainConfig::default()
        };
        let err = clique
            .write(names::ETHASH_EIP1234, CapabilityValue::Uint64(7_280_000))
            .unwrap_err();
        assert!(matches!(err, WriteError::Rejected { .. }));
        assert_eq!(clique.constantinople_block, None);
    }

    #[test]
    fn bundle_writes_overwrite() {
        let mut config = GoEthereumChainConfig::default();
        config.write(names::EIP1344, CapabilityValue::Uint64(10)).unwrap();
        config.write(names::EIP152, CapabilityValue::Uint64(20)).unwrap();
        assert_eq!(config.istanbul_block, Some(20));
    }

    #[test]
    fn classic_capabilities_are_declined() {
        let mut config = GoEthereumChainConfig::default();
        assert_eq!(
            config.write(names::ETHASH_ECIP1017, CapabilityValue::Uint64(5_000_000)),
            Err(WriteError::Unsupported)
        );
        config
            .write(names::ETHASH_ECIP1017, CapabilityValue::Absent)
            .unwrap();
        assert_eq!(config.reader_kind(names::ETHASH_ECIP1017), None);
    }

    #[test]
    fn dao_needs_support_flag() {
        let mut config = GoEthereumChainConfig {
            dao_fork_block: Some(1_920_000),
            ethash: Some(EthashConfig::default()),
            ..GoEthereumChainConfig::default()
        };
        assert_eq!(config.read(names::ETHASH_EIP779), CapabilityValue::Absent);
        config
            .write(names::ETHASH_EIP779, CapabilityValue::Uint64(1_920_000))
            .unwrap();
        assert!(config.dao_fork_support);
    }

    #[test]
    fn lacks_classic_and_parameter_readers() {
        let missing = unsatisfied(&CHAIN_CONFIGURATOR, &GoEthereumChainConfig::default());
        assert!(missing.contains(&names::ETHASH_ECIP1017_ERA_ROUNDS));
        assert!(missing.contains(&names::MAX_CODE_SIZE));
        assert!(missing.contains(&names::ETHASH_ECIP1041));
        assert!(missing.contains(&names::ETHASH_BLOCK_REWARD_SCHEDULE));
        assert!(!missing.contains(&names::CONSENSUS_ENGINE));
        assert!(!missing.contains(&names::EIP2200));
    }
}
