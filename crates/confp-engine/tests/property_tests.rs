use confp_capability::catalog::{names, CHAIN_CONFIGURATOR};
use confp_capability::Configurator;
use confp_engine::{convert, equal, identical, transition_names};
use confp_schemas::{CoreGethChainConfig, EthashConfig, GoEthereumChainConfig, ParityChainSpec};
use confp_types::CapabilityValue;
use proptest::prelude::*;

fn block() -> impl Strategy<Value = Option<u64>> {
    proptest::option::of(0..20_000_000u64)
}

prop_compose! {
    /// go-ethereum configs: the lossiest schema, so every other one can hold them
    fn geth_config()(
        network_id in proptest::option::of(any::<u64>()),
        chain_id in proptest::option::of(any::<u64>()),
        homestead in block(),
        dao in block(),
        eip150 in block(),
        eip155 in block(),
        eip158 in block(),
        byzantium in block(),
        constantinople in block(),
        petersburg in block(),
        istanbul in block(),
        muir_glacier in block(),
    ) -> GoEthereumChainConfig {
        GoEthereumChainConfig {
            network_id,
            chain_id: chain_id.map(Into::into),
            homestead_block: homestead,
            dao_fork_block: dao,
            dao_fork_support: dao.is_some(),
            eip150_block: eip150,
            eip155_block: eip155,
            eip158_block: eip158,
            byzantium_block: byzantium,
            constantinople_block: constantinople,
            petersburg_block: petersburg,
            istanbul_block: istanbul,
            muir_glacier_block: muir_glacier,
            ethash: Some(EthashConfig::default()),
            ..GoEthereumChainConfig::default()
        }
    }
}

proptest! {
    #[test]
    fn prop_round_trip_into_coregeth(src in geth_config()) {
        let mut dst = CoreGethChainConfig::default();
        convert(&src, &mut dst).unwrap();
        let diffs = equal(&CHAIN_CONFIGURATOR, &src, &dst);
        prop_assert!(diffs.is_empty(), "{:?}", diffs);
    }

    #[test]
    fn prop_round_trip_into_parity(src in geth_config()) {
        let mut dst = ParityChainSpec::default();
        convert(&src, &mut dst).unwrap();
        let diffs = equal(&CHAIN_CONFIGURATOR, &src, &dst);
        prop_assert!(diffs.is_empty(), "{:?}", diffs);
    }

    #[test]
    fn prop_convert_is_idempotent(src in geth_config()) {
        let mut once = ParityChainSpec::default();
        convert(&src, &mut once).unwrap();
        let mut twice = once.clone();
        convert(&src, &mut twice).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_absent_stays_absent(src in geth_config()) {
        let mut dst = CoreGethChainConfig::default();
        convert(&src, &mut dst).unwrap();
        for name in transition_names(&dst) {
            if src.read(name).is_absent() {
                prop_assert!(dst.read(name).is_absent(), "{} appeared", name);
            }
        }
    }

    #[test]
    fn prop_absent_differs_from_present(block in any::<u64>()) {
        let absent = CoreGethChainConfig::default();
        let present = CoreGethChainConfig {
            eip155_block: Some(block),
            ..CoreGethChainConfig::default()
        };
        let diffs = equal(&CHAIN_CONFIGURATOR, &absent, &present);
        prop_assert_eq!(diffs.len(), 1);
        prop_assert_eq!(diffs[0].field, names::EIP155);
    }

    #[test]
    fn prop_identity_is_symmetric(
        a in proptest::option::of(0..4u64),
        b in proptest::option::of(0..4u64),
        n in proptest::option::of(0..4u64),
    ) {
        let x = CoreGethChainConfig {
            network_id: n,
            chain_id: a.map(Into::into),
            ..CoreGethChainConfig::default()
        };
        let mut y = ParityChainSpec::default();
        y.write(names::NETWORK_ID, n.into()).unwrap();
        y.write(names::CHAIN_ID, CapabilityValue::from(b)).unwrap();
        let ids = [names::CHAIN_ID, names::NETWORK_ID];
        prop_assert_eq!(identical(&x, &y, &ids), identical(&y, &x, &ids));
        prop_assert_eq!(identical(&x, &y, &ids), a == b);
    }

    #[test]
    fn prop_identity_is_sensitive(
        chain_id in any::<u64>(),
        network_id in any::<u64>(),
        bump in 1..1_000u64,
    ) {
        let a = CoreGethChainConfig {
            network_id: Some(network_id),
            chain_id: Some(chain_id.into()),
            ..CoreGethChainConfig::default()
        };
        let mut b = ParityChainSpec::default();
        convert(&a, &mut b).unwrap();
        let ids = [names::CHAIN_ID, names::NETWORK_ID];
        prop_assert!(identical(&a, &b, &ids));

        b.write(names::NETWORK_ID, CapabilityValue::Uint64(network_id.wrapping_add(bump)))
            .unwrap();
        prop_assert!(!identical(&a, &b, &ids));
    }

    #[test]
    fn prop_transition_order_ignores_write_order(
        values in proptest::collection::vec((0..35usize, block()), 0..40),
    ) {
        let all = transition_names(&CoreGethChainConfig::default());
        let mut forward = CoreGethChainConfig::default();
        let mut backward = CoreGethChainConfig::default();
        // ECIP-1010 refuses a continue block ahead of its pause; order only
        // depends on which readers exist
        for &(i, v) in &values {
            forward.write(all[i % all.len()], v.into()).ok();
        }
        for &(i, v) in values.iter().rev() {
            backward.write(all[i % all.len()], v.into()).ok();
        }
        let order = transition_names(&forward);
        prop_assert_eq!(&order, &transition_names(&backward));
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(order, all);
    }
}
