//! Precompile activations
//!
//! Parity schedules some protocol changes by activating builtin contracts
//! at fixed addresses rather than through a `params` field.

use std::collections::BTreeMap;

use confp_types::HexOrDecimal64;

use super::{Builtin, ParityAccount};

type Accounts = BTreeMap<String, ParityAccount>;

/// `(address, builtin name)` pairs a capability activates together
pub(crate) type Precompiles = &'static [(u64, &'static str)];

pub(crate) const MODEXP: Precompiles = &[(0x05, "modexp")];

pub(crate) const ALT_BN128_ADD_MUL: Precompiles =
    &[(0x06, "alt_bn128_add"), (0x07, "alt_bn128_mul")];

pub(crate) const ALT_BN128_PAIRING: Precompiles = &[(0x08, "alt_bn128_pairing")];

pub(crate) const ALT_BN128_ALL: Precompiles = &[
    (0x06, "alt_bn128_add"),
    (0x07, "alt_bn128_mul"),
    (0x08, "alt_bn128_pairing"),
];

pub(crate) const BLAKE2_F: Precompiles = &[(0x09, "blake2_f")];

pub(crate) const BLS12_381: Precompiles = &[
    (0x0a, "bls12_381_g1_add"),
    (0x0b, "bls12_381_g1_mul"),
    (0x0c, "bls12_381_g1_multiexp"),
    (0x0d, "bls12_381_g2_add"),
    (0x0e, "bls12_381_g2_mul"),
    (0x0f, "bls12_381_g2_multiexp"),
    (0x10, "bls12_381_pairing"),
    (0x11, "bls12_381_fp_to_g1"),
    (0x12, "bls12_381_fp2_to_g2"),
];

/// Account key for a precompile address
pub(crate) fn address(n: u64) -> String {
    format!("0x{n:040x}")
}

fn builtins(accounts: &Accounts, set: Precompiles) -> impl Iterator<Item = &Builtin> {
    accounts
        .values()
        .filter_map(|a| a.builtin.as_ref())
        .filter(move |b| set.iter().any(|(_, name)| *name == b.name))
}

/// Earliest `activate_at` among the builtins in `set`
pub(crate) fn activation(accounts: &Accounts, set: Precompiles) -> Option<u64> {
    builtins(accounts, set)
        .filter_map(|b| b.activate_at.map(HexOrDecimal64::get))
        .min()
}

/// Earliest EIP-1108 repricing among the builtins in `set`
pub(crate) fn repricing(accounts: &Accounts, set: Precompiles) -> Option<u64> {
    builtins(accounts, set)
        .filter_map(|b| b.eip1108_transition.map(HexOrDecimal64::get))
        .min()
}

/// Set or clear one field on every builtin in `set`
///
/// Setting creates missing builtins. Clearing drops builtins left with no
/// schedule and accounts left with nothing at all.
pub(crate) fn update(
    accounts: &mut Accounts,
    set: Precompiles,
    value: Option<u64>,
    field: fn(&mut Builtin) -> &mut Option<HexOrDecimal64>,
) {
    for &(n, name) in set {
        let key = address(n);
        match value {
            Some(block) => {
                let account = accounts.entry(key).or_default();
                let builtin = account.builtin.get_or_insert_with(|| Builtin::named(name));
                *field(builtin) = Some(HexOrDecimal64(block));
            }
            None => {
                let Some(account) = accounts.get_mut(&key) else {
                    continue;
                };
                if let Some(builtin) = account.builtin.as_mut() {
                    *field(builtin) = None;
                    if builtin.is_inert() {
                        account.builtin = None;
                    }
                }
                if account.is_empty() {
                    accounts.remove(&key);
                }
            }
        }
    }
}

pub(crate) fn activate_at(b: &mut Builtin) -> &mut Option<HexOrDecimal64> {
    &mut b.activate_at
}

pub(crate) fn eip1108_transition(b: &mut Builtin) -> &mut Option<HexOrDecimal64> {
    &mut b.eip1108_transition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_format() {
        assert_eq!(address(5), "0x0000000000000000000000000000000000000005");
        assert_eq!(address(0x12), "0x0000000000000000000000000000000000000012");
    }

    #[test]
    fn set_then_clear() {
        let mut accounts = BTreeMap::new();
        update(&mut accounts, BLS12_381, Some(42), activate_at);
        assert_eq!(accounts.len(), 9);
        assert_eq!(activation(&accounts, BLS12_381), Some(42));

        update(&mut accounts, BLS12_381, None, activate_at);
        assert!(accounts.is_empty());
    }

    #[test]
    fn repricing_keeps_activation_absent() {
        let mut accounts = BTreeMap::new();
        update(&mut accounts, ALT_BN128_ALL, Some(9_069_000), eip1108_transition);
        assert_eq!(repricing(&accounts, ALT_BN128_ALL), Some(9_069_000));
        assert_eq!(activation(&accounts, ALT_BN128_ADD_MUL), None);

        update(&mut accounts, ALT_BN128_ADD_MUL, Some(4_370_000), activate_at);
        update(&mut accounts, ALT_BN128_ALL, None, eip1108_transition);
        assert_eq!(activation(&accounts, ALT_BN128_ADD_MUL), Some(4_370_000));
        // pairing had only the repricing, so it is gone
        assert!(!accounts.contains_key(&address(8)));
    }
}
