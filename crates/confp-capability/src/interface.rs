//! Declared capability interfaces
//!
//! An [`Interface`] is the only point of coupling between the engine and a
//! concrete schema: a named set of [`CapabilitySpec`]s, optionally extending
//! other interfaces.

use std::collections::BTreeMap;

use confp_types::ValueKind;

/// Name suffix marking a fork-activation threshold
pub const TRANSITION_SUFFIX: &str = "Transition";

/// Whether a capability denotes a fork-activation threshold
///
/// Thresholds are optional u64 capabilities named `...Transition`.
#[inline]
#[must_use]
pub fn is_transition(name: &str, kind: ValueKind) -> bool {
    kind == ValueKind::Uint64 && name.ends_with(TRANSITION_SUFFIX)
}

/// Declaration of one capability: name and value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapabilitySpec {
    /// Capability name (identity)
    pub name: &'static str,

    /// Declared value kind
    pub kind: ValueKind,
}

impl CapabilitySpec {
    /// Declare a capability
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }

    /// Declare an optional u64 capability
    #[inline]
    #[must_use]
    pub const fn uint64(name: &'static str) -> Self {
        Self::new(name, ValueKind::Uint64)
    }

    /// Declare an optional big-integer capability
    #[inline]
    #[must_use]
    pub const fn bigint(name: &'static str) -> Self {
        Self::new(name, ValueKind::BigInt)
    }

    /// Declare an optional hash capability
    #[inline]
    #[must_use]
    pub const fn hash(name: &'static str) -> Self {
        Self::new(name, ValueKind::Hash)
    }

    /// Declare an optional byte-string capability
    #[inline]
    #[must_use]
    pub const fn bytes(name: &'static str) -> Self {
        Self::new(name, ValueKind::Bytes)
    }

    /// Declare an optional consensus-engine capability
    #[inline]
    #[must_use]
    pub const fn engine(name: &'static str) -> Self {
        Self::new(name, ValueKind::Engine)
    }

    /// Declare an optional block-indexed schedule capability
    #[inline]
    #[must_use]
    pub const fn schedule(name: &'static str) -> Self {
        Self::new(name, ValueKind::Schedule)
    }

    /// Whether this capability is a fork-activation threshold
    #[inline]
    #[must_use]
    pub fn is_transition(&self) -> bool {
        is_transition(self.name, self.kind)
    }
}

/// A declared set of capabilities
///
/// Interfaces are `'static` declarations; composition is by reference so a
/// full configurator can be the union of narrower ones without repeating them.
#[derive(Debug)]
pub struct Interface {
    name: &'static str,
    own: &'static [CapabilitySpec],
    extends: &'static [&'static Interface],
}

impl Interface {
    /// Declare an interface with its own capabilities only
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, own: &'static [CapabilitySpec]) -> Self {
        Self {
            name,
            own,
            extends: &[],
        }
    }

    /// Declare an interface that also includes every capability of `extends`
    #[inline]
    #[must_use]
    pub const fn extending(
        name: &'static str,
        own: &'static [CapabilitySpec],
        extends: &'static [&'static Interface],
    ) -> Self {
        Self { name, own, extends }
    }

    /// Interface name
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Every capability, flattened, de-duplicated and in lexical name order
    ///
    /// When two parts declare the same name, the first declaration found
    /// depth-first (own before extended) wins.
    #[must_use]
    pub fn capabilities(&self) -> Vec<CapabilitySpec> {
        let mut by_name = BTreeMap::new();
        self.collect(&mut by_name);
        by_name.into_values().collect()
    }

    /// Capability names in lexical order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.capabilities().into_iter().map(|c| c.name).collect()
    }

    /// Look up one capability by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<CapabilitySpec> {
        self.own
            .iter()
            .find(|c| c.name == name)
            .copied()
            .or_else(|| self.extends.iter().find_map(|parent| parent.get(name)))
    }

    /// Check whether the interface declares `name`
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct capabilities
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities().len()
    }

    /// Check if the interface declares nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.own.is_empty() && self.extends.iter().all(|p| p.is_empty())
    }

    fn collect(&self, into: &mut BTreeMap<&'static str, CapabilitySpec>) {
        for spec in self.own {
            into.entry(spec.name).or_insert(*spec);
        }
        for parent in self.extends {
            parent.collect(into);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_CAPS: &[CapabilitySpec] = &[
        CapabilitySpec::uint64("Zeta"),
        CapabilitySpec::bigint("Alpha"),
    ];

    const DERIVED_CAPS: &[CapabilitySpec] = &[
        CapabilitySpec::uint64("MidTransition"),
        CapabilitySpec::bigint("Zeta"),
    ];

    static BASE: Interface = Interface::new("Base", BASE_CAPS);
    static DERIVED_PARENTS: [&Interface; 1] = [&BASE];
    static DERIVED: Interface = Interface::extending("Derived", DERIVED_CAPS, &DERIVED_PARENTS);

    #[test]
    fn capabilities_are_lexical() {
        assert_eq!(BASE.names(), vec!["Alpha", "Zeta"]);
        assert_eq!(DERIVED.names(), vec!["Alpha", "MidTransition", "Zeta"]);
    }

    #[test]
    fn own_declaration_shadows_parent() {
        assert_eq!(DERIVED.get("Zeta").unwrap().kind, ValueKind::BigInt);
        assert_eq!(BASE.get("Zeta").unwrap().kind, ValueKind::Uint64);
    }

    #[test]
    fn contains_and_len() {
        assert!(DERIVED.contains("Alpha"));
        assert!(!BASE.contains("MidTransition"));
        assert_eq!(DERIVED.len(), 3);
        assert!(!DERIVED.is_empty());
        assert!(Interface::new("Empty", &[]).is_empty());
    }

    #[test]
    fn transition_convention() {
        assert!(CapabilitySpec::uint64("EIP155Transition").is_transition());
        assert!(!CapabilitySpec::bigint("EIP155Transition").is_transition());
        assert!(!CapabilitySpec::uint64("EthashECIP1017EraRounds").is_transition());
    }
}
