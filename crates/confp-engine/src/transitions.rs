//! Transition enumerator

use confp_capability::catalog::CONFIGURATOR;
use confp_capability::{enumerate, Configurator};
use confp_types::CapabilityValue;

/// Deferred read of one fork-activation threshold
pub type TransitionFn<'a> = Box<dyn Fn() -> Option<u64> + 'a>;

/// Every fork-activation threshold `obj` can read, in lexical name order
///
/// Returns parallel sequences of callables and names. Each callable reads
/// the object when invoked, not when enumerated.
pub fn transitions<'a, C>(obj: &'a C) -> (Vec<TransitionFn<'a>>, Vec<&'static str>)
where
    C: Configurator + ?Sized,
{
    let names = transition_names(obj);
    let fns = names
        .iter()
        .map(|&name| -> TransitionFn<'a> { Box::new(move || read_threshold(obj, name)) })
        .collect();
    (fns, names)
}

/// Names of every declared threshold `obj` can read, lexical order
pub fn transition_names<C>(obj: &C) -> Vec<&'static str>
where
    C: Configurator + ?Sized,
{
    enumerate(&CONFIGURATOR, obj)
        .into_iter()
        .filter(|descriptor| descriptor.is_transition())
        .map(|descriptor| descriptor.name)
        .collect()
}

/// Snapshot of every threshold as `(name, value)` pairs, lexical order
pub fn transition_values<C>(obj: &C) -> Vec<(&'static str, Option<u64>)>
where
    C: Configurator + ?Sized,
{
    transition_names(obj)
        .into_iter()
        .map(|name| (name, read_threshold(obj, name)))
        .collect()
}

fn read_threshold<C>(obj: &C, name: &str) -> Option<u64>
where
    C: Configurator + ?Sized,
{
    match obj.read(name) {
        CapabilityValue::Uint64(n) => Some(n),
        _ => None,
    }
}
