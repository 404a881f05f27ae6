//! Fork-schedule utilities built on the transition enumerator

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use confp_capability::Configurator;

use crate::error::{CompatError, ForkOrderError};
use crate::transitions::{transition_names, transition_values};

/// Sorted, de-duplicated, non-zero activation heights of `obj`
pub fn fork_blocks<C>(obj: &C) -> Vec<u64>
where
    C: Configurator + ?Sized,
{
    let mut blocks: Vec<u64> = transition_values(obj)
        .into_iter()
        .filter_map(|(_, v)| v)
        .filter(|&b| b != 0)
        .collect();
    blocks.sort_unstable();
    blocks.dedup();
    blocks
}

/// Activation heights with the capabilities that activate at each
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForkSchedule {
    by_height: BTreeMap<u64, Vec<&'static str>>,
}

impl ForkSchedule {
    /// Build the schedule of `obj`; unset thresholds are left out
    pub fn of<C>(obj: &C) -> Self
    where
        C: Configurator + ?Sized,
    {
        let mut by_height: BTreeMap<u64, Vec<&'static str>> = BTreeMap::new();
        for (name, value) in transition_values(obj) {
            if let Some(height) = value {
                by_height.entry(height).or_default().push(name);
            }
        }
        Self { by_height }
    }

    /// Capabilities activating exactly at `height`
    #[must_use]
    pub fn at(&self, height: u64) -> &[&'static str] {
        self.by_height.get(&height).map(Vec::as_slice).unwrap_or_default()
    }

    /// Capabilities active at `head` (activation at or before it)
    #[must_use]
    pub fn active_at(&self, head: u64) -> Vec<&'static str> {
        let mut active: Vec<_> = self
            .by_height
            .range(..=head)
            .flat_map(|(_, names)| names.iter().copied())
            .collect();
        active.sort_unstable();
        active
    }

    /// Activation heights in ascending order
    pub fn heights(&self) -> impl Iterator<Item = u64> + '_ {
        self.by_height.keys().copied()
    }

    /// Iterate `(height, names)` in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[&'static str])> + '_ {
        self.by_height.iter().map(|(h, n)| (*h, n.as_slice()))
    }

    /// Number of distinct heights
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_height.len()
    }

    /// No threshold is set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_height.is_empty()
    }
}

impl Display for ForkSchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no forks scheduled\n");
        }
        let width = self
            .heights()
            .map(|h| h.to_string().len())
            .max()
            .unwrap_or(1);
        for (height, names) in self.iter() {
            writeln!(f, "{height:>width$}  {}", names.join(", "))?;
        }
        Ok(())
    }
}

/// Check that `new` can replace `stored` for a chain whose head is `head`
///
/// A threshold is incompatible when the two sides differ and either side
/// has already activated at `head`. When several are incompatible the one
/// requiring the deepest rewind is reported.
///
/// # Errors
/// Returns the [`CompatError`] with the lowest rewind point.
pub fn compatible<A, B>(head: u64, stored: &A, new: &B) -> Result<(), CompatError>
where
    A: Configurator + ?Sized,
    B: Configurator + ?Sized,
{
    let mut names = transition_names(stored);
    names.extend(transition_names(new));
    names.sort_unstable();
    names.dedup();

    let worst = names
        .into_iter()
        .filter_map(|name| {
            let s = stored.read(name).as_u64();
            let n = new.read(name).as_u64();
            let active = |v: Option<u64>| v.is_some_and(|b| b <= head);
            (s != n && (active(s) || active(n))).then(|| CompatError::new(name, s, n))
        })
        .min_by_key(|e| e.rewind_to);

    match worst {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Check that thresholds along `order` never decrease
///
/// An unset fork may only be followed by unset forks.
///
/// # Errors
/// Returns [`ForkOrderError`] naming the first offending pair.
pub fn check_fork_order<C>(obj: &C, order: &[&str]) -> Result<(), ForkOrderError>
where
    C: Configurator + ?Sized,
{
    let mut last: Option<(&str, Option<u64>)> = None;
    for &name in order {
        let current = obj.read(name).as_u64();
        if let Some((prev_name, prev)) = last {
            match (prev, current) {
                (None, Some(block)) => {
                    return Err(ForkOrderError::Gap {
                        unset: prev_name.to_string(),
                        set: name.to_string(),
                        block,
                    });
                }
                (Some(earlier_block), Some(later_block)) if later_block < earlier_block => {
                    return Err(ForkOrderError::OutOfOrder {
                        earlier: prev_name.to_string(),
                        earlier_block,
                        later: name.to_string(),
                        later_block,
                    });
                }
                _ => {}
            }
        }
        last = Some((name, current));
    }
    Ok(())
}
