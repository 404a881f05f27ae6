//! Equivalence and identity checks

use std::fmt::{self, Display, Formatter};

use confp_capability::{Configurator, Interface};
use confp_types::CapabilityValue;
use tracing::trace;

/// One capability on which two objects disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Capability name
    pub field: &'static str,
    /// Value on the first object
    pub a: CapabilityValue,
    /// Value on the second object
    pub b: CapabilityValue,
}

impl Display for Difference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} != {}", self.field, self.a, self.b)
    }
}

/// Compare `a` and `b` over every capability of `interface`
///
/// Unreadable capabilities count as absent. The result is empty exactly when
/// the objects agree everywhere, and is ordered by capability name.
pub fn equal<A, B>(interface: &Interface, a: &A, b: &B) -> Vec<Difference>
where
    A: Configurator + ?Sized,
    B: Configurator + ?Sized,
{
    interface
        .names()
        .into_iter()
        .filter_map(|field| {
            let left = a.read(field);
            let right = b.read(field);
            trace!(capability = field, a = %left, b = %right, "comparing");
            if left.agrees_with(&right) {
                None
            } else {
                Some(Difference {
                    field,
                    a: left,
                    b: right,
                })
            }
        })
        .collect()
}

/// Whether `a` and `b` agree on every capability in `names`
///
/// Visits `names` in the given order and stops at the first mismatch.
pub fn identical<A, B>(a: &A, b: &B, names: &[&str]) -> bool
where
    A: Configurator + ?Sized,
    B: Configurator + ?Sized,
{
    names.iter().all(|name| {
        let same = a.read(name).agrees_with(&b.read(name));
        trace!(capability = *name, same, "identity check");
        same
    })
}
