//! Capability enumeration and pairing
//!
//! Built afresh on every call from the interface declaration and the
//! objects' accessor tables; nothing is cached between calls.

use confp_types::ValueKind;

use crate::configurable::Configurator;
use crate::interface::{is_transition, Interface};

/// One declared capability as seen on a concrete object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    /// Capability name
    pub name: &'static str,

    /// Kind declared by the interface
    pub declared: ValueKind,

    /// Kind of the registered reader
    pub reader: Option<ValueKind>,

    /// Kind of the registered writer
    pub writer: Option<ValueKind>,
}

impl CapabilityDescriptor {
    /// Object has a reader
    #[inline]
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.reader.is_some()
    }

    /// Object has a writer
    #[inline]
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.writer.is_some()
    }

    /// Reader and writer both exist and the reader's output fits the writer
    #[must_use]
    pub fn is_convertible(&self) -> bool {
        matches!((self.reader, self.writer), (Some(r), Some(w)) if r.widens_to(w))
    }

    /// Fork-activation threshold, judged on the reader's kind
    #[must_use]
    pub fn is_transition(&self) -> bool {
        self.reader.is_some_and(|kind| is_transition(self.name, kind))
    }
}

/// Every capability of `interface` annotated for `obj`, lexical order
pub fn enumerate<C>(interface: &Interface, obj: &C) -> Vec<CapabilityDescriptor>
where
    C: Configurator + ?Sized,
{
    interface
        .capabilities()
        .into_iter()
        .map(|spec| CapabilityDescriptor {
            name: spec.name,
            declared: spec.kind,
            reader: obj.reader_kind(spec.name),
            writer: obj.writer_kind(spec.name),
        })
        .collect()
}

/// How a source reader lines up with a destination writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStatus {
    /// Both present, kinds compatible; values are widened to `destination`
    Convertible {
        /// Writer kind
        destination: ValueKind,
    },

    /// Destination cannot store the capability
    MissingWriter,

    /// Source cannot produce the capability
    MissingReader,

    /// Both present, source kind does not fit the destination
    Incompatible {
        /// Reader kind
        source: ValueKind,
        /// Writer kind
        destination: ValueKind,
    },
}

/// Source reader paired with destination writer for one capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    /// Capability name
    pub name: &'static str,

    /// Source reader kind
    pub source: Option<ValueKind>,

    /// Destination writer kind
    pub destination: Option<ValueKind>,
}

impl Pairing {
    /// Classify the pairing
    ///
    /// A missing writer is reported before a missing reader, matching the
    /// order in which the converter skips.
    #[must_use]
    pub fn status(&self) -> PairingStatus {
        match (self.source, self.destination) {
            (_, None) => PairingStatus::MissingWriter,
            (None, Some(_)) => PairingStatus::MissingReader,
            (Some(source), Some(destination)) if source.widens_to(destination) => {
                PairingStatus::Convertible { destination }
            }
            (Some(source), Some(destination)) => PairingStatus::Incompatible {
                source,
                destination,
            },
        }
    }
}

/// Pair `src` readers with `dst` writers over `interface`, lexical order
pub fn pair<S, D>(interface: &Interface, src: &S, dst: &D) -> Vec<Pairing>
where
    S: Configurator + ?Sized,
    D: Configurator + ?Sized,
{
    interface
        .capabilities()
        .into_iter()
        .map(|spec| Pairing {
            name: spec.name,
            source: src.reader_kind(spec.name),
            destination: dst.writer_kind(spec.name),
        })
        .collect()
}

/// Declared capabilities `obj` has no reader for, lexical order
pub fn unsatisfied<C>(interface: &Interface, obj: &C) -> Vec<&'static str>
where
    C: Configurator + ?Sized,
{
    interface
        .capabilities()
        .into_iter()
        .filter(|spec| obj.reader_kind(spec.name).is_none())
        .map(|spec| spec.name)
        .collect()
}

/// Whether `obj` reads every capability `interface` declares
pub fn satisfies<C>(interface: &Interface, obj: &C) -> bool
where
    C: Configurator + ?Sized,
{
    interface
        .capabilities()
        .iter()
        .all(|spec| obj.reader_kind(spec.name).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::AccessorTable;
    use crate::catalog::{names, CHAIN_IDENTITY, NETWORK_IDENTITY};
    use crate::configurable::Configurable;
    use confp_types::UBig;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Narrow {
        chain_id: Option<u64>,
        network_id: Option<u64>,
    }

    static NARROW: Lazy<AccessorTable<Narrow>> = Lazy::new(|| {
        AccessorTable::new("Narrow")
            .uint64(
                names::CHAIN_ID,
                |c: &Narrow| c.chain_id,
                |c: &mut Narrow, v| c.chain_id = v,
            )
            .read_u64(names::NETWORK_ID, |c: &Narrow| c.network_id)
    });

    impl Configurable for Narrow {
        fn accessors() -> &'static AccessorTable<Self> {
            &NARROW
        }
    }

    #[derive(Debug, Default)]
    struct Wide {
        chain_id: Option<UBig>,
    }

    static WIDE: Lazy<AccessorTable<Wide>> = Lazy::new(|| {
        AccessorTable::new("Wide").bigint(
            names::CHAIN_ID,
            |c: &Wide| c.chain_id.clone(),
            |c: &mut Wide, v| c.chain_id = v,
        )
    });

    impl Configurable for Wide {
        fn accessors() -> &'static AccessorTable<Self> {
            &WIDE
        }
    }

    #[test]
    fn enumerate_marks_read_only() {
        let described = enumerate(&CHAIN_IDENTITY, &Narrow::default());
        assert_eq!(described.len(), 2);
        assert_eq!(described[0].name, names::CHAIN_ID);
        assert!(described[0].is_convertible());
        assert_eq!(described[1].name, names::NETWORK_ID);
        assert!(described[1].is_readable());
        assert!(!described[1].is_writable());
    }

    #[test]
    fn pairing_statuses() {
        let narrow = Narrow::default();
        let wide = Wide::default();

        let widening = pair(&CHAIN_IDENTITY, &narrow, &wide);
        assert_eq!(
            widening[0].status(),
            PairingStatus::Convertible {
                destination: ValueKind::BigInt
            }
        );
        assert_eq!(widening[1].status(), PairingStatus::MissingWriter);

        let narrowing = pair(&CHAIN_IDENTITY, &wide, &narrow);
        assert_eq!(
            narrowing[0].status(),
            PairingStatus::Incompatible {
                source: ValueKind::BigInt,
                destination: ValueKind::Uint64,
            }
        );
        assert_eq!(narrowing[1].status(), PairingStatus::MissingWriter);
    }

    #[test]
    fn missing_reader_status() {
        let p = Pairing {
            name: names::NETWORK_ID,
            source: None,
            destination: Some(ValueKind::Uint64),
        };
        assert_eq!(p.status(), PairingStatus::MissingReader);
    }

    #[test]
    fn satisfaction() {
        assert!(satisfies(&NETWORK_IDENTITY, &Narrow::default()));
        assert!(!satisfies(&CHAIN_IDENTITY, &Wide::default()));
        assert_eq!(unsatisfied(&CHAIN_IDENTITY, &Wide::default()), vec![names::NETWORK_ID]);
    }

    #[test]
    fn works_through_trait_objects() {
        let boxed: Box<dyn Configurator> = Box::new(Narrow {
            chain_id: Some(61),
            network_id: Some(1),
        });
        assert_eq!(boxed.schema(), "Narrow");
        assert_eq!(enumerate(&CHAIN_IDENTITY, boxed.as_ref()).len(), 2);
        assert_eq!(boxed.readable(), vec![names::CHAIN_ID, names::NETWORK_ID]);
        assert_eq!(boxed.writable(), vec![names::CHAIN_ID]);
    }
}
