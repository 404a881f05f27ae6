//! Per-schema accessor tables
//!
//! Every concrete schema type builds one [`AccessorTable`] at first use and
//! keeps it in a static. The table maps capability names to typed reader and
//! writer closures; it is the registration-time replacement for discovering
//! getter/setter pairs by reflection.

use std::collections::BTreeMap;
use std::fmt;

use confp_types::{CapabilityValue, ConsensusEngine, Hash32, UBig, ValueKind};

use crate::error::WriteError;

type ReadFn<T> = Box<dyn Fn(&T) -> CapabilityValue + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&mut T, CapabilityValue) -> Result<(), WriteError> + Send + Sync>;

/// Registered reader for one capability
pub struct Reader<T> {
    kind: ValueKind,
    read: ReadFn<T>,
}

impl<T> Reader<T> {
    /// Kind this reader produces
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Read the current value from `obj`
    #[inline]
    pub fn read(&self, obj: &T) -> CapabilityValue {
        (self.read)(obj)
    }
}

/// Registered writer for one capability
pub struct Writer<T> {
    kind: ValueKind,
    write: WriteFn<T>,
}

impl<T> Writer<T> {
    /// Kind this writer accepts
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Write `value` into `obj`
    ///
    /// # Errors
    /// Returns [`WriteError`] when the value has the wrong kind or the schema
    /// cannot represent it.
    #[inline]
    pub fn write(&self, obj: &mut T, value: CapabilityValue) -> Result<(), WriteError> {
        (self.write)(obj, value)
    }
}

/// Readers and writers of one schema type, keyed by capability name
///
/// Registering a name twice replaces the earlier accessor, which lets a
/// schema embed another table and then override individual entries.
pub struct AccessorTable<T> {
    schema: &'static str,
    readers: BTreeMap<&'static str, Reader<T>>,
    writers: BTreeMap<&'static str, Writer<T>>,
}

impl<T: 'static> AccessorTable<T> {
    /// Create an empty table for the named schema
    #[inline]
    #[must_use]
    pub fn new(schema: &'static str) -> Self {
        Self {
            schema,
            readers: BTreeMap::new(),
            writers: BTreeMap::new(),
        }
    }

    /// Schema name
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &'static str {
        self.schema
    }

    /// Register a u64 reader
    #[must_use]
    pub fn read_u64<F>(mut self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<u64> + Send + Sync + 'static,
    {
        self.readers.insert(
            name,
            Reader {
                kind: ValueKind::Uint64,
                read: Box::new(move |obj: &T| CapabilityValue::from(get(obj))),
            },
        );
        self
    }

    /// Register a big-integer reader
    #[must_use]
    pub fn read_big<F>(mut self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<UBig> + Send + Sync + 'static,
    {
        self.readers.insert(
            name,
            Reader {
                kind: ValueKind::BigInt,
                read: Box::new(move |obj: &T| CapabilityValue::from(get(obj))),
            },
        );
        self
    }

    /// Register a hash reader
    #[must_use]
    pub fn read_hash<F>(mut self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<Hash32> + Send + Sync + 'static,
    {
        self.readers.insert(
            name,
            Reader {
                kind: ValueKind::Hash,
                read: Box::new(move |obj: &T| CapabilityValue::from(get(obj))),
            },
        );
        self
    }

    /// Register a byte-string reader
    #[must_use]
    pub fn read_bytes<F>(mut self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        self.readers.insert(
            name,
            Reader {
                kind: ValueKind::Bytes,
                read: Box::new(move |obj: &T| CapabilityValue::from(get(obj))),
            },
        );
        self
    }

    /// Register an engine reader; `Unknown` reads as absent
    #[must_use]
    pub fn read_engine<F>(mut self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> ConsensusEngine + Send + Sync + 'static,
    {
        self.readers.insert(
            name,
            Reader {
                kind: ValueKind::Engine,
                read: Box::new(move |obj: &T| CapabilityValue::from(Some(get(obj)))),
            },
        );
        self
    }

    /// Register a block-indexed schedule reader
    #[must_use]
    pub fn read_schedule<F>(mut self, name: &'static str, get: F) -> Self
    where
        F: Fn(&T) -> Option<BTreeMap<u64, UBig>> + Send + Sync + 'static,
    {
        self.readers.insert(
            name,
            Reader {
                kind: ValueKind::Schedule,
                read: Box::new(move |obj: &T| CapabilityValue::from(get(obj))),
            },
        );
        self
    }

    /// Register a fallible u64 writer
    #[must_use]
    pub fn write_u64<F>(mut self, name: &'static str, set: F) -> Self
    where
        F: Fn(&mut T, Option<u64>) -> Result<(), WriteError> + Send + Sync + 'static,
    {
        self.writers.insert(
            name,
            Writer {
                kind: ValueKind::Uint64,
                write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                    set(obj, value.into_u64()?)
                }),
            },
        );
        self
    }

    /// Register a fallible big-integer writer
    ///
    /// Present u64 values are widened before reaching `set`.
    #[must_use]
    pub fn write_big<F>(mut self, name: &'static str, set: F) -> Self
    where
        F: Fn(&mut T, Option<UBig>) -> Result<(), WriteError> + Send + Sync + 'static,
    {
        self.writers.insert(
            name,
            Writer {
                kind: ValueKind::BigInt,
                write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                    set(obj, value.into_big()?)
                }),
            },
        );
        self
    }

    /// Register a fallible hash writer
    #[must_use]
    pub fn write_hash<F>(mut self, name: &'static str, set: F) -> Self
    where
        F: Fn(&mut T, Option<Hash32>) -> Result<(), WriteError> + Send + Sync + 'static,
    {
        self.writers.insert(
            name,
            Writer {
                kind: ValueKind::Hash,
                write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                    set(obj, value.into_hash()?)
                }),
            },
        );
        self
    }

    /// Register a fallible byte-string writer
    #[must_use]
    pub fn write_bytes<F>(mut self, name: &'static str, set: F) -> Self
    where
        F: Fn(&mut T, Option<Vec<u8>>) -> Result<(), WriteError> + Send + Sync + 'static,
    {
        self.writers.insert(
            name,
            Writer {
                kind: ValueKind::Bytes,
                write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                    set(obj, value.into_bytes()?)
                }),
            },
        );
        self
    }

    /// Register a fallible engine writer
    #[must_use]
    pub fn write_engine<F>(mut self, name: &'static str, set: F) -> Self
    where
        F: Fn(&mut T, Option<ConsensusEngine>) -> Result<(), WriteError> + Send + Sync + 'static,
    {
        self.writers.insert(
            name,
            Writer {
                kind: ValueKind::Engine,
                write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                    set(obj, value.into_engine()?)
                }),
            },
        );
        self
    }

    /// Register a fallible schedule writer
    #[must_use]
    pub fn write_schedule<F>(mut self, name: &'static str, set: F) -> Self
    where
        F: Fn(&mut T, Option<BTreeMap<u64, UBig>>) -> Result<(), WriteError>
            + Send
            + Sync
            + 'static,
    {
        self.writers.insert(
            name,
            Writer {
                kind: ValueKind::Schedule,
                write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                    set(obj, value.into_schedule()?)
                }),
            },
        );
        self
    }

    /// Register a u64 reader and an infallible writer under one name
    #[must_use]
    pub fn uint64<G, S>(self, name: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<u64> + Send + Sync + 'static,
        S: Fn(&mut T, Option<u64>) + Send + Sync + 'static,
    {
        self.read_u64(name, get).write_u64(name, move |obj, v| {
            set(obj, v);
            Ok(())
        })
    }

    /// Register a big-integer reader and an infallible writer under one name
    #[must_use]
    pub fn bigint<G, S>(self, name: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<UBig> + Send + Sync + 'static,
        S: Fn(&mut T, Option<UBig>) + Send + Sync + 'static,
    {
        self.read_big(name, get).write_big(name, move |obj, v| {
            set(obj, v);
            Ok(())
        })
    }

    /// Register a hash reader and an infallible writer under one name
    #[must_use]
    pub fn hash<G, S>(self, name: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<Hash32> + Send + Sync + 'static,
        S: Fn(&mut T, Option<Hash32>) + Send + Sync + 'static,
    {
        self.read_hash(name, get).write_hash(name, move |obj, v| {
            set(obj, v);
            Ok(())
        })
    }

    /// Register a byte-string reader and an infallible writer under one name
    #[must_use]
    pub fn bytes<G, S>(self, name: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<Vec<u8>> + Send + Sync + 'static,
        S: Fn(&mut T, Option<Vec<u8>>) + Send + Sync + 'static,
    {
        self.read_bytes(name, get).write_bytes(name, move |obj, v| {
            set(obj, v);
            Ok(())
        })
    }

    /// Re-expose every accessor of a nested schema through projections
    ///
    /// Used by documents that wrap another schema (a genesis file around its
    /// chain config). Entries registered afterwards override embedded ones.
    #[must_use]
    pub fn embed<U: 'static>(
        mut self,
        inner: &'static AccessorTable<U>,
        project: fn(&T) -> &U,
        project_mut: fn(&mut T) -> &mut U,
    ) -> Self {
        for (&name, reader) in &inner.readers {
            self.readers.insert(
                name,
                Reader {
                    kind: reader.kind,
                    read: Box::new(move |obj: &T| reader.read(project(obj))),
                },
            );
        }
        for (&name, writer) in &inner.writers {
            self.writers.insert(
                name,
                Writer {
                    kind: writer.kind,
                    write: Box::new(move |obj: &mut T, value: CapabilityValue| {
                        writer.write(project_mut(obj), value)
                    }),
                },
            );
        }
        self
    }

    /// Reader registered for `name`
    #[inline]
    #[must_use]
    pub fn reader(&self, name: &str) -> Option<&Reader<T>> {
        self.readers.get(name)
    }

    /// Writer registered for `name`
    #[inline]
    #[must_use]
    pub fn writer(&self, name: &str) -> Option<&Writer<T>> {
        self.writers.get(name)
    }

    /// Read `name` from `obj`; absent when no reader is registered
    #[must_use]
    pub fn read(&self, obj: &T, name: &str) -> CapabilityValue {
        self.reader(name)
            .map_or(CapabilityValue::Absent, |r| r.read(obj))
    }

    /// Write `value` under `name`
    ///
    /// # Errors
    /// Returns [`WriteError::Unsupported`] when no writer is registered, or
    /// whatever the writer reports.
    pub fn write(
        &self,
        obj: &mut T,
        name: &str,
        value: CapabilityValue,
    ) -> Result<(), WriteError> {
        match self.writer(name) {
            Some(w) => w.write(obj, value),
            None => Err(WriteError::Unsupported),
        }
    }

    /// Names with a registered reader, lexical order
    #[must_use]
    pub fn reader_names(&self) -> Vec<&'static str> {
        self.readers.keys().copied().collect()
    }

    /// Names with a registered writer, lexical order
    #[must_use]
    pub fn writer_names(&self) -> Vec<&'static str> {
        self.writers.keys().copied().collect()
    }
}

impl<T> fmt::Debug for AccessorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorTable")
            .field("schema", &self.schema)
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .field("writers", &self.writers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    #[derive(Debug, Default)]
    struct Inner {
        fork: Option<u64>,
    }

    #[derive(Debug, Default)]
    struct Outer {
        inner: Inner,
        id: Option<UBig>,
        locked: bool,
    }

    static INNER: Lazy<AccessorTable<Inner>> = Lazy::new(|| {
        AccessorTable::new("Inner").uint64(
            "ForkTransition",
            |c: &Inner| c.fork,
            |c: &mut Inner, v| c.fork = v,
        )
    });

    static OUTER: Lazy<AccessorTable<Outer>> = Lazy::new(|| {
        AccessorTable::new("Outer")
            .embed(&INNER, |o: &Outer| &o.inner, |o: &mut Outer| &mut o.inner)
            .read_big("ChainID", |o: &Outer| o.id.clone())
            .write_big("ChainID", |o: &mut Outer, v| {
                if o.locked && v.is_some() {
                    return Err(WriteError::rejected("locked"));
                }
                o.id = v;
                Ok(())
            })
    });

    #[test]
    fn embedded_accessors_project() {
        let mut outer = Outer::default();
        OUTER
            .write(&mut outer, "ForkTransition", CapabilityValue::Uint64(9))
            .unwrap();
        assert_eq!(outer.inner.fork, Some(9));
        assert_eq!(OUTER.read(&outer, "ForkTransition"), CapabilityValue::Uint64(9));
    }

    #[test]
    fn big_writer_widens_u64() {
        let mut outer = Outer::default();
        OUTER
            .write(&mut outer, "ChainID", CapabilityValue::Uint64(61))
            .unwrap();
        assert_eq!(outer.id, Some(UBig::from(61u64)));
    }

    #[test]
    fn u64_writer_refuses_big() {
        let mut outer = Outer::default();
        let err = OUTER
            .write(&mut outer, "ForkTransition", CapabilityValue::BigInt(UBig::from(1u64)))
            .unwrap_err();
        assert!(matches!(err, WriteError::Kind(_)));
        assert_eq!(outer.inner.fork, None);
    }

    #[test]
    fn missing_entries() {
        let mut outer = Outer::default();
        assert_eq!(OUTER.read(&outer, "Nope"), CapabilityValue::Absent);
        assert_eq!(
            OUTER.write(&mut outer, "Nope", CapabilityValue::Absent),
            Err(WriteError::Unsupported)
        );
    }

    #[test]
    fn rejection_surfaces() {
        let mut outer = Outer {
            locked: true,
            ..Outer::default()
        };
        let err = OUTER
            .write(&mut outer, "ChainID", CapabilityValue::Uint64(1))
            .unwrap_err();
        assert!(!err.is_skippable());
        // clearing is still allowed
        OUTER
            .write(&mut outer, "ChainID", CapabilityValue::Absent)
            .unwrap();
    }

    #[test]
    fn names_are_lexical() {
        assert_eq!(OUTER.reader_names(), vec!["ChainID", "ForkTransition"]);
        assert_eq!(OUTER.writer_names(), vec!["ChainID", "ForkTransition"]);
        assert_eq!(OUTER.reader("ChainID").unwrap().kind(), ValueKind::BigInt);
    }

    #[test]
    fn later_registration_replaces() {
        let table = AccessorTable::<Inner>::new("Twice")
            .read_u64("A", |_: &Inner| Some(1))
            .read_u64("A", |_: &Inner| Some(2));
        assert_eq!(table.read(&Inner::default(), "A"), CapabilityValue::Uint64(2));
    }

    #[test]
    fn engine_accessors_hide_unknown() {
        let table = AccessorTable::<Inner>::new("Engine")
            .read_engine("ConsensusEngineType", |c: &Inner| match c.fork {
                Some(_) => ConsensusEngine::Clique,
                None => ConsensusEngine::Unknown,
            })
            .write_engine("ConsensusEngineType", |c: &mut Inner, v| {
                c.fork = v.map(|_| 0);
                Ok(())
            });
        let mut inner = Inner::default();
        assert_eq!(table.read(&inner, "ConsensusEngineType"), CapabilityValue::Absent);
        table
            .write(
                &mut inner,
                "ConsensusEngineType",
                CapabilityValue::Engine(ConsensusEngine::Clique),
            )
            .unwrap();
        assert_eq!(
            table.read(&inner, "ConsensusEngineType"),
            CapabilityValue::Engine(ConsensusEngine::Clique)
        );
        let err = table
            .write(&mut inner, "ConsensusEngineType", CapabilityValue::Uint64(1))
            .unwrap_err();
        assert!(matches!(err, WriteError::Kind(_)));
    }
}
