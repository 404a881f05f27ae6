//! Schema-side traits
//!
//! A schema type implements [`Configurable`] by pointing at its static
//! accessor table. The engine never sees the table directly; it works
//! through the object-safe [`Configurator`] view, which every
//! `Configurable` type gets for free.

use confp_types::{CapabilityValue, ValueKind};

use crate::accessor::AccessorTable;
use crate::error::WriteError;

/// A schema type with a registered accessor table
pub trait Configurable: Sized + 'static {
    /// The static accessor table for this type
    fn accessors() -> &'static AccessorTable<Self>;
}

/// Object-safe capability view of a configuration object
pub trait Configurator {
    /// Name of the concrete schema
    fn schema(&self) -> &'static str;

    /// Kind produced by the reader for `name`, if one is registered
    fn reader_kind(&self, name: &str) -> Option<ValueKind>;

    /// Kind accepted by the writer for `name`, if one is registered
    fn writer_kind(&self, name: &str) -> Option<ValueKind>;

    /// Current value of `name`; absent when unreadable
    fn read(&self, name: &str) -> CapabilityValue;

    /// Store `value` under `name`
    ///
    /// # Errors
    /// [`WriteError::Unsupported`] when no writer is registered; otherwise
    /// whatever the writer reports.
    fn write(&mut self, name: &str, value: CapabilityValue) -> Result<(), WriteError>;

    /// Names this object can read, lexical order
    fn readable(&self) -> Vec<&'static str>;

    /// Names this object can write, lexical order
    fn writable(&self) -> Vec<&'static str>;
}

impl<T: Configurable> Configurator for T {
    fn schema(&self) -> &'static str {
        T::accessors().schema()
    }

    fn reader_kind(&self, name: &str) -> Option<ValueKind> {
        T::accessors().reader(name).map(|r| r.kind())
    }

    fn writer_kind(&self, name: &str) -> Option<ValueKind> {
        T::accessors().writer(name).map(|w| w.kind())
    }

    fn read(&self, name: &str) -> CapabilityValue {
        T::accessors().read(self, name)
    }

    fn write(&mut self, name: &str, value: CapabilityValue) -> Result<(), WriteError> {
        T::accessors().write(self, name, value)
    }

    fn readable(&self) -> Vec<&'static str> {
        T::accessors().reader_names()
    }

    fn writable(&self) -> Vec<&'static str> {
        T::accessors().writer_names()
    }
}
