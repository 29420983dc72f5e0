//! Attribute descriptors and per-type attribute sets.
//!
//! An [`Attribute`] is pure data: a name bound to read/write handlers under
//! a fixed access policy. An [`AttributeSet`] is the ordered collection of
//! attributes shared by every object of one device type. Both are built in
//! `const` context and never mutated afterwards, so any number of concurrent
//! dispatch calls may read them without synchronization.

use alloc::string::String;

use bitflags::bitflags;

use crate::error::SysfsError;

bitflags! {
    /// Access bits a namespace entry is published with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EntryMode: u8 {
        /// The entry services reads.
        const READ = 0b01;
        /// The entry services writes.
        const WRITE = 0b10;
    }
}

/// Renders an attribute's current value as text, trailing newline included.
pub type ShowFn<D> = fn(&D) -> String;

/// Applies raw caller input to the device, returning bytes consumed.
pub type StoreFn<D> = fn(&D, &[u8]) -> Result<usize, SysfsError>;

/// Handler binding for one attribute.
///
/// The variant *is* the access policy: a write-only attribute has no read
/// handler that dispatch could reach by mistake, so "handler missing for a
/// permitted operation" is unrepresentable.
pub enum AttrHandler<D: ?Sized + 'static> {
    /// Read-only attribute.
    Read(ShowFn<D>),
    /// Write-only attribute.
    Write(StoreFn<D>),
    /// Attribute servicing both directions.
    ReadWrite {
        /// Read-side handler.
        show: ShowFn<D>,
        /// Write-side handler.
        store: StoreFn<D>,
    },
}

/// An immutable, named capability exposing one readable and/or writable
/// entry on a device object.
pub struct Attribute<D: ?Sized + 'static> {
    name: &'static str,
    handler: AttrHandler<D>,
}

impl<D: ?Sized> Attribute<D> {
    /// Creates a read-only attribute.
    #[must_use]
    pub const fn read_only(name: &'static str, show: ShowFn<D>) -> Self {
        Self {
            name,
            handler: AttrHandler::Read(show),
        }
    }

    /// Creates a write-only attribute.
    #[must_use]
    pub const fn write_only(name: &'static str, store: StoreFn<D>) -> Self {
        Self {
            name,
            handler: AttrHandler::Write(store),
        }
    }

    /// Creates an attribute servicing both reads and writes.
    #[must_use]
    pub const fn read_write(name: &'static str, show: ShowFn<D>, store: StoreFn<D>) -> Self {
        Self {
            name,
            handler: AttrHandler::ReadWrite { show, store },
        }
    }

    /// Returns the attribute's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the access bits this entry is published with.
    #[must_use]
    pub fn mode(&self) -> EntryMode {
        match self.handler {
            AttrHandler::Read(_) => EntryMode::READ,
            AttrHandler::Write(_) => EntryMode::WRITE,
            AttrHandler::ReadWrite { .. } => EntryMode::READ.union(EntryMode::WRITE),
        }
    }

    /// Invokes the read handler against `device`.
    ///
    /// # Errors
    ///
    /// Returns [`SysfsError::NotReadable`] for write-only attributes.
    pub fn show(&self, device: &D) -> Result<String, SysfsError> {
        match &self.handler {
            AttrHandler::Read(show) | AttrHandler::ReadWrite { show, .. } => Ok(show(device)),
            AttrHandler::Write(_) => Err(SysfsError::NotReadable),
        }
    }

    /// Invokes the write handler against `device` with the caller's raw input.
    ///
    /// # Errors
    ///
    /// Returns [`SysfsError::NotWritable`] for read-only attributes; handler
    /// errors pass through.
    pub fn store(&self, device: &D, data: &[u8]) -> Result<usize, SysfsError> {
        match &self.handler {
            AttrHandler::Write(store) | AttrHandler::ReadWrite { store, .. } => {
                store(device, data)
            }
            AttrHandler::Read(_) => Err(SysfsError::NotWritable),
        }
    }
}

/// The fixed, ordered attribute collection for one device type.
///
/// A set borrows a `'static` slice, typically a `static` catalog next to the
/// device type. Names must be unique within the slice; uniqueness is
/// debug-asserted when the set is first bound to an object.
pub struct AttributeSet<D: ?Sized + 'static> {
    attrs: &'static [Attribute<D>],
}

impl<D: ?Sized> AttributeSet<D> {
    /// Wraps a static attribute slice.
    #[must_use]
    pub const fn new(attrs: &'static [Attribute<D>]) -> Self {
        Self { attrs }
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Attribute<D>> {
        self.attrs.iter().find(|a| a.name() == name)
    }

    /// Iterates the attributes in publication order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Attribute<D>> {
        self.attrs.iter()
    }

    /// Returns the number of attributes in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if the set has no attributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Debug-checks the name-uniqueness invariant.
    pub(crate) fn debug_check_unique(&self) {
        if cfg!(debug_assertions) {
            for (i, a) in self.attrs.iter().enumerate() {
                for b in &self.attrs[i + 1..] {
                    assert_ne!(
                        a.name(),
                        b.name(),
                        "duplicate attribute name in set: {}",
                        a.name()
                    );
                }
            }
        }
    }
}

// A set is just a borrow of static data; copying it copies the reference.
impl<D: ?Sized> Clone for AttributeSet<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for AttributeSet<D> {}
