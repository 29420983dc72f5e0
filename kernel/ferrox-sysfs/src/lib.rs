//! Named-attribute exposure for Ferrox device objects.
//!
//! Drivers publish per-device counters and control knobs as named,
//! individually typed entries that an external namespace service renders as
//! browsable files. This crate owns the generic machinery in between:
//!
//! - [`Attribute`] / [`AttributeSet`] -- immutable descriptors binding a
//!   name and access policy to read/write handlers.
//! - [`AttrObject`] / [`AttrNode`] -- the reference-counted object whose
//!   single show/store pair serves every attribute of every object of a type.
//! - [`AttrGroup`] / [`Registration`] -- the process-wide anchor objects
//!   register under, with teardown-ordering enforcement.
//! - [`Namespace`] / [`EventSink`] -- the contracts the host namespace
//!   service and availability observers implement.
//! - [`uart`] -- the fixed attribute catalog for UART devices.
//! - [`MemNamespace`] -- an in-memory namespace for embedders and tests.
//!
//! Attribute sets are built once and never mutated, so dispatch takes no
//! locks; object lifetime rides on atomic reference counts so teardown can
//! race dispatch from any context without use-after-free.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod attr;
pub mod group;
pub mod memns;
pub mod ns;
pub mod object;
pub mod uart;

mod error;

#[cfg(test)]
pub(crate) mod test_util;

pub use attr::{AttrHandler, Attribute, AttributeSet, EntryMode};
pub use error::SysfsError;
pub use group::{AttrGroup, Registration};
pub use memns::MemNamespace;
pub use ns::{EventSink, Namespace};
pub use object::{AttrNode, AttrObject};
