//! Reference-counted attribute objects and the generic dispatcher.
//!
//! One pair of entry points serves every attribute of every object of a
//! device type: the namespace resolves `(object, attribute, operation)` to a
//! [`AttrObject`] call, the node resolves the descriptor in its type's
//! [`AttributeSet`], the descriptor enforces the access policy, and the
//! bound handler touches the device.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::attr::{AttributeSet, EntryMode};
use crate::error::SysfsError;

/// Object-safe dispatch surface for one registered object.
///
/// Implementations must be cheap and non-blocking: the namespace may invoke
/// them from many caller contexts concurrently, against the same object and
/// even the same attribute. Individual calls are atomic with respect to
/// their own result; no cross-call ordering is promised.
pub trait AttrObject: Send + Sync {
    /// Returns the object's namespace-visible name.
    fn name(&self) -> &str;

    /// Returns each attribute entry's `(name, mode)`, in publication order.
    fn entries(&self) -> Vec<(&'static str, EntryMode)>;

    /// Reads the named attribute, returning its formatted text value.
    ///
    /// # Errors
    ///
    /// [`SysfsError::UnknownAttribute`] if the name is not in the object's
    /// set, [`SysfsError::NotReadable`] if its policy forbids reads.
    fn show(&self, attr: &str) -> Result<String, SysfsError>;

    /// Writes raw caller input to the named attribute.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Errors
    ///
    /// [`SysfsError::UnknownAttribute`] if the name is not in the object's
    /// set, [`SysfsError::NotWritable`] if its policy forbids writes.
    fn store(&self, attr: &str, data: &[u8]) -> Result<usize, SysfsError>;
}

/// A device instance bound to its type's attribute set.
///
/// Nodes are shared via [`Arc`]: the namespace holds one clone while the
/// object is registered and every in-flight dispatch call holds another, so
/// a node can outlive its unregistration by the length of a call. Dropping
/// the last clone reclaims only this record -- the device itself belongs to
/// the driver that created it.
pub struct AttrNode<D: ?Sized + 'static> {
    name: String,
    device: Arc<D>,
    attrs: AttributeSet<D>,
}

impl<D: ?Sized + Send + Sync> AttrNode<D> {
    /// Creates a node exposing `device` through `attrs`.
    pub fn new(name: String, device: Arc<D>, attrs: AttributeSet<D>) -> Arc<Self> {
        attrs.debug_check_unique();
        Arc::new(Self {
            name,
            device,
            attrs,
        })
    }

    /// Returns the device this node dispatches into.
    #[must_use]
    pub fn device(&self) -> &Arc<D> {
        &self.device
    }
}

impl<D: ?Sized + Send + Sync> AttrObject for AttrNode<D> {
    fn name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> Vec<(&'static str, EntryMode)> {
        self.attrs.iter().map(|a| (a.name(), a.mode())).collect()
    }

    fn show(&self, attr: &str) -> Result<String, SysfsError> {
        log::trace!("show {}/{attr}", self.name);
        let descriptor = self.attrs.get(attr).ok_or(SysfsError::UnknownAttribute)?;
        descriptor.show(&self.device)
    }

    fn store(&self, attr: &str, data: &[u8]) -> Result<usize, SysfsError> {
        log::trace!("store {}/{attr} ({} bytes)", self.name, data.len());
        let descriptor = self.attrs.get(attr).ok_or(SysfsError::UnknownAttribute)?;
        descriptor.store(&self.device, data)
    }
}
