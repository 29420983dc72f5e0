//! Contracts between the attribute layer and its host namespace service.
//!
//! The concrete namespace -- a virtual filesystem, a debug monitor, an RPC
//! surface -- is an external collaborator. It renders registered objects as
//! browsable entries and routes every read and write back through
//! [`AttrObject`]. This module pins down the registration surface it must
//! implement, plus the hook availability observers attach to.

use alloc::sync::Arc;

use crate::error::SysfsError;
use crate::object::AttrObject;

/// Registration surface implemented by the host namespace service.
///
/// Implementations own actual membership: the attribute layer never keeps a
/// duplicate list of registered objects, it only adds and removes entries
/// here. All methods are called from module-lifecycle or device-attach
/// contexts and must not block for long.
pub trait Namespace: Send + Sync {
    /// Creates the container a group anchors its objects under.
    ///
    /// # Errors
    ///
    /// [`SysfsError::NoMemory`] if the container cannot be allocated,
    /// [`SysfsError::AlreadyExists`] if the name is taken.
    fn add_group(&self, group: &str) -> Result<(), SysfsError>;

    /// Removes a group container.
    ///
    /// The caller guarantees the group is empty; see
    /// [`AttrGroup::destroy`](crate::AttrGroup::destroy).
    fn remove_group(&self, group: &str);

    /// Publishes an object and its attribute entries under `group`.
    ///
    /// The namespace keeps the [`Arc`] for as long as the entry is visible;
    /// dispatch calls it services hold further clones for their duration, so
    /// the object may briefly outlive its removal.
    ///
    /// # Errors
    ///
    /// [`SysfsError::NoMemory`] if the entry cannot be allocated (including
    /// a missing group container), [`SysfsError::AlreadyExists`] if an entry
    /// with the object's name already exists in the group.
    fn add_object(&self, group: &str, object: Arc<dyn AttrObject>) -> Result<(), SysfsError>;

    /// Withdraws an object's entry, making further resolution fail.
    ///
    /// In-flight dispatch calls against the object run to completion.
    fn remove_object(&self, group: &str, object: &str);
}

/// Observer notified when an object becomes available in a group.
///
/// The notification fires synchronously on the registering context, after
/// the entry is externally resolvable and before registration returns.
pub trait EventSink: Send + Sync {
    /// Called once per successful registration of `object` under `group`.
    fn object_added(&self, group: &str, object: &str);
}
