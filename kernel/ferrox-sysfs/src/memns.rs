//! In-memory namespace for embedders and tests.
//!
//! Real deployments hand [`AttrGroup`](crate::AttrGroup) a namespace backed
//! by the host filesystem layer. [`MemNamespace`] provides the same contract
//! over a locked directory table, plus resolution helpers that route
//! straight into the dispatcher -- enough to browse and poke registered
//! objects without any filesystem underneath.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::RwLock;

use crate::attr::EntryMode;
use crate::error::SysfsError;
use crate::ns::Namespace;
use crate::object::AttrObject;

/// Directory table: group name -> object name -> dispatch surface.
type Table = BTreeMap<String, BTreeMap<String, Arc<dyn AttrObject>>>;

/// A [`Namespace`] kept entirely in memory.
///
/// Reads vastly outnumber membership changes, so the table sits behind an
/// [`RwLock`]; resolution clones the object's [`Arc`] out and dispatches
/// with no lock held, so a slow handler never blocks registration.
#[derive(Default)]
pub struct MemNamespace {
    table: RwLock<Table>,
}

impl MemNamespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(BTreeMap::new()),
        }
    }

    /// Resolves an object and reads one of its attributes.
    ///
    /// # Errors
    ///
    /// [`SysfsError::UnknownAttribute`] if the group, object, or attribute
    /// does not resolve ("no such entry"); policy failures pass through from
    /// the dispatcher.
    pub fn read(&self, group: &str, object: &str, attr: &str) -> Result<String, SysfsError> {
        self.resolve(group, object)?.show(attr)
    }

    /// Resolves an object and writes raw data to one of its attributes.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Errors
    ///
    /// [`SysfsError::UnknownAttribute`] if the group, object, or attribute
    /// does not resolve; policy failures pass through from the dispatcher.
    pub fn write(
        &self,
        group: &str,
        object: &str,
        attr: &str,
        data: &[u8],
    ) -> Result<usize, SysfsError> {
        self.resolve(group, object)?.store(attr, data)
    }

    /// Lists an object's `(attribute, mode)` entries in publication order.
    ///
    /// # Errors
    ///
    /// [`SysfsError::UnknownAttribute`] if the group or object does not
    /// resolve.
    pub fn list(
        &self,
        group: &str,
        object: &str,
    ) -> Result<Vec<(&'static str, EntryMode)>, SysfsError> {
        Ok(self.resolve(group, object)?.entries())
    }

    /// Lists the object names registered under `group`, in name order.
    #[must_use]
    pub fn objects(&self, group: &str) -> Vec<String> {
        self.table
            .read()
            .get(group)
            .map(|g| g.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn resolve(&self, group: &str, object: &str) -> Result<Arc<dyn AttrObject>, SysfsError> {
        // Clone the Arc out so dispatch never runs under the table lock.
        self.table
            .read()
            .get(group)
            .and_then(|g| g.get(object))
            .cloned()
            .ok_or(SysfsError::UnknownAttribute)
    }
}

impl Namespace for MemNamespace {
    fn add_group(&self, group: &str) -> Result<(), SysfsError> {
        let mut table = self.table.write();
        if table.contains_key(group) {
            return Err(SysfsError::AlreadyExists);
        }
        table.insert(group.to_string(), BTreeMap::new());
        Ok(())
    }

    fn remove_group(&self, group: &str) {
        self.table.write().remove(group);
    }

    fn add_object(&self, group: &str, object: Arc<dyn AttrObject>) -> Result<(), SysfsError> {
        let mut table = self.table.write();
        let members = table.get_mut(group).ok_or(SysfsError::NoMemory)?;
        let name = object.name().to_string();
        if members.contains_key(&name) {
            return Err(SysfsError::AlreadyExists);
        }
        members.insert(name, object);
        Ok(())
    }

    fn remove_object(&self, group: &str, object: &str) {
        if let Some(members) = self.table.write().get_mut(group) {
            members.remove(object);
        }
    }
}
