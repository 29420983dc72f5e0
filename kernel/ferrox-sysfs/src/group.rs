//! Namespace groups and per-object registration lifecycle.
//!
//! An [`AttrGroup`] is the process-wide anchor device objects of one type
//! become visible under: created once at subsystem start, destroyed once at
//! exit, with every registration in between. The group never duplicates the
//! namespace's membership list; it carries only an atomic member count so a
//! teardown-ordering violation fails loudly instead of corrupting state.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::attr::AttributeSet;
use crate::error::SysfsError;
use crate::ns::{EventSink, Namespace};
use crate::object::{AttrNode, AttrObject};

/// Anchor that device objects of one type register under.
pub struct AttrGroup {
    name: String,
    ns: Arc<dyn Namespace>,
    sinks: Vec<Arc<dyn EventSink>>,
    members: AtomicUsize,
}

impl AttrGroup {
    /// Creates the group's container in the namespace.
    ///
    /// Call once at subsystem start, before any registration.
    ///
    /// # Errors
    ///
    /// Propagates the namespace's failure to allocate the container.
    pub fn create(name: &str, ns: Arc<dyn Namespace>) -> Result<Arc<Self>, SysfsError> {
        Self::with_event_sinks(name, ns, Vec::new())
    }

    /// Creates a group with availability observers attached.
    ///
    /// Sinks are fixed for the group's lifetime and notified synchronously
    /// on every successful registration.
    ///
    /// # Errors
    ///
    /// Propagates the namespace's failure to allocate the container.
    pub fn with_event_sinks(
        name: &str,
        ns: Arc<dyn Namespace>,
        sinks: Vec<Arc<dyn EventSink>>,
    ) -> Result<Arc<Self>, SysfsError> {
        ns.add_group(name)?;
        log::debug!("created attribute group '{name}'");
        Ok(Arc::new(Self {
            name: String::from(name),
            ns,
            sinks,
            members: AtomicUsize::new(0),
        }))
    }

    /// Returns the group's namespace-visible name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Publishes `device` under this group as `name`.
    ///
    /// On success the object is externally resolvable and every event sink
    /// has observed `object_added`; on failure nothing remains visible and
    /// no event fires.
    ///
    /// # Errors
    ///
    /// [`SysfsError::NoMemory`] or [`SysfsError::AlreadyExists`] from the
    /// namespace. Name collisions are a caller error; this layer does not
    /// uniqueness-check, namespaces that do surface the conflict.
    pub fn register<D>(
        self: &Arc<Self>,
        name: String,
        device: Arc<D>,
        attrs: AttributeSet<D>,
    ) -> Result<Registration, SysfsError>
    where
        D: ?Sized + Send + Sync + 'static,
    {
        let object: Arc<dyn AttrObject> = AttrNode::new(name, device, attrs);

        // Claim membership before the object becomes visible so a racing
        // destroy() cannot observe zero while the entry is being added.
        self.members.fetch_add(1, Ordering::AcqRel);
        if let Err(err) = self.ns.add_object(&self.name, Arc::clone(&object)) {
            self.members.fetch_sub(1, Ordering::AcqRel);
            log::debug!(
                "failed to register '{}' in group '{}': {err}",
                object.name(),
                self.name
            );
            return Err(err);
        }

        log::info!("registered '{}' in group '{}'", object.name(), self.name);
        for sink in &self.sinks {
            sink.object_added(&self.name, object.name());
        }

        Ok(Registration {
            group: Arc::clone(self),
            object,
        })
    }

    /// Tears the group's container down.
    ///
    /// Call once at subsystem exit, after every member is unregistered.
    ///
    /// # Panics
    ///
    /// Panics if any member is still registered. That ordering violation is
    /// a bug in the caller's shutdown sequencing, not a runtime condition.
    pub fn destroy(self: Arc<Self>) {
        let members = self.members.load(Ordering::Acquire);
        assert!(
            members == 0,
            "group '{}' destroyed with {members} member(s) registered",
            self.name
        );
        self.ns.remove_group(&self.name);
        log::debug!("destroyed attribute group '{}'", self.name);
    }
}

/// Owning guard for one registered object.
///
/// Dropping the guard (or calling [`unregister`](Self::unregister))
/// withdraws the entry from the namespace. The node's storage is reclaimed
/// once the last dispatch call against it completes and the namespace drops
/// its reference.
#[must_use = "dropping a Registration immediately unregisters the object"]
pub struct Registration {
    group: Arc<AttrGroup>,
    object: Arc<dyn AttrObject>,
}

impl Registration {
    /// Returns the registered object's namespace-visible name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// Returns the registered object's dispatch surface.
    #[must_use]
    pub fn object(&self) -> &Arc<dyn AttrObject> {
        &self.object
    }

    /// Withdraws the object from the namespace.
    ///
    /// Equivalent to dropping the guard; provided so teardown reads as an
    /// operation at call sites.
    pub fn unregister(self) {}
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.group
            .ns
            .remove_object(&self.group.name, self.object.name());
        self.group.members.fetch_sub(1, Ordering::AcqRel);
        log::info!(
            "unregistered '{}' from group '{}'",
            self.object.name(),
            self.group.name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memns::MemNamespace;
    use crate::test_util::{FailingNamespace, FakeUart, RecordingSink};
    use crate::uart::UART_ATTRS;
    use alloc::string::ToString;
    use ferrox_driver_api::UartDevice;

    fn uart() -> Arc<dyn UartDevice> {
        Arc::new(FakeUart::new(4, 64))
    }

    #[test]
    fn create_then_destroy_round_trips() {
        let ns = Arc::new(MemNamespace::new());
        let group = AttrGroup::create("uart_devs", ns.clone()).unwrap();
        assert_eq!(group.name(), "uart_devs");
        group.destroy();
        // The container is gone: re-creating succeeds.
        AttrGroup::create("uart_devs", ns).unwrap().destroy();
    }

    #[test]
    fn duplicate_group_is_rejected() {
        let ns = Arc::new(MemNamespace::new());
        let _group = AttrGroup::create("uart_devs", ns.clone()).unwrap();
        assert_eq!(
            AttrGroup::create("uart_devs", ns).err(),
            Some(SysfsError::AlreadyExists)
        );
    }

    #[test]
    fn registration_makes_object_resolvable() {
        let ns = Arc::new(MemNamespace::new());
        let group = AttrGroup::create("uart_devs", ns.clone()).unwrap();
        let reg = group
            .register("uart_device0".to_string(), uart(), UART_ATTRS)
            .unwrap();
        assert_eq!(reg.name(), "uart_device0");
        assert_eq!(ns.read("uart_devs", "uart_device0", "devid").unwrap(), "4,64\n");
        reg.unregister();
        group.destroy();
    }

    #[test]
    fn unregister_removes_visibility() {
        let ns = Arc::new(MemNamespace::new());
        let group = AttrGroup::create("uart_devs", ns.clone()).unwrap();
        let reg = group
            .register("uart_device0".to_string(), uart(), UART_ATTRS)
            .unwrap();
        reg.unregister();
        assert_eq!(
            ns.read("uart_devs", "uart_device0", "devid"),
            Err(SysfsError::UnknownAttribute)
        );
        group.destroy();
    }

    #[test]
    fn event_fires_after_entry_is_resolvable() {
        let ns = Arc::new(MemNamespace::new());
        let sink = Arc::new(RecordingSink::probing(ns.clone()));
        let group =
            AttrGroup::with_event_sinks("uart_devs", ns, vec![sink.clone()]).unwrap();
        let reg = group
            .register("uart_device0".to_string(), uart(), UART_ATTRS)
            .unwrap();
        assert_eq!(
            sink.events(),
            vec![("uart_devs".to_string(), "uart_device0".to_string())]
        );
        // The probing sink asserted resolvability at notification time.
        reg.unregister();
        group.destroy();
    }

    #[test]
    fn failed_registration_leaves_no_partial_state() {
        let ns = Arc::new(FailingNamespace::default());
        let sink = Arc::new(RecordingSink::new());
        let group =
            AttrGroup::with_event_sinks("uart_devs", ns, vec![sink.clone()]).unwrap();
        let err = group
            .register("uart_device0".to_string(), uart(), UART_ATTRS)
            .err();
        assert_eq!(err, Some(SysfsError::NoMemory));
        assert!(sink.events().is_empty());
        // Member count rolled back: destroy must not see a phantom member.
        group.destroy();
    }

    #[test]
    fn duplicate_object_name_is_a_conflict() {
        let ns = Arc::new(MemNamespace::new());
        let group = AttrGroup::create("uart_devs", ns).unwrap();
        let reg = group
            .register("uart_device0".to_string(), uart(), UART_ATTRS)
            .unwrap();
        assert_eq!(
            group
                .register("uart_device0".to_string(), uart(), UART_ATTRS)
                .err(),
            Some(SysfsError::AlreadyExists)
        );
        reg.unregister();
        group.destroy();
    }

    #[test]
    #[should_panic(expected = "destroyed with 1 member(s) registered")]
    fn destroy_with_live_member_panics() {
        let ns = Arc::new(MemNamespace::new());
        let group = AttrGroup::create("uart_devs", ns).unwrap();
        let _reg = group
            .register("uart_device0".to_string(), uart(), UART_ATTRS)
            .unwrap();
        Arc::clone(&group).destroy();
    }
}
