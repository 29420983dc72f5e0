//! Shared test doubles.
//!
//! A scripted UART device whose counters tests poke directly, an event sink
//! that records (and optionally probes) availability notifications, and a
//! namespace that refuses attachment to exercise registration rollback.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use ferrox_driver_api::{DeviceId, UartDevice};

use crate::error::SysfsError;
use crate::memns::MemNamespace;
use crate::ns::{EventSink, Namespace};
use crate::object::AttrObject;

/// A UART device double with directly scriptable counters.
pub(crate) struct FakeUart {
    id: DeviceId,
    pub tx: AtomicUsize,
    pub rx: AtomicUsize,
    pub dropped: AtomicU64,
    pub overruns: AtomicU64,
    pub parity: AtomicU64,
    pub framing: AtomicU64,
    pub breaks: AtomicU64,
    /// Number of reset actions observed.
    pub resets: AtomicU32,
}

impl FakeUart {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            id: DeviceId::new(major, minor),
            tx: AtomicUsize::new(0),
            rx: AtomicUsize::new(0),
            dropped: AtomicU64::new(0),
            overruns: AtomicU64::new(0),
            parity: AtomicU64::new(0),
            framing: AtomicU64::new(0),
            breaks: AtomicU64::new(0),
            resets: AtomicU32::new(0),
        }
    }
}

impl UartDevice for FakeUart {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn tx_queued(&self) -> usize {
        self.tx.load(Ordering::Relaxed)
    }

    fn rx_queued(&self) -> usize {
        self.rx.load(Ordering::Relaxed)
    }

    fn dropped_bytes(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn overrun_errors(&self) -> u64 {
        self.overruns.load(Ordering::Relaxed)
    }

    fn parity_errors(&self) -> u64 {
        self.parity.load(Ordering::Relaxed)
    }

    fn framing_errors(&self) -> u64 {
        self.framing.load(Ordering::Relaxed)
    }

    fn break_errors(&self) -> u64 {
        self.breaks.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }
}

/// Records `object_added` notifications; optionally asserts the object is
/// already resolvable when the notification fires.
pub(crate) struct RecordingSink {
    events: Mutex<Vec<(String, String)>>,
    probe: Option<Arc<MemNamespace>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            probe: None,
        }
    }

    /// A sink that checks the announced object resolves in `ns` at
    /// notification time.
    pub fn probing(ns: Arc<MemNamespace>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            probe: Some(ns),
        }
    }

    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn object_added(&self, group: &str, object: &str) {
        if let Some(ns) = &self.probe {
            assert!(
                ns.list(group, object).is_ok(),
                "'{group}/{object}' not resolvable at notification time"
            );
        }
        self.events
            .lock()
            .unwrap()
            .push((group.to_string(), object.to_string()));
    }
}

/// A namespace whose object attachment always fails with `NoMemory`.
#[derive(Default)]
pub(crate) struct FailingNamespace;

impl Namespace for FailingNamespace {
    fn add_group(&self, _group: &str) -> Result<(), SysfsError> {
        Ok(())
    }

    fn remove_group(&self, _group: &str) {}

    fn add_object(&self, _group: &str, _object: Arc<dyn AttrObject>) -> Result<(), SysfsError> {
        Err(SysfsError::NoMemory)
    }

    fn remove_object(&self, _group: &str, _object: &str) {}
}
