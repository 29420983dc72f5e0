//! Serial (UART) device contracts.
//!
//! A UART driver owns its ring buffers, interrupt handling, and error
//! accounting. What it exposes to the rest of the kernel is the read-only
//! counter surface and the reset control of [`UartDevice`]; instrumentation
//! layers observe through this trait and never touch driver internals.

use core::fmt;

/// Compound device identifier in the `major,minor` tradition.
///
/// The major number selects the device class, the minor number the instance
/// within it. Assignment policy belongs to the driver core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId {
    /// Device class number.
    pub major: u32,
    /// Instance number within the class.
    pub minor: u32,
}

impl DeviceId {
    /// Creates an identifier from its major and minor halves.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.major, self.minor)
    }
}

/// Counter and control surface a UART driver hands to instrumentation.
///
/// Every getter is a single atomic observation of state the driver owns and
/// synchronizes; callers get a consistent snapshot of *one* counter, never a
/// multi-field transaction. Implementations must be cheap and non-blocking --
/// these methods run on whatever context services an attribute access,
/// potentially many contexts at once.
pub trait UartDevice: Send + Sync {
    /// Returns the device's compound identifier.
    fn id(&self) -> DeviceId;

    /// Returns the number of bytes queued for transmission.
    fn tx_queued(&self) -> usize;

    /// Returns the number of received bytes waiting to be read.
    fn rx_queued(&self) -> usize;

    /// Returns the cumulative count of bytes dropped on queue overflow.
    fn dropped_bytes(&self) -> u64;

    /// Returns the cumulative hardware overrun error count.
    fn overrun_errors(&self) -> u64;

    /// Returns the cumulative parity error count.
    fn parity_errors(&self) -> u64;

    /// Returns the cumulative framing error count.
    fn framing_errors(&self) -> u64;

    /// Returns the cumulative break-condition count.
    fn break_errors(&self) -> u64;

    /// Requests a device reset, clearing queues and error state.
    ///
    /// Triggered from attribute writes; the operation must be bounded and
    /// must not block the calling context.
    fn reset(&self);
}
