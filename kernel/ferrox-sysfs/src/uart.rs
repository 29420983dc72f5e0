//! Attribute catalog for UART devices.
//!
//! Every registered UART publishes nine fixed entries: one control knob
//! (`reset`) and eight read-only counters. Counters render as decimal text
//! with a trailing newline; `devid` renders the compound identifier as
//! `major,minor`. Devices appear in the namespace as `uart_device<N>` with
//! `N` assigned by the registering driver.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use ferrox_driver_api::UartDevice;

use crate::attr::{Attribute, AttributeSet};
use crate::error::SysfsError;
use crate::group::{AttrGroup, Registration};

static UART_ATTR_LIST: [Attribute<dyn UartDevice>; 9] = [
    Attribute::write_only("reset", reset_store),
    Attribute::read_only("ntxbytes", ntxbytes_show),
    Attribute::read_only("nrxbytes", nrxbytes_show),
    Attribute::read_only("ndrbytes", ndrbytes_show),
    Attribute::read_only("novrerrs", novrerrs_show),
    Attribute::read_only("nparerrs", nparerrs_show),
    Attribute::read_only("nfrmerrs", nfrmerrs_show),
    Attribute::read_only("nbrkerrs", nbrkerrs_show),
    Attribute::read_only("devid", devid_show),
];

/// The attribute set every registered UART device publishes.
pub static UART_ATTRS: AttributeSet<dyn UartDevice> = AttributeSet::new(&UART_ATTR_LIST);

/// Publishes `device` as `uart_device<index>` under `group`.
///
/// Index assignment belongs to the caller (typically the driver's attach
/// path); this layer does not check indices for uniqueness, so a duplicate
/// surfaces as [`SysfsError::AlreadyExists`] from namespaces that do.
///
/// # Errors
///
/// Propagates registration failures; on error the device is not exposed.
pub fn register_uart(
    group: &Arc<AttrGroup>,
    index: usize,
    device: Arc<dyn UartDevice>,
) -> Result<Registration, SysfsError> {
    group.register(format!("uart_device{index}"), device, UART_ATTRS)
}

fn reset_store(dev: &dyn UartDevice, data: &[u8]) -> Result<usize, SysfsError> {
    // Forgiving text protocol: a leading decimal 1 fires the reset, anything
    // else (including unparsable input) is accepted and ignored. The full
    // input counts as consumed either way.
    if scan_decimal(data) == Some(1) {
        dev.reset();
    }
    Ok(data.len())
}

fn ntxbytes_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.tx_queued())
}

fn nrxbytes_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.rx_queued())
}

fn ndrbytes_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.dropped_bytes())
}

fn novrerrs_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.overrun_errors())
}

fn nparerrs_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.parity_errors())
}

fn nfrmerrs_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.framing_errors())
}

fn nbrkerrs_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.break_errors())
}

fn devid_show(dev: &dyn UartDevice) -> String {
    format!("{}\n", dev.id())
}

/// Scans a leading optionally-signed decimal integer, skipping leading
/// ASCII whitespace and ignoring everything after the digits.
///
/// Returns `None` when no digits are present or the value overflows.
fn scan_decimal(data: &[u8]) -> Option<i64> {
    let mut i = 0;
    while data.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    let negative = match data.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let mut value: i64 = 0;
    let mut digits = 0usize;
    while let Some(d) = data.get(i).filter(|b| b.is_ascii_digit()) {
        value = value.checked_mul(10)?.checked_add(i64::from(d - b'0'))?;
        i += 1;
        digits += 1;
    }
    if digits == 0 {
        None
    } else if negative {
        Some(-value)
    } else {
        Some(value)
    }
}
