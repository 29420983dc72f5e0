//! Driver subsystem API traits and types for Ferrox.
//!
//! Defines the contracts between kernel subsystems that *expose* devices and
//! the drivers that *own* them. Exposure layers (the attribute namespace,
//! consoles, syscall plumbing) depend on this crate instead of on concrete
//! driver crates, so neither side needs to know the other's internals.

#![cfg_attr(not(test), no_std)]

pub mod serial;

// Re-export the public types at the crate root for ergonomic imports.
pub use serial::{DeviceId, UartDevice};
