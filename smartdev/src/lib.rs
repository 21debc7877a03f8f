//! # smartdev
//!
//! In-memory model of a smart device: identity, online flag, status
//! attributes and a swappable info formatter.
//!
//! ## Features
//!
//! - Typed status values
//! - Construction counting through a thread-safe registry
//! - Custom info formatters installed at runtime
//! - Loosely-typed construction with kind checks
//!
//! ## Quick Start
//!
//! ```
//! use smartdev::SmartDevice;
//!
//! fn main() -> smartdev::Result<()> {
//!     let mut device = SmartDevice::new("Thermostat", "T-100");
//!
//!     device.update_status("temperature", 21.5);
//!     device.toggle_online();
//!
//!     println!("{}", device.summary());
//!     println!("{}", device.format_info());
//!
//!     device.set_info_formatter(|| "Hallway thermostat".to_string());
//!     assert_eq!(device.info_provider().call(), "Hallway thermostat");
//!
//!     Ok(())
//! }
//! ```

pub mod error;

// Re-exports
pub use error::{Error, Result};

pub use smartdev_core::{
    ATTRIBUTE_NOT_FOUND, DeviceConfig, DeviceRegistry, InfoFormatter, InfoProvider,
    SmartDevice,
};
pub use smartdev_types::{StatusValue, ValueKind};
