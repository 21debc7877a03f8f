//! # smartdev-core
//!
//! Core device model for smartdev.
//!
//! This crate provides:
//! - The [`SmartDevice`] entity and its status map
//! - The [`DeviceRegistry`] construction counter
//! - Pluggable info formatting
//! - Device constants

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod info;
pub mod registry;

pub use config::DeviceConfig;
pub use constants::ATTRIBUTE_NOT_FOUND;
pub use device::SmartDevice;
pub use error::{Error, Result};
pub use info::{InfoFormatter, InfoProvider};
pub use registry::DeviceRegistry;
