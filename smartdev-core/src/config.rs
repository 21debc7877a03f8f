//! Device construction settings

use std::fmt;
use std::sync::Arc;

use crate::constants::DEFAULT_ONLINE;
use crate::info::InfoFormatter;

/// Settings for constructing a [`SmartDevice`](crate::SmartDevice)
///
/// # Examples
///
/// ```
/// use smartdev_core::{DeviceConfig, DeviceRegistry};
///
/// let registry = DeviceRegistry::new();
/// let device = registry.create_with(
///     DeviceConfig::new("Porch Light", "PL-2").with_online(true),
/// );
/// assert!(device.is_online());
/// ```
#[derive(Clone)]
pub struct DeviceConfig {
    pub(crate) device_name: String,
    pub(crate) model_number: String,
    pub(crate) online: bool,
    pub(crate) info_formatter: Option<InfoFormatter>,
}

impl DeviceConfig {
    /// Create settings for an offline device with the default formatter
    pub fn new(device_name: impl Into<String>, model_number: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
            model_number: model_number.into(),
            online: DEFAULT_ONLINE,
            info_formatter: None,
        }
    }

    /// Set initial online state (default: offline)
    pub fn with_online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    /// Install a custom info formatter from the start
    pub fn with_info_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.info_formatter = Some(Arc::new(formatter));
        self
    }
}

impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("device_name", &self.device_name)
            .field("model_number", &self.model_number)
            .field("online", &self.online)
            .field("custom_info", &self.info_formatter.is_some())
            .finish()
    }
}
