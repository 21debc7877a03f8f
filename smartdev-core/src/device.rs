//! Smart device model

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use smartdev_types::StatusValue;
use smartdev_types::value::format_bool;
use tracing::{debug, trace};

use crate::config::DeviceConfig;
use crate::constants::ATTRIBUTE_NOT_FOUND;
use crate::error::Result;
use crate::info::{InfoFormatter, InfoProvider};
use crate::registry::DeviceRegistry;

/// Smart device
///
/// Holds a device's identity, its online flag and a map of status attributes.
/// Devices are constructed through a [`DeviceRegistry`], which counts them;
/// [`SmartDevice::new`] uses the process-wide registry.
///
/// # Examples
///
/// ```
/// use smartdev_core::SmartDevice;
///
/// let mut device = SmartDevice::new("Thermostat", "T-100");
/// device.update_status("temperature", 21.5);
///
/// assert_eq!(device.summary(), "Thermostat (Model: T-100)");
/// let temperature = device.get_status("temperature").and_then(|v| v.as_float());
/// assert_eq!(temperature, Some(21.5));
/// assert_eq!(device.get_status("humidity"), None);
/// ```
///
/// Name and model must be text:
///
/// ```compile_fail
/// use smartdev_core::SmartDevice;
///
/// let device = SmartDevice::new(123, "T-100");
/// ```
pub struct SmartDevice {
    device_name: String,
    model_number: String,
    is_online: bool,
    status: HashMap<String, StatusValue>,
    info_formatter: Option<InfoFormatter>,
}

impl SmartDevice {
    /// Create an offline device through the process-wide registry
    pub fn new(device_name: impl Into<String>, model_number: impl Into<String>) -> Self {
        DeviceRegistry::global().create(device_name, model_number)
    }

    /// Create a device from settings through the process-wide registry
    pub fn with_config(config: DeviceConfig) -> Self {
        DeviceRegistry::global().create_with(config)
    }

    /// Create a device from loosely-typed values through the global registry
    ///
    /// See [`DeviceRegistry::create_from_values`].
    pub fn from_values(
        device_name: &StatusValue,
        model_number: &StatusValue,
        device_online: Option<&StatusValue>,
    ) -> Result<Self> {
        DeviceRegistry::global().create_from_values(device_name, model_number, device_online)
    }

    pub(crate) fn from_config(config: DeviceConfig) -> Self {
        Self {
            device_name: config.device_name,
            model_number: config.model_number,
            is_online: config.online,
            status: HashMap::new(),
            info_formatter: config.info_formatter,
        }
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn model_number(&self) -> &str {
        &self.model_number
    }

    /// Replace the device name
    pub fn set_device_name(&mut self, device_name: impl Into<String>) {
        self.device_name = device_name.into();
    }

    /// Replace the model number
    pub fn set_model_number(&mut self, model_number: impl Into<String>) {
        self.model_number = model_number.into();
    }

    /// Check if device is online
    pub fn is_online(&self) -> bool {
        self.is_online
    }

    /// Set online state directly
    pub fn set_online(&mut self, online: bool) {
        self.is_online = online;
    }

    /// Flip the online flag
    pub fn toggle_online(&mut self) {
        self.is_online = !self.is_online;
        debug!(
            device_name = %self.device_name,
            online = self.is_online,
            "Toggled online state"
        );
    }

    /// Set a status attribute, overwriting any previous value
    pub fn update_status(&mut self, attribute: impl Into<String>, value: impl Into<StatusValue>) {
        let attribute = attribute.into();
        let value = value.into();

        trace!(
            device_name = %self.device_name,
            attribute = %attribute,
            value = %value,
            "Updating status"
        );

        self.status.insert(attribute, value);
    }

    /// Get a status attribute
    ///
    /// Returns `None` if the attribute was never set (or was cleared).
    pub fn get_status(&self, attribute: &str) -> Option<&StatusValue> {
        self.status.get(attribute)
    }

    /// Get a status attribute as text, or `"Attribute not found"`
    ///
    /// A stored text equal to `"Attribute not found"` cannot be told apart
    /// from a missing attribute here; use [`get_status`](Self::get_status)
    /// when that matters.
    pub fn get_status_or_default(&self, attribute: &str) -> String {
        self.get_status(attribute)
            .map_or_else(|| ATTRIBUTE_NOT_FOUND.to_string(), ToString::to_string)
    }

    /// Remove a single status attribute
    pub fn remove_status(&mut self, attribute: &str) -> Option<StatusValue> {
        self.status.remove(attribute)
    }

    /// All status attributes
    pub fn status(&self) -> &HashMap<String, StatusValue> {
        &self.status
    }

    /// Number of status attributes
    pub fn status_len(&self) -> usize {
        self.status.len()
    }

    /// Clear all status attributes
    ///
    /// Identity, online flag and info formatter are left as they are.
    pub fn reset(&mut self) {
        debug!(
            device_name = %self.device_name,
            cleared = self.status.len(),
            "Resetting status"
        );
        self.status.clear();
    }

    /// Short description: `"<name> (Model: <model>)"`
    ///
    /// Not affected by a custom info formatter.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Get the formatter that describes this device
    ///
    /// This returns the formatter itself; call [`InfoProvider::call`] (or use
    /// [`format_info`](Self::format_info)) to get the text.
    pub fn info_provider(&self) -> InfoProvider<'_> {
        match &self.info_formatter {
            Some(formatter) => InfoProvider::Custom(formatter),
            None => InfoProvider::Default(self),
        }
    }

    /// Describe the device using the current formatter
    pub fn format_info(&self) -> String {
        self.info_provider().call()
    }

    /// Built-in description, ignoring any custom formatter
    ///
    /// Reads the current field values on every call.
    pub fn default_info(&self) -> String {
        format!(
            "Device Name: {}, Model: {}, Online: {}",
            self.device_name,
            self.model_number,
            format_bool(self.is_online)
        )
    }

    /// Install a custom info formatter
    ///
    /// Replaces any formatter set before. Only callables are accepted:
    ///
    /// ```compile_fail
    /// use smartdev_core::SmartDevice;
    ///
    /// let mut device = SmartDevice::new("Thermostat", "T-100");
    /// device.set_info_formatter("not a function");
    /// ```
    pub fn set_info_formatter<F>(&mut self, formatter: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        debug!(
            device_name = %self.device_name,
            "Custom info formatter installed"
        );
        self.info_formatter = Some(Arc::new(formatter));
    }

    /// Remove the custom info formatter, restoring the built-in one
    pub fn clear_info_formatter(&mut self) -> Option<InfoFormatter> {
        self.info_formatter.take()
    }

    /// Check if a custom info formatter is installed
    pub fn has_custom_info(&self) -> bool {
        self.info_formatter.is_some()
    }
}

impl fmt::Display for SmartDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Model: {})", self.device_name, self.model_number)
    }
}

impl fmt::Debug for SmartDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartDevice")
            .field("device_name", &self.device_name)
            .field("model_number", &self.model_number)
            .field("is_online", &self.is_online)
            .field("status", &self.status)
            .field("custom_info", &self.info_formatter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn thermostat() -> SmartDevice {
        DeviceRegistry::new().create("Thermostat", "T-100")
    }

    #[test]
    fn test_device_create() {
        let device = thermostat();

        assert_eq!(device.device_name(), "Thermostat");
        assert_eq!(device.model_number(), "T-100");
        assert!(!device.is_online());
        assert!(device.status().is_empty());
        assert!(!device.has_custom_info());
    }

    #[test]
    fn test_update_and_get_status() {
        let mut device = thermostat();

        device.update_status("temperature", 21.5);
        device.update_status("mode", "heat");
        device.update_status("eco", true);

        assert_eq!(
            device.get_status("temperature"),
            Some(&StatusValue::Float(21.5))
        );
        assert_eq!(
            device.get_status("mode"),
            Some(&StatusValue::from("heat"))
        );
        assert_eq!(device.get_status("eco"), Some(&StatusValue::Bool(true)));
        assert_eq!(device.status_len(), 3);
    }

    #[test]
    fn test_update_overwrites() {
        let mut device = thermostat();

        device.update_status("temperature", 20);
        device.update_status("temperature", 22);

        assert_eq!(
            device.get_status("temperature"),
            Some(&StatusValue::Int(22))
        );
        assert_eq!(device.status_len(), 1);
    }

    #[test]
    fn test_get_missing_status() {
        let device = thermostat();

        assert_eq!(device.get_status("humidity"), None);
        assert_eq!(
            device.get_status_or_default("humidity"),
            "Attribute not found"
        );
    }

    #[test]
    fn test_get_status_or_default_present() {
        let mut device = thermostat();
        device.update_status("temperature", 21.5);

        assert_eq!(device.get_status_or_default("temperature"), "21.5");
    }

    #[test]
    fn test_not_found_text_is_distinguishable() {
        let mut device = thermostat();
        device.update_status("note", ATTRIBUTE_NOT_FOUND);

        assert_eq!(device.get_status_or_default("note"), ATTRIBUTE_NOT_FOUND);
        assert!(device.get_status("note").is_some());
        assert!(device.get_status("other").is_none());
    }

    #[test]
    fn test_remove_status() {
        let mut device = thermostat();
        device.update_status("mode", "cool");

        assert_eq!(
            device.remove_status("mode"),
            Some(StatusValue::from("cool"))
        );
        assert_eq!(device.remove_status("mode"), None);
        assert!(device.status().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut device = thermostat();
        device.toggle_online();
        device.update_status("temperature", 21.5);
        device.update_status("mode", "heat");

        device.reset();

        assert_eq!(device.get_status("temperature"), None);
        assert_eq!(device.get_status_or_default("mode"), "Attribute not found");
        assert!(device.status().is_empty());
        assert!(device.is_online());
        assert_eq!(device.device_name(), "Thermostat");
    }

    #[test]
    fn test_reset_keeps_formatter() {
        let mut device = thermostat();
        device.set_info_formatter(|| "custom".to_string());

        device.reset();

        assert_eq!(device.format_info(), "custom");
    }

    #[test]
    fn test_toggle_online() {
        let mut device = thermostat();

        device.toggle_online();
        assert!(device.is_online());

        device.toggle_online();
        assert!(!device.is_online());
    }

    #[test]
    fn test_set_online() {
        let mut device = thermostat();
        device.set_online(true);
        assert!(device.is_online());
    }

    #[test]
    fn test_summary() {
        let device = thermostat();

        assert_eq!(device.summary(), "Thermostat (Model: T-100)");
        assert_eq!(device.to_string(), "Thermostat (Model: T-100)");
    }

    #[test]
    fn test_summary_ignores_formatter() {
        let mut device = thermostat();
        device.set_info_formatter(|| "custom".to_string());

        assert_eq!(device.summary(), "Thermostat (Model: T-100)");
    }

    #[test]
    fn test_default_info() {
        let device = thermostat();

        let provider = device.info_provider();
        assert_eq!(
            provider.call(),
            "Device Name: Thermostat, Model: T-100, Online: False"
        );
    }

    #[test]
    fn test_default_info_is_live() {
        let mut device = thermostat();
        assert_eq!(
            device.format_info(),
            "Device Name: Thermostat, Model: T-100, Online: False"
        );

        device.toggle_online();

        assert_eq!(
            device.format_info(),
            "Device Name: Thermostat, Model: T-100, Online: True"
        );

        device.set_device_name("Hallway Thermostat");
        device.set_model_number("T-200");

        assert_eq!(
            device.format_info(),
            "Device Name: Hallway Thermostat, Model: T-200, Online: True"
        );
        assert_eq!(device.summary(), "Hallway Thermostat (Model: T-200)");
    }

    #[test]
    fn test_rename_keeps_state() {
        let mut device = thermostat();
        device.update_status("mode", "heat");

        device.set_device_name("Lamp");

        assert_eq!(device.device_name(), "Lamp");
        assert_eq!(device.model_number(), "T-100");
        assert_eq!(
            device.get_status("mode"),
            Some(&StatusValue::from("heat"))
        );
    }

    #[test]
    fn test_custom_info() {
        let mut device = thermostat();
        device.set_info_formatter(|| "Living room thermostat".to_string());

        let provider = device.info_provider();
        assert!(provider.is_custom());
        assert_eq!(provider.call(), "Living room thermostat");
        assert_eq!(
            device.default_info(),
            "Device Name: Thermostat, Model: T-100, Online: False"
        );
    }

    #[test]
    fn test_custom_info_replaced() {
        let mut device = thermostat();
        device.set_info_formatter(|| "first".to_string());
        device.set_info_formatter(|| "second".to_string());

        assert_eq!(device.format_info(), "second");
    }

    #[test]
    fn test_custom_info_captures_state() {
        let mut device = thermostat();
        let label = format!("{} in hallway", device.device_name());
        device.set_info_formatter(move || label.clone());

        assert_eq!(device.format_info(), "Thermostat in hallway");
    }

    #[test]
    fn test_clear_info_formatter() {
        let mut device = thermostat();
        device.set_info_formatter(|| "custom".to_string());

        assert!(device.clear_info_formatter().is_some());
        assert!(!device.has_custom_info());
        assert_eq!(
            device.format_info(),
            "Device Name: Thermostat, Model: T-100, Online: False"
        );
    }

    #[test]
    fn test_formatter_from_config() {
        let config = DeviceConfig::new("Lamp", "L-1")
            .with_info_formatter(|| "lamp".into());
        let device = DeviceRegistry::new().create_with(config);

        assert_eq!(device.format_info(), "lamp");
    }

    #[test]
    fn test_device_debug() {
        let device = thermostat();
        let debug = format!("{:?}", device);

        assert!(debug.contains("Thermostat"));
        assert!(debug.contains("custom_info: false"));
    }

    proptest! {
        #[test]
        fn prop_get_after_update(
            attribute in "[a-z_]{1,16}",
            value in any::<i64>(),
        ) {
            let mut device = thermostat();
            device.update_status(attribute.clone(), value);

            prop_assert_eq!(
                device.get_status(&attribute),
                Some(&StatusValue::Int(value))
            );
        }

        #[test]
        fn prop_updates_overwrite(
            attribute in "[a-z_]{1,16}",
            values in prop::collection::vec(".*", 1..8),
        ) {
            let mut device = thermostat();
            for value in &values {
                device.update_status(attribute.as_str(), value.as_str());
            }

            prop_assert_eq!(device.status_len(), 1);
            prop_assert_eq!(
                device.get_status(&attribute).and_then(StatusValue::as_str),
                values.last().map(String::as_str)
            );
        }

        #[test]
        fn prop_reset_clears(
            attributes in prop::collection::vec("[a-z]{1,8}", 0..16),
            online in any::<bool>(),
        ) {
            let mut device = thermostat();
            device.set_online(online);
            for attribute in &attributes {
                device.update_status(attribute.as_str(), 1);
            }

            device.reset();

            for attribute in &attributes {
                prop_assert!(device.get_status(attribute).is_none());
            }
            prop_assert_eq!(device.is_online(), online);
        }

        #[test]
        fn prop_double_toggle_is_identity(online in any::<bool>()) {
            let mut device = thermostat();
            device.set_online(online);

            device.toggle_online();
            device.toggle_online();

            prop_assert_eq!(device.is_online(), online);
        }
    }
}
