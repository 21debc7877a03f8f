//! Device construction and counting
//!
//! Every device is built through a [`DeviceRegistry`], which counts successful
//! constructions. The count only ever grows: dropping a device does not
//! decrement it and there is no reset.
//!
//! A process-wide registry is available through [`DeviceRegistry::global`].
//! Independent registries keep their own count.

use std::sync::atomic::{AtomicU64, Ordering};

use smartdev_types::error::expect_kind;
use smartdev_types::{StatusValue, ValueKind};
use tracing::debug;

use crate::config::DeviceConfig;
use crate::constants::{DEFAULT_ONLINE, params};
use crate::device::SmartDevice;
use crate::error::Result;

static GLOBAL: DeviceRegistry = DeviceRegistry::new();

/// Device factory and construction counter
///
/// Thread-safe; the counter is a single atomic.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    device_count: AtomicU64,
}

impl DeviceRegistry {
    /// Create a registry with a zero count
    pub const fn new() -> Self {
        Self {
            device_count: AtomicU64::new(0),
        }
    }

    /// Process-wide registry used by [`SmartDevice::new`]
    pub fn global() -> &'static DeviceRegistry {
        &GLOBAL
    }

    /// Number of devices constructed through this registry
    pub fn device_count(&self) -> u64 {
        self.device_count.load(Ordering::Acquire)
    }

    /// Construct an offline device
    pub fn create(
        &self,
        device_name: impl Into<String>,
        model_number: impl Into<String>,
    ) -> SmartDevice {
        self.create_with(DeviceConfig::new(device_name, model_number))
    }

    /// Construct a device from explicit settings
    pub fn create_with(&self, config: DeviceConfig) -> SmartDevice {
        let device = SmartDevice::from_config(config);
        let count = self.register();

        debug!(
            device_name = device.device_name(),
            model_number = device.model_number(),
            online = device.is_online(),
            device_count = count,
            "Device created"
        );

        device
    }

    /// Construct a device from loosely-typed values
    ///
    /// `device_name` and `model_number` must be text and `device_online`, when
    /// given, must be a boolean. All three are checked before anything is
    /// built; on failure the count is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Type`](crate::Error::Type) naming the first parameter
    /// (in argument order) that has the wrong kind.
    pub fn create_from_values(
        &self,
        device_name: &StatusValue,
        model_number: &StatusValue,
        device_online: Option<&StatusValue>,
    ) -> Result<SmartDevice> {
        expect_kind(params::DEVICE_NAME, device_name, ValueKind::Text)?;
        expect_kind(params::MODEL_NUMBER, model_number, ValueKind::Text)?;
        if let Some(online) = device_online {
            expect_kind(params::DEVICE_ONLINE, online, ValueKind::Bool)?;
        }

        // Kinds are checked above, so the fallbacks are unreachable
        let name = device_name.as_str().unwrap_or_default();
        let model = model_number.as_str().unwrap_or_default();
        let online = device_online
            .and_then(StatusValue::as_bool)
            .unwrap_or(DEFAULT_ONLINE);

        Ok(self.create_with(DeviceConfig::new(name, model).with_online(online)))
    }

    fn register(&self) -> u64 {
        self.device_count.fetch_add(1, Ordering::AcqRel) + 1
    }
}
