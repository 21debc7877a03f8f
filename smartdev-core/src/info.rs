//! Device info formatting
//!
//! A device describes itself through a formatter: either the built-in one,
//! which reads the device's fields at call time, or a user-supplied closure.

use std::fmt;
use std::sync::Arc;

use crate::device::SmartDevice;

/// User-supplied zero-argument info formatter
pub type InfoFormatter = Arc<dyn Fn() -> String + Send + Sync>;

/// The formatter a device currently exposes
///
/// Obtained from [`SmartDevice::info_provider`]. Holding the provider does not
/// produce any text; call [`InfoProvider::call`] for that.
#[derive(Clone, Copy)]
pub enum InfoProvider<'a> {
    /// Built-in formatter bound to a device
    Default(&'a SmartDevice),

    /// Custom formatter installed with [`SmartDevice::set_info_formatter`]
    Custom(&'a InfoFormatter),
}

impl InfoProvider<'_> {
    /// Invoke the formatter
    pub fn call(&self) -> String {
        match self {
            Self::Default(device) => device.default_info(),
            Self::Custom(formatter) => formatter(),
        }
    }

    /// Check if this is a user-supplied formatter
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Debug for InfoProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(device) => f
                .debug_tuple("Default")
                .field(&device.device_name())
                .finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<fn>").finish(),
        }
    }
}
