//! Device constants

/// Text returned by the default-on-miss status lookup
pub const ATTRIBUTE_NOT_FOUND: &str = "Attribute not found";

/// Online state of a freshly constructed device
pub const DEFAULT_ONLINE: bool = false;

/// Parameter names reported in construction errors
pub mod params {
    pub const DEVICE_NAME: &str = "device_name";
    pub const MODEL_NUMBER: &str = "model_number";
    pub const DEVICE_ONLINE: &str = "device_online";
}
