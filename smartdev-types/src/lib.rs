//! Type definitions for smartdev

pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::{StatusValue, ValueKind};
