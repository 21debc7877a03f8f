//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Device error: {0}")]
    Core(#[from] smartdev_core::Error),

    #[error("Type error: {0}")]
    Types(#[from] smartdev_types::Error),
}
