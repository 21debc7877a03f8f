//! Error types for smartdev-core

/// Result type alias for smartdev-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core device errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A construction parameter had the wrong kind
    #[error("Invalid device parameter: {0}")]
    Type(#[from] smartdev_types::Error),
}

impl Error {
    /// Name of the parameter that caused the error, if any
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::Type(e) => Some(e.parameter()),
        }
    }
}
