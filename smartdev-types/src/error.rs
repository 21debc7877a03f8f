//! Type errors for loosely-typed inputs

use crate::value::{StatusValue, ValueKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A parameter was given a value of the wrong kind
    #[error("{parameter} should be of type '{expected}'")]
    WrongKind {
        parameter: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    },
}

impl Error {
    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::WrongKind { parameter, .. } => parameter,
        }
    }
}

/// Check that `value` has the `expected` kind
pub fn expect_kind(
    parameter: &'static str,
    value: &StatusValue,
    expected: ValueKind,
) -> Result<()> {
    let actual = value.kind();
    if actual != expected {
        return Err(Error::WrongKind {
            parameter,
            expected,
            actual,
        });
    }
    Ok(())
}
