//! Error types for res-switch core.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::types::Field;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid selection: {0}")]
    Index(#[from] IndexError),

    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Apply error: {0}")]
    Apply(#[from] ApplyError),
}

/// A preset field held a value that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: InvalidValue,
}

impl ValidationError {
    pub fn new(field: Field, reason: InvalidValue) -> Self {
        Self { field, reason }
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// Text that does not parse as an integer.
    NotANumber(String),
    /// Zero or negative.
    NotPositive(String),
    /// Positive but does not fit the field's storage type.
    TooLarge(String),
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidValue::NotANumber(raw) => write!(f, "'{}' is not a whole number", raw),
            InvalidValue::NotPositive(v) => write!(f, "must be greater than zero (got {})", v),
            InvalidValue::TooLarge(v) => write!(f, "is too large (got {})", v),
        }
    }
}

/// The selected index does not point at a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range (catalog has {len} preset(s))")]
pub struct IndexError {
    pub index: i64,
    pub len: usize,
}

/// Backing store errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preset file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode presets: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistenceError {
    /// Short name of the failing stage, for diagnostics and exit-code mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            PersistenceError::Read { .. } => "read",
            PersistenceError::Write { .. } | PersistenceError::Encode(_) => "write",
            PersistenceError::Parse { .. } => "parse",
        }
    }
}

/// External display tool errors
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("Could not start {}: {source}", .tool.display())]
    Launch {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Display tool failed with exit code {code}")]
    ExitCode { code: i32 },

    #[error("Display tool was terminated before reporting an exit code")]
    Terminated,

    #[error("Display tool did not finish within {}ms and was killed", .after.as_millis())]
    Timeout { after: Duration },

    #[error("Failed waiting for display tool: {0}")]
    Wait(#[source] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::new(
            Field::RefreshRate,
            InvalidValue::NotPositive("0".to_string()),
        );
        assert_eq!(
            format!("{}", err),
            "refresh rate must be greater than zero (got 0)"
        );
    }

    #[test]
    fn test_index_error_display() {
        let err = IndexError { index: -1, len: 2 };
        assert_eq!(
            format!("{}", err),
            "index -1 is out of range (catalog has 2 preset(s))"
        );
    }

    #[test]
    fn test_persistence_error_kind() {
        let err = PersistenceError::Read {
            path: PathBuf::from("resolutions.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), "read");
        assert!(format!("{}", err).contains("resolutions.json"));
    }

    #[test]
    fn test_core_error_from_apply_error() {
        let err: CoreError = ApplyError::ExitCode { code: 1 }.into();
        assert!(matches!(err, CoreError::Apply(ApplyError::ExitCode { code: 1 })));
        assert!(format!("{}", err).contains("exit code 1"));
    }
}
