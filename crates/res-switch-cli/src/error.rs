//! Error types for res-switch CLI.
//!
//! CliError wraps CoreError from the shared library with the operation that
//! was being carried out, so every message says what failed and why.

use std::fmt;

use res_switch_core::error::CoreError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const APPLY_ERROR: i32 = 3;
    pub const INVALID_INPUT: i32 = 4;
}

/// User intent that was running when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Show,
    Add,
    Edit,
    Remove,
    Apply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Load => "Loading presets",
            Operation::Show => "Showing preset",
            Operation::Add => "Adding preset",
            Operation::Edit => "Editing preset",
            Operation::Remove => "Removing preset",
            Operation::Apply => "Applying preset",
        })
    }
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{operation} failed: {source}")]
    Failed {
        operation: Operation,
        #[source]
        source: CoreError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Failed { source, .. } => match source {
                CoreError::Validation(_) | CoreError::Index(_) => exit_codes::INVALID_INPUT,
                CoreError::Persistence(_) => exit_codes::GENERAL_ERROR,
                CoreError::Apply(_) => exit_codes::APPLY_ERROR,
            },
            CliError::InvalidArgument(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Attach the running operation to a core result.
pub trait During<T> {
    fn during(self, operation: Operation) -> Result<T>;
}

impl<T, E> During<T> for std::result::Result<T, E>
where
    E: Into<CoreError>,
{
    fn during(self, operation: Operation) -> Result<T> {
        self.map_err(|e| CliError::Failed {
            operation,
            source: e.into(),
        })
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
