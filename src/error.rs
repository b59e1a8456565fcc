//! Error types for the OpenEBS table tooling
//!
//! Registry lookups never fail: a missing key is `None`. These errors cover
//! the code built on top of the registry (parsing input, building tables,
//! writing output).

use thiserror::Error;

/// Unified error type
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown report kind: {0}")]
    UnknownReport(String),

    #[error("Capacity parse error: {0}")]
    CapacityParse(String),

    // =========================================================================
    // Table Errors
    // =========================================================================
    #[error("Row has {actual} cells, report {report} has {expected} columns")]
    RowShape {
        report: String,
        expected: usize,
        actual: usize,
    },

    #[error("Column {column} expects {expected} but cell is {actual}")]
    CellType {
        column: String,
        expected: String,
        actual: String,
    },

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("JSON encode error: {0}")]
    JsonEncode(#[from] serde_json::Error),

    #[error("YAML encode error: {0}")]
    YamlEncode(#[from] serde_yaml::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the error was caused by bad input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_)
                | Error::UnknownReport(_)
                | Error::CapacityParse(_)
                | Error::RowShape { .. }
                | Error::CellType { .. }
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_user_error() {
            2
        } else {
            1
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
