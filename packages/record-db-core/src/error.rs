//! Database error types.

use thiserror::Error;

/// Convenience result alias for fallible store operations.
pub type DbResult<T> = Result<T, DbError>;

/// Database operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// Type tag is not one of the supported field types
    #[error("Invalid field type '{type_name}'")]
    InvalidType { type_name: String },

    /// Value shape does not match the declared field type
    #[error("Invalid value for field '{field}': expected {expected}, got {got}")]
    InvalidValue {
        field: String,
        expected: String,
        got: String,
    },

    /// Table already exists
    #[error("Table '{0}' already exists")]
    TableAlreadyExists(String),

    /// Field already exists in table
    #[error("Field '{field}' already exists in table '{table}'")]
    FieldAlreadyExists { table: String, field: String },

    /// Table not found
    #[error("Table '{table}' not found")]
    TableNotFound { table: String },

    /// Field not found in table
    #[error("Field '{field}' not found in table '{table}'")]
    FieldNotFound { table: String, field: String },

    /// I/O error during persistence
    #[error("I/O error: {0}")]
    IoError(String),

    /// Transient I/O error that may succeed on retry
    #[error("Transient I/O error: {0}")]
    TransientIoError(String),

    /// Disk full error during persistence
    #[error("Disk full: {0}")]
    DiskFull(String),

    /// Snapshot bytes do not decode to a valid database
    #[error("Data corruption detected: {0}")]
    DataCorruption(String),
}

/// Coarse classification of [`DbError`] for callers that only care about
/// the category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidType,
    InvalidValue,
    DuplicateName,
    NotFound,
    IoFailure,
    CorruptData,
}

impl DbError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::InvalidType { .. } => ErrorKind::InvalidType,
            DbError::InvalidValue { .. } => ErrorKind::InvalidValue,
            DbError::TableAlreadyExists(_) | DbError::FieldAlreadyExists { .. } => {
                ErrorKind::DuplicateName
            }
            DbError::TableNotFound { .. } | DbError::FieldNotFound { .. } => ErrorKind::NotFound,
            DbError::IoError(_) | DbError::TransientIoError(_) | DbError::DiskFull(_) => {
                ErrorKind::IoFailure
            }
            DbError::DataCorruption(_) => ErrorKind::CorruptData,
        }
    }

    /// Returns `true` if retrying the failed operation may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, DbError::TransientIoError(_))
    }
}
