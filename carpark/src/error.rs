//! Error types for the carpark library.
//!
//! This module provides the error hierarchy for all operations in the
//! carpark library, using `thiserror` for ergonomic error handling.
//!
//! Expected business outcomes (a duplicate plate, a full lot, an invalid
//! unpark target) are deliberately not errors; they are variants of the
//! outcome enums in [`crate::operations`]. This enum covers the failures a
//! caller cannot plan for: storage, configuration, I/O, and validation.

use thiserror::Error;

/// Result type alias for operations that may fail with a carpark error.
///
/// # Examples
///
/// ```
/// use carpark::Result;
///
/// fn example_operation() -> Result<u32> {
///     Ok(100)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the carpark library.
#[derive(Debug, Error)]
pub enum Error {
    /// A storage-layer error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid slot identifier was provided.
    #[error("invalid slot id '{value}': {reason}")]
    InvalidSlotId {
        /// The rejected identifier text.
        value: String,
        /// The reason the identifier is invalid.
        reason: String,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Returns whether this error is database lock contention.
    ///
    /// Callers that wait on the busy timeout can map this case to a
    /// distinct exit path.
    #[must_use]
    pub fn is_lock_contention(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
        )
    }
}

impl From<crate::slot::InvalidSlotIdError> for Error {
    fn from(err: crate::slot::InvalidSlotIdError) -> Self {
        Self::InvalidSlotId {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::slot::InvalidCategoryError> for Error {
    fn from(err: crate::slot::InvalidCategoryError) -> Self {
        Self::Validation {
            field: "category".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::vehicle::ValidationError> for Error {
    fn from(err: crate::vehicle::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
