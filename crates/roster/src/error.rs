//! Error types for the roster service.
//!
//! This module defines all error types used throughout the roster crate,
//! providing detailed context for debugging and user-friendly error messages.
//!
//! Keyed lookup misses ("no such sub-team") are not errors: repository
//! operations return `Option` and the HTTP layer turns absence into a
//! not-found envelope.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for roster operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Record Errors ===
    /// A record failed validation on insert.
    ///
    /// Only the seed procedure inserts records, so this surfaces as a
    /// seeding failure rather than a request-path error.
    #[error("invalid record: {message}")]
    InvalidRecord {
        /// Description of the validation failure.
        message: String,
    },

    /// A serialized sequence column could not be decoded.
    ///
    /// Seeding always writes valid JSON, so this indicates a corrupted row
    /// and is treated as a server fault by the HTTP layer.
    #[error("failed to decode '{column}' for sub-team '{id}': {source}")]
    SequenceDecode {
        /// Column holding the malformed text.
        column: &'static str,
        /// Sub-team row the column belongs to.
        id: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Server Errors ===
    /// Failed to bind the listen address.
    #[error("failed to bind {addr}: {source}")]
    ServerBind {
        /// Address the server attempted to bind.
        addr: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new invalid-record error.
    #[must_use]
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a record validation failure.
    #[must_use]
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord { .. })
    }

    /// Check if this error is a sequence decode failure.
    #[must_use]
    pub fn is_sequence_decode(&self) -> bool {
        matches!(self, Self::SequenceDecode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = Error::invalid_record("field 'name' must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid record: field 'name' must not be empty"
        );
        assert!(err.is_invalid_record());
    }

    #[test]
    fn test_internal_error() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
        assert!(!err.is_invalid_record());
    }

    #[test]
    fn test_sequence_decode_display() {
        let source = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = Error::SequenceDecode {
            column: "goals",
            id: "powertrain".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("goals"));
        assert!(msg.contains("powertrain"));
        assert!(err.is_sequence_decode());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::DatabaseQuery(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "port must not be 0".to_string(),
        };
        assert!(err.to_string().contains("port must not be 0"));
    }

    #[test]
    fn test_server_bind_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::ServerBind {
            addr: "0.0.0.0:3001".to_string(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:3001"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_database_migration_error_display() {
        let err = Error::DatabaseMigration {
            message: "unknown migration version: 9".to_string(),
        };
        assert!(err.to_string().contains("unknown migration version"));
    }
}
