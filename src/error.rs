//! Error types for the attendance ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition a ledger operation can report to its caller.

use std::io;

use thiserror::Error;

/// The main error type for the attendance ledger.
///
/// Every store, payroll, codec and configuration operation returns this
/// error type. Nothing is logged in place of being returned.
///
/// # Example
///
/// ```
/// use attendance_ledger::error::LedgerError;
///
/// let error = LedgerError::DuplicateId { id: 7 };
/// assert_eq!(error.to_string(), "Employee id 7 already exists");
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A ledger line could not be parsed during load.
    #[error("Malformed ledger line {line} ('{content}'): {message}")]
    Format {
        /// The 1-based line number in the source.
        line: usize,
        /// The raw text of the offending line.
        content: String,
        /// What was wrong and the expected shape.
        message: String,
    },

    /// No record matched the given id or name.
    #[error("Employee not found: {key}")]
    NotFound {
        /// The id or name that was looked up.
        key: String,
    },

    /// A record with the same id is already in the store.
    #[error("Employee id {id} already exists")]
    DuplicateId {
        /// The conflicting id.
        id: i64,
    },

    /// Recording one more attendance day would exceed the monthly ceiling.
    #[error(
        "Attendance ceiling reached for employee {id}: {attendance_days} attendance + {leave_days} leave days"
    )]
    AttendanceCeilingExceeded {
        /// The employee whose record was left unchanged.
        id: i64,
        /// Attendance days on the record.
        attendance_days: u32,
        /// Leave days on the record.
        leave_days: u32,
    },

    /// A record field could not be stored.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidRecord {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Reading or writing a ledger or report file failed.
    #[error("I/O failure on '{path}': {source}")]
    Persistence {
        /// The file being read or written.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The shared ledger lock was not acquired in time.
    #[error("Ledger busy: lock not acquired within {timeout_ms}ms")]
    Busy {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl LedgerError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn persistence(path: impl Into<String>, source: io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Creates a `NotFound` error for any displayable key.
    pub fn not_found(key: impl ToString) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;
