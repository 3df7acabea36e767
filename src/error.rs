//! Error types for shift management.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing shifts,
//! departments, employees and analytic accounts.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for shift management.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_management::error::ShiftError;
///
/// let error = ShiftError::MissingField {
///     field: "name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: name");
/// ```
#[derive(Debug, Error)]
pub enum ShiftError {
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

    /// A record failed a domain validation rule.
    #[error("Validation failed: {message}")]
    Validation {
        /// A human-readable description of the violated rule.
        message: String,
    },

    /// A required field was absent or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// No shift exists with the given identifier.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },

    /// No department exists with the given identifier.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },

    /// No analytic account exists with the given identifier.
    #[error("Analytic account not found: {id}")]
    AccountNotFound {
        /// The identifier that was looked up.
        id: Uuid,
    },
}

/// A type alias for Results that return ShiftError.
pub type ShiftResult<T> = Result<T, ShiftError>;
