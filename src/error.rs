//! Error types for the employee payroll.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the registry, validator, settings loader and console
//! can report.

use thiserror::Error;

/// The main error type for the employee payroll.
///
/// # Example
///
/// ```
/// use employee_payroll::error::PayrollError;
///
/// let error = PayrollError::DuplicateId {
///     id: "E1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Duplicate ID: E1");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee with this ID is already registered.
    #[error("Duplicate ID: {id}")]
    DuplicateId {
        /// The ID that is already in use.
        id: String,
    },

    /// An employee with this name is already registered.
    #[error("Duplicate name: {name}")]
    DuplicateName {
        /// The name that is already in use.
        name: String,
    },

    /// A name contained something other than letters and whitespace.
    #[error("Invalid name '{name}': only letters and spaces are allowed")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// Numeric input could not be accepted.
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber {
        /// The raw text that was entered.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// The pay terms multiply out to a salary beyond the decimal range.
    #[error("Salary for '{id}' exceeds the representable range")]
    SalaryOverflow {
        /// The ID of the rejected record.
        id: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    ConfigReadError {
        /// The path to the file that could not be read.
        path: String,
        /// The underlying read error.
        message: String,
    },

    /// The `--log-level` directive could not be parsed.
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidLogFilter {
        /// The rejected directive.
        directive: String,
        /// Why the directive was rejected.
        message: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Input ended while a prompt was still waiting for an answer.
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed {
        /// The prompt that went unanswered.
        prompt: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
