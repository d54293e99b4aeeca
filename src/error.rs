//! Error types for the Leave Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Bad leave records are never errors (they are excluded and reported as
//! audit warnings); errors are reserved for configuration problems and
//! contract violations by the caller.

use thiserror::Error;

/// The main error type for the Leave Accrual Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The leave policy parsed but contains values the engine cannot use.
    #[error("Invalid leave policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A required input was not supplied by the caller.
    #[error("Missing required input: {field}")]
    MissingInput {
        /// The name of the missing input.
        field: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
