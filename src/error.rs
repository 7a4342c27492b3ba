//! Error types for the checkroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during record synthesis and
//! rule evaluation.

use thiserror::Error;

/// The main error type for the checkroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use checkroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidJobType { job_type_id: 99 };
/// assert_eq!(error.to_string(), "Invalid job type: 99");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A job type id outside the configured classification set was supplied.
    ///
    /// Always fatal to the record being processed; never retried, never
    /// silently defaulted.
    #[error("Invalid job type: {job_type_id}")]
    InvalidJobType {
        /// The job type id that was not recognised.
        job_type_id: i32,
    },

    /// A day type id outside the valid set {1, 2, 3} was supplied.
    #[error("Invalid day type: {day_type}")]
    InvalidDayType {
        /// The day type id that was not recognised.
        day_type: i32,
    },

    /// A (job type, day type) pairing forbidden by the classification rules
    /// reached the rule engine.
    ///
    /// The reference data generator silently credited a full man-day for
    /// these pairings; this engine refuses them instead.
    #[error("Day type {day_type} is not supported for job type {job_type_id}")]
    UnsupportedDayType {
        /// The job type id of the offending record.
        job_type_id: i32,
        /// The day type id of the offending record.
        day_type: i32,
    },

    /// An argument outside the documented domain was supplied to a call.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// A description of the invalid argument.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
