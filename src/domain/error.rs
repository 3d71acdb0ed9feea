//! Error types for the Talentscope plugin.
//!
//! This module defines the centralized error type [`TalentscopeError`] and a type
//! alias [`Result`] used throughout the plugin. All variants are derived with
//! `thiserror`.

use thiserror::Error;

/// The main error type for Talentscope operations.
///
/// Covers repository access, filesystem I/O, theme loading, worker
/// communication, configuration problems, and candidate lookups that miss.
///
/// # Examples
///
/// ```
/// use talentscope::TalentscopeError;
///
/// let err = TalentscopeError::CandidateNotFound("42".to_string());
/// assert_eq!(err.to_string(), "Candidate not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum TalentscopeError {
    /// Reading or decoding candidate data failed.
    ///
    /// The string describes which source failed and why.
    #[error("Repository error: {0}")]
    Repository(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No candidate exists with the requested id.
    ///
    /// Surfaced to the detail screen as a rendered "not found" state rather
    /// than an error popup.
    #[error("Candidate not found: {0}")]
    CandidateNotFound(String),
}

/// A specialized `Result` type for Talentscope operations.
pub type Result<T> = std::result::Result<T, TalentscopeError>;
