//! Custom error types for xpense
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for xpense operations
#[derive(Error, Debug)]
pub enum XpenseError {
    /// A user-supplied date string is malformed or names an invalid date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    DateParse(String),

    /// A user-supplied month spec is malformed
    #[error("Invalid month '{0}': expected \"this\" or YYYY-MM")]
    MonthParse(String),

    /// A required flag or flag combination is absent
    #[error("{0}")]
    MissingParameter(String),

    /// Validation errors for user input (amounts, categories)
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (open, serialize, atomic rename)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl XpenseError {
    /// Check if this error is a handled user error (usage, not a fault)
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::DateParse(_)
                | Self::MonthParse(_)
                | Self::MissingParameter(_)
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for XpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for xpense operations
pub type XpenseResult<T> = Result<T, XpenseError>;
