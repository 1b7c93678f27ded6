//! Error types for Courier operations.
//!
//! Every engine operation returns [`Result`]. The variants are business-rule
//! failures except [`Error::Unavailable`], which covers everything the caller
//! cannot fix by changing its input (store failures, unreadable fixtures).
//!
//! ## Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | Validation | Malformed input |
//! | NotFound | Referenced tracking does not exist |
//! | Forbidden | Caller does not own the tracking |
//! | Conflict | Duplicate vote or edit of a non-`Created` tracking |
//! | Unavailable | Store or environment failure |

use thiserror::Error;

/// All Courier errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input (bad rating, unknown status, unparsable timestamp)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller is not the owner of the entity
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Uniqueness or state guard rejected the write
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store or environment failure
    #[error("unavailable: {0}")]
    Unavailable(String),
}

/// Result type for Courier operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "Validation",
            Error::NotFound(_) => "NotFound",
            Error::Forbidden(_) => "Forbidden",
            Error::Conflict(_) => "Conflict",
            Error::Unavailable(_) => "Unavailable",
        }
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a forbidden error.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Forbidden(_))
    }

    /// Check if this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// Check if this is a fatal failure of the request.
    ///
    /// Everything else is a business-rule failure that a different input
    /// would avoid.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Unavailable(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::Unavailable(e.to_string())
        } else {
            Error::Validation(e.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Unavailable(e.to_string())
    }
}
