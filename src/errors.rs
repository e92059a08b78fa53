//! Custom error types for bounds processing

use std::fmt;
use std::io;

/// Errors raised by bounds, datum and coordinate operations
#[derive(Debug)]
pub enum BoundsError {
    /// I/O error
    IoError(io::Error),
    /// No interpolated candidate landed inside the bounds
    BoundaryNotFound {
        /// Segment start as (x, y)
        from: (f64, f64),
        /// Segment end as (x, y)
        to: (f64, f64),
    },
    /// An operation was called with inputs outside its contract
    PreconditionViolation(String),
    /// Bounds values are malformed
    InvalidBounds(String),
    /// A textual coordinate, point or bounds could not be parsed
    ParseError(String),
    /// Datum name not present in the registry
    UnknownDatum(String),
    /// Datum definitions could not be loaded
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::IoError(e) => write!(f, "I/O error: {}", e),
            BoundsError::BoundaryNotFound { from, to } => write!(
                f,
                "No boundary crossing found on segment ({}, {}) -> ({}, {})",
                from.0, from.1, to.0, to.1
            ),
            BoundsError::PreconditionViolation(msg) => write!(f, "Precondition violated: {}", msg),
            BoundsError::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            BoundsError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            BoundsError::UnknownDatum(name) => write!(f, "Unknown datum: {}", name),
            BoundsError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            BoundsError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BoundsError {}

impl From<io::Error> for BoundsError {
    fn from(error: io::Error) -> Self {
        BoundsError::IoError(error)
    }
}

impl From<String> for BoundsError {
    fn from(msg: String) -> Self {
        BoundsError::GenericError(msg)
    }
}

/// Result type for bounds operations
pub type BoundsResult<T> = Result<T, BoundsError>;
