//! Error types for startup parameter parsing
//!
//! Malformed parameters are fatal at startup: a corrupted duplicate
//! invocation would otherwise open a visibly wrong ruler.

use thiserror::Error;

/// Errors that can occur while parsing startup parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    /// Parameters were given, but not all six of them
    #[error("expected {expected} parameters (width height isVertical opacity isLocked topMost), got {actual}")]
    WrongCount { expected: usize, actual: usize },

    /// A width or height that is not an integer
    #[error("{field}: '{value}' is not an integer")]
    InvalidInteger { field: &'static str, value: String },

    /// A width or height below one pixel
    #[error("{field}: {value} must be at least 1")]
    NonPositiveDimension { field: &'static str, value: i32 },

    /// A width or height beyond the largest supported window
    #[error("{field}: {value} exceeds the maximum of {max}")]
    DimensionTooLarge {
        field: &'static str,
        value: i32,
        max: i32,
    },

    /// An opacity that is not a number
    #[error("{field}: '{value}' is not a number")]
    InvalidFloat { field: &'static str, value: String },

    /// An opacity outside 0..=1
    #[error("{field}: {value} is outside 0..=1")]
    OpacityOutOfRange { field: &'static str, value: f64 },

    /// A flag that is neither True nor False
    #[error("{field}: '{value}' is not True or False")]
    InvalidBool { field: &'static str, value: String },
}

/// Result type alias for parameter parsing
pub type ParamsResult<T> = Result<T, ParamsError>;
