//! Error types for the tile map engine
//!
//! Geometry primitives never fail: invalid geometric input surfaces as
//! NaN/infinity in their results. The errors below cover the fallible
//! entry points around them (traversal options, pixel buffers, raw
//! value conversions).

use std::fmt;

/// Result type for tile map engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tile map engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter is outside its accepted domain (zoom range, radius, enum value...)
    InvalidParameter(String),

    /// Buffer length does not match the declared dimensions
    InvalidDimensions(String),

    /// A rectangle falls outside the image it addresses
    OutOfBounds(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidDimensions(msg) => write!(f, "Invalid dimensions: {}", msg),
            Error::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
