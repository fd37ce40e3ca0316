//! Error types for the Comet3D culling core
//!
//! All failures in this crate are local, synchronous results of bad
//! geometric configurations. There is no retry or recovery policy;
//! callers either reject the configuration at load time or clamp
//! inputs before calling in.

use std::fmt;

/// Result type for Comet3D culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comet3D culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Rejected configuration value (aspect ratio, field of view, depth range)
    InvalidParameter(String),

    /// Geometry that cannot produce a well-defined result
    /// (collinear plane points, camera target at the camera position)
    DegenerateGeometry(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
