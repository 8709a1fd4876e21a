//! Error types for the DSO octree
//!
//! Traversal never fails; only construction reports errors (bad
//! configuration or catalog entries the octree cannot place).

use std::fmt;

/// Result type for octree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Octree construction errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Builder configuration is unusable (non-positive scale, zero split threshold, ...)
    InvalidConfig(String),

    /// A catalog entry has a non-finite position, magnitude or radius
    InvalidObject {
        /// Index of the entry in the catalog passed to the builder
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A catalog entry lies outside the root cube
    ObjectOutsideRoot {
        /// Index of the entry in the catalog passed to the builder
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid octree config: {}", msg),
            Error::InvalidObject { index, reason } => {
                write!(f, "Invalid catalog object #{}: {}", index, reason)
            }
            Error::ObjectOutsideRoot { index } => {
                write!(f, "Catalog object #{} lies outside the octree root cell", index)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
