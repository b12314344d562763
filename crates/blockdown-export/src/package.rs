//! Binary packaging boundary.
//!
//! Serializing blocks into a distributable file format is an external
//! concern; this module only defines the seam it plugs into.

use blockdown_core::Document;

/// Error reported by a packaging collaborator
#[derive(Debug, thiserror::Error)]
#[error("packaging failed: {message}")]
pub struct PackageError {
    pub message: String,
}

impl PackageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Serializes an assembled document into distributable bytes
pub trait Packager: Send + Sync {
    fn package(&self, document: &Document) -> Result<Vec<u8>, PackageError>;
}
