//! Report error types.

use thiserror::Error;

/// Errors that can occur when rendering an audit report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
