//! Error types for the SkiRun store.

use std::path::PathBuf;
use thiserror::Error;

/// A shared error type for every SkiRun crate.
///
/// Lookup misses are not errors: `get_by_id` returns `None` and `delete_by_id`
/// on an unknown ID succeeds without touching anything.
#[derive(Error, Debug)]
pub enum SkiRunError {
    /// The backing file does not exist
    #[error("Data file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "XML", "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store was disposed and holds no collection anymore
    #[error("Store not initialized: the ski run store has been disposed")]
    Disposed,
}

impl SkiRunError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MissingFile error
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Serialization error for the given format
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if the backing file was missing
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the store was used after disposal
    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SkiRunError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<quick_xml::se::SeError> for SkiRunError {
    fn from(err: quick_xml::se::SeError) -> Self {
        Self::Serialization {
            format: "XML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SkiRunError>`.
pub type Result<T> = std::result::Result<T, SkiRunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: SkiRunError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_xml_write_error_conversion() {
        let err: SkiRunError = quick_xml::se::SeError::Custom("unsupported".to_string()).into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: XML"));
    }

    #[test]
    fn test_missing_file_message_names_path() {
        let err = SkiRunError::missing_file("/tmp/nowhere/ski_runs.xml");
        assert!(err.is_missing_file());
        assert!(err.to_string().contains("/tmp/nowhere/ski_runs.xml"));
    }

    #[test]
    fn test_disposed_is_distinct() {
        let err = SkiRunError::Disposed;
        assert!(err.is_disposed());
        assert!(!err.is_io());
        assert!(err.to_string().contains("not initialized"));
    }
}
