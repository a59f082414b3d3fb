//! Error types for IRAP ASCII export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while exporting a surface.
#[derive(Error, Debug)]
pub enum IrapError {
    /// The destination file could not be created or truncated.
    #[error("failed to create {}: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to (or flushing) the destination failed part way.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The value buffer does not hold `columns * rows` samples.
    #[error("surface shape mismatch: {columns} x {rows} grid, got {len} values")]
    ShapeMismatch {
        columns: usize,
        rows: usize,
        len: usize,
    },

    /// Writer configuration error.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl IrapError {
    /// Create a CreateFailed error.
    pub fn create_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a WriteFailed error.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(columns: usize, rows: usize, len: usize) -> Self {
        Self::ShapeMismatch { columns, rows, len }
    }

    /// The underlying I/O error, if this is a destination failure.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::CreateFailed { source, .. } | Self::WriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for IRAP export operations.
pub type Result<T> = std::result::Result<T, IrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = IrapError::shape_mismatch(3, 4, 10);
        assert_eq!(
            err.to_string(),
            "surface shape mismatch: 3 x 4 grid, got 10 values"
        );
        assert!(err.io_error().is_none());
    }

    #[test]
    fn test_create_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IrapError::create_failed("/tmp/out.irap", io);
        assert!(err.to_string().starts_with("failed to create /tmp/out.irap"));
        assert_eq!(
            err.io_error().map(|e| e.kind()),
            Some(std::io::ErrorKind::PermissionDenied)
        );
    }
}
