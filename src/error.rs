//! Error types for icon rendering and export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while rendering or writing icons.
#[derive(Error, Debug)]
pub enum IconError {
    /// The requested size cannot produce an icon.
    ///
    /// Raised before any canvas is allocated.
    #[error("invalid icon size {size}: {reason}")]
    InvalidArgument { size: i64, reason: &'static str },

    /// The output directory could not be created, or a file inside it
    /// could not be written.
    #[error("output location {} is unavailable: {source}", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The PNG encoder rejected the rendered canvas.
    #[error("failed to encode {size}x{size} icon: {source}")]
    EncodingFailure {
        size: u32,
        #[source]
        source: image::ImageError,
    },

    /// A style profile contained a value that could not be interpreted.
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

impl IconError {
    pub(crate) fn invalid_size(size: i64, reason: &'static str) -> Self {
        Self::InvalidArgument { size, reason }
    }

    pub(crate) fn directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnavailable {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message() {
        let err = IconError::invalid_size(-5, "size must be positive");
        assert_eq!(err.to_string(), "invalid icon size -5: size must be positive");
    }

    #[test]
    fn directory_error_keeps_source() {
        use std::error::Error as _;

        let err = IconError::directory(
            "icons",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("icons"));
        assert!(err.source().is_some());
    }
}
