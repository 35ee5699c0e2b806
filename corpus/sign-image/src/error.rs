//! Error types for sign-image crate.

use thiserror::Error;

/// Errors that can occur when constructing pixmaps.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Buffer length does not match the declared dimensions.
    #[error("buffer length mismatch: expected {expected} values, got {found}")]
    LengthMismatch {
        /// Expected length (`height * width * channels`).
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// Image has a zero dimension.
    #[error("invalid image dimensions: {height}x{width}")]
    InvalidDimensions {
        /// Height in pixels.
        height: usize,
        /// Width in pixels.
        width: usize,
    },

    /// Unsupported channel count.
    #[error("unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(usize),
}

impl ImageError {
    /// Creates a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }

    /// Creates an invalid dimensions error.
    #[must_use]
    pub const fn invalid_dimensions(height: usize, width: usize) -> Self {
        Self::InvalidDimensions { height, width }
    }
}

/// Result type for sign-image operations.
pub type Result<T> = std::result::Result<T, ImageError>;
