//! Error types for sign-corpus crate.

use thiserror::Error;

/// Errors that can occur in corpus operations.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A class index outside the unified taxonomy.
    #[error("class index out of range: {0} (unified taxonomy has {count} classes)", count = crate::CLASS_COUNT)]
    ClassOutOfRange(usize),

    /// Images in one bucket do not share dimensions.
    #[error(
        "shape mismatch in class {class}: expected {expected_height}x{expected_width}x{expected_channels}, \
         found {found_height}x{found_width}x{found_channels}"
    )]
    ShapeMismatch {
        /// Offending unified class index.
        class: usize,
        /// Expected height.
        expected_height: usize,
        /// Expected width.
        expected_width: usize,
        /// Expected channel count.
        expected_channels: usize,
        /// Found height.
        found_height: usize,
        /// Found width.
        found_width: usize,
        /// Found channel count.
        found_channels: usize,
    },

    /// Invalid split fraction.
    #[error("invalid split fraction: {0} (must be in (0, 1))")]
    InvalidSplitRatio(f32),

    /// IO error while reading or writing the on-disk layout.
    #[error("IO error: {0}")]
    Io(String),

    /// Image encode/decode error in the on-disk layout.
    #[error("codec error: {0}")]
    Codec(String),

    /// Pixmap construction error.
    #[error("image error: {0}")]
    Image(String),
}

impl CorpusError {
    /// Creates a shape mismatch error from two shapes.
    #[must_use]
    pub const fn shape_mismatch(
        class: usize,
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            class,
            expected_height: expected.0,
            expected_width: expected.1,
            expected_channels: expected.2,
            found_height: found.0,
            found_width: found.1,
            found_channels: found.2,
        }
    }

    /// Creates an IO error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    /// Creates a codec error.
    #[must_use]
    pub fn codec(reason: impl Into<String>) -> Self {
        Self::Codec(reason.into())
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<image::ImageError> for CorpusError {
    fn from(err: image::ImageError) -> Self {
        Self::Codec(err.to_string())
    }
}

impl From<sign_image::ImageError> for CorpusError {
    fn from(err: sign_image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

/// Result type for sign-corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
