//! Flat-buffer image type.

use serde::{Deserialize, Serialize};

use crate::error::{ImageError, Result};

/// A decoded image in HWC (Height-Width-Channel) layout.
///
/// Pixel values are `f32` in `0..=255` for raw images; preprocessing may
/// rescale them to `0..=1`. Channels are 3 (RGB) or 1 (grayscale).
///
/// The invariant `data.len() == height * width * channels` holds for every
/// constructed pixmap; the fields are private to protect it.
///
/// # Example
///
/// ```
/// use sign_image::Pixmap;
///
/// let img = Pixmap::new(vec![0.0; 2 * 3 * 3], 2, 3, 3).unwrap();
/// assert_eq!(img.shape(), (2, 3, 3));
/// assert_eq!(img.len(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pixmap {
    pub(crate) data: Vec<f32>,
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) channels: usize,
}

impl Pixmap {
    /// Creates a pixmap from a flat HWC buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero, the channel count is not
    /// 1 or 3, or the buffer length does not equal
    /// `height * width * channels`.
    pub fn new(data: Vec<f32>, height: usize, width: usize, channels: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(ImageError::invalid_dimensions(height, width));
        }
        if channels != 1 && channels != 3 {
            return Err(ImageError::UnsupportedChannels(channels));
        }
        let expected = height * width * channels;
        if data.len() != expected {
            return Err(ImageError::length_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            height,
            width,
            channels,
        })
    }

    /// Creates a pixmap with every value set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are invalid (test/fixture helper; use
    /// [`Pixmap::new`] for untrusted input).
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn filled(height: usize, width: usize, channels: usize, value: f32) -> Self {
        Self::new(vec![value; height * width * channels], height, width, channels).unwrap()
    }

    /// Returns `(height, width, channels)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of channels (1 or 3).
    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Total number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the pixmap holds no values.
    ///
    /// Never true for a constructed pixmap; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if this is a single-channel image.
    #[must_use]
    pub const fn is_grayscale(&self) -> bool {
        self.channels == 1
    }

    /// The flat HWC buffer.
    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the pixmap, returning the flat buffer.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Value at row `y`, column `x`, channel `c`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, y: usize, x: usize, c: usize) -> f32 {
        assert!(y < self.height && x < self.width && c < self.channels);
        self.data[(y * self.width + x) * self.channels + c]
    }

    pub(crate) fn set(&mut self, y: usize, x: usize, c: usize, value: f32) {
        self.data[(y * self.width + x) * self.channels + c] = value;
    }
}
