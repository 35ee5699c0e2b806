//! Pixmap type and pure image transforms for the sign corpus pipeline.
//!
//! This crate provides the primitive image capability the rest of the
//! pipeline builds on:
//!
//! - [`Pixmap`] - a flat `f32` image buffer in HWC layout
//! - [`ops`] - pure, total transforms (flips, rotation, resize, grayscale,
//!   histogram equalization, normalization)
//!
//! # Pixel Convention
//!
//! Pixel values are stored as `f32` in `0..=255` until [`ops::normalize`]
//! rescales them to `0..=1`. Images are either 3-channel RGB or 1-channel
//! grayscale.
//!
//! # Layer 0 Crate
//!
//! No I/O, no codecs, no global state. Every transform is a pure function
//! from one [`Pixmap`] to a new one.
//!
//! # Example
//!
//! ```
//! use sign_image::{ops, Pixmap};
//!
//! let img = Pixmap::filled(4, 4, 3, 128.0);
//! let flipped = ops::flip_horizontal(&img);
//! assert_eq!(flipped.shape(), (4, 4, 3));
//!
//! // Horizontal flip is involutive
//! assert_eq!(ops::flip_horizontal(&flipped), img);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
pub mod ops;
mod pixmap;

pub use error::{ImageError, Result};
pub use pixmap::Pixmap;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{ops, ImageError, Pixmap};
}
