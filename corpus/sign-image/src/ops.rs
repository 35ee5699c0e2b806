//! Pure image transforms.
//!
//! Every function here is total over valid pixmaps and returns a new
//! [`Pixmap`], leaving the input untouched. [`flip_horizontal`],
//! [`flip_vertical`] and [`rotate180`] are involutive: applying them twice
//! returns the original image, which the augmentation engine relies on.

// Pixel coordinates fit comfortably in f32 and back
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::pixmap::Pixmap;

/// Mirrors an image left-to-right.
///
/// # Example
///
/// ```
/// use sign_image::{ops, Pixmap};
///
/// let img = Pixmap::new(vec![1.0, 2.0, 3.0], 1, 3, 1).unwrap();
/// let out = ops::flip_horizontal(&img);
/// assert_eq!(out.data(), &[3.0, 2.0, 1.0]);
/// ```
#[must_use]
pub fn flip_horizontal(image: &Pixmap) -> Pixmap {
    let (h, w, c) = image.shape();
    let mut out = image.clone();
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                out.set(y, x, ch, image.get(y, w - 1 - x, ch));
            }
        }
    }
    out
}

/// Mirrors an image top-to-bottom.
#[must_use]
pub fn flip_vertical(image: &Pixmap) -> Pixmap {
    let (h, w, c) = image.shape();
    let mut out = image.clone();
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                out.set(y, x, ch, image.get(h - 1 - y, x, ch));
            }
        }
    }
    out
}

/// Rotates an image by exactly 180 degrees.
///
/// Equivalent to flipping both axes; exact for any image shape.
#[must_use]
pub fn rotate180(image: &Pixmap) -> Pixmap {
    let (h, w, c) = image.shape();
    let mut out = image.clone();
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                out.set(y, x, ch, image.get(h - 1 - y, w - 1 - x, ch));
            }
        }
    }
    out
}

/// Rotates an image by an arbitrary angle in degrees.
///
/// Positive angles rotate counterclockwise. Any real angle is accepted,
/// including negative and values beyond 360; the angle is normalized
/// modulo 360 first. Output has the same shape as the input; corners that
/// rotate out of frame are lost and uncovered pixels are filled with zero.
///
/// Multiples of 180, and multiples of 90 on square images, take exact
/// paths with no resampling. Other angles use nearest-neighbor sampling.
#[must_use]
pub fn rotate(image: &Pixmap, angle_degrees: f32) -> Pixmap {
    let angle = angle_degrees.rem_euclid(360.0);
    if angle == 0.0 {
        return image.clone();
    }
    if angle == 180.0 {
        return rotate180(image);
    }
    let (h, w, c) = image.shape();
    if (angle == 90.0 || angle == 270.0) && h == w {
        return rotate_square_quarter(image, angle == 90.0);
    }

    let mut out = Pixmap::filled(h, w, c, 0.0);
    let rad = angle.to_radians();
    let (sin, cos) = rad.sin_cos();
    let cy = (h as f32 - 1.0) / 2.0;
    let cx = (w as f32 - 1.0) / 2.0;

    for y in 0..h {
        let dy = y as f32 - cy;
        for x in 0..w {
            let dx = x as f32 - cx;
            // Inverse mapping: source position for this output pixel.
            let sx = cos.mul_add(dx, -sin * dy) + cx;
            let sy = sin.mul_add(dx, cos * dy) + cy;
            let sxr = sx.round();
            let syr = sy.round();
            if sxr < 0.0 || syr < 0.0 || sxr >= w as f32 || syr >= h as f32 {
                continue;
            }
            for ch in 0..c {
                out.set(y, x, ch, image.get(syr as usize, sxr as usize, ch));
            }
        }
    }
    out
}

/// Exact quarter-turn for square images.
fn rotate_square_quarter(image: &Pixmap, counterclockwise: bool) -> Pixmap {
    let (n, _, c) = image.shape();
    let mut out = image.clone();
    for y in 0..n {
        for x in 0..n {
            for ch in 0..c {
                let value = if counterclockwise {
                    image.get(x, n - 1 - y, ch)
                } else {
                    image.get(n - 1 - x, y, ch)
                };
                out.set(y, x, ch, value);
            }
        }
    }
    out
}

/// Resizes an image to `width x height` with bilinear interpolation.
///
/// # Example
///
/// ```
/// use sign_image::{ops, Pixmap};
///
/// let img = Pixmap::filled(64, 48, 3, 100.0);
/// let out = ops::resize(&img, 32, 32);
/// assert_eq!(out.shape(), (32, 32, 3));
/// ```
#[must_use]
pub fn resize(image: &Pixmap, width: usize, height: usize) -> Pixmap {
    let (src_h, src_w, c) = image.shape();
    if src_h == height && src_w == width {
        return image.clone();
    }
    let mut out = Pixmap::filled(height.max(1), width.max(1), c, 0.0);
    let (out_h, out_w, _) = out.shape();

    let scale_y = src_h as f32 / out_h as f32;
    let scale_x = src_w as f32 / out_w as f32;

    for y in 0..out_h {
        let sy = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, src_h as f32 - 1.0);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src_h - 1);
        let ty = sy - y0 as f32;
        for x in 0..out_w {
            let sx = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, src_w as f32 - 1.0);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_w - 1);
            let tx = sx - x0 as f32;
            for ch in 0..c {
                let top = image.get(y0, x0, ch) * (1.0 - tx) + image.get(y0, x1, ch) * tx;
                let bottom = image.get(y1, x0, ch) * (1.0 - tx) + image.get(y1, x1, ch) * tx;
                out.set(y, x, ch, top * (1.0 - ty) + bottom * ty);
            }
        }
    }
    out
}

/// Converts an RGB image to single-channel grayscale using weighted luma
/// (`0.299 R + 0.587 G + 0.114 B`).
///
/// Single-channel input is returned unchanged.
#[must_use]
pub fn to_grayscale(image: &Pixmap) -> Pixmap {
    let (h, w, c) = image.shape();
    if c == 1 {
        return image.clone();
    }
    let mut out = Pixmap::filled(h, w, 1, 0.0);
    for y in 0..h {
        for x in 0..w {
            let luma = 0.299 * image.get(y, x, 0)
                + 0.587 * image.get(y, x, 1)
                + 0.114 * image.get(y, x, 2);
            out.set(y, x, 0, luma);
        }
    }
    out
}

/// Rescales pixel values from `0..=255` to `0..=1`.
#[must_use]
pub fn normalize(image: &Pixmap) -> Pixmap {
    let mut out = image.clone();
    for v in &mut out.data {
        *v /= 255.0;
    }
    out
}

const EQUALIZE_BINS: usize = 256;

/// Applies histogram equalization over the whole image.
///
/// Builds a 256-bin histogram spanning the image's value range, remaps each
/// value through the cumulative distribution scaled to `0..=255`, with
/// linear interpolation between bin edges. All channels share one
/// histogram. A constant image is returned unchanged.
#[must_use]
pub fn equalize_histogram(image: &Pixmap) -> Pixmap {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in image.data() {
        min = min.min(v);
        max = max.max(v);
    }
    if max <= min {
        return image.clone();
    }
    let bin_width = (max - min) / EQUALIZE_BINS as f32;

    let mut counts = [0usize; EQUALIZE_BINS];
    for &v in image.data() {
        let bin = (((v - min) / bin_width) as usize).min(EQUALIZE_BINS - 1);
        counts[bin] += 1;
    }

    // CDF scaled so the last bin maps to 255.
    let total = image.len() as f32;
    let mut cdf = [0.0f32; EQUALIZE_BINS];
    let mut cumulative = 0usize;
    for (bin, &count) in counts.iter().enumerate() {
        cumulative += count;
        cdf[bin] = 255.0 * cumulative as f32 / total;
    }

    let mut out = image.clone();
    for v in &mut out.data {
        let pos = (*v - min) / bin_width;
        let bin = (pos as usize).min(EQUALIZE_BINS - 1);
        *v = if bin == EQUALIZE_BINS - 1 {
            cdf[bin]
        } else {
            let t = pos - bin as f32;
            (cdf[bin + 1] - cdf[bin]).mul_add(t, cdf[bin])
        };
    }
    out
}
