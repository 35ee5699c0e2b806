//! Canonical on-disk corpus layout.
//!
//! A materialized corpus is one directory per unified class, zero-padded to
//! five digits (`00000`..`00092`), each containing zero-padded five-digit
//! JPEG files (`00000.jpg`, ...). Writing then reading reproduces the same
//! per-class sample counts; JPEG is lossy and file order is not part of the
//! contract.

use std::fs;
use std::path::Path;

use sign_image::Pixmap;

use crate::corpus::{UnifiedCorpus, CLASS_COUNT};
use crate::error::{CorpusError, Result};

/// Writes a corpus to `dir` in the canonical layout.
///
/// Intended for raw corpora with pixel values in `0..=255`; values are
/// rounded and clamped to bytes. Existing class directories are reused.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or an image cannot be
/// encoded.
pub fn write_corpus(corpus: &UnifiedCorpus, dir: &Path) -> Result<()> {
    for (class, bucket) in corpus.iter_buckets() {
        let class_dir = dir.join(format!("{class:05}"));
        fs::create_dir_all(&class_dir)?;

        for (index, pixmap) in bucket.iter().enumerate() {
            let path = class_dir.join(format!("{index:05}.jpg"));
            encode_jpeg(pixmap, &path)?;
        }
    }
    Ok(())
}

/// Reads a corpus previously written by [`write_corpus`].
///
/// Files within each class directory are visited in name order so repeated
/// reads of the same tree agree, though order across a write/read
/// round-trip is not guaranteed.
///
/// # Errors
///
/// Returns an error if a class directory is missing or a file cannot be
/// decoded.
pub fn read_corpus(dir: &Path) -> Result<UnifiedCorpus> {
    let mut corpus = UnifiedCorpus::new();

    for class in 0..CLASS_COUNT {
        let class_dir = dir.join(format!("{class:05}"));
        if !class_dir.is_dir() {
            return Err(CorpusError::io(format!(
                "missing class directory: {}",
                class_dir.display()
            )));
        }

        let mut paths: Vec<_> = fs::read_dir(&class_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        for path in paths {
            corpus.append(class, decode_jpeg(&path)?)?;
        }
    }
    Ok(corpus)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_jpeg(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let (h, w, c) = pixmap.shape();
    let bytes: Vec<u8> = pixmap
        .data()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    let (width, height) = (w as u32, h as u32);
    if c == 1 {
        let img = image::GrayImage::from_raw(width, height, bytes)
            .ok_or_else(|| CorpusError::codec("gray buffer size mismatch"))?;
        img.save(path)?;
    } else {
        let img = image::RgbImage::from_raw(width, height, bytes)
            .ok_or_else(|| CorpusError::codec("rgb buffer size mismatch"))?;
        img.save(path)?;
    }
    Ok(())
}

fn decode_jpeg(path: &Path) -> Result<Pixmap> {
    let decoded = image::open(path)?;
    let pixmap = match decoded {
        image::DynamicImage::ImageLuma8(img) => {
            let (w, h) = img.dimensions();
            let data = img.into_raw().into_iter().map(f32::from).collect();
            Pixmap::new(data, h as usize, w as usize, 1)?
        }
        other => {
            let img = other.to_rgb8();
            let (w, h) = img.dimensions();
            let data = img.into_raw().into_iter().map(f32::from).collect();
            Pixmap::new(data, h as usize, w as usize, 3)?
        }
    };
    Ok(pixmap)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn gradient(height: usize, width: usize) -> Pixmap {
        #[allow(clippy::cast_precision_loss)]
        let data: Vec<f32> = (0..height * width * 3)
            .map(|i| (i % 256) as f32)
            .collect();
        Pixmap::new(data, height, width, 3).unwrap()
    }

    #[test]
    fn store_round_trip_preserves_counts() {
        let mut corpus = UnifiedCorpus::new();
        for _ in 0..3 {
            corpus.append(2, gradient(8, 8)).unwrap();
        }
        corpus.append(67, gradient(16, 8)).unwrap();

        let dir = tempdir().unwrap();
        write_corpus(&corpus, dir.path()).unwrap();
        let loaded = read_corpus(dir.path()).unwrap();

        assert_eq!(loaded.sizes(), corpus.sizes());
        assert_eq!(loaded.bucket(67)[0].shape(), (16, 8, 3));
    }

    #[test]
    fn store_writes_padded_layout() {
        let mut corpus = UnifiedCorpus::new();
        corpus.append(5, gradient(4, 4)).unwrap();

        let dir = tempdir().unwrap();
        write_corpus(&corpus, dir.path()).unwrap();

        assert!(dir.path().join("00005").join("00000.jpg").is_file());
        assert!(dir.path().join("00092").is_dir());
    }

    #[test]
    fn store_grayscale_round_trip() {
        let mut corpus = UnifiedCorpus::new();
        corpus.append(0, Pixmap::filled(8, 8, 1, 120.0)).unwrap();

        let dir = tempdir().unwrap();
        write_corpus(&corpus, dir.path()).unwrap();
        let loaded = read_corpus(dir.path()).unwrap();

        assert_eq!(loaded.bucket(0).len(), 1);
        assert_eq!(loaded.bucket(0)[0].channels(), 1);
    }

    #[test]
    fn read_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let err = read_corpus(dir.path()).unwrap_err();
        assert!(matches!(err, CorpusError::Io(_)));
    }
}
