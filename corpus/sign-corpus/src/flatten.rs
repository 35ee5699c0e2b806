//! Corpus flattening for the training loop.

use serde::{Deserialize, Serialize};
use sign_image::Pixmap;

use crate::corpus::UnifiedCorpus;
use crate::error::{CorpusError, Result};

/// A corpus flattened to parallel `(images, labels)` sequences.
///
/// Label `i` appears once per image of bucket `i`, in bucket order, images
/// within a bucket in their existing order. Every image shares one shape,
/// recorded in [`FlatDataset::shape`], so the consumer can stack them into
/// a single dense array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDataset {
    /// Images, in bucket order.
    pub images: Vec<Pixmap>,

    /// Unified class labels, parallel to `images`. Each is in `0..93`.
    pub labels: Vec<u32>,

    /// Common `(height, width, channels)` of every image.
    pub shape: (usize, usize, usize),
}

impl FlatDataset {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the dataset holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Splits into the parallel `(images, labels)` pair.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_parts(self) -> (Vec<Pixmap>, Vec<u32>) {
        (self.images, self.labels)
    }
}

/// Flattens a corpus into parallel image and label sequences.
///
/// # Errors
///
/// Returns [`CorpusError::ShapeMismatch`] naming the offending class if any
/// image's shape differs from the rest - the eventual array stack requires
/// uniform dimensions, so a mismatch means a missed resize upstream.
///
/// # Example
///
/// ```
/// use sign_corpus::{flatten, UnifiedCorpus};
/// use sign_image::Pixmap;
///
/// let mut corpus = UnifiedCorpus::new();
/// corpus.append(2, Pixmap::filled(4, 4, 1, 0.0)).unwrap();
/// corpus.append(5, Pixmap::filled(4, 4, 1, 0.0)).unwrap();
///
/// let flat = flatten(corpus).unwrap();
/// assert_eq!(flat.labels, vec![2, 5]);
/// assert_eq!(flat.shape, (4, 4, 1));
/// ```
pub fn flatten(corpus: UnifiedCorpus) -> Result<FlatDataset> {
    let mut images = Vec::with_capacity(corpus.total());
    let mut labels = Vec::with_capacity(corpus.total());
    let mut shape: Option<(usize, usize, usize)> = None;

    for (class, bucket) in corpus.into_buckets().into_iter().enumerate() {
        for image in bucket {
            let expected = *shape.get_or_insert_with(|| image.shape());
            if image.shape() != expected {
                return Err(CorpusError::shape_mismatch(class, expected, image.shape()));
            }
            images.push(image);
            #[allow(clippy::cast_possible_truncation)]
            labels.push(class as u32);
        }
    }

    Ok(FlatDataset {
        images,
        labels,
        shape: shape.unwrap_or((0, 0, 0)),
    })
}
