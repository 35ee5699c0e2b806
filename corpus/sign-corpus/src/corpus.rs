//! The unified per-class corpus.

use serde::{Deserialize, Serialize};
use sign_image::Pixmap;

use crate::error::{CorpusError, Result};

/// Number of classes in the unified taxonomy.
pub const CLASS_COUNT: usize = 93;

/// An ordered collection of per-class image buckets.
///
/// Bucket `i` holds every sample whose unified label is `i`; the label is
/// implicit in bucket position and never stored per sample. Buckets may be
/// empty - several unified classes stay under-populated until augmentation.
///
/// The corpus is appended to during construction and augmentation, and
/// passed by value across pipeline stages (each stage owns it exclusively).
///
/// # Example
///
/// ```
/// use sign_corpus::UnifiedCorpus;
/// use sign_image::Pixmap;
///
/// let mut corpus = UnifiedCorpus::new();
/// corpus.append(67, Pixmap::filled(4, 4, 3, 1.0)).unwrap();
///
/// assert_eq!(corpus.bucket(67).len(), 1);
/// assert_eq!(corpus.total(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedCorpus {
    buckets: Vec<Vec<Pixmap>>,
}

impl UnifiedCorpus {
    /// Creates an empty corpus with all 93 buckets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: (0..CLASS_COUNT).map(|_| Vec::new()).collect(),
        }
    }

    /// Appends an image to the bucket for `class`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::ClassOutOfRange`] if `class >= 93`.
    pub fn append(&mut self, class: usize, image: Pixmap) -> Result<()> {
        let bucket = self
            .buckets
            .get_mut(class)
            .ok_or(CorpusError::ClassOutOfRange(class))?;
        bucket.push(image);
        Ok(())
    }

    /// Builds a corpus directly from one bucket per class.
    ///
    /// The array length fixes the bucket count at compile time, so unlike
    /// [`UnifiedCorpus::append`] there is no class index to validate.
    #[must_use]
    pub fn from_class_buckets(buckets: [Vec<Pixmap>; CLASS_COUNT]) -> Self {
        Self {
            buckets: buckets.into(),
        }
    }

    /// The images of one class, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `class >= 93`; callers index with validated classes. Use
    /// [`UnifiedCorpus::get_bucket`] for unvalidated indices.
    #[must_use]
    pub fn bucket(&self, class: usize) -> &[Pixmap] {
        &self.buckets[class]
    }

    /// The images of one class, or `None` if `class` is out of range.
    #[must_use]
    pub fn get_bucket(&self, class: usize) -> Option<&[Pixmap]> {
        self.buckets.get(class).map(Vec::as_slice)
    }

    /// Per-class sample counts, in class order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    /// Total number of samples across all classes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no bucket holds any sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Bucket-wise union of two corpora.
    ///
    /// Within each bucket, `self`'s samples come first, then `other`'s.
    /// Used when merging augmented samples back with originals.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        for (bucket, extra) in self.buckets.iter_mut().zip(other.buckets) {
            bucket.extend(extra);
        }
        self
    }

    /// Applies a transform to every sample, preserving bucket membership
    /// and within-bucket order.
    #[must_use]
    pub fn map(self, f: impl Fn(&Pixmap) -> Pixmap) -> Self {
        Self {
            buckets: self
                .buckets
                .into_iter()
                .map(|bucket| bucket.iter().map(&f).collect())
                .collect(),
        }
    }

    /// Iterates over `(class, bucket)` pairs in class order.
    pub fn iter_buckets(&self) -> impl Iterator<Item = (usize, &[Pixmap])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(class, bucket)| (class, bucket.as_slice()))
    }

    /// Consumes the corpus, yielding the buckets in class order.
    pub(crate) fn into_buckets(self) -> Vec<Vec<Pixmap>> {
        self.buckets
    }

    pub(crate) fn from_buckets(buckets: Vec<Vec<Pixmap>>) -> Self {
        debug_assert_eq!(buckets.len(), CLASS_COUNT);
        Self { buckets }
    }
}

impl Default for UnifiedCorpus {
    fn default() -> Self {
        Self::new()
    }
}
