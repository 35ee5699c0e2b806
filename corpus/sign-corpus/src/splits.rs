//! Stratified corpus splitting.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::corpus::UnifiedCorpus;
use crate::error::{CorpusError, Result};

/// Policy for sizing the minor part of a per-class split.
///
/// Both variants are applied independently per class (stratified), so each
/// class contributes proportionally to every partition regardless of its
/// raw population.
///
/// # Example
///
/// ```
/// use sign_corpus::SplitStrategy;
///
/// assert_eq!(SplitStrategy::Fraction(0.1).minor_count(20), 2);
/// assert_eq!(SplitStrategy::FixedTenth.minor_count(25), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Minor part takes `floor(n * fraction)` samples; fraction must be
    /// in `(0, 1)`.
    Fraction(f32),

    /// Legacy integer variant: minor part takes `n / 10` samples.
    FixedTenth,
}

impl SplitStrategy {
    /// Number of samples the minor part takes from a bucket of size `n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn minor_count(&self, n: usize) -> usize {
        match self {
            Self::Fraction(ratio) => (n as f32 * ratio) as usize,
            Self::FixedTenth => n / 10,
        }
    }

    /// Validates the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::InvalidSplitRatio`] for a fraction outside
    /// `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Fraction(ratio) if !(*ratio > 0.0 && *ratio < 1.0) => {
                Err(CorpusError::InvalidSplitRatio(*ratio))
            }
            _ => Ok(()),
        }
    }
}

/// Splits a corpus into `(minor, major)` parts with exact per-class
/// stratification and reproducible randomness.
///
/// Each bucket is shuffled with its own `ChaCha8Rng` seeded from
/// `seed.wrapping_add(class)`, so the shuffle depends only on the seed and
/// the bucket's content - never on how many splits ran before. The minor
/// part takes the first `strategy.minor_count(n)` shuffled samples, the
/// major part the rest. Empty buckets yield two empty buckets.
///
/// # Errors
///
/// Returns an error if the strategy is invalid.
///
/// # Example
///
/// ```
/// use sign_corpus::{split_corpus, SplitStrategy, UnifiedCorpus};
/// use sign_image::Pixmap;
///
/// let mut corpus = UnifiedCorpus::new();
/// for _ in 0..10 {
///     corpus.append(0, Pixmap::filled(2, 2, 1, 0.0)).unwrap();
/// }
///
/// let (minor, major) = split_corpus(corpus, SplitStrategy::Fraction(0.2), 7).unwrap();
/// assert_eq!(minor.bucket(0).len(), 2);
/// assert_eq!(major.bucket(0).len(), 8);
/// ```
pub fn split_corpus(
    corpus: UnifiedCorpus,
    strategy: SplitStrategy,
    seed: u64,
) -> Result<(UnifiedCorpus, UnifiedCorpus)> {
    strategy.validate()?;

    let mut minor = Vec::with_capacity(crate::CLASS_COUNT);
    let mut major = Vec::with_capacity(crate::CLASS_COUNT);

    for (class, mut bucket) in corpus.into_buckets().into_iter().enumerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(class as u64));
        bucket.shuffle(&mut rng);

        let take = strategy.minor_count(bucket.len());
        let rest = bucket.split_off(take);
        minor.push(bucket);
        major.push(rest);
    }

    Ok((
        UnifiedCorpus::from_buckets(minor),
        UnifiedCorpus::from_buckets(major),
    ))
}
