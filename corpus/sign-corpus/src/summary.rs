//! Corpus population statistics.

use serde::{Deserialize, Serialize};

use crate::corpus::{UnifiedCorpus, CLASS_COUNT};

/// Per-class population summary of a corpus.
///
/// Useful for validating the merge (which classes stayed empty, which are
/// under-populated before augmentation) and for logging stage boundaries.
///
/// # Example
///
/// ```
/// use sign_corpus::{CorpusSummary, UnifiedCorpus};
/// use sign_image::Pixmap;
///
/// let mut corpus = UnifiedCorpus::new();
/// corpus.append(12, Pixmap::filled(2, 2, 1, 0.0)).unwrap();
///
/// let summary = CorpusSummary::from_corpus(&corpus);
/// assert_eq!(summary.total_samples, 1);
/// assert_eq!(summary.empty_classes, 92);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Sample count per unified class, in class order.
    pub per_class: Vec<usize>,

    /// Total number of samples.
    pub total_samples: usize,

    /// Number of classes with no samples.
    pub empty_classes: usize,

    /// Smallest populated bucket as `(class, count)`, if any bucket is
    /// populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_populated: Option<(usize, usize)>,

    /// Largest bucket as `(class, count)`, if any bucket is populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_populated: Option<(usize, usize)>,
}

impl CorpusSummary {
    /// Builds a summary from a corpus.
    #[must_use]
    pub fn from_corpus(corpus: &UnifiedCorpus) -> Self {
        Self::from_counts(corpus.sizes())
    }

    /// Returns `true` if the corpus held no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_samples == 0
    }

    /// Combines two summaries as if their corpora had been merged.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_counts(
            self.per_class
                .iter()
                .zip(&other.per_class)
                .map(|(a, b)| a + b)
                .collect(),
        )
    }

    fn from_counts(per_class: Vec<usize>) -> Self {
        let total_samples = per_class.iter().sum();
        let empty_classes = per_class.iter().filter(|&&n| n == 0).count();

        let mut min_populated: Option<(usize, usize)> = None;
        let mut max_populated: Option<(usize, usize)> = None;
        for (class, &count) in per_class.iter().enumerate() {
            if count == 0 {
                continue;
            }
            if min_populated.map_or(true, |(_, best)| count < best) {
                min_populated = Some((class, count));
            }
            if max_populated.map_or(true, |(_, best)| count > best) {
                max_populated = Some((class, count));
            }
        }

        Self {
            per_class,
            total_samples,
            empty_classes,
            min_populated,
            max_populated,
        }
    }

    /// Classes with fewer than `threshold` samples (including empty ones).
    #[must_use]
    pub fn classes_below(&self, threshold: usize) -> Vec<usize> {
        self.per_class
            .iter()
            .enumerate()
            .filter(|(_, &n)| n < threshold)
            .map(|(class, _)| class)
            .collect()
    }

    /// Returns a human-readable report.
    #[must_use]
    #[allow(clippy::let_underscore_must_use)] // String::write_fmt is infallible
    pub fn to_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        let _ = writeln!(report, "Corpus Summary");
        let _ = writeln!(report, "==============");
        let _ = writeln!(report, "Total samples: {}", self.total_samples);
        let _ = writeln!(
            report,
            "Populated classes: {} / {CLASS_COUNT}",
            CLASS_COUNT - self.empty_classes
        );
        if let Some((class, count)) = self.min_populated {
            let _ = writeln!(report, "Smallest class: {class} ({count} samples)");
        }
        if let Some((class, count)) = self.max_populated {
            let _ = writeln!(report, "Largest class: {class} ({count} samples)");
        }
        for (class, &count) in self.per_class.iter().enumerate() {
            if count > 0 {
                let _ = writeln!(report, "  Class {class:05}: {count}");
            }
        }
        report
    }
}
