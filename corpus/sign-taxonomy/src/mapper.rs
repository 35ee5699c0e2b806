//! Sample routing into the unified corpus.

use serde::{Deserialize, Serialize};
use sign_corpus::UnifiedCorpus;
use sign_image::Pixmap;

use crate::error::{Result, TaxonomyError};
use crate::tables::TaxonomyMapping;

/// Counts from one routing pass.
///
/// Dropped samples are the documented silent-drop policy for unmapped
/// labels - counted for observability, never reported as failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingReport {
    /// Samples placed into a unified bucket.
    pub routed: usize,

    /// Samples whose source label has no unified equivalent.
    pub dropped: usize,
}

impl RoutingReport {
    /// Total samples seen.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.routed + self.dropped
    }

    /// Combines two reports, e.g. from a source's training and testing
    /// sub-splits.
    #[must_use]
    pub const fn merge(&self, other: &Self) -> Self {
        Self {
            routed: self.routed + other.routed,
            dropped: self.dropped + other.dropped,
        }
    }
}

/// Routes a stream of `(image, raw_label)` pairs into the corpus.
///
/// For each sample the raw label is parsed and validated against the
/// source's declared class count, then looked up in the mapping: a mapped
/// label appends the image, untransformed, to the mapped unified bucket;
/// an unmapped label drops the sample silently. Repeatable across multiple
/// physical sub-splits of one source - a dataset's training and testing
/// partitions are both folded into the same corpus via two passes.
///
/// # Errors
///
/// Returns [`TaxonomyError::DataFormat`] on the first syntactically invalid
/// label; the corpus may have been partially extended when this happens,
/// and callers abort the run for that dataset.
///
/// # Example
///
/// ```
/// use sign_corpus::UnifiedCorpus;
/// use sign_image::Pixmap;
/// use sign_taxonomy::{route_samples, SourceDataset};
///
/// let mut corpus = UnifiedCorpus::new();
/// let samples = vec![
///     (Pixmap::filled(2, 2, 3, 0.0), "17".to_string()), // -> class 0
///     (Pixmap::filled(2, 2, 3, 0.0), "7".to_string()),  // unmapped
/// ];
///
/// let report = route_samples(&mut corpus, SourceDataset::Belgian.mapping(), samples).unwrap();
/// assert_eq!(report.routed, 1);
/// assert_eq!(report.dropped, 1);
/// ```
pub fn route_samples<I>(
    corpus: &mut UnifiedCorpus,
    mapping: &TaxonomyMapping,
    samples: I,
) -> Result<RoutingReport>
where
    I: IntoIterator<Item = (Pixmap, String)>,
{
    let mut report = RoutingReport::default();

    for (image, raw_label) in samples {
        let label = mapping.parse_label(&raw_label)?;
        match mapping.lookup(label) {
            Some(unified) => {
                corpus.append(unified, image)?;
                report.routed += 1;
            }
            None => report.dropped += 1,
        }
    }
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::SourceDataset;

    fn sample(label: &str) -> (Pixmap, String) {
        (Pixmap::filled(2, 2, 3, 0.0), label.to_string())
    }

    #[test]
    fn routes_single_belgian_sample_to_class_67() {
        let mut corpus = UnifiedCorpus::new();
        let report =
            route_samples(&mut corpus, SourceDataset::Belgian.mapping(), vec![sample("34")])
                .unwrap();

        assert_eq!(report.routed, 1);
        assert_eq!(report.dropped, 0);
        assert_eq!(corpus.bucket(67).len(), 1);
        assert_eq!(corpus.total(), 1);
    }

    #[test]
    fn drops_unmapped_label_silently() {
        let mut corpus = UnifiedCorpus::new();
        // German 29 is unmapped by design
        let report =
            route_samples(&mut corpus, SourceDataset::German.mapping(), vec![sample("29")])
                .unwrap();

        assert_eq!(report.routed, 0);
        assert_eq!(report.dropped, 1);
        assert!(corpus.is_empty());
    }

    #[test]
    fn malformed_label_is_fatal() {
        let mut corpus = UnifiedCorpus::new();
        let err = route_samples(
            &mut corpus,
            SourceDataset::German.mapping(),
            vec![sample("not-a-label")],
        )
        .unwrap_err();

        assert!(matches!(err, TaxonomyError::DataFormat { .. }));
    }

    #[test]
    fn out_of_range_label_is_fatal() {
        let mut corpus = UnifiedCorpus::new();
        // Czech declares 17 classes
        let err =
            route_samples(&mut corpus, SourceDataset::Czech.mapping(), vec![sample("17")])
                .unwrap_err();

        assert!(matches!(err, TaxonomyError::DataFormat { .. }));
    }

    #[test]
    fn repeatable_across_sub_splits() {
        let mut corpus = UnifiedCorpus::new();
        let mapping = SourceDataset::Czech.mapping();

        // "Training" pass, then "testing" pass, both label 0 -> class 38
        let first = route_samples(&mut corpus, mapping, vec![sample("0"), sample("0")]).unwrap();
        let second = route_samples(&mut corpus, mapping, vec![sample("0")]).unwrap();

        let combined = first.merge(&second);
        assert_eq!(combined.routed, 3);
        assert_eq!(corpus.bucket(38).len(), 3);
    }

    #[test]
    fn many_to_one_routing_accumulates() {
        let mut corpus = UnifiedCorpus::new();
        let samples = (45..=50).map(|label| sample(&label.to_string())).collect::<Vec<_>>();
        let report =
            route_samples(&mut corpus, SourceDataset::Belgian.mapping(), samples).unwrap();

        assert_eq!(report.routed, 6);
        assert_eq!(corpus.bucket(85).len(), 6);
    }

    #[test]
    fn report_merge_and_total() {
        let a = RoutingReport {
            routed: 10,
            dropped: 2,
        };
        let b = RoutingReport {
            routed: 5,
            dropped: 1,
        };
        let merged = a.merge(&b);
        assert_eq!(merged.routed, 15);
        assert_eq!(merged.dropped, 3);
        assert_eq!(merged.total(), 18);
    }

    #[test]
    fn report_serialization() {
        let report = RoutingReport {
            routed: 3,
            dropped: 1,
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: RoutingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
