//! Stage orchestration.

use serde::{Deserialize, Serialize};
use sign_augment::AugmentationEngine;
use sign_corpus::{flatten, split_corpus, FlatDataset, SplitStrategy, UnifiedCorpus};
use sign_image::{ops, Pixmap};
use sign_taxonomy::{route_samples, RoutingReport, SourceDataset};
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::Result;

/// The three flat partitions produced by a pipeline run.
///
/// Synthetic samples only ever appear in `train`; `validation` and `test`
/// are cut before augmentation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionedDataset {
    /// Training partition, augmented when the config asks for it.
    pub train: FlatDataset,

    /// Validation partition.
    pub validation: FlatDataset,

    /// Held-out test partition.
    pub test: FlatDataset,
}

/// Routes labeled source samples from one or more datasets into a fresh
/// unified corpus.
///
/// Each batch is `(dataset, samples)` where every sample is a
/// `(image, raw_label)` pair using the dataset's native label scheme.
/// Unmapped labels are dropped and counted; malformed or out-of-range
/// labels are fatal.
///
/// # Errors
///
/// Returns [`PipelineError::Taxonomy`](crate::PipelineError::Taxonomy) on
/// an unparseable or out-of-range source label.
///
/// # Example
///
/// ```
/// use sign_image::Pixmap;
/// use sign_pipeline::ingest;
/// use sign_taxonomy::SourceDataset;
///
/// let samples = vec![(Pixmap::filled(4, 4, 3, 0.0), "34".to_string())];
/// let (corpus, report) = ingest(vec![(SourceDataset::Belgian, samples)]).unwrap();
///
/// assert_eq!(report.routed, 1);
/// assert_eq!(corpus.bucket(67).len(), 1);
/// ```
pub fn ingest<I>(
    batches: impl IntoIterator<Item = (SourceDataset, I)>,
) -> Result<(UnifiedCorpus, RoutingReport)>
where
    I: IntoIterator<Item = (Pixmap, String)>,
{
    let mut corpus = UnifiedCorpus::new();
    let mut report = RoutingReport::default();

    for (dataset, samples) in batches {
        let batch = route_samples(&mut corpus, dataset.mapping(), samples)?;
        info!(
            dataset = %dataset,
            routed = batch.routed,
            dropped = batch.dropped,
            "Routed source dataset"
        );
        report = report.merge(&batch);
    }
    Ok((corpus, report))
}

/// Runs the full pipeline over a unified corpus.
///
/// Stages, in order: resize to `config.input_size`, optional grayscale,
/// optional histogram equalization, normalization to `[0, 1]`, test cut
/// (seed), validation cut (seed + 1), augmentation of the training
/// remainder only, then flattening of all three partitions.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any stage fails;
/// no partial result crosses a stage boundary.
pub fn run(corpus: UnifiedCorpus, config: &PipelineConfig) -> Result<PartitionedDataset> {
    config.validate()?;

    let (width, height) = config.input_size;
    let total = corpus.total();
    let corpus = corpus.map(|image| preprocess(image, config));
    info!(
        samples = total,
        width,
        height,
        grayscale = config.grayscale,
        equalize = config.equalize,
        "Preprocessed corpus"
    );

    let (test, rest) = split_corpus(
        corpus,
        SplitStrategy::Fraction(config.test_ratio),
        config.seed,
    )?;
    info!(
        test = test.total(),
        remaining = rest.total(),
        "Cut test partition"
    );

    let (validation, train) = split_corpus(
        rest,
        SplitStrategy::Fraction(config.validation_ratio),
        config.seed.wrapping_add(1),
    )?;
    info!(
        validation = validation.total(),
        train = train.total(),
        "Cut validation partition"
    );

    let train = if config.augment {
        let originals = train.total();
        let engine = AugmentationEngine::with_default_rules()?;
        let train = engine.apply(train);
        info!(
            originals,
            augmented = train.total(),
            "Augmented training partition"
        );
        train
    } else {
        train
    };

    Ok(PartitionedDataset {
        train: flatten(train)?,
        validation: flatten(validation)?,
        test: flatten(test)?,
    })
}

fn preprocess(image: &Pixmap, config: &PipelineConfig) -> Pixmap {
    let (width, height) = config.input_size;
    let mut image = ops::resize(image, width, height);
    if config.grayscale {
        image = ops::to_grayscale(&image);
    }
    if config.equalize {
        image = ops::equalize_histogram(&image);
    }
    ops::normalize(&image)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    /// A corpus of raw-range color samples, all in one class.
    fn single_class_corpus(class: usize, n: usize) -> UnifiedCorpus {
        let mut corpus = UnifiedCorpus::new();
        for i in 0..n {
            let value = (i % 256) as f32;
            corpus
                .append(class, Pixmap::filled(8, 8, 3, value))
                .unwrap();
        }
        corpus
    }

    #[test]
    fn run_rejects_invalid_config() {
        let config = PipelineConfig::default().with_test_ratio(2.0);
        let err = run(single_class_corpus(0, 10), &config).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidConfig { .. }));
    }

    #[test]
    fn run_partition_sizes() {
        // 20 samples in class 41: test takes 2, validation 1 of the
        // remaining 18, train keeps 17. Augmentation mirrors 41 into 42.
        let config = PipelineConfig::default();
        let partitions = run(single_class_corpus(41, 20), &config).unwrap();

        assert_eq!(partitions.test.images.len(), 2);
        assert_eq!(partitions.validation.images.len(), 1);
        assert_eq!(partitions.train.images.len(), 34);
    }

    #[test]
    fn run_no_leakage() {
        // Class 41 augments into class 42; the synthetics must stay out
        // of validation and test.
        let config = PipelineConfig::default();
        let partitions = run(single_class_corpus(41, 20), &config).unwrap();

        assert!(!partitions.validation.labels.contains(&42));
        assert!(!partitions.test.labels.contains(&42));
        assert_eq!(
            partitions.train.labels.iter().filter(|&&l| l == 42).count(),
            17
        );
    }

    #[test]
    fn run_without_augment() {
        let config = PipelineConfig::default().without_augment();
        let partitions = run(single_class_corpus(41, 20), &config).unwrap();

        assert_eq!(partitions.train.images.len(), 17);
        assert!(!partitions.train.labels.contains(&42));
    }

    #[test]
    fn run_output_shape() {
        let config = PipelineConfig::default();
        let partitions = run(single_class_corpus(5, 10), &config).unwrap();

        assert_eq!(partitions.train.shape, (32, 32, 1));
        for image in &partitions.train.images {
            assert_eq!(image.shape(), (32, 32, 1));
        }
    }

    #[test]
    fn run_color_shape() {
        let config = PipelineConfig::default().without_grayscale();
        let partitions = run(single_class_corpus(5, 10), &config).unwrap();
        assert_eq!(partitions.train.shape, (32, 32, 3));
    }

    #[test]
    fn run_normalizes_values() {
        let config = PipelineConfig::default().without_equalize();
        let partitions = run(single_class_corpus(5, 10), &config).unwrap();

        for image in &partitions.train.images {
            for &v in image.data() {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn run_is_reproducible() {
        let config = PipelineConfig::default().with_seed(9);
        let a = run(single_class_corpus(3, 30), &config).unwrap();
        let b = run(single_class_corpus(3, 30), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn run_differs_across_seeds() {
        let corpus = || {
            let mut corpus = UnifiedCorpus::new();
            for i in 0..30 {
                corpus
                    .append(3, Pixmap::filled(8, 8, 3, i as f32))
                    .unwrap();
            }
            corpus
        };

        let a = run(corpus(), &PipelineConfig::default().with_seed(1)).unwrap();
        let b = run(corpus(), &PipelineConfig::default().with_seed(2)).unwrap();
        assert_ne!(a.test, b.test);
    }

    #[test]
    fn ingest_routes_and_counts() {
        let samples = vec![
            (Pixmap::filled(4, 4, 3, 0.0), "34".to_string()), // -> 67
            (Pixmap::filled(4, 4, 3, 0.0), "7".to_string()),  // unmapped
        ];
        let (corpus, report) = ingest(vec![(SourceDataset::Belgian, samples)]).unwrap();

        assert_eq!(report.routed, 1);
        assert_eq!(report.dropped, 1);
        assert_eq!(corpus.bucket(67).len(), 1);
    }

    #[test]
    fn ingest_merges_batches() {
        let german = vec![(Pixmap::filled(4, 4, 3, 0.0), "0".to_string())];
        let czech = vec![(Pixmap::filled(4, 4, 3, 0.0), "0".to_string())];

        let (corpus, report) = ingest(vec![
            (SourceDataset::German, german),
            (SourceDataset::Czech, czech),
        ])
        .unwrap();

        assert_eq!(report.routed, 2);
        assert_eq!(corpus.total(), 2);
    }

    #[test]
    fn ingest_malformed_label_is_fatal() {
        let samples = vec![(Pixmap::filled(4, 4, 3, 0.0), "not-a-label".to_string())];
        let err = ingest(vec![(SourceDataset::German, samples)]).unwrap_err();
        assert!(matches!(err, PipelineError::Taxonomy(_)));
    }
}
