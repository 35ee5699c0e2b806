//! End-to-end corpus pipeline.
//!
//! Orchestrates the full path from raw labeled source samples to the three
//! flat partitions a trainer consumes:
//!
//! 1. [`ingest`] - route source-native labels into the 93-class unified
//!    corpus, dropping unmapped classes
//! 2. [`run`] - resize, optional grayscale and histogram equalization,
//!    normalize, cut test and validation partitions, augment the training
//!    remainder, flatten
//!
//! Splits are cut before augmentation, so no synthetic sample ever reaches
//! validation or test. Every stage emits a structured `tracing` event with
//! its sample counts.
//!
//! # Example
//!
//! ```
//! use sign_corpus::UnifiedCorpus;
//! use sign_image::Pixmap;
//! use sign_pipeline::{run, PipelineConfig};
//!
//! let mut corpus = UnifiedCorpus::new();
//! for _ in 0..20 {
//!     corpus.append(41, Pixmap::filled(8, 8, 3, 128.0)).unwrap();
//! }
//!
//! let partitions = run(corpus, &PipelineConfig::default()).unwrap();
//! assert_eq!(partitions.test.images.len(), 2);
//! assert_eq!(partitions.validation.images.len(), 1);
//! // 17 training originals, each mirrored into the paired class
//! assert_eq!(partitions.train.images.len(), 34);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod error;
mod pipeline;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{ingest, run, PartitionedDataset};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{ingest, run, PartitionedDataset, PipelineConfig, PipelineError};
}
