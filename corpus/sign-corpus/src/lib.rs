//! Unified per-class corpus for the sign pipeline.
//!
//! This crate provides the central data structure the pipeline threads
//! from stage to stage, plus the operations whose correctness is
//! load-bearing for evaluation validity:
//!
//! # Corpus Operations
//!
//! - [`UnifiedCorpus`] - 93 ordered per-class sample buckets
//! - [`split_corpus`] - seeded, stratified two-way split
//! - [`flatten`] - corpus to parallel `(images, labels)` sequences
//! - [`CorpusSummary`] - per-class population statistics
//!
//! # Disk Layout
//!
//! - [`write_corpus`] / [`read_corpus`] - the canonical on-disk form
//!   (one zero-padded directory per class holding JPEG files)
//!
//! # Layer 0 Crate
//!
//! No logging and no global state; randomness enters only through explicit
//! seeds so every split is reproducible.
//!
//! # Example
//!
//! ```
//! use sign_corpus::{split_corpus, SplitStrategy, UnifiedCorpus};
//! use sign_image::Pixmap;
//!
//! let mut corpus = UnifiedCorpus::new();
//! for _ in 0..20 {
//!     corpus.append(5, Pixmap::filled(4, 4, 3, 1.0)).unwrap();
//! }
//!
//! let (minor, major) = split_corpus(corpus, SplitStrategy::Fraction(0.1), 42).unwrap();
//! assert_eq!(minor.bucket(5).len(), 2);
//! assert_eq!(major.bucket(5).len(), 18);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod corpus;
mod error;
mod flatten;
mod splits;
mod store;
mod summary;

pub use corpus::{UnifiedCorpus, CLASS_COUNT};
pub use error::{CorpusError, Result};
pub use flatten::{flatten, FlatDataset};
pub use splits::{split_corpus, SplitStrategy};
pub use store::{read_corpus, write_corpus};
pub use summary::CorpusSummary;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        flatten, read_corpus, split_corpus, write_corpus, CorpusError, CorpusSummary, FlatDataset,
        SplitStrategy, UnifiedCorpus, CLASS_COUNT,
    };
}
