//! Cross-dataset taxonomy unification.
//!
//! Five national traffic-sign datasets, each with its own class taxonomy,
//! are merged into one 93-class unified taxonomy:
//!
//! - [`SourceDataset`] - the five source datasets and their class counts
//! - [`TaxonomyMapping`] - per-source partial, many-to-one label mapping
//! - [`route_samples`] - routes `(image, label)` pairs into corpus buckets
//!
//! # Drop Policy
//!
//! The mappings are partial by design: a source class with no equivalent in
//! the unified taxonomy is silently dropped during routing and only counted
//! in the [`RoutingReport`]. A label that fails to parse, by contrast, is a
//! fatal [`TaxonomyError::DataFormat`] - it means a corrupted or mismatched
//! annotation file, and continuing would produce a silently incomplete
//! corpus.
//!
//! # Example
//!
//! ```
//! use sign_corpus::UnifiedCorpus;
//! use sign_image::Pixmap;
//! use sign_taxonomy::{route_samples, SourceDataset};
//!
//! let mut corpus = UnifiedCorpus::new();
//! let samples = vec![(Pixmap::filled(4, 4, 3, 0.0), "34".to_string())];
//!
//! let report = route_samples(&mut corpus, SourceDataset::Belgian.mapping(), samples).unwrap();
//! assert_eq!(report.routed, 1);
//! assert_eq!(corpus.bucket(67).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mapper;
mod source;
mod tables;

pub use error::{Result, TaxonomyError};
pub use mapper::{route_samples, RoutingReport};
pub use source::SourceDataset;
pub use tables::TaxonomyMapping;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{route_samples, RoutingReport, SourceDataset, TaxonomyError, TaxonomyMapping};
}
