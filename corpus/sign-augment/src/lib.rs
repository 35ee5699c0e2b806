//! Symmetry-aware augmentation for the sign corpus.
//!
//! Traffic signs carry exploitable visual symmetries: some classes are
//! mirror images of themselves or of each other, some are unchanged by a
//! half turn, and the directional arrows are all rotations of one shape.
//! This crate synthesizes new labeled samples from those symmetries:
//!
//! - [`PairTransform`] - the three involutive transforms
//! - [`SymmetryRule`] - flip/rotation pairs and rotational groups
//! - [`AugmentationEngine`] - applies an ordered rule list to a corpus
//! - [`traffic_sign_rules`] - the default rule set for the 93-class
//!   unified taxonomy
//!
//! # Cascading
//!
//! Rules run as ordered stages over the evolving corpus: samples
//! synthesized by stage *k* are augmentation input to stage *k+1*. A
//! horizontal-flip-derived sample can subsequently be vertically flipped
//! into yet another class. Within a stage, synthesized samples go to a
//! side buffer merged once at stage end, so a stage never consumes its own
//! output.
//!
//! # Example
//!
//! ```
//! use sign_augment::{AugmentationEngine, PairTransform, SymmetryRule};
//! use sign_corpus::UnifiedCorpus;
//! use sign_image::Pixmap;
//!
//! let rules = vec![SymmetryRule::pairs(
//!     PairTransform::FlipHorizontal,
//!     vec![(41, 42)],
//! )];
//! let engine = AugmentationEngine::new(rules).unwrap();
//!
//! let mut corpus = UnifiedCorpus::new();
//! corpus.append(41, Pixmap::filled(4, 4, 3, 1.0)).unwrap();
//!
//! let augmented = engine.apply(corpus);
//! assert_eq!(augmented.bucket(41).len(), 1);
//! assert_eq!(augmented.bucket(42).len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod engine;
mod error;
mod rules;

pub use engine::AugmentationEngine;
pub use error::{AugmentError, Result};
pub use rules::{traffic_sign_rules, PairTransform, SymmetryRule};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        traffic_sign_rules, AugmentError, AugmentationEngine, PairTransform, SymmetryRule,
    };
}
