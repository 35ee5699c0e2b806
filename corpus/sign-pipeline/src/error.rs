//! Error types for sign-pipeline crate.

use thiserror::Error;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The configuration fails validation.
    #[error("invalid pipeline configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A source label could not be routed.
    #[error(transparent)]
    Taxonomy(#[from] sign_taxonomy::TaxonomyError),

    /// A corpus operation failed.
    #[error(transparent)]
    Corpus(#[from] sign_corpus::CorpusError),

    /// The augmentation engine rejected its rules.
    #[error(transparent)]
    Augment(#[from] sign_augment::AugmentError),
}

impl PipelineError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type for sign-pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
