//! Error types for sign-taxonomy crate.

use thiserror::Error;

use crate::source::SourceDataset;

/// Errors that can occur during taxonomy mapping.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// A source annotation label cannot be parsed into the expected format.
    ///
    /// Fatal: it indicates a corrupted or mismatched annotation file, and a
    /// corpus built past it would be silently incomplete. Distinct from an
    /// unmapped label, which is a documented silent drop.
    #[error("malformed label {label:?} for {dataset} dataset: {reason}")]
    DataFormat {
        /// Source dataset the label came from.
        dataset: SourceDataset,
        /// The offending raw label.
        label: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A corpus operation failed while routing.
    #[error(transparent)]
    Corpus(#[from] sign_corpus::CorpusError),
}

impl TaxonomyError {
    /// Creates a data format error.
    #[must_use]
    pub fn data_format(
        dataset: SourceDataset,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::DataFormat {
            dataset,
            label: label.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for sign-taxonomy operations.
pub type Result<T> = std::result::Result<T, TaxonomyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_data_format() {
        let err = TaxonomyError::data_format(SourceDataset::German, "x9", "not an integer");
        let msg = err.to_string();
        assert!(msg.contains("x9"));
        assert!(msg.contains("german"));
        assert!(msg.contains("not an integer"));
    }
}
