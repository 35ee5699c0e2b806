//! Error types for sign-augment crate.

use thiserror::Error;

/// Errors that can occur when configuring the augmentation engine.
///
/// All variants are configuration errors surfaced at engine construction,
/// before any image processing begins.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// A rule references a class outside the unified taxonomy.
    #[error("rule references class {0}, outside the unified taxonomy (0..{count})", count = sign_corpus::CLASS_COUNT)]
    ClassOutOfRange(usize),

    /// A rotation group needs at least two members to synthesize anything.
    #[error("rotation group has {0} member(s), need at least 2")]
    DegenerateRotationGroup(usize),
}

/// Result type for sign-augment operations.
pub type Result<T> = std::result::Result<T, AugmentError>;
