//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Configuration for a pipeline run.
///
/// # Example
///
/// ```
/// use sign_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.input_size, (32, 32));
/// assert_eq!(config.seed, 123);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Target sample size as `(width, height)`; every image is resized to
    /// this before any other processing.
    pub input_size: (usize, usize),

    /// Whether to collapse samples to a single luminance channel.
    pub grayscale: bool,

    /// Whether to equalize each sample's histogram. Runs on the raw
    /// 0..=255 range, before normalization.
    pub equalize: bool,

    /// Whether to augment the training partition with symmetry-derived
    /// synthetics.
    pub augment: bool,

    /// Fraction of the full corpus cut into the test partition.
    pub test_ratio: f32,

    /// Fraction of the post-test remainder cut into the validation
    /// partition.
    pub validation_ratio: f32,

    /// Random seed for both split cuts.
    pub seed: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_size: (32, 32),
            grayscale: true,
            equalize: true,
            augment: true,
            test_ratio: 0.1,
            validation_ratio: 0.1,
            seed: 123,
        }
    }
}

impl PipelineConfig {
    /// Sets the target sample size.
    #[must_use]
    pub const fn with_input_size(mut self, width: usize, height: usize) -> Self {
        self.input_size = (width, height);
        self
    }

    /// Sets the test fraction.
    #[must_use]
    pub const fn with_test_ratio(mut self, ratio: f32) -> Self {
        self.test_ratio = ratio;
        self
    }

    /// Sets the validation fraction.
    #[must_use]
    pub const fn with_validation_ratio(mut self, ratio: f32) -> Self {
        self.validation_ratio = ratio;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Keeps samples in color.
    #[must_use]
    pub const fn without_grayscale(mut self) -> Self {
        self.grayscale = false;
        self
    }

    /// Skips histogram equalization.
    #[must_use]
    pub const fn without_equalize(mut self) -> Self {
        self.equalize = false;
        self
    }

    /// Skips training-set augmentation.
    #[must_use]
    pub const fn without_augment(mut self) -> Self {
        self.augment = false;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidConfig`] if the input size has a
    /// zero dimension or either split fraction is outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.input_size;
        if width == 0 || height == 0 {
            return Err(PipelineError::invalid_config(format!(
                "input_size ({width}, {height}) has a zero dimension"
            )));
        }
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(PipelineError::invalid_config(format!(
                "test_ratio {} must be in (0, 1)",
                self.test_ratio
            )));
        }
        if !(self.validation_ratio > 0.0 && self.validation_ratio < 1.0) {
            return Err(PipelineError::invalid_config(format!(
                "validation_ratio {} must be in (0, 1)",
                self.validation_ratio
            )));
        }
        Ok(())
    }
}
