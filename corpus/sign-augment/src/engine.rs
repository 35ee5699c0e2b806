//! The augmentation engine.

use sign_corpus::{UnifiedCorpus, CLASS_COUNT};
use sign_image::{ops, Pixmap};

use crate::error::{AugmentError, Result};
use crate::rules::{traffic_sign_rules, SymmetryRule};

/// Expands a corpus with synthetic, label-consistent samples derived from
/// known geometric symmetries.
///
/// Rules are validated at construction: a class index outside the unified
/// taxonomy is a configuration error caught before any image processing.
/// Application is *not* idempotent - applying twice double-augments -
/// so callers invoke it exactly once per corpus lifetime, on the training
/// partition only.
///
/// # Example
///
/// ```
/// use sign_augment::AugmentationEngine;
/// use sign_corpus::UnifiedCorpus;
/// use sign_image::Pixmap;
///
/// let engine = AugmentationEngine::with_default_rules().unwrap();
///
/// let mut corpus = UnifiedCorpus::new();
/// // Class 2 is self-symmetric under a half turn
/// for _ in 0..3 {
///     corpus.append(2, Pixmap::filled(4, 4, 3, 1.0)).unwrap();
/// }
///
/// let augmented = engine.apply(corpus);
/// assert_eq!(augmented.bucket(2).len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct AugmentationEngine {
    rules: Vec<SymmetryRule>,
}

impl AugmentationEngine {
    /// Creates an engine from an ordered rule list.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::ClassOutOfRange`] if any rule references a
    /// class outside `0..93`, or [`AugmentError::DegenerateRotationGroup`]
    /// for a rotation group with fewer than two members.
    pub fn new(rules: Vec<SymmetryRule>) -> Result<Self> {
        for rule in &rules {
            if let SymmetryRule::RotationGroup { members } = rule {
                if members.len() < 2 {
                    return Err(AugmentError::DegenerateRotationGroup(members.len()));
                }
            }
            for class in rule.classes() {
                if class >= CLASS_COUNT {
                    return Err(AugmentError::ClassOutOfRange(class));
                }
            }
        }
        Ok(Self { rules })
    }

    /// Creates an engine with the default traffic-sign rule set.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the default rules are validated like any
    /// others.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(traffic_sign_rules())
    }

    /// The ordered rule list.
    #[must_use]
    pub fn rules(&self) -> &[SymmetryRule] {
        &self.rules
    }

    /// Applies every rule as an ordered stage, returning the expanded
    /// corpus.
    ///
    /// Originals are kept untouched; each stage's synthetics are merged
    /// before the next stage runs, so later stages augment from earlier
    /// stages' output (cascading).
    #[must_use]
    pub fn apply(&self, corpus: UnifiedCorpus) -> UnifiedCorpus {
        let mut corpus = corpus;
        for rule in &self.rules {
            let synthesized = apply_stage(&corpus, rule);
            corpus = corpus.concat(synthesized);
        }
        corpus
    }
}

/// Runs one rule over a frozen view of the corpus, returning the stage's
/// new samples as their own corpus.
///
/// The side buffer is a fixed-size array indexed by class, so pushing a
/// synthetic cannot fail; classes were validated at engine construction.
fn apply_stage(corpus: &UnifiedCorpus, rule: &SymmetryRule) -> UnifiedCorpus {
    let mut buffer: [Vec<Pixmap>; CLASS_COUNT] = std::array::from_fn(|_| Vec::new());

    match rule {
        SymmetryRule::Pairs { transform, pairs } => {
            for &(a, b) in pairs {
                for image in corpus.bucket(a) {
                    buffer[b].push(transform.apply(image));
                }
                if a != b {
                    for image in corpus.bucket(b) {
                        buffer[a].push(transform.apply(image));
                    }
                }
            }
        }
        SymmetryRule::RotationGroup { members } => {
            for &(from_class, from_angle) in members {
                for &(to_class, to_angle) in members {
                    if from_class == to_class {
                        continue;
                    }
                    for image in corpus.bucket(from_class) {
                        buffer[to_class].push(ops::rotate(image, from_angle - to_angle));
                    }
                }
            }
        }
    }
    UnifiedCorpus::from_class_buckets(buffer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rules::PairTransform;

    fn tagged(value: f32) -> Pixmap {
        Pixmap::filled(2, 2, 1, value)
    }

    /// An asymmetric pixmap so transforms change the pixel data.
    fn asymmetric() -> Pixmap {
        Pixmap::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2, 1).unwrap()
    }

    #[test]
    fn engine_rejects_out_of_range_class() {
        let rules = vec![SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![(41, 93)],
        )];
        let err = AugmentationEngine::new(rules).unwrap_err();
        assert!(matches!(err, AugmentError::ClassOutOfRange(93)));
    }

    #[test]
    fn engine_rejects_degenerate_group() {
        let rules = vec![SymmetryRule::rotation_group(vec![(67, 0.0)])];
        let err = AugmentationEngine::new(rules).unwrap_err();
        assert!(matches!(err, AugmentError::DegenerateRotationGroup(1)));
    }

    #[test]
    fn engine_default_rules_valid() {
        let engine = AugmentationEngine::with_default_rules().unwrap();
        assert_eq!(engine.rules().len(), 4);
    }

    #[test]
    fn cross_pair_fills_empty_partner() {
        // Pair (41, 42), one sample in 41, none in 42
        let rules = vec![SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![(41, 42)],
        )];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(41, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(41).len(), 1);
        assert_eq!(augmented.bucket(42).len(), 1);
        assert_eq!(
            augmented.bucket(42)[0],
            ops::flip_horizontal(&asymmetric())
        );
    }

    #[test]
    fn cross_pair_is_bidirectional() {
        let rules = vec![SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![(41, 42)],
        )];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(41, tagged(1.0)).unwrap();
        corpus.append(42, tagged(2.0)).unwrap();
        corpus.append(42, tagged(3.0)).unwrap();

        let augmented = engine.apply(corpus);
        // 41 gains the two flips of 42's samples, 42 gains the flip of 41's
        assert_eq!(augmented.bucket(41).len(), 3);
        assert_eq!(augmented.bucket(42).len(), 3);
    }

    #[test]
    fn self_pair_doubles_bucket() {
        // Rotate-180 pair (2, 2), self-symmetric, three samples
        let rules = vec![SymmetryRule::pairs(PairTransform::Rotate180, vec![(2, 2)])];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        for i in 0..3 {
            corpus.append(2, tagged(i as f32)).unwrap();
        }

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(2).len(), 6);
        // Originals first, synthetics appended after
        assert_eq!(augmented.bucket(2)[0], tagged(0.0));
        assert_eq!(augmented.bucket(2)[3], ops::rotate180(&tagged(0.0)));
    }

    #[test]
    fn originals_never_mutated() {
        let rules = vec![SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![(5, 5)],
        )];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(5, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(5)[0], asymmetric());
    }

    #[test]
    fn rotation_group_coverage() {
        // Square arrows at quarter-turn angles; size-4 group
        let rules = vec![SymmetryRule::rotation_group(vec![
            (67, 0.0),
            (73, 90.0),
            (74, 270.0),
            (76, 180.0),
        ])];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(67, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        // One original yields exactly one synthetic in each other member
        assert_eq!(augmented.bucket(67).len(), 1);
        assert_eq!(augmented.bucket(73).len(), 1);
        assert_eq!(augmented.bucket(74).len(), 1);
        assert_eq!(augmented.bucket(76).len(), 1);

        // Exact pairwise angle differences: 67 -> 73 rotates by 0 - 90
        assert_eq!(augmented.bucket(73)[0], ops::rotate(&asymmetric(), -90.0));
        assert_eq!(augmented.bucket(74)[0], ops::rotate(&asymmetric(), -270.0));
        assert_eq!(augmented.bucket(76)[0], ops::rotate(&asymmetric(), -180.0));
    }

    #[test]
    fn rotation_group_quadratic_counts() {
        let rules = vec![SymmetryRule::rotation_group(vec![
            (67, 0.0),
            (73, 90.0),
            (74, 270.0),
        ])];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        for class in [67, 73, 74] {
            for i in 0..2 {
                corpus.append(class, tagged(i as f32)).unwrap();
            }
        }

        let augmented = engine.apply(corpus);
        // Each member keeps 2 originals and gains 2 from each other member
        for class in [67, 73, 74] {
            assert_eq!(augmented.bucket(class).len(), 6);
        }
    }

    #[test]
    fn stages_cascade() {
        // Stage 1 flips 10 -> 11 horizontally; stage 2 flips 11 -> 12
        // vertically. The stage-1 synthetic in 11 must feed stage 2.
        let rules = vec![
            SymmetryRule::pairs(PairTransform::FlipHorizontal, vec![(10, 11)]),
            SymmetryRule::pairs(PairTransform::FlipVertical, vec![(11, 12)]),
        ];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(10, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(10).len(), 1);
        assert_eq!(augmented.bucket(11).len(), 1);
        assert_eq!(augmented.bucket(12).len(), 1);

        let expected = ops::flip_vertical(&ops::flip_horizontal(&asymmetric()));
        assert_eq!(augmented.bucket(12)[0], expected);
    }

    #[test]
    fn stage_never_consumes_its_own_output() {
        // Within one stage, the self-pair must double the bucket, not
        // explode it by re-augmenting its own synthetics.
        let rules = vec![SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![(4, 4), (4, 4)],
        )];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(4, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        // Two identical self-pairs each add one flip of the single original
        assert_eq!(augmented.bucket(4).len(), 3);
    }

    #[test]
    fn synthetics_reach_highest_class() {
        // The stage buffer must span the full taxonomy, including class 92
        let rules = vec![SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![(92, 92)],
        )];
        let engine = AugmentationEngine::new(rules).unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(92, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(92).len(), 2);
        assert_eq!(augmented.total(), 2);
    }

    #[test]
    fn untouched_classes_unchanged() {
        let engine = AugmentationEngine::with_default_rules().unwrap();

        let mut corpus = UnifiedCorpus::new();
        // Class 13 participates in no default rule
        corpus.append(13, tagged(1.0)).unwrap();

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(13).len(), 1);
        assert_eq!(augmented.total(), 1);
    }

    #[test]
    fn default_rules_full_cascade_for_class_83() {
        // 83 <-> 84 flip horizontally (stage 1); both are self-symmetric
        // vertically (stage 2). One original in 83 ends as: 83 original,
        // 84 h-flip, then each gains its own v-flip.
        let engine = AugmentationEngine::with_default_rules().unwrap();

        let mut corpus = UnifiedCorpus::new();
        corpus.append(83, asymmetric()).unwrap();

        let augmented = engine.apply(corpus);
        assert_eq!(augmented.bucket(83).len(), 2);
        assert_eq!(augmented.bucket(84).len(), 2);
    }
}
