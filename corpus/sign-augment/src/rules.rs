//! Symmetry rules and the default traffic-sign rule set.

use serde::{Deserialize, Serialize};
use sign_image::{ops, Pixmap};

/// An involutive geometric transform usable in a pairwise rule.
///
/// Involutive means applying it twice returns the original image, which is
/// what makes pairwise label-swapping sound: if T maps class A into class
/// B, the same T maps class B back into class A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairTransform {
    /// Left-right mirror.
    FlipHorizontal,
    /// Top-bottom mirror.
    FlipVertical,
    /// Half turn.
    Rotate180,
}

impl PairTransform {
    /// Applies the transform.
    #[must_use]
    pub fn apply(&self, image: &Pixmap) -> Pixmap {
        match self {
            Self::FlipHorizontal => ops::flip_horizontal(image),
            Self::FlipVertical => ops::flip_vertical(image),
            Self::Rotate180 => ops::rotate180(image),
        }
    }

    /// Transform name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FlipHorizontal => "flip_horizontal",
            Self::FlipVertical => "flip_vertical",
            Self::Rotate180 => "rotate_180",
        }
    }
}

impl std::fmt::Display for PairTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One augmentation stage.
///
/// # Variants
///
/// - `Pairs`: class pairs related by one involutive transform. A pair
///   `(a, b)` with `a == b` is self-symmetric - the class is augmented
///   from itself.
/// - `RotationGroup`: classes that are rotations of one visual shape,
///   each tagged with its canonical angle (degrees, up = 0, clockwise).
///   Every ordered pair of distinct members synthesizes samples, so a
///   group of size k yields k-1 synthetics per original; keep groups
///   small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SymmetryRule {
    /// Class pairs related by an involutive transform.
    Pairs {
        /// The transform relating each pair.
        transform: PairTransform,
        /// `(class_a, class_b)` pairs; `a == b` means self-symmetric.
        pairs: Vec<(usize, usize)>,
    },

    /// Classes that are rotations of the same shape.
    RotationGroup {
        /// `(class, canonical_angle_degrees)` members.
        members: Vec<(usize, f32)>,
    },
}

impl SymmetryRule {
    /// Creates a pairwise rule.
    #[must_use]
    pub const fn pairs(transform: PairTransform, pairs: Vec<(usize, usize)>) -> Self {
        Self::Pairs { transform, pairs }
    }

    /// Creates a rotation group rule.
    #[must_use]
    pub const fn rotation_group(members: Vec<(usize, f32)>) -> Self {
        Self::RotationGroup { members }
    }

    /// Every class index the rule references, in rule order.
    #[must_use]
    pub fn classes(&self) -> Vec<usize> {
        match self {
            Self::Pairs { pairs, .. } => pairs.iter().flat_map(|&(a, b)| [a, b]).collect(),
            Self::RotationGroup { members } => {
                members.iter().map(|&(class, _)| class).collect()
            }
        }
    }
}

/// The default symmetry rules for the 93-class unified taxonomy, in the
/// canonical stage order: horizontal flips, vertical flips, half turns,
/// then the directional-arrow rotation group.
///
/// Angles in the arrow group are canonical sign orientations (up = 0,
/// clockwise); synthesizing class j from class i rotates by
/// `angle_i - angle_j`.
#[must_use]
pub fn traffic_sign_rules() -> Vec<SymmetryRule> {
    vec![
        SymmetryRule::pairs(
            PairTransform::FlipHorizontal,
            vec![
                (0, 0),
                (1, 1),
                (3, 3),
                (7, 7),
                (8, 8),
                (34, 35),
                (39, 39),
                (41, 42),
                (43, 44),
                (45, 45),
                (47, 47),
                (48, 49),
                (50, 50),
                (51, 51),
                (54, 54),
                (62, 62),
                (63, 63),
                (65, 65),
                (67, 67),
                (68, 69),
                (70, 71),
                (72, 72),
                (77, 77),
                (80, 80),
                (82, 82),
                (83, 84),
                (86, 86),
                (88, 88),
                (92, 92),
            ],
        ),
        SymmetryRule::pairs(
            PairTransform::FlipVertical,
            vec![
                (1, 1),
                (7, 7),
                (8, 8),
                (24, 24),
                (39, 39),
                (74, 74),
                (75, 75),
                (83, 83),
                (84, 84),
            ],
        ),
        SymmetryRule::pairs(PairTransform::Rotate180, vec![(2, 2), (38, 38)]),
        SymmetryRule::rotation_group(vec![
            (67, 0.0),
            (73, 90.0),
            (74, 270.0),
            (75, 135.0),
            (76, 225.0),
        ]),
    ]
}
