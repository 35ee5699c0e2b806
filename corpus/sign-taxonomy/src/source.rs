//! Source dataset identities.

use serde::{Deserialize, Serialize};

use crate::tables::TaxonomyMapping;

/// One of the five independently-labeled national datasets.
///
/// Each source declares a fixed class count used to validate labels before
/// mapping; the actual on-disk reader for each source lives outside this
/// crate.
///
/// # Example
///
/// ```
/// use sign_taxonomy::SourceDataset;
///
/// assert_eq!(SourceDataset::German.class_count(), 43);
/// assert_eq!(SourceDataset::German.name(), "german");
/// assert_eq!(SourceDataset::all().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceDataset {
    /// German Traffic Sign Recognition Benchmark (GTSRB).
    German,
    /// Belgian traffic sign dataset.
    Belgian,
    /// Italian traffic sign dataset (DITS).
    Italian,
    /// Chinese traffic sign dataset (TSRD).
    Chinese,
    /// Czech traffic sign dataset.
    Czech,
}

impl SourceDataset {
    /// All five sources, in the canonical merge order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::German,
            Self::Belgian,
            Self::Italian,
            Self::Chinese,
            Self::Czech,
        ]
    }

    /// Lowercase dataset name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::German => "german",
            Self::Belgian => "belgian",
            Self::Italian => "italian",
            Self::Chinese => "chinese",
            Self::Czech => "czech",
        }
    }

    /// Declared number of source classes, used to validate labels.
    ///
    /// The Belgian count includes 10 artificial classes on top of the 62
    /// catalogued ones; the mapping table references them.
    #[must_use]
    pub const fn class_count(&self) -> u16 {
        match self {
            Self::German => 43,
            Self::Belgian => 72,
            Self::Italian => 59,
            Self::Chinese => 58,
            Self::Czech => 17,
        }
    }

    /// The mapping from this source's labels into the unified taxonomy.
    #[must_use]
    pub const fn mapping(&self) -> &'static TaxonomyMapping {
        TaxonomyMapping::for_source(*self)
    }
}

impl std::fmt::Display for SourceDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
