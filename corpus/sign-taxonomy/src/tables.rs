//! Per-source label mapping tables.
//!
//! The tables are configuration data, not logic: immutable, defined once,
//! and injected into the routing step. Each maps a source-local class label
//! to a unified class index in `0..93`. They are partial (a missing source
//! label means "no equivalent unified class, drop the sample") and
//! many-to-one (several source classes may merge into one unified class,
//! e.g. the Belgian parking variants all map to class 85).

use crate::error::{Result, TaxonomyError};
use crate::source::SourceDataset;

/// Entries are `(source_label, unified_class)`, sorted by source label.
type Entries = &'static [(u16, u16)];

// German label 29 has no unified equivalent.
const GERMAN_TO_UNIFIED: Entries = &[
    (0, 17),
    (1, 19),
    (2, 21),
    (3, 22),
    (4, 23),
    (5, 24),
    (6, 28),
    (7, 26),
    (8, 27),
    (9, 29),
    (10, 31),
    (11, 0),
    (12, 1),
    (13, 3),
    (14, 4),
    (15, 7),
    (16, 10),
    (17, 8),
    (18, 62),
    (19, 42),
    (20, 41),
    (21, 44),
    (22, 50),
    (23, 52),
    (24, 49),
    (25, 60),
    (26, 54),
    (27, 56),
    (28, 57),
    (30, 63),
    (31, 59),
    (32, 37),
    (33, 68),
    (34, 69),
    (35, 67),
    (36, 70),
    (37, 71),
    (38, 75),
    (39, 76),
    (40, 66),
    (41, 30),
    (42, 32),
];

// Labels 45..=50 are the parking-sign variants, merged into class 85.
// Labels 62..=71 are the artificial speed-limit and arrow classes.
const BELGIAN_TO_UNIFIED: Entries = &[
    (0, 50),
    (1, 51),
    (2, 52),
    (3, 42),
    (4, 41),
    (5, 44),
    (6, 43),
    (8, 61),
    (9, 58),
    (10, 60),
    (11, 54),
    (12, 65),
    (13, 62),
    (14, 47),
    (15, 48),
    (16, 49),
    (17, 0),
    (18, 45),
    (19, 3),
    (20, 5),
    (21, 4),
    (22, 8),
    (23, 11),
    (25, 10),
    (28, 7),
    (29, 35),
    (30, 34),
    (31, 29),
    (32, 23),
    (33, 79),
    (34, 67),
    (35, 74),
    (36, 70),
    (37, 66),
    (38, 78),
    (40, 38),
    (41, 39),
    (44, 6),
    (45, 85),
    (46, 85),
    (47, 85),
    (48, 85),
    (49, 85),
    (50, 85),
    (51, 90),
    (52, 91),
    (53, 80),
    (54, 82),
    (56, 81),
    (59, 92),
    (60, 2),
    (61, 1),
    (62, 15),
    (63, 17),
    (64, 18),
    (65, 20),
    (66, 21),
    (67, 19),
    (68, 25),
    (69, 73),
    (70, 76),
    (71, 75),
];

// Labels 9 and 23 both merge into class 0.
const ITALIAN_TO_UNIFIED: Entries = &[
    (0, 59),
    (1, 64),
    (2, 47),
    (4, 50),
    (5, 10),
    (6, 82),
    (7, 41),
    (8, 58),
    (9, 0),
    (10, 71),
    (11, 67),
    (12, 77),
    (13, 38),
    (14, 44),
    (15, 5),
    (16, 6),
    (17, 53),
    (18, 37),
    (19, 62),
    (20, 45),
    (21, 3),
    (23, 0),
    (25, 8),
    (26, 29),
    (27, 39),
    (28, 80),
    (29, 85),
    (30, 79),
    (31, 55),
    (32, 2),
    (33, 1),
    (34, 66),
    (35, 46),
    (37, 51),
    (38, 52),
    (39, 15),
    (40, 19),
    (41, 20),
    (42, 21),
    (43, 22),
    (44, 28),
    (45, 4),
    (46, 54),
    (47, 33),
    (48, 60),
    (49, 81),
    (50, 7),
    (53, 40),
    (54, 12),
    (55, 11),
    (57, 23),
    (58, 25),
];

// Labels 18 and 19 both merge into class 28.
const CHINESE_TO_UNIFIED: Entries = &[
    (0, 14),
    (1, 16),
    (2, 19),
    (3, 20),
    (4, 21),
    (5, 22),
    (6, 23),
    (7, 24),
    (11, 35),
    (13, 34),
    (15, 36),
    (16, 9),
    (17, 33),
    (18, 28),
    (19, 28),
    (20, 70),
    (21, 67),
    (22, 69),
    (23, 72),
    (24, 68),
    (25, 76),
    (26, 75),
    (27, 66),
    (30, 78),
    (33, 54),
    (53, 7),
    (54, 38),
    (55, 8),
];

const CZECH_TO_UNIFIED: Entries = &[
    (0, 38),
    (1, 81),
    (2, 82),
    (3, 1),
    (4, 39),
    (5, 83),
    (6, 84),
    (7, 6),
    (8, 13),
    (9, 2),
    (10, 8),
    (11, 7),
    (12, 79),
    (13, 86),
    (14, 87),
    (15, 88),
    (16, 89),
];

/// A partial, many-to-one mapping from one source's labels into the
/// unified taxonomy.
///
/// # Example
///
/// ```
/// use sign_taxonomy::{SourceDataset, TaxonomyMapping};
///
/// let mapping = SourceDataset::Belgian.mapping();
/// assert_eq!(mapping.lookup(34), Some(67));
/// assert_eq!(mapping.lookup(7), None); // unmapped, dropped at routing
/// ```
#[derive(Debug)]
pub struct TaxonomyMapping {
    source: SourceDataset,
    entries: Entries,
}

static GERMAN: TaxonomyMapping = TaxonomyMapping {
    source: SourceDataset::German,
    entries: GERMAN_TO_UNIFIED,
};
static BELGIAN: TaxonomyMapping = TaxonomyMapping {
    source: SourceDataset::Belgian,
    entries: BELGIAN_TO_UNIFIED,
};
static ITALIAN: TaxonomyMapping = TaxonomyMapping {
    source: SourceDataset::Italian,
    entries: ITALIAN_TO_UNIFIED,
};
static CHINESE: TaxonomyMapping = TaxonomyMapping {
    source: SourceDataset::Chinese,
    entries: CHINESE_TO_UNIFIED,
};
static CZECH: TaxonomyMapping = TaxonomyMapping {
    source: SourceDataset::Czech,
    entries: CZECH_TO_UNIFIED,
};

impl TaxonomyMapping {
    /// The mapping table for a source dataset.
    #[must_use]
    pub const fn for_source(source: SourceDataset) -> &'static Self {
        match source {
            SourceDataset::German => &GERMAN,
            SourceDataset::Belgian => &BELGIAN,
            SourceDataset::Italian => &ITALIAN,
            SourceDataset::Chinese => &CHINESE,
            SourceDataset::Czech => &CZECH,
        }
    }

    /// The source dataset this mapping belongs to.
    #[must_use]
    pub const fn source(&self) -> SourceDataset {
        self.source
    }

    /// Number of mapped source labels.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unified class for a source label, or `None` if the label has no
    /// unified equivalent.
    #[must_use]
    pub fn lookup(&self, label: u16) -> Option<usize> {
        self.entries
            .binary_search_by_key(&label, |&(source, _)| source)
            .ok()
            .map(|index| self.entries[index].1 as usize)
    }

    /// Parses and validates a raw annotation label.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::DataFormat`] if the label is not an integer
    /// in `0..class_count` for this source.
    pub fn parse_label(&self, raw: &str) -> Result<u16> {
        let label: u16 = raw.trim().parse().map_err(|_| {
            TaxonomyError::data_format(self.source, raw, "expected a non-negative integer")
        })?;
        if label >= self.source.class_count() {
            return Err(TaxonomyError::data_format(
                self.source,
                raw,
                format!(
                    "label exceeds {} classes declared by the source",
                    self.source.class_count()
                ),
            ));
        }
        Ok(label)
    }

    /// Iterates over `(source_label, unified_class)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (u16, usize)> + '_ {
        self.entries
            .iter()
            .map(|&(source, unified)| (source, unified as usize))
    }
}
