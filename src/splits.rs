use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::splits::{ALL_SPLITS, SELECT_ALL_KEYWORD};
use crate::errors::SplitError;
use crate::types::CategoryId;

/// Logical dataset partitions.
///
/// Ordering follows declaration order, which is also the order used for
/// default split names.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SplitLabel {
    /// Training split.
    Train,
    /// Validation split.
    Validation,
    /// Test split.
    Test,
}

impl SplitLabel {
    /// All labels in declaration order.
    pub const ALL: [SplitLabel; 3] = ALL_SPLITS;

    /// Default human-readable name (`training`, `validation`, `testing`).
    pub fn name(self) -> &'static str {
        match self {
            SplitLabel::Train => "training",
            SplitLabel::Validation => "validation",
            SplitLabel::Test => "testing",
        }
    }
}

impl fmt::Display for SplitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitLabel {
    type Err = SplitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "training" | "train" => Ok(SplitLabel::Train),
            "validation" | "val" => Ok(SplitLabel::Validation),
            "testing" | "test" => Ok(SplitLabel::Test),
            other => Err(SplitError::InvalidArgument(format!(
                "unknown split '{other}'"
            ))),
        }
    }
}

/// Parse a split selector where `all` selects every split (`None`).
pub fn parse_selection(value: &str) -> Result<Option<SplitLabel>, SplitError> {
    if value.trim().eq_ignore_ascii_case(SELECT_ALL_KEYWORD) {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// Integer item counts per split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitCounts {
    /// Items assigned to train.
    pub train: usize,
    /// Items assigned to validation.
    pub validation: usize,
    /// Items assigned to test.
    pub test: usize,
}

impl SplitCounts {
    /// Count for one split.
    pub fn get(&self, label: SplitLabel) -> usize {
        match label {
            SplitLabel::Train => self.train,
            SplitLabel::Validation => self.validation,
            SplitLabel::Test => self.test,
        }
    }

    /// Sum over all splits.
    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}

/// Items of one category grouped by split.
pub type SplitBuckets<T> = HashMap<SplitLabel, Vec<T>>;

/// Per-category split assignment, in category insertion order.
pub type CategorySplits<T> = IndexMap<CategoryId, SplitBuckets<T>>;

/// Buckets with every split present and empty.
pub(crate) fn empty_buckets<T>() -> SplitBuckets<T> {
    ALL_SPLITS.into_iter().map(|label| (label, Vec::new())).collect()
}

/// Per-split lengths of `buckets`; absent splits count as zero.
pub fn bucket_counts<T>(buckets: &SplitBuckets<T>) -> SplitCounts {
    let len = |label| buckets.get(&label).map_or(0, Vec::len);
    SplitCounts {
        train: len(SplitLabel::Train),
        validation: len(SplitLabel::Validation),
        test: len(SplitLabel::Test),
    }
}
