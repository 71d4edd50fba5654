use crate::splits::SplitLabel;

/// Constants used by split labels and proportional indexing.
pub mod splits {
    use super::SplitLabel;

    /// Every split label in declaration order.
    pub const ALL_SPLITS: [SplitLabel; 3] =
        [SplitLabel::Train, SplitLabel::Validation, SplitLabel::Test];
    /// Selector keyword meaning "the whole permutation" rather than one split.
    pub const SELECT_ALL_KEYWORD: &str = "all";
    /// Default training weight for proportional indexing.
    pub const DEFAULT_TRAIN_WEIGHT: f64 = 0.7;
    /// Default validation weight for proportional indexing.
    pub const DEFAULT_VALIDATION_WEIGHT: f64 = 0.2;
    /// Default testing weight for proportional indexing.
    pub const DEFAULT_TEST_WEIGHT: f64 = 0.1;
}

/// Constants used by content-hash split assignment.
pub mod hashing {
    /// Marker that starts the ignored part of an item name.
    pub const NOHASH_MARKER: &str = "_nohash_";
    /// Largest signed 64-bit integer; digests are reduced modulo `HASH_MODULUS_MAX + 1`.
    pub const HASH_MODULUS_MAX: u64 = i64::MAX as u64;
    /// Upper bound of the percentage scale used for thresholds.
    pub const PERCENT_SCALE: f64 = 100.0;
    /// Default validation share (percent) for content-hash splitting.
    pub const DEFAULT_VALIDATION_PERCENTAGE: f64 = 15.0;
    /// Default testing share (percent) for content-hash splitting.
    pub const DEFAULT_TESTING_PERCENTAGE: f64 = 0.0;
}
