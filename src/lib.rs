#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Split configuration types.
pub mod config;
/// Centralized constants used by indexing and hashing.
pub mod constants;
/// Stable SHA-1 based hashing.
pub mod hash;
/// Content-hash train/validation/test assignment.
pub mod hash_split;
/// Proportional (count-based) split indexing.
pub mod indexer;
/// Projection of per-category splits onto one split.
pub mod select;
/// Split labels, counts, and per-category split containers.
pub mod splits;
/// Shared type aliases.
pub mod types;
/// Item naming helpers.
pub mod utils;

mod errors;

pub use config::{HashSplitConfig, SplitRatios};
pub use errors::SplitError;
pub use hash_split::{assign_split, hash_percentage, train_valid_test_split};
pub use indexer::SplitIndexer;
pub use select::{into_split, select_split};
pub use splits::{CategorySplits, SplitBuckets, SplitCounts, SplitLabel, parse_selection};
pub use types::{CategoryId, HashKey, ItemIndex};
pub use utils::NamedItem;
