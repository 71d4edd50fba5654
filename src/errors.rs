use thiserror::Error;

use crate::splits::SplitLabel;
use crate::types::CategoryId;

/// Error type for split configuration and selection failures.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A split name, selector, weight, or percentage was not acceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// All three split weights were zero, so they cannot be normalized.
    #[error("split weights sum to zero and cannot be normalized")]
    DivisionByZero,
    /// A per-category mapping did not contain the requested split.
    #[error("category '{category}' has no '{split}' split")]
    MissingSplit {
        /// Category whose split mapping was incomplete.
        category: CategoryId,
        /// Split that was requested.
        split: SplitLabel,
    },
}
