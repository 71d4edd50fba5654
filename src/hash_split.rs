use rayon::prelude::*;
use tracing::debug;

use crate::config::HashSplitConfig;
use crate::errors::SplitError;
use crate::hash::stable_percentage;
use crate::splits::{CategorySplits, SplitLabel, bucket_counts, empty_buckets};
use crate::types::CategoryId;
use crate::utils::{NamedItem, hash_key};

/// Stable pseudo-percentage for an item of `category` named `name`.
///
/// Any `_nohash_...` suffix of `name` is ignored.
pub fn hash_percentage(category: &str, name: &str) -> f64 {
    stable_percentage(hash_key(category, name).as_bytes())
}

/// Split label for a single item given percentage thresholds.
///
/// The lowest `testing_percentage` points map to test, the next
/// `validation_percentage` points to validation, the rest to train.
pub fn assign_split(
    category: &str,
    name: &str,
    validation_percentage: f64,
    testing_percentage: f64,
) -> SplitLabel {
    label_for_percentage(
        hash_percentage(category, name),
        validation_percentage,
        testing_percentage,
    )
}

fn label_for_percentage(
    percentage: f64,
    validation_percentage: f64,
    testing_percentage: f64,
) -> SplitLabel {
    if percentage < validation_percentage + testing_percentage {
        if percentage < testing_percentage {
            SplitLabel::Test
        } else {
            SplitLabel::Validation
        }
    } else {
        SplitLabel::Train
    }
}

/// Assign every item of every category to a split by content hash.
///
/// The assignment of an item depends only on its category, its stripped name
/// and the two thresholds (percent, nominally 0-100; NaN is rejected).
/// Iteration order, dataset size and neighbouring items have no influence, so
/// adding items never moves existing ones. Within each split, items keep their input order. A category that
/// appears more than once is merged into its first occurrence.
pub fn train_valid_test_split<I, C, V, T>(
    categories: I,
    validation_percentage: f64,
    testing_percentage: f64,
) -> Result<CategorySplits<T>, SplitError>
where
    I: IntoIterator<Item = (C, V)>,
    C: Into<CategoryId>,
    V: IntoIterator<Item = T>,
    T: NamedItem + Sync,
{
    HashSplitConfig {
        validation_percentage,
        testing_percentage,
    }
    .validate()?;

    let mut result = CategorySplits::new();
    for (category, items) in categories {
        let category: CategoryId = category.into();
        let items: Vec<T> = items.into_iter().collect();
        let labels: Vec<SplitLabel> = items
            .par_iter()
            .map(|item| {
                assign_split(
                    &category,
                    &item.item_name(),
                    validation_percentage,
                    testing_percentage,
                )
            })
            .collect();

        let buckets = result
            .entry(category.clone())
            .or_insert_with(empty_buckets);
        for (item, label) in items.into_iter().zip(labels) {
            buckets.entry(label).or_default().push(item);
        }

        let counts = bucket_counts(buckets);
        debug!(
            category = %category,
            train = counts.train,
            validation = counts.validation,
            test = counts.test,
            "category split by content hash"
        );
    }
    Ok(result)
}
