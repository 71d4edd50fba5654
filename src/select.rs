use indexmap::IndexMap;

use crate::errors::SplitError;
use crate::splits::{CategorySplits, SplitLabel};
use crate::types::CategoryId;

/// Project a per-category split mapping down to one split.
///
/// Every category is kept, in order; a category with no items in `split` maps
/// to an empty vector. Fails with [`SplitError::MissingSplit`] if any
/// category's mapping lacks `split` altogether.
pub fn select_split<T: Clone>(
    data: &CategorySplits<T>,
    split: SplitLabel,
) -> Result<IndexMap<CategoryId, Vec<T>>, SplitError> {
    data.iter()
        .map(|(category, buckets)| {
            buckets
                .get(&split)
                .map(|items| (category.clone(), items.clone()))
                .ok_or_else(|| missing(category, split))
        })
        .collect()
}

/// Owning variant of [`select_split`]; moves items instead of cloning them.
pub fn into_split<T>(
    data: CategorySplits<T>,
    split: SplitLabel,
) -> Result<IndexMap<CategoryId, Vec<T>>, SplitError> {
    data.into_iter()
        .map(|(category, mut buckets)| match buckets.remove(&split) {
            Some(items) => Ok((category, items)),
            None => Err(missing(&category, split)),
        })
        .collect()
}

fn missing(category: &str, split: SplitLabel) -> SplitError {
    SplitError::MissingSplit {
        category: category.to_string(),
        split,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splits::SplitBuckets;
    use std::collections::HashMap;

    fn buckets(train: &[u32], validation: &[u32], test: &[u32]) -> SplitBuckets<u32> {
        HashMap::from([
            (SplitLabel::Train, train.to_vec()),
            (SplitLabel::Validation, validation.to_vec()),
            (SplitLabel::Test, test.to_vec()),
        ])
    }

    fn sample() -> CategorySplits<u32> {
        let mut data = CategorySplits::new();
        data.insert("zebra".to_string(), buckets(&[1, 2], &[3], &[]));
        data.insert("apple".to_string(), buckets(&[4], &[], &[5, 6]));
        data
    }

    #[test]
    fn selects_one_split_per_category_in_order() {
        let data = sample();
        let train = select_split(&data, SplitLabel::Train).unwrap();
        assert_eq!(
            train.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["zebra", "apple"]
        );
        assert_eq!(train["zebra"], vec![1, 2]);
        assert_eq!(train["apple"], vec![4]);
    }

    #[test]
    fn empty_splits_map_to_empty_vectors() {
        let data = sample();
        let test = select_split(&data, SplitLabel::Test).unwrap();
        assert!(test["zebra"].is_empty());
        assert_eq!(test["apple"], vec![5, 6]);
    }

    #[test]
    fn missing_split_is_an_error() {
        let mut data = sample();
        if let Some(apple) = data.get_mut("apple") {
            apple.remove(&SplitLabel::Validation);
        }
        let err = select_split(&data, SplitLabel::Validation).unwrap_err();
        assert!(matches!(
            err,
            SplitError::MissingSplit { ref category, split }
                if category == "apple" && split == SplitLabel::Validation
        ));
        assert!(into_split(data, SplitLabel::Validation).is_err());
    }

    #[test]
    fn into_split_moves_items() {
        let validation = into_split(sample(), SplitLabel::Validation).unwrap();
        assert_eq!(validation["zebra"], vec![3]);
        assert!(validation["apple"].is_empty());
    }
}
