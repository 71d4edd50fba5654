use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::config::SplitRatios;
use crate::constants::splits::{ALL_SPLITS, SELECT_ALL_KEYWORD};
use crate::errors::SplitError;
use crate::splits::{SplitCounts, SplitLabel};
use crate::types::ItemIndex;

/// Proportional train/validation/test indexer over `0..dataset_length`.
///
/// Counts are `floor(proportion * dataset_length)` per split, so their sum can
/// fall short of the dataset length. Leftover positions are not redistributed:
/// validation slices up to `len - test` and therefore absorbs them when it is
/// non-empty; otherwise they belong to no split.
#[derive(Clone, Debug)]
pub struct SplitIndexer {
    total_count: usize,
    normalised: SplitRatios,
    counts: SplitCounts,
}

impl SplitIndexer {
    /// Build an indexer for `dataset_length` items from (unnormalized) `ratios`.
    pub fn new(dataset_length: usize, ratios: SplitRatios) -> Result<Self, SplitError> {
        let normalised = ratios.normalized()?;
        let counts = floored_counts(normalised, dataset_length);
        debug!(
            dataset_length,
            train = counts.train,
            validation = counts.validation,
            test = counts.test,
            remainder = dataset_length.saturating_sub(counts.total()),
            "split indexer built"
        );
        Ok(Self {
            total_count: dataset_length,
            normalised,
            counts,
        })
    }

    /// Shorthand for [`SplitIndexer::new`] with explicit weights.
    pub fn with_weights(
        dataset_length: usize,
        train: f64,
        validation: f64,
        test: f64,
    ) -> Result<Self, SplitError> {
        Self::new(dataset_length, SplitRatios::new(train, validation, test))
    }

    /// Dataset length fixed at construction.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Proportions after dividing the weights by their sum.
    pub fn normalised(&self) -> SplitRatios {
        self.normalised
    }

    /// Floored per-split counts for the dataset length.
    pub fn counts(&self) -> SplitCounts {
        self.counts
    }

    /// Positions left over by flooring.
    pub fn remainder(&self) -> usize {
        self.total_count.saturating_sub(self.counts.total())
    }

    /// Floored per-split counts for an arbitrary length using the same proportions.
    pub fn counts_for(&self, len: usize) -> SplitCounts {
        floored_counts(self.normalised, len)
    }

    /// Slice `items` for `split` using this indexer's counts.
    ///
    /// - train: the first `train` items
    /// - validation: from `train` up to `len - test` (to the end when `test == 0`),
    ///   empty when `validation == 0`
    /// - test: the last `test` items, empty when `test == 0`
    ///
    /// Bounds clamp to `items.len()`, so shorter inputs yield shorter slices.
    pub fn select<'a, T>(&self, items: &'a [T], split: SplitLabel) -> &'a [T] {
        let len = items.len();
        let train_end = self.counts.train.min(len);
        match split {
            SplitLabel::Train => &items[..train_end],
            SplitLabel::Validation => {
                if self.counts.validation == 0 {
                    return &[];
                }
                let end = if self.counts.test > 0 {
                    len.saturating_sub(self.counts.test)
                } else {
                    len
                };
                &items[train_end..end.max(train_end)]
            }
            SplitLabel::Test => {
                if self.counts.test == 0 {
                    return &[];
                }
                &items[len.saturating_sub(self.counts.test)..]
            }
        }
    }

    /// Split a fresh, non-reproducible permutation of `0..total_count`.
    pub fn shuffled_indices(&self) -> HashMap<SplitLabel, Vec<ItemIndex>> {
        self.shuffled_indices_with(&mut rand::rng())
    }

    /// Split a permutation of `0..total_count` drawn from `rng`.
    pub fn shuffled_indices_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> HashMap<SplitLabel, Vec<ItemIndex>> {
        let permutation = permutation(self.total_count, rng);
        ALL_SPLITS
            .into_iter()
            .map(|label| (label, self.select(&permutation, label).to_vec()))
            .collect()
    }

    /// Reproducible indices for `split` (or the whole permutation for `None`).
    ///
    /// Every call builds its own ChaCha8 generator from `seed`, whose stream
    /// is fixed across releases; the same seed always yields the same indices.
    pub fn select_shuffled_split_indices(
        &self,
        split: Option<SplitLabel>,
        seed: u64,
    ) -> Vec<ItemIndex> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let permutation = permutation(self.total_count, &mut rng);
        let selected = match split {
            Some(label) => self.select(&permutation, label).to_vec(),
            None => permutation,
        };
        debug!(
            seed,
            split = split.map_or(SELECT_ALL_KEYWORD, SplitLabel::name),
            selected = selected.len(),
            "seeded split indices selected"
        );
        selected
    }
}

impl fmt::Display for SplitIndexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}: {}, {}: {}, {}: {}}}",
            SplitLabel::Train,
            self.normalised.train,
            SplitLabel::Validation,
            self.normalised.validation,
            SplitLabel::Test,
            self.normalised.test
        )
    }
}

fn floored_counts(normalised: SplitRatios, len: usize) -> SplitCounts {
    let scaled = |proportion: f64| ((proportion * len as f64).floor() as usize).min(len);
    SplitCounts {
        train: scaled(normalised.train),
        validation: scaled(normalised.validation),
        test: scaled(normalised.test),
    }
}

fn permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<ItemIndex> {
    let mut indices: Vec<ItemIndex> = (0..len).collect();
    indices.shuffle(rng);
    indices
}
