use serde::{Deserialize, Serialize};

use crate::constants::hashing::{DEFAULT_TESTING_PERCENTAGE, DEFAULT_VALIDATION_PERCENTAGE};
use crate::constants::splits::{
    DEFAULT_TEST_WEIGHT, DEFAULT_TRAIN_WEIGHT, DEFAULT_VALIDATION_WEIGHT,
};
use crate::errors::SplitError;
use crate::hash_split::train_valid_test_split;
use crate::splits::{CategorySplits, SplitLabel};
use crate::types::CategoryId;
use crate::utils::NamedItem;

/// Relative weights for train/validation/test proportional indexing.
///
/// Weights need not sum to one; [`SplitRatios::normalized`] divides them by
/// their sum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitRatios {
    /// Weight for train.
    pub train: f64,
    /// Weight for validation.
    pub validation: f64,
    /// Weight for test.
    pub test: f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: DEFAULT_TRAIN_WEIGHT,
            validation: DEFAULT_VALIDATION_WEIGHT,
            test: DEFAULT_TEST_WEIGHT,
        }
    }
}

impl SplitRatios {
    /// Build ratios from three weights.
    pub fn new(train: f64, validation: f64, test: f64) -> Self {
        Self {
            train,
            validation,
            test,
        }
    }

    /// Weight for one split.
    pub fn get(&self, label: SplitLabel) -> f64 {
        match label {
            SplitLabel::Train => self.train,
            SplitLabel::Validation => self.validation,
            SplitLabel::Test => self.test,
        }
    }

    /// Divide every weight by the sum of all three.
    ///
    /// Fails with [`SplitError::DivisionByZero`] when all weights are zero and
    /// with [`SplitError::InvalidArgument`] for negative or non-finite weights.
    pub fn normalized(self) -> Result<Self, SplitError> {
        for label in SplitLabel::ALL {
            let weight = self.get(label);
            if !weight.is_finite() || weight < 0.0 {
                return Err(SplitError::InvalidArgument(format!(
                    "{label} weight must be a non-negative finite number, got {weight}"
                )));
            }
        }
        let sum = self.train + self.validation + self.test;
        if sum == 0.0 {
            return Err(SplitError::DivisionByZero);
        }
        Ok(Self {
            train: self.train / sum,
            validation: self.validation / sum,
            test: self.test / sum,
        })
    }
}

/// Thresholds (in percent, 0-100) for content-hash splitting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashSplitConfig {
    /// Share of each category routed to validation.
    pub validation_percentage: f64,
    /// Share of each category routed to test.
    ///
    /// Test is carved out first; validation takes the next
    /// `validation_percentage` points of the scale.
    pub testing_percentage: f64,
}

impl Default for HashSplitConfig {
    fn default() -> Self {
        Self {
            validation_percentage: DEFAULT_VALIDATION_PERCENTAGE,
            testing_percentage: DEFAULT_TESTING_PERCENTAGE,
        }
    }
}

impl HashSplitConfig {
    /// Reject NaN thresholds, which would silently route every item to train.
    ///
    /// Values outside `0..=100` are accepted: above 100 every item lands in
    /// validation or test, below 0 the band simply closes.
    pub fn validate(&self) -> Result<(), SplitError> {
        validate_percentage("validation", self.validation_percentage)?;
        validate_percentage("testing", self.testing_percentage)
    }

    /// Split `categories` with these thresholds. See [`train_valid_test_split`].
    pub fn split<I, C, V, T>(&self, categories: I) -> Result<CategorySplits<T>, SplitError>
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<CategoryId>,
        V: IntoIterator<Item = T>,
        T: NamedItem + Sync,
    {
        train_valid_test_split(
            categories,
            self.validation_percentage,
            self.testing_percentage,
        )
    }
}

fn validate_percentage(name: &str, value: f64) -> Result<(), SplitError> {
    if value.is_nan() {
        return Err(SplitError::InvalidArgument(format!(
            "{name} percentage must be a number, got NaN"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ratios_normalize_to_seventy_twenty_ten() {
        let normalized = SplitRatios::default().normalized().unwrap();
        assert!((normalized.train - 0.7).abs() < 1e-9);
        assert!((normalized.validation - 0.2).abs() < 1e-9);
        assert!((normalized.test - 0.1).abs() < 1e-9);
    }

    #[test]
    fn unnormalized_weights_are_scaled_by_their_sum() {
        let normalized = SplitRatios::new(2.0, 1.0, 1.0).normalized().unwrap();
        assert_eq!(normalized, SplitRatios::new(0.5, 0.25, 0.25));
    }

    #[test]
    fn all_zero_weights_fail_with_division_by_zero() {
        let err = SplitRatios::new(0.0, 0.0, 0.0).normalized().unwrap_err();
        assert!(matches!(err, SplitError::DivisionByZero));
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let err = SplitRatios::new(0.5, -0.1, 0.6).normalized().unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(ref msg) if msg.contains("validation")));

        let err = SplitRatios::new(f64::NAN, 0.5, 0.5).normalized().unwrap_err();
        assert!(matches!(err, SplitError::InvalidArgument(ref msg) if msg.contains("training")));
    }

    #[test]
    fn hash_config_accepts_thresholds_off_the_scale() {
        assert!(HashSplitConfig::default().validate().is_ok());
        let above = HashSplitConfig {
            validation_percentage: 120.0,
            testing_percentage: 0.0,
        };
        assert!(above.validate().is_ok());
        let below = HashSplitConfig {
            validation_percentage: -5.0,
            testing_percentage: 101.0,
        };
        assert!(below.validate().is_ok());
    }

    #[test]
    fn hash_config_rejects_nan_thresholds() {
        let nan = HashSplitConfig {
            validation_percentage: 15.0,
            testing_percentage: f64::NAN,
        };
        assert!(matches!(
            nan.validate(),
            Err(SplitError::InvalidArgument(ref msg)) if msg.contains("testing")
        ));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let ratios: SplitRatios = serde_json::from_str(r#"{"test": 0.3}"#).unwrap();
        assert_eq!(ratios.train, DEFAULT_TRAIN_WEIGHT);
        assert_eq!(ratios.validation, DEFAULT_VALIDATION_WEIGHT);
        assert_eq!(ratios.test, 0.3);

        let hash: HashSplitConfig =
            serde_json::from_str(r#"{"testing_percentage": 10}"#).unwrap();
        assert_eq!(hash.validation_percentage, DEFAULT_VALIDATION_PERCENTAGE);
        assert_eq!(hash.testing_percentage, 10.0);
    }
}
