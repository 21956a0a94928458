use std::collections::HashSet;

use serde::Deserialize;

use super::FeatureValue;
use crate::error::{MlErr, Result};

/// The set of values a continuous feature accepts. Every domain rejects non-finite values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum NumericDomain {
    #[default]
    Finite,
    NonNegative,
    Positive,
    /// Inclusive on both ends.
    Range { min: f64, max: f64 },
}

impl NumericDomain {
    /// Checks whether `value` belongs to this domain.
    ///
    /// # Returns
    /// The value itself or the reason it was rejected.
    pub fn check(&self, value: f64) -> std::result::Result<f64, &'static str> {
        if !value.is_finite() {
            return Err("the value is not finite");
        }

        match *self {
            NumericDomain::Finite => Ok(value),
            NumericDomain::NonNegative if value < 0.0 => Err("the value must not be negative"),
            NumericDomain::NonNegative => Ok(value),
            NumericDomain::Positive if value <= 0.0 => Err("the value must be greater than zero"),
            NumericDomain::Positive => Ok(value),
            NumericDomain::Range { min, max } if value < min || value > max => {
                Err("the value is out of range")
            }
            NumericDomain::Range { .. } => Ok(value),
        }
    }
}

/// A named continuous feature and the domain its values must fall in.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousFeature {
    name: String,
    domain: NumericDomain,
}

impl ContinuousFeature {
    pub fn new(name: impl Into<String>, domain: NumericDomain) -> Self {
        Self {
            name: name.into(),
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> NumericDomain {
        self.domain
    }

    /// Converts a raw value into a number that satisfies this feature's domain.
    ///
    /// # Arguments
    /// * `value` - A number, or text holding a number.
    ///
    /// # Returns
    /// The number or `MlErr::InvalidNumericValue` if it can't be accepted.
    pub fn parse(&self, value: &FeatureValue) -> Result<f64> {
        let invalid = |reason| MlErr::InvalidNumericValue {
            name: self.name.clone(),
            value: value.label().into_owned(),
            reason,
        };

        let number = match value {
            FeatureValue::Number(n) => *n,
            FeatureValue::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid("not a number"))?,
        };

        self.domain.check(number).map_err(invalid)
    }
}

/// The feature-name metadata shared by training and inference: the ordered continuous
/// features followed by the single categorical feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    continuous: Vec<ContinuousFeature>,
    categorical: String,
}

impl FeatureSet {
    /// Creates a new `FeatureSet`.
    ///
    /// # Arguments
    /// * `continuous` - The continuous features, in the order their columns will take.
    /// * `categorical` - The name of the categorical feature.
    ///
    /// # Returns
    /// `MlErr::DuplicateFeature` if any name appears twice.
    pub fn new(continuous: Vec<ContinuousFeature>, categorical: impl Into<String>) -> Result<Self> {
        let categorical = categorical.into();
        let mut seen = HashSet::with_capacity(continuous.len() + 1);

        let names = continuous
            .iter()
            .map(ContinuousFeature::name)
            .chain([categorical.as_str()]);

        for name in names {
            if !seen.insert(name) {
                return Err(MlErr::DuplicateFeature {
                    name: name.to_string(),
                });
            }
        }

        Ok(Self {
            continuous,
            categorical,
        })
    }

    pub fn continuous(&self) -> &[ContinuousFeature] {
        &self.continuous
    }

    pub fn categorical(&self) -> &str {
        &self.categorical
    }
}
