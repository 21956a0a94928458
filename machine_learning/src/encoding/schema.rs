use std::fmt;

use super::{ContinuousFeature, FeatureSet};

/// A single column of a `FeatureSchema`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Column<'a> {
    Continuous(&'a ContinuousFeature),
    /// The one-hot indicator of a category label.
    Category(&'a str),
}

impl fmt::Display for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Continuous(feature) => f.write_str(feature.name()),
            Column::Category(label) => write!(f, "[{label}]"),
        }
    }
}

/// The fixed, ordered list of columns a model was fit on: the continuous features in their
/// declared order followed by one indicator per category observed in training, sorted
/// lexically.
///
/// A schema is only produced by `capture_schema` and never changes afterwards, every
/// encoded vector for the same model is built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    features: FeatureSet,
    categories: Vec<String>,
}

impl FeatureSchema {
    /// `categories` must already be sorted and deduplicated.
    pub(super) fn new(features: FeatureSet, categories: Vec<String>) -> Self {
        Self {
            features,
            categories,
        }
    }

    /// The amount of columns, which is the length of every encoded vector.
    pub fn len(&self) -> usize {
        self.features.continuous().len() + self.categories.len()
    }

    /// Never true for a captured schema, there's always at least one category.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// The categorical domain, in column order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the offset of `label` inside the categorical block, if it was seen in training.
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
    }

    /// The position of the first categorical column.
    pub fn categorical_offset(&self) -> usize {
        self.features.continuous().len()
    }

    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> {
        let continuous = self.features.continuous().iter().map(Column::Continuous);
        let categories = self.categories.iter().map(|c| Column::Category(c.as_str()));
        continuous.chain(categories)
    }
}
