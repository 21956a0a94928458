use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    /// There were no training rows to capture a schema or fit a model from.
    EmptyTrainingSet,
    /// None of the training rows carried a value for the categorical feature.
    NoCategoricalValues {
        feature: String,
    },
    /// A feature name was declared more than once.
    DuplicateFeature {
        name: String,
    },
    MissingContinuousFeature {
        name: String,
    },
    MissingCategoricalFeature {
        name: String,
    },
    /// The value is not a number, is not finite or falls outside the feature's domain.
    InvalidNumericValue {
        name: String,
        value: String,
        reason: &'static str,
    },
    UnknownCategory {
        feature: String,
        label: String,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    SingularFeatureSet {
        rank: usize,
        columns: usize,
    },
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MlErr::EmptyTrainingSet => "The training set is empty".to_string(),
            MlErr::NoCategoricalValues { feature } => {
                format!("No value for the categorical feature '{feature}' was observed in training")
            }
            MlErr::DuplicateFeature { name } => {
                format!("The feature '{name}' is declared more than once")
            }
            MlErr::MissingContinuousFeature { name } => {
                format!("The record has no value for the continuous feature '{name}'")
            }
            MlErr::MissingCategoricalFeature { name } => {
                format!("The record has no label for the categorical feature '{name}'")
            }
            MlErr::InvalidNumericValue {
                name,
                value,
                reason,
            } => format!("Invalid value '{value}' for '{name}': {reason}"),
            MlErr::UnknownCategory { feature, label } => {
                format!("The label '{label}' was never seen for '{feature}' during training")
            }
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
            MlErr::SingularFeatureSet { rank, columns } => format!(
                "The feature matrix has no usable solution, rank {rank} over {columns} columns"
            ),
        };

        write!(f, "{s}")
    }
}

impl Error for MlErr {}
