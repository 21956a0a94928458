use log::info;
use ndarray::Array1;

use super::{FitReport, FittedPipeline};
use crate::{
    dataset::Dataset,
    encoding::{Encoder, FeatureSet, UnknownCategoryPolicy},
    error::Result,
    regression::{Predictor, Regressor},
};

/// Turns a labeled `Dataset` into a `FittedPipeline`: captures the schema, encodes the
/// training matrix and fits the regressor on it.
#[derive(Debug, Clone)]
pub struct Trainer<R: Regressor> {
    features: FeatureSet,
    regressor: R,
    policy: UnknownCategoryPolicy,
}

impl<R: Regressor> Trainer<R> {
    /// Returns a new `Trainer` that rejects unknown categories at prediction time.
    ///
    /// # Arguments
    /// * `features` - The features to encode, in column order.
    /// * `regressor` - The fitting routine.
    pub fn new(features: FeatureSet, regressor: R) -> Self {
        Self {
            features,
            regressor,
            policy: UnknownCategoryPolicy::default(),
        }
    }

    pub fn with_unknown_category(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the whole training once.
    ///
    /// # Errors
    /// Any schema capture, encoding or fitting error, nothing partial is returned.
    pub fn train(&self, dataset: &Dataset) -> Result<FittedPipeline<R::Model>> {
        let encoder = Encoder::fit(dataset.records(), &self.features, self.policy)?;
        let x = encoder.encode_matrix(dataset.records())?;
        let y = dataset.targets();

        let model = self.regressor.fit(x.view(), y)?;

        let y_pred = x
            .rows()
            .into_iter()
            .map(|row| model.predict(row))
            .collect::<Result<Array1<f64>>>()?;

        let report = FitReport::new(encoder.schema().len(), y_pred.view(), y);
        info!(
            "trained on {} samples over {} columns: mse={:.4} r2={:.4}",
            report.samples, report.columns, report.mse, report.r2
        );

        Ok(FittedPipeline::new(encoder, model, report))
    }
}
