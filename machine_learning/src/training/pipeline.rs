use ndarray::ArrayView1;

use crate::{
    encoding::{EncodedVector, Encoder, FeatureSchema, RawRecord},
    error::Result,
    loss::{LossFn, Mse, r_squared},
    regression::Predictor,
};

/// How well the model fits the data it was trained on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub samples: usize,
    pub columns: usize,
    pub mse: f64,
    /// Coefficient of determination, 1 for a perfect fit.
    pub r2: f64,
}

impl FitReport {
    pub(super) fn new(columns: usize, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Self {
        Self {
            samples: y.len(),
            columns,
            mse: Mse.loss(y_pred, y),
            r2: r_squared(y_pred, y),
        }
    }
}

/// The two immutable artifacts of a training run, the schema-locked encoder and the model
/// fit on its output. Every prediction goes through both.
#[derive(Debug, Clone)]
pub struct FittedPipeline<M: Predictor> {
    encoder: Encoder,
    model: M,
    report: FitReport,
}

impl<M: Predictor> FittedPipeline<M> {
    pub(super) fn new(encoder: Encoder, model: M, report: FitReport) -> Self {
        debug_assert_eq!(encoder.schema().len(), model.n_features());
        Self {
            encoder,
            model,
            report,
        }
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.encoder.schema()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn report(&self) -> FitReport {
        self.report
    }

    pub fn encode(&self, record: &RawRecord) -> Result<EncodedVector> {
        self.encoder.encode(record)
    }

    /// Encodes `record` with the captured schema and returns the model's prediction.
    pub fn predict(&self, record: &RawRecord) -> Result<f64> {
        let x = self.encode(record)?;
        self.model.predict(x.view())
    }
}
