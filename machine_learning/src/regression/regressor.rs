use ndarray::{ArrayView1, ArrayView2};

use crate::error::Result;

/// A fitted model that maps a numeric feature vector to a scalar.
pub trait Predictor {
    /// Returns the length every input vector must have.
    fn n_features(&self) -> usize;

    /// Computes the prediction for a single feature vector.
    ///
    /// # Errors
    /// Returns `MlErr::SizeMismatch` if `x` doesn't have `n_features` values.
    fn predict(&self, x: ArrayView1<f64>) -> Result<f64>;
}

/// A fitting routine that turns a feature matrix and its targets into a `Predictor`.
pub trait Regressor {
    type Model: Predictor;

    /// Fits a model over `x`, one sample per row, and `y`, one target per sample.
    ///
    /// # Errors
    /// Returns `MlErr::SizeMismatch` if the amount of rows and targets differ.
    fn fit(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<Self::Model>;
}
