use ndarray::{Array1, ArrayView1, ArrayView2};

use super::Predictor;
use crate::{
    error::{MlErr, Result},
    loss::r_squared,
};

/// A fitted linear model, `y = x · coefficients + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Computes the prediction of every row in `x`.
    ///
    /// # Errors
    /// Returns `MlErr::SizeMismatch` if `x` doesn't have one column per coefficient.
    pub fn predict_batch(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(MlErr::SizeMismatch {
                a: "feature matrix columns",
                b: "model coefficients",
                got: x.ncols(),
                expected: self.coefficients.len(),
            });
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }

    /// Returns the coefficient of determination (R²) of the predictions over `x` against `y`.
    pub fn score(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64> {
        let y_pred = self.predict_batch(x)?;

        if y_pred.len() != y.len() {
            return Err(MlErr::SizeMismatch {
                a: "targets",
                b: "feature matrix rows",
                got: y.len(),
                expected: y_pred.len(),
            });
        }

        Ok(r_squared(y_pred.view(), y))
    }
}

impl Predictor for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() != self.coefficients.len() {
            return Err(MlErr::SizeMismatch {
                a: "feature vector",
                b: "model coefficients",
                got: x.len(),
                expected: self.coefficients.len(),
            });
        }

        Ok(self.coefficients.dot(&x) + self.intercept)
    }
}
