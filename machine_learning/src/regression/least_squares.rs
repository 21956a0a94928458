use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

use super::{LinearModel, Regressor};
use crate::error::{MlErr, Result};

const DEFAULT_RCOND: f64 = 1e-10;

/// Ordinary least squares.
///
/// The system is solved through the SVD of the design matrix, singular values below
/// `rcond * max_singular_value` are treated as zero. A rank deficient matrix, such as a full
/// one-hot block next to the intercept column, therefore yields the minimum norm solution
/// instead of an error.
#[derive(Debug, Clone, Copy)]
pub struct LeastSquares {
    fit_intercept: bool,
    rcond: f64,
}

impl Default for LeastSquares {
    fn default() -> Self {
        Self::new()
    }
}

impl LeastSquares {
    /// Returns a new `LeastSquares` that fits an intercept.
    pub fn new() -> Self {
        Self {
            fit_intercept: true,
            rcond: DEFAULT_RCOND,
        }
    }

    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Sets the relative cutoff for small singular values, negative values are taken as zero.
    pub fn with_rcond(mut self, rcond: f64) -> Self {
        self.rcond = rcond.max(0.0);
        self
    }

    fn check_finite(name: &str, values: impl IntoIterator<Item = f64>) -> Result<()> {
        match values.into_iter().find(|v| !v.is_finite()) {
            Some(v) => Err(MlErr::InvalidNumericValue {
                name: name.to_string(),
                value: v.to_string(),
                reason: "the value is not finite",
            }),
            None => Ok(()),
        }
    }
}

impl Regressor for LeastSquares {
    type Model = LinearModel;

    fn fit(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<LinearModel> {
        let (rows, features) = x.dim();

        if rows != y.len() {
            return Err(MlErr::SizeMismatch {
                a: "targets",
                b: "feature matrix rows",
                got: y.len(),
                expected: rows,
            });
        }

        if rows == 0 {
            return Err(MlErr::EmptyTrainingSet);
        }

        Self::check_finite("feature matrix", x.iter().copied())?;
        Self::check_finite("targets", y.iter().copied())?;

        let offset = usize::from(self.fit_intercept);
        let columns = features + offset;
        let design = DMatrix::from_fn(rows, columns, |i, j| {
            if j < offset { 1.0 } else { x[[i, j - offset]] }
        });
        let targets = DVector::from_iterator(rows, y.iter().copied());

        let svd = design.svd(true, true);
        let eps = self.rcond * svd.singular_values.max();
        let rank = svd.rank(eps);

        if rank == 0 {
            return Err(MlErr::SingularFeatureSet { rank, columns });
        }

        if rank < columns {
            debug!(
                "design matrix is rank deficient ({rank} of {columns}), using the pseudo-inverse"
            );
        }

        let beta = svd
            .solve(&targets, eps)
            .map_err(|_| MlErr::SingularFeatureSet { rank, columns })?;

        if beta.iter().any(|b| !b.is_finite()) {
            return Err(MlErr::SingularFeatureSet { rank, columns });
        }

        let intercept = if self.fit_intercept { beta[0] } else { 0.0 };
        let coefficients: Array1<f64> = beta.iter().skip(offset).copied().collect();

        info!("fitted least squares over {rows} samples and {features} features, rank {rank}");
        Ok(LinearModel::new(coefficients, intercept))
    }
}
