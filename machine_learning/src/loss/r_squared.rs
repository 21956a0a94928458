use ndarray::{Array1, ArrayView1};

use super::{LossFn, Mse};

/// Coefficient of determination of `y_pred` against `y`, 1 for a perfect fit.
///
/// A constant `y` scores 1 when it is predicted exactly and 0 otherwise.
pub fn r_squared(y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let mse = Mse.loss(y_pred, y);
    let mean = Array1::from_elem(y.len(), y.mean().unwrap_or_default());
    let variance = Mse.loss(mean.view(), y);

    if variance > 0.0 {
        1.0 - mse / variance
    } else if mse == 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn exact_predictions_score_one() {
        let y = array![1.0, 2.0, 3.0];
        assert_eq!(r_squared(y.view(), y.view()), 1.0);
    }

    #[test]
    fn predicting_the_mean_scores_zero() {
        let y = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 2.0];
        assert!(r_squared(y_pred.view(), y.view()).abs() < 1e-12);
    }

    #[test]
    fn constant_targets() {
        let y = array![7.0, 7.0];
        assert_eq!(r_squared(y.view(), y.view()), 1.0);
        assert_eq!(r_squared(array![7.0, 8.0].view(), y.view()), 0.0);
    }
}
