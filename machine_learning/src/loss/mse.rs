use ndarray::ArrayView1;

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, array};

    use super::*;

    #[test]
    fn mse_of_known_residuals() {
        let y_pred = array![1.0, 2.0, 5.0];
        let y = array![1.0, 4.0, 2.0];
        assert_eq!(Mse.loss(y_pred.view(), y.view()), (0.0 + 4.0 + 9.0) / 3.0);
    }

    #[test]
    fn mse_of_nothing_is_zero() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(Mse::new().loss(empty.view(), empty.view()), 0.0);
    }
}
