use ndarray::ArrayView1;

pub trait LossFn {
    /// Measures how far `y_pred` is from `y`, both must have the same length.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}
