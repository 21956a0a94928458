mod least_squares;
mod linear_model;
mod regressor;

pub use least_squares::LeastSquares;
pub use linear_model::LinearModel;
pub use regressor::{Predictor, Regressor};
