pub mod dataset;
pub mod encoding;
pub mod error;
pub mod loss;
pub mod regression;
pub mod training;

pub use error::{MlErr, Result};
