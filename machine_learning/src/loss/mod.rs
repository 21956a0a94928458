mod loss_fn;
mod mse;
mod r_squared;

pub use loss_fn::LossFn;
pub use mse::Mse;
pub use r_squared::r_squared;
