mod estimator;
mod inputs;
mod market;

pub use estimator::EstimatorConfig;
pub use inputs::{InputsConfig, SliderConfig};
pub use market::{ListingConfig, MarketConfig, NoiseConfig, RegionConfig};
