mod pipeline;
mod trainer;

pub use pipeline::{FitReport, FittedPipeline};
pub use trainer::Trainer;
