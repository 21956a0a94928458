pub mod configs;
pub mod error;
mod session;
pub mod synthetic;

pub use error::EstimatorError;
pub use machine_learning::training::FitReport;
pub use session::{AGE, AREA, Estimate, HouseRequest, REGION, Session, features, unit_price};

use crate::configs::EstimatorConfig;

/// Generates the synthetic market, trains the model and returns the ready session.
///
/// # Errors
/// Returns an `EstimatorError` if the config is invalid or training fails.
pub fn start(config: EstimatorConfig) -> error::Result<Session> {
    log::info!(
        "starting session over {} regions and {} template listings",
        config.market.regions.len(),
        config.market.listings.len()
    );
    Session::new(config)
}
