use log::{debug, info, warn};
use machine_learning::{
    MlErr,
    encoding::{ContinuousFeature, FeatureSet, NumericDomain, RawRecord},
    regression::{LeastSquares, LinearModel},
    training::{FitReport, FittedPipeline, Trainer},
};

use crate::{
    configs::EstimatorConfig,
    error::Result,
    synthetic::{self, Listing},
};

pub const REGION: &str = "region";
pub const AREA: &str = "area";
pub const AGE: &str = "age";

/// CNY per 10k CNY, the unit prices are shown in.
const PRICE_UNIT: f64 = 10_000.0;

/// A user's request for an estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseRequest {
    pub region: String,
    /// Square meters.
    pub area: f64,
    /// Years.
    pub age: f64,
}

impl HouseRequest {
    pub fn new(region: impl Into<String>, area: f64, age: f64) -> Self {
        Self {
            region: region.into(),
            area,
            age,
        }
    }

    fn to_record(&self) -> RawRecord {
        RawRecord::new()
            .with(REGION, self.region.as_str())
            .with(AREA, self.area)
            .with(AGE, self.age)
    }
}

/// The answer to a `HouseRequest`.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub request: HouseRequest,
    /// Total price, in 10k CNY.
    pub price: f64,
    /// CNY per square meter.
    pub unit_price: f64,
}

/// Converts a total price in 10k CNY into CNY per square meter.
///
/// # Errors
/// Returns `MlErr::InvalidNumericValue` if `area` is not a positive number, or if either
/// price is not finite.
pub fn unit_price(price: f64, area: f64) -> Result<f64> {
    if !area.is_finite() || area <= 0.0 {
        return Err(MlErr::InvalidNumericValue {
            name: AREA.to_string(),
            value: area.to_string(),
            reason: "the value must be greater than zero",
        }
        .into());
    }

    finite_price("price", price)?;
    finite_price("unit_price", price * PRICE_UNIT / area)
}

fn finite_price(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(MlErr::InvalidNumericValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: "the estimate is out of range",
        }
        .into());
    }

    Ok(value)
}

/// The features every estimate is made from: area and age, then the region.
pub fn features() -> Result<FeatureSet> {
    let continuous = vec![
        ContinuousFeature::new(AREA, NumericDomain::Positive),
        ContinuousFeature::new(AGE, NumericDomain::NonNegative),
    ];

    Ok(FeatureSet::new(continuous, REGION)?)
}

/// A trained estimator. The market, the schema and the model are fixed once the session
/// starts, every request is answered independently from them.
#[derive(Debug, Clone)]
pub struct Session {
    config: EstimatorConfig,
    listings: Vec<Listing>,
    pipeline: FittedPipeline<LinearModel>,
}

impl Session {
    /// Generates the market and trains the model.
    ///
    /// # Errors
    /// Returns an `EstimatorError` if the config is invalid or training fails, in which case
    /// there is no session at all.
    pub(crate) fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;

        let listings = synthetic::generate(&config.market)?;
        let dataset = synthetic::to_dataset(&listings);

        let pipeline = Trainer::new(features()?, LeastSquares::new())
            .with_unknown_category(config.unknown_category)
            .train(&dataset)?;

        info!(
            "session ready, regions: {}",
            pipeline.schema().categories().join(", ")
        );

        Ok(Self {
            config,
            listings,
            pipeline,
        })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// The regions the model was trained on, the only ones it will accept by default.
    pub fn regions(&self) -> &[String] {
        self.pipeline.schema().categories()
    }

    pub fn report(&self) -> FitReport {
        self.pipeline.report()
    }

    pub fn pipeline(&self) -> &FittedPipeline<LinearModel> {
        &self.pipeline
    }

    /// Returns up to the first `n` generated listings.
    pub fn overview(&self, n: usize) -> &[Listing] {
        &self.listings[..n.min(self.listings.len())]
    }

    /// Estimates the price of a house.
    ///
    /// A failed request leaves the session untouched, the next one can be made right away.
    ///
    /// # Errors
    /// Returns `EstimatorError::Ml` if the request can't be encoded or the estimate is not a
    /// finite number.
    pub fn estimate(&self, request: &HouseRequest) -> Result<Estimate> {
        let price = self
            .pipeline
            .predict(&request.to_record())
            .inspect_err(|e| warn!("rejected request {request:?}: {e}"))?;

        let unit_price = unit_price(price, request.area)
            .inspect_err(|e| warn!("rejected request {request:?}: {e}"))?;
        debug!("estimated {request:?}: price={price:.2} unit_price={unit_price:.0}");

        Ok(Estimate {
            request: request.clone(),
            price,
            unit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use machine_learning::encoding::UnknownCategoryPolicy;

    use super::*;
    use crate::error::EstimatorError;

    fn session() -> Session {
        let mut config = EstimatorConfig::default();
        config.market.seed = Some(2024);
        Session::new(config).unwrap()
    }

    #[test]
    fn regions_are_the_sorted_market_regions() {
        assert_eq!(
            session().regions(),
            ["Gaoxin", "Honggutan", "Qingshanhu", "Xihu", "Xinjian"]
        );
    }

    #[test]
    fn fit_explains_most_of_the_market() {
        let report = session().report();
        assert_eq!(report.samples, 100);
        assert_eq!(report.columns, 7);
        assert!(report.r2 > 0.8, "r2 was {}", report.r2);
    }

    #[test]
    fn unit_price_is_derived_from_the_estimate() {
        let estimate = session()
            .estimate(&HouseRequest::new("Xihu", 100.0, 5.0))
            .unwrap();

        assert_eq!(estimate.unit_price, estimate.price * 10_000.0 / 100.0);
        assert_eq!(estimate.request.region, "Xihu");
    }

    #[test]
    fn pricier_regions_estimate_higher() {
        let session = session();
        let honggutan = session
            .estimate(&HouseRequest::new("Honggutan", 100.0, 5.0))
            .unwrap();
        let xinjian = session
            .estimate(&HouseRequest::new("Xinjian", 100.0, 5.0))
            .unwrap();

        assert!(honggutan.price > xinjian.price);
    }

    #[test]
    fn bad_requests_keep_the_session_usable() {
        let session = session();

        let err = session
            .estimate(&HouseRequest::new("Z", 100.0, 5.0))
            .unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::Ml(MlErr::UnknownCategory { .. })
        ));

        let err = session
            .estimate(&HouseRequest::new("Xihu", 0.0, 5.0))
            .unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::Ml(MlErr::InvalidNumericValue { .. })
        ));

        let err = session
            .estimate(&HouseRequest::new("Xihu", 100.0, -1.0))
            .unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::Ml(MlErr::InvalidNumericValue { .. })
        ));

        assert!(
            session
                .estimate(&HouseRequest::new("Xihu", 100.0, 5.0))
                .is_ok()
        );
    }

    #[test]
    fn overflowing_estimates_are_rejected() {
        let session = session();

        for area in [1e308, f64::MAX] {
            let err = session
                .estimate(&HouseRequest::new("Xihu", area, 5.0))
                .unwrap_err();
            assert!(matches!(
                err,
                EstimatorError::Ml(MlErr::InvalidNumericValue { .. })
            ));
        }

        assert!(
            session
                .estimate(&HouseRequest::new("Xihu", 120.0, 5.0))
                .is_ok()
        );
    }

    #[test]
    fn zero_fill_sessions_accept_unknown_regions() {
        let mut config = EstimatorConfig::default();
        config.market.seed = Some(1);
        config.unknown_category = UnknownCategoryPolicy::ZeroFill;

        let session = Session::new(config).unwrap();
        assert!(
            session
                .estimate(&HouseRequest::new("Z", 100.0, 5.0))
                .is_ok()
        );
    }

    #[test]
    fn overview_is_bounded() {
        let session = session();
        assert_eq!(session.overview(10).len(), 10);
        assert_eq!(session.overview(1000).len(), 100);
        assert_eq!(session.overview(10)[0].region, "Honggutan");
    }

    #[test]
    fn unit_price_guards_the_division() {
        assert!(unit_price(100.0, 0.0).is_err());
        assert!(unit_price(100.0, -5.0).is_err());
        assert!(unit_price(100.0, f64::NAN).is_err());
        assert!(unit_price(f64::INFINITY, 100.0).is_err());
        assert!(unit_price(1e300, 1e-300).is_err());
        assert_eq!(unit_price(150.0, 100.0).unwrap(), 15_000.0);
    }
}
