use log::info;
use machine_learning::{dataset::Dataset, encoding::RawRecord};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use crate::{
    configs::MarketConfig,
    error::{EstimatorError, Result},
    session::{AGE, AREA, REGION},
};

/// A single generated sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub region: String,
    /// Square meters.
    pub area: f64,
    /// Years.
    pub age: f64,
    /// 10k CNY.
    pub price: f64,
}

impl Listing {
    /// Returns the listing's features as a raw record, without the price.
    pub fn to_record(&self) -> RawRecord {
        RawRecord::new()
            .with(REGION, self.region.as_str())
            .with(AREA, self.area)
            .with(AGE, self.age)
    }
}

/// Generates the synthetic market described by `market`.
///
/// Each template listing is repeated `repeats` times, its price being the region's unit price
/// times the area, minus the depreciation, plus some uniform integer noise. The generator is
/// seeded from `market.seed` when there is one.
///
/// # Errors
/// Returns `EstimatorError::InvalidConfig` if a listing's region is not priced or the noise
/// range is empty.
pub fn generate(market: &MarketConfig) -> Result<Vec<Listing>> {
    let mut rng = generate_rng(market.seed);
    generate_with(market, &mut rng)
}

/// Same as `generate` but drawing the noise from `rng`.
pub fn generate_with<R: Rng>(market: &MarketConfig, rng: &mut R) -> Result<Vec<Listing>> {
    let noise = Uniform::new(market.noise.low, market.noise.high)?;
    let mut listings = Vec::with_capacity(market.listings.len() * market.repeats);

    for _ in 0..market.repeats {
        for template in &market.listings {
            let unit_price = market.unit_price(&template.region).ok_or_else(|| {
                EstimatorError::InvalidConfig(format!(
                    "region '{}' has no unit_price",
                    template.region
                ))
            })?;

            let base_price = unit_price * template.area;
            let depreciation = template.age * market.depreciation_per_year;
            let fluctuation = noise.sample(rng) as f64;

            listings.push(Listing {
                region: template.region.clone(),
                area: template.area,
                age: template.age,
                price: base_price - depreciation + fluctuation,
            });
        }
    }

    info!("generated {} synthetic listings", listings.len());
    Ok(listings)
}

/// Collects the listings into a training `Dataset`, the price being the target.
pub fn to_dataset(listings: &[Listing]) -> Dataset {
    let mut dataset = Dataset::default();
    for listing in listings {
        dataset.push(listing.to_record(), listing.price);
    }

    dataset
}

fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
