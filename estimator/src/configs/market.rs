use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A region and its base price per square meter, in 10k CNY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    pub unit_price: f64,
}

/// A template listing, the synthetic market repeats these to build the training set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    pub region: String,
    pub area: f64,
    pub age: f64,
}

/// Integer price noise drawn uniformly from `[low, high)`, in 10k CNY.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub low: i32,
    pub high: i32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { low: -10, high: 10 }
    }
}

/// How the synthetic housing market is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MarketConfig {
    pub regions: Vec<RegionConfig>,
    pub listings: Vec<ListingConfig>,
    pub repeats: usize,
    /// Price lost per year of age, in 10k CNY.
    pub depreciation_per_year: f64,
    pub noise: NoiseConfig,
    pub seed: Option<u64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        let regions = [
            ("Honggutan", 1.8),
            ("Xihu", 1.4),
            ("Qingshanhu", 1.2),
            ("Xinjian", 1.0),
            ("Gaoxin", 1.5),
        ];

        let listings = [
            ("Honggutan", 80., 2.),
            ("Honggutan", 120., 5.),
            ("Xihu", 90., 10.),
            ("Xihu", 130., 15.),
            ("Qingshanhu", 70., 20.),
            ("Qingshanhu", 110., 3.),
            ("Xinjian", 85., 5.),
            ("Xinjian", 125., 8.),
            ("Gaoxin", 95., 2.),
            ("Gaoxin", 135., 6.),
        ];

        Self {
            regions: regions
                .into_iter()
                .map(|(name, unit_price)| RegionConfig {
                    name: name.to_string(),
                    unit_price,
                })
                .collect(),
            listings: listings
                .into_iter()
                .map(|(region, area, age)| ListingConfig {
                    region: region.to_string(),
                    area,
                    age,
                })
                .collect(),
            repeats: 10,
            depreciation_per_year: 0.5,
            noise: NoiseConfig::default(),
            seed: None,
        }
    }
}

impl MarketConfig {
    /// Returns the base unit price of `region`, if it is priced.
    pub fn unit_price(&self, region: &str) -> Option<f64> {
        self.regions
            .iter()
            .find(|r| r.name == region)
            .map(|r| r.unit_price)
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        if self.regions.is_empty() {
            return Err("market.regions must not be empty".into());
        }

        let mut names = HashSet::new();
        for region in &self.regions {
            if !names.insert(region.name.as_str()) {
                return Err(format!("market.regions: '{}' is listed twice", region.name));
            }
            if !region.unit_price.is_finite() || region.unit_price <= 0.0 {
                return Err(format!(
                    "market.regions: '{}' must have a positive unit_price",
                    region.name
                ));
            }
        }

        if self.listings.is_empty() {
            return Err("market.listings must not be empty".into());
        }

        for (i, listing) in self.listings.iter().enumerate() {
            if !names.contains(listing.region.as_str()) {
                return Err(format!(
                    "market.listings[{i}]: region '{}' has no unit_price",
                    listing.region
                ));
            }
            if !listing.area.is_finite() || listing.area <= 0.0 {
                return Err(format!("market.listings[{i}]: area must be positive"));
            }
            if !listing.age.is_finite() || listing.age < 0.0 {
                return Err(format!("market.listings[{i}]: age must not be negative"));
            }
        }

        if self.repeats == 0 {
            return Err("market.repeats must be at least 1".into());
        }

        if !self.depreciation_per_year.is_finite() {
            return Err("market.depreciation_per_year must be finite".into());
        }

        if self.noise.low >= self.noise.high {
            return Err(format!(
                "market.noise: low ({}) must be lower than high ({})",
                self.noise.low, self.noise.high
            ));
        }

        Ok(())
    }
}
