use std::fs;

use estimator::{EstimatorError, HouseRequest, configs::EstimatorConfig};
use machine_learning::MlErr;

const SINGLE_REGION: &str = r#"{
    "market": {
        "regions": [{ "name": "Old Town", "unit_price": 2.0 }],
        "listings": [
            { "region": "Old Town", "area": 50, "age": 1 },
            { "region": "Old Town", "area": 80, "age": 10 },
            { "region": "Old Town", "area": 120, "age": 4 }
        ],
        "repeats": 2,
        "depreciation_per_year": 0.5,
        "noise": { "low": 0, "high": 1 },
        "seed": 1
    }
}"#;

#[test]
fn noiseless_market_is_recovered() {
    let config = EstimatorConfig::from_json(SINGLE_REGION).unwrap();
    let session = estimator::start(config).unwrap();

    assert_eq!(session.regions(), ["Old Town"]);
    assert_eq!(session.report().samples, 6);
    assert!(session.report().mse < 1e-9);

    let estimate = session
        .estimate(&HouseRequest::new("Old Town", 100.0, 10.0))
        .unwrap();
    assert!((estimate.price - 195.0).abs() < 1e-6);
    assert!((estimate.unit_price - 19_500.0).abs() < 1e-3);
}

#[test]
fn unknown_region_is_rejected_and_session_survives() {
    let config = EstimatorConfig::from_json(SINGLE_REGION).unwrap();
    let session = estimator::start(config).unwrap();

    let err = session
        .estimate(&HouseRequest::new("Nowhere", 100.0, 10.0))
        .unwrap_err();
    assert!(matches!(
        err,
        EstimatorError::Ml(MlErr::UnknownCategory { .. })
    ));

    assert!(session
        .estimate(&HouseRequest::new("Old Town", 60.0, 0.0))
        .is_ok());
}

#[test]
fn config_file_is_loaded() {
    let path = std::env::temp_dir().join(format!("estimator-config-{}.json", std::process::id()));
    fs::write(&path, SINGLE_REGION).unwrap();

    let config = EstimatorConfig::load(&path);
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.market.regions.len(), 1);
    assert_eq!(config.market.seed, Some(1));
}

#[test]
fn invalid_config_never_starts_a_session() {
    let err = EstimatorConfig::from_json(r#"{ "market": { "repeats": 0 } }"#).unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidConfig(_)));

    let mut config = EstimatorConfig::default();
    config.market.noise.high = config.market.noise.low;
    assert!(matches!(
        estimator::start(config),
        Err(EstimatorError::InvalidConfig(_))
    ));
}
