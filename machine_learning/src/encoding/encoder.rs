use std::collections::BTreeSet;

use log::{debug, info};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::{FeatureSchema, FeatureSet, RawRecord};
use crate::error::{MlErr, Result};

/// A raw record projected onto a `FeatureSchema`.
pub type EncodedVector = Array1<f64>;

/// What to do with a categorical label that was never seen during training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategoryPolicy {
    /// Fail with `MlErr::UnknownCategory`.
    #[default]
    Reject,
    /// Leave every indicator of the categorical block at zero.
    ZeroFill,
}

/// Captures the feature schema of a training set.
///
/// # Arguments
/// * `rows` - Every training record.
/// * `features` - The continuous features and the categorical feature's name.
///
/// # Returns
/// The schema, or an error if there are no rows or no category was observed.
pub fn capture_schema(rows: &[RawRecord], features: &FeatureSet) -> Result<FeatureSchema> {
    if rows.is_empty() {
        return Err(MlErr::EmptyTrainingSet);
    }

    let name = features.categorical();
    let categories: BTreeSet<String> = rows
        .iter()
        .filter_map(|row| row.get(name))
        .map(|value| value.label().into_owned())
        .collect();

    if categories.is_empty() {
        return Err(MlErr::NoCategoricalValues {
            feature: name.to_string(),
        });
    }

    let schema = FeatureSchema::new(features.clone(), categories.into_iter().collect());
    info!(
        "captured schema of {} columns ({} continuous, {} categories of '{name}') from {} rows",
        schema.len(),
        features.continuous().len(),
        schema.categories().len(),
        rows.len()
    );

    Ok(schema)
}

/// Encodes every training row following `schema`, one matrix row per record.
///
/// Training rows are held to the same rules as requests, a label outside the schema is an
/// error.
pub fn encode_training_matrix(rows: &[RawRecord], schema: &FeatureSchema) -> Result<Array2<f64>> {
    let mut matrix = Array2::zeros((rows.len(), schema.len()));

    for (row, mut out) in rows.iter().zip(matrix.rows_mut()) {
        let encoded = encode_request(row, schema, UnknownCategoryPolicy::Reject)?;
        out.assign(&encoded);
    }

    Ok(matrix)
}

/// Encodes a single request following `schema`.
///
/// Position `i` of the result always holds the value of the schema's `i`-th column, no matter
/// the order the record's fields were inserted in.
///
/// # Arguments
/// * `record` - The raw request.
/// * `schema` - The schema captured at training time.
/// * `policy` - How to handle a label outside the training domain.
///
/// # Returns
/// A vector of exactly `schema.len()` values, or the first validation error found.
pub fn encode_request(
    record: &RawRecord,
    schema: &FeatureSchema,
    policy: UnknownCategoryPolicy,
) -> Result<EncodedVector> {
    let features = schema.features();
    let mut encoded = Array1::zeros(schema.len());

    for (slot, feature) in encoded.iter_mut().zip(features.continuous()) {
        let value = record
            .get(feature.name())
            .ok_or_else(|| MlErr::MissingContinuousFeature {
                name: feature.name().to_string(),
            })?;

        *slot = feature.parse(value)?;
    }

    let name = features.categorical();
    let label = record
        .get(name)
        .ok_or_else(|| MlErr::MissingCategoricalFeature {
            name: name.to_string(),
        })?
        .label();

    match (schema.category_index(&label), policy) {
        (Some(i), _) => encoded[schema.categorical_offset() + i] = 1.0,
        (None, UnknownCategoryPolicy::ZeroFill) => {
            debug!("zero filling unknown label '{label}' of '{name}'");
        }
        (None, UnknownCategoryPolicy::Reject) => {
            return Err(MlErr::UnknownCategory {
                feature: name.to_string(),
                label: label.into_owned(),
            });
        }
    }

    Ok(encoded)
}

/// A captured schema bound to the policy requests are encoded with.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoder {
    schema: FeatureSchema,
    policy: UnknownCategoryPolicy,
}

impl Encoder {
    pub fn new(schema: FeatureSchema, policy: UnknownCategoryPolicy) -> Self {
        Self { schema, policy }
    }

    /// Captures the schema of `rows` and returns the `Encoder` for it.
    pub fn fit(
        rows: &[RawRecord],
        features: &FeatureSet,
        policy: UnknownCategoryPolicy,
    ) -> Result<Self> {
        let schema = capture_schema(rows, features)?;
        Ok(Self::new(schema, policy))
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn policy(&self) -> UnknownCategoryPolicy {
        self.policy
    }

    pub fn encode_matrix(&self, rows: &[RawRecord]) -> Result<Array2<f64>> {
        encode_training_matrix(rows, &self.schema)
    }

    pub fn encode(&self, record: &RawRecord) -> Result<EncodedVector> {
        encode_request(record, &self.schema, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{array, s};

    use super::*;
    use crate::encoding::{Column, ContinuousFeature, FeatureValue, NumericDomain};

    fn features() -> FeatureSet {
        FeatureSet::new(
            vec![
                ContinuousFeature::new("area", NumericDomain::Positive),
                ContinuousFeature::new("age", NumericDomain::NonNegative),
            ],
            "region",
        )
        .unwrap()
    }

    fn row(region: &str, area: f64, age: f64) -> RawRecord {
        RawRecord::new()
            .with("region", region)
            .with("area", area)
            .with("age", age)
    }

    fn rows() -> Vec<RawRecord> {
        vec![
            row("Xihu", 90.0, 10.0),
            row("Gaoxin", 95.0, 2.0),
            row("Xihu", 130.0, 15.0),
            row("Honggutan", 80.0, 2.0),
        ]
    }

    fn categorical_sum(schema: &FeatureSchema, encoded: &EncodedVector) -> f64 {
        encoded.slice(s![schema.categorical_offset()..]).sum()
    }

    #[test]
    fn schema_has_continuous_then_sorted_categories() {
        let schema = capture_schema(&rows(), &features()).unwrap();
        let columns: Vec<String> = schema.columns().map(|c| c.to_string()).collect();

        assert_eq!(schema.len(), 2 + 3);
        assert_eq!(
            columns,
            ["area", "age", "[Gaoxin]", "[Honggutan]", "[Xihu]"]
        );
        assert!(matches!(
            schema.columns().next(),
            Some(Column::Continuous(_))
        ));
    }

    #[test]
    fn capture_is_idempotent() {
        let a = capture_schema(&rows(), &features()).unwrap();
        let b = capture_schema(&rows(), &features()).unwrap();
        assert_eq!(a, b);

        let mut reversed = rows();
        reversed.reverse();
        let c = capture_schema(&reversed, &features()).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn capture_rejects_empty_training_set() {
        let err = capture_schema(&[], &features()).unwrap_err();
        assert_eq!(err, MlErr::EmptyTrainingSet);
    }

    #[test]
    fn capture_rejects_rows_without_categories() {
        let rows = vec![RawRecord::new().with("area", 80.0).with("age", 1.0)];
        let err = capture_schema(&rows, &features()).unwrap_err();
        assert_eq!(
            err,
            MlErr::NoCategoricalValues {
                feature: "region".into()
            }
        );
    }

    #[test]
    fn training_matrix_follows_schema() {
        let rows = rows();
        let schema = capture_schema(&rows, &features()).unwrap();
        let matrix = encode_training_matrix(&rows, &schema).unwrap();

        let expected = array![
            [90.0, 10.0, 0.0, 0.0, 1.0],
            [95.0, 2.0, 1.0, 0.0, 0.0],
            [130.0, 15.0, 0.0, 0.0, 1.0],
            [80.0, 2.0, 0.0, 1.0, 0.0],
        ];
        assert_eq!(matrix, expected);
    }

    #[test]
    fn training_matrix_reports_missing_values() {
        let mut rows = rows();
        rows.push(RawRecord::new().with("region", "Xihu").with("age", 3.0));
        let schema = capture_schema(&rows, &features()).unwrap();

        let err = encode_training_matrix(&rows, &schema).unwrap_err();
        assert_eq!(err, MlErr::MissingContinuousFeature { name: "area".into() });
    }

    #[test]
    fn known_category_sets_exactly_one_indicator() {
        let schema = capture_schema(&rows(), &features()).unwrap();

        for region in schema.categories() {
            let encoded = encode_request(
                &row(region, 100.0, 0.0),
                &schema,
                UnknownCategoryPolicy::Reject,
            )
            .unwrap();

            assert_eq!(encoded.len(), schema.len());
            assert_eq!(categorical_sum(&schema, &encoded), 1.0);
            assert!(
                encoded
                    .slice(s![schema.categorical_offset()..])
                    .iter()
                    .all(|&x| x == 0.0 || x == 1.0)
            );
        }
    }

    #[test]
    fn unknown_category_is_rejected_by_default() {
        let encoder = Encoder::fit(&rows(), &features(), Default::default()).unwrap();
        let err = encoder.encode(&row("Z", 100.0, 0.0)).unwrap_err();

        assert_eq!(
            err,
            MlErr::UnknownCategory {
                feature: "region".into(),
                label: "Z".into()
            }
        );
    }

    #[test]
    fn unknown_category_zero_fills_when_opted_in() {
        let encoder =
            Encoder::fit(&rows(), &features(), UnknownCategoryPolicy::ZeroFill).unwrap();
        let encoded = encoder.encode(&row("Z", 100.0, 3.0)).unwrap();

        assert_eq!(encoded, array![100.0, 3.0, 0.0, 0.0, 0.0]);
        assert_eq!(categorical_sum(encoder.schema(), &encoded), 0.0);
    }

    #[test]
    fn missing_category_fails_under_any_policy() {
        let record = RawRecord::new().with("area", 100.0).with("age", 1.0);

        for policy in [UnknownCategoryPolicy::Reject, UnknownCategoryPolicy::ZeroFill] {
            let encoder = Encoder::fit(&rows(), &features(), policy).unwrap();
            let err = encoder.encode(&record).unwrap_err();
            assert_eq!(
                err,
                MlErr::MissingCategoricalFeature {
                    name: "region".into()
                }
            );
        }
    }

    #[test]
    fn zero_area_and_negative_age_are_rejected() {
        let encoder = Encoder::fit(&rows(), &features(), Default::default()).unwrap();

        let err = encoder.encode(&row("Xihu", 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, MlErr::InvalidNumericValue { ref name, .. } if name == "area"));

        let err = encoder.encode(&row("Xihu", 80.0, -1.0)).unwrap_err();
        assert!(matches!(err, MlErr::InvalidNumericValue { ref name, .. } if name == "age"));

        let err = encoder.encode(&row("Xihu", f64::INFINITY, 1.0)).unwrap_err();
        assert!(matches!(err, MlErr::InvalidNumericValue { ref name, .. } if name == "area"));
    }

    #[test]
    fn insertion_order_does_not_change_the_encoding() {
        let encoder = Encoder::fit(&rows(), &features(), Default::default()).unwrap();

        let a = RawRecord::new()
            .with("region", "Gaoxin")
            .with("area", 101.5)
            .with("age", 7.0);
        let b: RawRecord = [
            ("age", FeatureValue::from(7.0)),
            ("area", FeatureValue::from(101.5)),
            ("region", FeatureValue::from("Gaoxin")),
        ]
        .into_iter()
        .collect();

        let a = encoder.encode(&a).unwrap();
        let b = encoder.encode(&b).unwrap();
        let bits = |v: &EncodedVector| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn single_category_yields_a_single_indicator() {
        let rows = vec![row("A", 80.0, 1.0), row("A", 120.0, 4.0)];
        let encoder = Encoder::fit(&rows, &features(), Default::default()).unwrap();

        assert_eq!(encoder.schema().categories(), ["A"]);
        assert_eq!(encoder.schema().len(), 3);

        let encoded = encoder.encode(&row("A", 60.0, 0.0)).unwrap();
        assert_eq!(encoded.slice(s![2..]).to_vec(), vec![1.0]);
    }
}
