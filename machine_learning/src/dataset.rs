use ndarray::ArrayView1;

use crate::{
    encoding::RawRecord,
    error::{MlErr, Result},
};

/// A labeled training set: one raw record and one numeric target per sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RawRecord>,
    targets: Vec<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `records` - The raw samples.
    /// * `targets` - The target of each sample, in the same order.
    ///
    /// # Returns
    /// `MlErr::SizeMismatch` if there isn't exactly one target per record.
    pub fn new(records: Vec<RawRecord>, targets: Vec<f64>) -> Result<Self> {
        if records.len() != targets.len() {
            return Err(MlErr::SizeMismatch {
                a: "targets",
                b: "records",
                got: targets.len(),
                expected: records.len(),
            });
        }

        Ok(Self { records, targets })
    }

    pub fn push(&mut self, record: RawRecord, target: f64) {
        self.records.push(record);
        self.targets.push(target);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn targets(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.targets[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths() {
        let err = Dataset::new(vec![RawRecord::new()], vec![]).unwrap_err();
        assert!(matches!(
            err,
            MlErr::SizeMismatch { got: 0, expected: 1, .. }
        ));
    }

    #[test]
    fn push_keeps_records_and_targets_aligned() {
        let mut dataset = Dataset::default();
        dataset.push(RawRecord::new().with("area", 80.0), 150.0);
        dataset.push(RawRecord::new().with("area", 90.0), 170.0);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records().len(), 2);
        assert_eq!(dataset.targets().to_vec(), vec![150.0, 170.0]);
    }
}
