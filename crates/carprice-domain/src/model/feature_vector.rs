//! Fixed-order numeric input to the price model

use serde::{Deserialize, Serialize};

/// Number of model input columns
pub const FEATURE_COUNT: usize = 11;

/// Column names, in the order the model consumes them
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "name",
    "year",
    "km_driven",
    "fuel",
    "seller_type",
    "transmission",
    "owner",
    "mileage",
    "engine",
    "max_power",
    "seats",
];

/// Encoded listing, one value per entry of [`FEATURE_COLUMNS`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a value by column name
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|idx| self.0[idx])
    }

    /// (column, value) pairs in model order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_column() {
        let v = FeatureVector::new([1.0, 2018.0, 45000.0, 2.0, 1.0, 1.0, 1.0, 21.4, 1197.0, 81.8, 5.0]);
        assert_eq!(v.get("name"), Some(1.0));
        assert_eq!(v.get("engine"), Some(1197.0));
        assert_eq!(v.get("seats"), Some(5.0));
        assert_eq!(v.get("torque"), None);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let v = FeatureVector::new([1.0; FEATURE_COUNT]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,1.0,1.0,1.0,1.0,1.0,1.0,1.0,1.0,1.0,1.0]");
    }
}
