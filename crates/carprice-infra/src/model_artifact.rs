//! Trained model artifact loader
//!
//! Artifacts are JSON exports of a fitted linear regression:
//!
//! ```json
//! {
//!   "kind": "linear_regression",
//!   "feature_names": ["name", "year", "km_driven", "fuel", "seller_type", "transmission",
//!                     "owner", "mileage", "engine", "max_power", "seats"],
//!   "coefficients": [ ... ],
//!   "intercept": -41377139.4
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use carprice_domain::model::{FeatureVector, FEATURE_COLUMNS};
use carprice_domain::PricePredictor;
use carprice_types::{ModelError, PredictError, StartupError};

const LINEAR_KIND: &str = "linear_regression";

/// On-disk representation of a fitted model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub kind: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Linear regression predictor: intercept + sum(coef_i * x_i)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Build a model from raw parameters without checking them against the
    /// feature layout
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Validate an artifact against the encoder's column order
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.kind != LINEAR_KIND {
            return Err(ModelError::UnsupportedKind(artifact.kind));
        }

        if artifact.feature_names.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                got: artifact.feature_names,
            });
        }

        if artifact.coefficients.len() != FEATURE_COLUMNS.len() {
            return Err(ModelError::CoefficientCount {
                expected: FEATURE_COLUMNS.len(),
                got: artifact.coefficients.len(),
            });
        }

        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::NonFiniteParameter);
        }

        Ok(Self::new(artifact.coefficients, artifact.intercept))
    }

    /// Parse and validate an artifact from JSON text
    pub fn load_from_str(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Load and validate an artifact from disk
    pub fn load_from_file(path: &Path) -> Result<Self, StartupError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StartupError::ModelMissing(path.to_path_buf()),
            _ => StartupError::ModelUnreadable {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let model = Self::load_from_str(&content).map_err(|source| StartupError::ModelInvalid {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded linear model artifact");
        Ok(model)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl PricePredictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        if self.coefficients.len() != features.len() {
            return Err(PredictError::ShapeMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let price = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.as_slice())
                .map(|(c, x)| c * x)
                .sum::<f64>();

        if !price.is_finite() {
            return Err(PredictError::NonFinite(price));
        }

        Ok(price)
    }

    fn describe(&self) -> String {
        format!(
            "linear regression ({} coefficients, intercept {:.3})",
            self.coefficients.len(),
            self.intercept
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact_json(feature_names: &[&str], coefficients: &[f64]) -> String {
        serde_json::json!({
            "kind": "linear_regression",
            "feature_names": feature_names,
            "coefficients": coefficients,
            "intercept": 1000.0
        })
        .to_string()
    }

    fn sample_features() -> FeatureVector {
        FeatureVector::new([1.0, 2018.0, 45000.0, 2.0, 1.0, 1.0, 1.0, 21.4, 1197.0, 81.8, 5.0])
    }

    #[test]
    fn test_load_valid_artifact() {
        let json = artifact_json(&FEATURE_COLUMNS, &[1.0; 11]);
        let model = LinearModel::load_from_str(&json).unwrap();
        assert_eq!(model.coefficients().len(), 11);
        assert_eq!(model.intercept(), 1000.0);
    }

    #[test]
    fn test_predict_is_dot_product_plus_intercept() {
        let model = LinearModel::new(
            vec![100.0, 10.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            500.0,
        );
        let price = model.predict(&sample_features()).unwrap();
        // 500 + 100*1 + 10*2018 - 45000
        assert!((price - (-24220.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_reordered_features() {
        let mut names = FEATURE_COLUMNS;
        names.swap(0, 1);
        let json = artifact_json(&names, &[1.0; 11]);
        assert!(matches!(
            LinearModel::load_from_str(&json),
            Err(ModelError::FeatureMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_wrong_coefficient_count() {
        let json = artifact_json(&FEATURE_COLUMNS, &[1.0; 10]);
        match LinearModel::load_from_str(&json) {
            Err(ModelError::CoefficientCount { expected, got }) => {
                assert_eq!(expected, 11);
                assert_eq!(got, 10);
            }
            other => panic!("expected CoefficientCount, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let coefficients = [1.0; 11];
        let json = serde_json::json!({
            "kind": "random_forest",
            "feature_names": FEATURE_COLUMNS,
            "coefficients": coefficients,
            "intercept": 0.0
        })
        .to_string();
        assert!(matches!(
            LinearModel::load_from_str(&json),
            Err(ModelError::UnsupportedKind(kind)) if kind == "random_forest"
        ));
    }

    #[test]
    fn test_shape_mismatch_is_prediction_error() {
        let model = LinearModel::new(vec![1.0; 3], 0.0);
        assert_eq!(
            model.predict(&sample_features()),
            Err(PredictError::ShapeMismatch {
                expected: 3,
                got: 11
            })
        );
    }

    #[test]
    fn test_non_finite_output_is_prediction_error() {
        let model = LinearModel::new(vec![f64::MAX; 11], 0.0);
        assert!(matches!(
            model.predict(&sample_features()),
            Err(PredictError::NonFinite(_))
        ));
    }

    #[test]
    fn test_load_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        match LinearModel::load_from_file(&path) {
            Err(StartupError::ModelMissing(p)) => assert_eq!(p, path),
            other => panic!("expected ModelMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(matches!(
            LinearModel::load_from_file(file.path()),
            Err(StartupError::ModelInvalid {
                source: ModelError::Parse(_),
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        let infinite_intercept = ModelArtifact {
            kind: "linear_regression".to_string(),
            feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            coefficients: vec![1.0; 11],
            intercept: f64::INFINITY,
        };
        assert!(matches!(
            LinearModel::from_artifact(infinite_intercept.clone()),
            Err(ModelError::NonFiniteParameter)
        ));

        let mut nan_coefficient = infinite_intercept;
        nan_coefficient.intercept = 0.0;
        nan_coefficient.coefficients[4] = f64::NAN;
        assert!(matches!(
            LinearModel::from_artifact(nan_coefficient),
            Err(ModelError::NonFiniteParameter)
        ));
    }
}
