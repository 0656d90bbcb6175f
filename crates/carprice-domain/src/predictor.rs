//! Inference seam between the encoder and a trained model

use carprice_types::PredictError;

use crate::model::FeatureVector;

/// A trained price model.
///
/// Implementations receive columns in [`crate::model::FEATURE_COLUMNS`]
/// order and return a single price estimate.
pub trait PricePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError>;

    /// Short description for logs
    fn describe(&self) -> String {
        "price model".to_string()
    }
}

impl<P: PricePredictor + ?Sized> PricePredictor for Box<P> {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        (**self).predict(features)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
