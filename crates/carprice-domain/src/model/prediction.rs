//! Prediction result type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FeatureVector;
use crate::service::price_format::format_price_message;

/// One price estimate with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePrediction {
    /// Raw model output
    pub price: f64,
    /// User-facing line, e.g. "Car Price is going to be 452,345.68"
    pub message: String,
    /// Encoded model input
    pub features: FeatureVector,
    pub predicted_at: DateTime<Utc>,
}

impl PricePrediction {
    pub fn new(price: f64, features: FeatureVector) -> Self {
        Self {
            price,
            message: format_price_message(price),
            features,
            predicted_at: Utc::now(),
        }
    }
}
