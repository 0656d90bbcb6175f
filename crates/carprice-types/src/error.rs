//! Error types for carprice

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// A categorical label that has no numeric code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Unknown {field} value: {value:?}")]
    UnknownLabel { field: &'static str, value: String },
}

/// Failures raised while running inference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("Feature vector has {got} columns, model expects {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Model produced a non-finite price: {0}")]
    NonFinite(f64),
}

/// Model artifact contents that cannot be turned into a predictor
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported model kind: {0}")]
    UnsupportedKind(String),

    #[error("Feature columns {got:?} do not match expected {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },

    #[error("Model has {got} coefficients, expected {expected}")]
    CoefficientCount { expected: usize, got: usize },

    #[error("Model parameters contain a non-finite value")]
    NonFiniteParameter,
}

/// Reference dataset contents that cannot be read
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Dataset contains no rows")]
    Empty,
}

/// A required resource could not be loaded at startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Model artifact not found at {}", .0.display())]
    ModelMissing(PathBuf),

    #[error("Failed to read model artifact at {}: {source}", .path.display())]
    ModelUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid model artifact at {}: {source}", .path.display())]
    ModelInvalid { path: PathBuf, source: ModelError },

    #[error("Reference dataset not found at {}", .0.display())]
    DatasetMissing(PathBuf),

    #[error("Failed to read reference dataset at {}: {source}", .path.display())]
    DatasetUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid reference dataset at {}: {source}", .path.display())]
    DatasetInvalid { path: PathBuf, source: DatasetError },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Startup failed: {0}")]
    Startup(#[from] StartupError),

    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("Prediction failed: {0}")]
    Predict(#[from] PredictError),
}

pub type Result<T> = std::result::Result<T, Error>;
