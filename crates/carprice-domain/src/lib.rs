//! Domain layer: categorical domains, listing encoding, and the predictor seam

pub mod model;
pub mod predictor;
pub mod service;

pub use predictor::PricePredictor;
