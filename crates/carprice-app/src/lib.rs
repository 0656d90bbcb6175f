//! Application service layer - config and the prediction use case

pub mod config;
pub mod context;

pub use config::Config;
pub use context::PredictionContext;
