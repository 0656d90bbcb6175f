//! Domain services

pub mod encoder;
pub mod price_format;

pub use encoder::encode_listing;
pub use price_format::{format_price, format_price_message};
