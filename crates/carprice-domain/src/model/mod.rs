//! Domain model types

pub mod categorical;
pub mod feature_vector;
pub mod listing;
pub mod prediction;
pub mod ranges;

pub use categorical::{Brand, Categorical, Fuel, OwnerHistory, SellerType, Transmission};
pub use feature_vector::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};
pub use listing::VehicleListing;
pub use prediction::PricePrediction;
pub use ranges::FieldRange;
