//! Vehicle listing record as supplied by a form

use serde::{Deserialize, Serialize};

/// Raw field values for one prediction request.
///
/// Categorical fields hold labels exactly as the user picked them; they are
/// only checked when encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleListing {
    /// Manufacturer (e.g., "Maruti", "Mercedes-Benz")
    pub brand: String,
    pub manufacture_year: i64,
    pub km_driven: i64,
    /// Diesel, Petrol, LPG, CNG
    pub fuel: String,
    /// Individual, Dealer, Trustmark Dealer
    pub seller_type: String,
    /// Manual, Automatic
    pub transmission: String,
    /// First Owner .. Test Drive Car
    pub owner_history: String,
    /// kmpl
    pub mileage: f64,
    pub engine_cc: f64,
    /// bhp
    pub max_power: f64,
    pub seats: i64,
}
