//! Listing to feature-vector encoding

use carprice_types::EncodeError;

use crate::model::{
    Brand, Categorical, FeatureVector, Fuel, OwnerHistory, SellerType, Transmission,
    VehicleListing,
};

/// Encode a listing into model column order.
///
/// Categorical labels are looked up exactly; the first one without a code
/// rejects the whole record. Numeric fields pass through unchanged.
pub fn encode_listing(listing: &VehicleListing) -> Result<FeatureVector, EncodeError> {
    let brand = Brand::parse(&listing.brand)?;
    let fuel = Fuel::parse(&listing.fuel)?;
    let seller_type = SellerType::parse(&listing.seller_type)?;
    let transmission = Transmission::parse(&listing.transmission)?;
    let owner = OwnerHistory::parse(&listing.owner_history)?;

    Ok(FeatureVector::new([
        brand.code() as f64,
        listing.manufacture_year as f64,
        listing.km_driven as f64,
        fuel.code() as f64,
        seller_type.code() as f64,
        transmission.code() as f64,
        owner.code() as f64,
        listing.mileage,
        listing.engine_cc,
        listing.max_power,
        listing.seats as f64,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swift_listing() -> VehicleListing {
        VehicleListing {
            brand: "Maruti".to_string(),
            manufacture_year: 2018,
            km_driven: 45000,
            fuel: "Petrol".to_string(),
            seller_type: "Individual".to_string(),
            transmission: "Manual".to_string(),
            owner_history: "First Owner".to_string(),
            mileage: 21.4,
            engine_cc: 1197.0,
            max_power: 81.8,
            seats: 5,
        }
    }

    #[test]
    fn test_encode_maruti_swift_listing() {
        let encoded = encode_listing(&swift_listing()).unwrap();
        assert_eq!(
            encoded.as_slice(),
            &[1.0, 2018.0, 45000.0, 2.0, 1.0, 1.0, 1.0, 21.4, 1197.0, 81.8, 5.0]
        );
    }

    #[test]
    fn test_encode_highest_codes() {
        let listing = VehicleListing {
            brand: "Opel".to_string(),
            fuel: "CNG".to_string(),
            seller_type: "Trustmark Dealer".to_string(),
            transmission: "Automatic".to_string(),
            owner_history: "Test Drive Car".to_string(),
            ..swift_listing()
        };
        let encoded = encode_listing(&listing).unwrap();
        assert_eq!(encoded.get("name"), Some(31.0));
        assert_eq!(encoded.get("fuel"), Some(4.0));
        assert_eq!(encoded.get("seller_type"), Some(3.0));
        assert_eq!(encoded.get("transmission"), Some(2.0));
        assert_eq!(encoded.get("owner"), Some(5.0));
    }

    #[test]
    fn test_numeric_fields_pass_through() {
        let listing = VehicleListing {
            manufacture_year: 1994,
            km_driven: 200_000,
            mileage: 10.0,
            engine_cc: 4999.5,
            max_power: 0.0,
            seats: 10,
            ..swift_listing()
        };
        let encoded = encode_listing(&listing).unwrap();
        assert_eq!(encoded.get("year"), Some(1994.0));
        assert_eq!(encoded.get("km_driven"), Some(200_000.0));
        assert_eq!(encoded.get("mileage"), Some(10.0));
        assert_eq!(encoded.get("engine"), Some(4999.5));
        assert_eq!(encoded.get("max_power"), Some(0.0));
        assert_eq!(encoded.get("seats"), Some(10.0));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let listing = swift_listing();
        let first = encode_listing(&listing).unwrap();
        for _ in 0..10 {
            assert_eq!(encode_listing(&listing).unwrap(), first);
        }
    }

    #[test]
    fn test_unknown_brand_is_rejected() {
        let listing = VehicleListing {
            brand: "Tesla".to_string(),
            ..swift_listing()
        };
        let err = encode_listing(&listing).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnknownLabel {
                field: "brand",
                value: "Tesla".to_string()
            }
        );
    }

    #[test]
    fn test_each_categorical_field_is_checked() {
        let cases = [
            (
                VehicleListing {
                    fuel: "Electric".to_string(),
                    ..swift_listing()
                },
                "fuel",
            ),
            (
                VehicleListing {
                    seller_type: "dealer".to_string(),
                    ..swift_listing()
                },
                "seller_type",
            ),
            (
                VehicleListing {
                    transmission: "CVT".to_string(),
                    ..swift_listing()
                },
                "transmission",
            ),
            (
                VehicleListing {
                    owner_history: "Fifth Owner".to_string(),
                    ..swift_listing()
                },
                "owner",
            ),
        ];

        for (listing, field) in cases {
            match encode_listing(&listing) {
                Err(EncodeError::UnknownLabel { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected rejection for {}, got {:?}", field, other),
            }
        }
    }
}
