//! Categorical field domains and their integer codes
//!
//! Each domain is a closed enum whose discriminant is the code the trained
//! model was fitted on. Codes start at 1 and are contiguous per domain.

use std::fmt;
use std::str::FromStr;

use carprice_types::EncodeError;

/// A closed set of labels with stable integer codes
pub trait Categorical: Sized + Copy + 'static {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Every member, in code order
    const ALL: &'static [Self];

    /// Human-readable label as it appears in the reference dataset
    fn label(&self) -> &'static str;

    /// Integer code fed to the model
    fn code(&self) -> u32;

    /// Exact-match lookup. No trimming, no case folding.
    fn parse(value: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.label() == value)
            .ok_or_else(|| EncodeError::UnknownLabel {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }

    /// All labels, in code order
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|member| member.label()).collect()
    }
}

/// Wire up `FromStr` and `Display` for a categorical enum
macro_rules! categorical_conversions {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = EncodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Categorical>::parse(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Ownership history of the listed car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum OwnerHistory {
    FirstOwner = 1,
    SecondOwner = 2,
    ThirdOwner = 3,
    FourthAndAboveOwner = 4,
    TestDriveCar = 5,
}

impl Categorical for OwnerHistory {
    const FIELD: &'static str = "owner";

    const ALL: &'static [Self] = &[
        OwnerHistory::FirstOwner,
        OwnerHistory::SecondOwner,
        OwnerHistory::ThirdOwner,
        OwnerHistory::FourthAndAboveOwner,
        OwnerHistory::TestDriveCar,
    ];

    fn label(&self) -> &'static str {
        match self {
            OwnerHistory::FirstOwner => "First Owner",
            OwnerHistory::SecondOwner => "Second Owner",
            OwnerHistory::ThirdOwner => "Third Owner",
            OwnerHistory::FourthAndAboveOwner => "Fourth & Above Owner",
            OwnerHistory::TestDriveCar => "Test Drive Car",
        }
    }

    fn code(&self) -> u32 {
        *self as u32
    }
}

categorical_conversions!(OwnerHistory);

/// Fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Fuel {
    Diesel = 1,
    Petrol = 2,
    Lpg = 3,
    Cng = 4,
}

impl Categorical for Fuel {
    const FIELD: &'static str = "fuel";

    const ALL: &'static [Self] = &[Fuel::Diesel, Fuel::Petrol, Fuel::Lpg, Fuel::Cng];

    fn label(&self) -> &'static str {
        match self {
            Fuel::Diesel => "Diesel",
            Fuel::Petrol => "Petrol",
            Fuel::Lpg => "LPG",
            Fuel::Cng => "CNG",
        }
    }

    fn code(&self) -> u32 {
        *self as u32
    }
}

categorical_conversions!(Fuel);

/// Who is selling the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SellerType {
    Individual = 1,
    Dealer = 2,
    TrustmarkDealer = 3,
}

impl Categorical for SellerType {
    const FIELD: &'static str = "seller_type";

    const ALL: &'static [Self] = &[
        SellerType::Individual,
        SellerType::Dealer,
        SellerType::TrustmarkDealer,
    ];

    fn label(&self) -> &'static str {
        match self {
            SellerType::Individual => "Individual",
            SellerType::Dealer => "Dealer",
            SellerType::TrustmarkDealer => "Trustmark Dealer",
        }
    }

    fn code(&self) -> u32 {
        *self as u32
    }
}

categorical_conversions!(SellerType);

/// Gearbox type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Transmission {
    Manual = 1,
    Automatic = 2,
}

impl Categorical for Transmission {
    const FIELD: &'static str = "transmission";

    const ALL: &'static [Self] = &[Transmission::Manual, Transmission::Automatic];

    fn label(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }

    fn code(&self) -> u32 {
        *self as u32
    }
}

categorical_conversions!(Transmission);

/// Manufacturer, taken from the first word of the listing name.
///
/// The code order matches the encoding existing model artifacts were
/// trained with and must not be reshuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Brand {
    Maruti = 1,
    Skoda = 2,
    Honda = 3,
    Hyundai = 4,
    Toyota = 5,
    Ford = 6,
    Renault = 7,
    Mahindra = 8,
    Tata = 9,
    Chevrolet = 10,
    Datsun = 11,
    Jeep = 12,
    MercedesBenz = 13,
    Mitsubishi = 14,
    Audi = 15,
    Volkswagen = 16,
    Bmw = 17,
    Nissan = 18,
    Lexus = 19,
    Jaguar = 20,
    /// "Land" as in Land Rover; the dataset only keeps the first word
    Land = 21,
    Mg = 22,
    Volvo = 23,
    Daewoo = 24,
    Kia = 25,
    Fiat = 26,
    Force = 27,
    Ambassador = 28,
    /// Ashok Leyland
    Ashok = 29,
    Isuzu = 30,
    Opel = 31,
}

impl Categorical for Brand {
    const FIELD: &'static str = "brand";

    const ALL: &'static [Self] = &[
        Brand::Maruti,
        Brand::Skoda,
        Brand::Honda,
        Brand::Hyundai,
        Brand::Toyota,
        Brand::Ford,
        Brand::Renault,
        Brand::Mahindra,
        Brand::Tata,
        Brand::Chevrolet,
        Brand::Datsun,
        Brand::Jeep,
        Brand::MercedesBenz,
        Brand::Mitsubishi,
        Brand::Audi,
        Brand::Volkswagen,
        Brand::Bmw,
        Brand::Nissan,
        Brand::Lexus,
        Brand::Jaguar,
        Brand::Land,
        Brand::Mg,
        Brand::Volvo,
        Brand::Daewoo,
        Brand::Kia,
        Brand::Fiat,
        Brand::Force,
        Brand::Ambassador,
        Brand::Ashok,
        Brand::Isuzu,
        Brand::Opel,
    ];

    fn label(&self) -> &'static str {
        match self {
            Brand::Maruti => "Maruti",
            Brand::Skoda => "Skoda",
            Brand::Honda => "Honda",
            Brand::Hyundai => "Hyundai",
            Brand::Toyota => "Toyota",
            Brand::Ford => "Ford",
            Brand::Renault => "Renault",
            Brand::Mahindra => "Mahindra",
            Brand::Tata => "Tata",
            Brand::Chevrolet => "Chevrolet",
            Brand::Datsun => "Datsun",
            Brand::Jeep => "Jeep",
            Brand::MercedesBenz => "Mercedes-Benz",
            Brand::Mitsubishi => "Mitsubishi",
            Brand::Audi => "Audi",
            Brand::Volkswagen => "Volkswagen",
            Brand::Bmw => "BMW",
            Brand::Nissan => "Nissan",
            Brand::Lexus => "Lexus",
            Brand::Jaguar => "Jaguar",
            Brand::Land => "Land",
            Brand::Mg => "MG",
            Brand::Volvo => "Volvo",
            Brand::Daewoo => "Daewoo",
            Brand::Kia => "Kia",
            Brand::Fiat => "Fiat",
            Brand::Force => "Force",
            Brand::Ambassador => "Ambassador",
            Brand::Ashok => "Ashok",
            Brand::Isuzu => "Isuzu",
            Brand::Opel => "Opel",
        }
    }

    fn code(&self) -> u32 {
        *self as u32
    }
}

categorical_conversions!(Brand);
