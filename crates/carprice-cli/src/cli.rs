//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use carprice_domain::model::ranges::{
    FieldRange, ENGINE_CC_RANGE, KM_DRIVEN_RANGE, MAX_POWER_RANGE, MILEAGE_RANGE, SEATS_RANGE,
    YEAR_RANGE,
};
use carprice_domain::model::VehicleListing;
pub use carprice_types::OutputFormat;

#[derive(Parser)]
#[command(name = "carprice")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Used car sale price prediction from listing attributes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Model artifact path. Uses config value if not specified.
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Reference dataset path. Uses config value if not specified.
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the sale price of a car
    Predict {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Show the encoded feature vector without running the model
    Encode {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// List the choices available in the reference dataset
    Choices,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set model artifact path
        #[arg(long)]
        set_model: Option<PathBuf>,

        /// Set reference dataset path
        #[arg(long)]
        set_dataset: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Listing fields, one flag each
#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Car brand (e.g., "Maruti", "Mercedes-Benz")
    #[arg(long)]
    pub brand: String,

    /// Manufacture year
    #[arg(long, value_parser = clap::value_parser!(i64).range(YEAR_RANGE.min..=YEAR_RANGE.max))]
    pub year: i64,

    /// Kilometres driven
    #[arg(long, value_parser = clap::value_parser!(i64).range(KM_DRIVEN_RANGE.min..=KM_DRIVEN_RANGE.max))]
    pub km_driven: i64,

    /// Fuel type (Diesel, Petrol, LPG, CNG)
    #[arg(long)]
    pub fuel: String,

    /// Seller type (Individual, Dealer, Trustmark Dealer)
    #[arg(long)]
    pub seller_type: String,

    /// Transmission (Manual, Automatic)
    #[arg(long)]
    pub transmission: String,

    /// Owner history (e.g., "First Owner", "Test Drive Car")
    #[arg(long)]
    pub owner: String,

    /// Mileage in kmpl
    #[arg(long, value_parser = parse_mileage)]
    pub mileage: f64,

    /// Engine displacement in CC
    #[arg(long, value_parser = parse_engine)]
    pub engine: f64,

    /// Max power in bhp
    #[arg(long, value_parser = parse_max_power)]
    pub max_power: f64,

    /// Number of seats
    #[arg(long, value_parser = clap::value_parser!(i64).range(SEATS_RANGE.min..=SEATS_RANGE.max))]
    pub seats: i64,
}

impl From<ListingArgs> for VehicleListing {
    fn from(args: ListingArgs) -> Self {
        VehicleListing {
            brand: args.brand,
            manufacture_year: args.year,
            km_driven: args.km_driven,
            fuel: args.fuel,
            seller_type: args.seller_type,
            transmission: args.transmission,
            owner_history: args.owner,
            mileage: args.mileage,
            engine_cc: args.engine,
            max_power: args.max_power,
            seats: args.seats,
        }
    }
}

fn parse_in_range(s: &str, range: FieldRange<f64>) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if range.contains(value) {
        Ok(value)
    } else {
        Err(format!("{} is not in {}..={}", value, range.min, range.max))
    }
}

fn parse_mileage(s: &str) -> Result<f64, String> {
    parse_in_range(s, MILEAGE_RANGE)
}

fn parse_engine(s: &str) -> Result<f64, String> {
    parse_in_range(s, ENGINE_CC_RANGE)
}

fn parse_max_power(s: &str) -> Result<f64, String> {
    parse_in_range(s, MAX_POWER_RANGE)
}
