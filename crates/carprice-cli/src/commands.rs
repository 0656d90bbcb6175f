//! Command handlers

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{Cli, Commands, ListingArgs, OutputFormat};
use crate::output::{output_choices, output_features, output_prediction};
use carprice_app::{Config, PredictionContext};
use carprice_domain::model::VehicleListing;
use carprice_domain::service::encode_listing;
use carprice_infra::ReferenceChoices;
use carprice_types::Result;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref model) = cli.model {
        config.model_path = model.clone();
    }
    if let Some(ref dataset) = cli.dataset {
        config.dataset_path = dataset.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Predict { listing } => cmd_predict(&config, listing, output_format),

        Commands::Encode { listing } => cmd_encode(listing, output_format),

        Commands::Choices => cmd_choices(&config, output_format),

        Commands::Config {
            show,
            set_model,
            set_dataset,
            set_output,
            reset,
        } => cmd_config(show, set_model, set_dataset, set_output, reset),
    }
}

fn cmd_predict(config: &Config, listing: ListingArgs, output_format: OutputFormat) -> Result<()> {
    let ctx = PredictionContext::init(config)?;

    let listing = VehicleListing::from(listing);
    debug!(?listing, "predict request");

    let prediction = ctx.predict(&listing)?;
    output_prediction(output_format, &prediction)
}

fn cmd_encode(listing: ListingArgs, output_format: OutputFormat) -> Result<()> {
    let features = encode_listing(&VehicleListing::from(listing))?;
    output_features(output_format, &features)
}

fn cmd_choices(config: &Config, output_format: OutputFormat) -> Result<()> {
    let choices = ReferenceChoices::load_from_file(&config.dataset_path)?;
    output_choices(output_format, &choices)
}

fn cmd_config(
    show: bool,
    set_model: Option<PathBuf>,
    set_dataset: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(model) = set_model {
        config.model_path = model;
        modified = true;
    }

    if let Some(dataset) = set_dataset {
        config.dataset_path = dataset;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
