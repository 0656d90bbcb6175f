//! Prediction context: loaded model and reference choices

use tracing::{debug, info, warn};

use carprice_domain::model::ranges::{
    ENGINE_CC_RANGE, KM_DRIVEN_RANGE, MAX_POWER_RANGE, MILEAGE_RANGE, SEATS_RANGE, YEAR_RANGE,
};
use carprice_domain::model::{PricePrediction, VehicleListing};
use carprice_domain::service::encode_listing;
use carprice_domain::PricePredictor;
use carprice_infra::{LinearModel, ReferenceChoices};
use carprice_types::Result;

use crate::config::Config;

/// Everything a prediction request needs, loaded once at startup
pub struct PredictionContext {
    predictor: Box<dyn PricePredictor>,
    choices: ReferenceChoices,
}

impl PredictionContext {
    /// Load the model artifact, then the reference dataset.
    ///
    /// Either one missing aborts startup with an error naming it.
    pub fn init(config: &Config) -> Result<Self> {
        let model = LinearModel::load_from_file(&config.model_path)?;
        info!(path = %config.model_path.display(), model = %model.describe(), "model loaded");

        let choices = ReferenceChoices::load_from_file(&config.dataset_path)?;
        info!(
            path = %config.dataset_path.display(),
            rows = choices.row_count,
            "reference dataset loaded"
        );

        for unknown in choices.unencodable() {
            warn!(
                field = unknown.field,
                label = %unknown.label,
                "dataset label has no model code; selecting it will fail"
            );
        }

        Ok(Self::from_parts(Box::new(model), choices))
    }

    /// Build a context from an already-loaded predictor
    pub fn from_parts(predictor: Box<dyn PricePredictor>, choices: ReferenceChoices) -> Self {
        Self { predictor, choices }
    }

    pub fn choices(&self) -> &ReferenceChoices {
        &self.choices
    }

    pub fn predictor(&self) -> &dyn PricePredictor {
        self.predictor.as_ref()
    }

    /// Encode then predict. Encoding failures never reach the model.
    pub fn predict(&self, listing: &VehicleListing) -> Result<PricePrediction> {
        let features = encode_listing(listing)?;
        debug!(features = ?features.as_slice(), "encoded listing");

        let price = self.predictor.predict(&features)?;
        debug!(price, "model returned price");

        Ok(PricePrediction::new(price, features))
    }

    /// Initial form values: first choice of each set, lower bound of each range
    pub fn default_listing(&self) -> VehicleListing {
        fn first(values: &[String]) -> String {
            values.first().cloned().unwrap_or_default()
        }

        VehicleListing {
            brand: first(&self.choices.brands),
            manufacture_year: YEAR_RANGE.min,
            km_driven: KM_DRIVEN_RANGE.min,
            fuel: first(&self.choices.fuels),
            seller_type: first(&self.choices.seller_types),
            transmission: first(&self.choices.transmissions),
            owner_history: first(&self.choices.owner_histories),
            mileage: MILEAGE_RANGE.min,
            engine_cc: ENGINE_CC_RANGE.min,
            max_power: MAX_POWER_RANGE.min,
            seats: SEATS_RANGE.min,
        }
    }
}
