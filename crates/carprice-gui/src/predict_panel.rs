//! Prediction form panel

use eframe::egui::{self, Color32, RichText, Ui};
use tracing::{info, warn};

use carprice_app::PredictionContext;
use carprice_domain::model::ranges::{
    ENGINE_CC_RANGE, KM_DRIVEN_RANGE, MAX_POWER_RANGE, MILEAGE_RANGE, SEATS_RANGE, YEAR_RANGE,
};
use carprice_domain::model::VehicleListing;

/// Form fields plus the outcome of the last Predict click
pub struct PredictPanel {
    listing: VehicleListing,
    /// Ok(price message) or Err(error message)
    outcome: Option<Result<String, String>>,
}

impl PredictPanel {
    pub fn new(listing: VehicleListing) -> Self {
        Self {
            listing,
            outcome: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, ctx: &PredictionContext) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Car Price Prediction ML Model");
            ui.label(
                RichText::new(ctx.predictor().describe())
                    .color(Color32::GRAY)
                    .small(),
            );
            ui.add_space(10.0);

            let choices = ctx.choices();
            egui::Grid::new("listing_form")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    choice_row(ui, "Select Car Brand", &mut self.listing.brand, &choices.brands);

                    ui.label("Car Manufactured Year");
                    ui.add(egui::Slider::new(
                        &mut self.listing.manufacture_year,
                        YEAR_RANGE.as_inclusive(),
                    ));
                    ui.end_row();

                    ui.label("No of kms Driven");
                    ui.add(egui::Slider::new(
                        &mut self.listing.km_driven,
                        KM_DRIVEN_RANGE.as_inclusive(),
                    ));
                    ui.end_row();

                    choice_row(ui, "Fuel type", &mut self.listing.fuel, &choices.fuels);
                    choice_row(
                        ui,
                        "Seller type",
                        &mut self.listing.seller_type,
                        &choices.seller_types,
                    );
                    choice_row(
                        ui,
                        "Transmission type",
                        &mut self.listing.transmission,
                        &choices.transmissions,
                    );
                    choice_row(
                        ui,
                        "Owner type",
                        &mut self.listing.owner_history,
                        &choices.owner_histories,
                    );

                    ui.label("Car Mileage");
                    ui.add(
                        egui::Slider::new(&mut self.listing.mileage, MILEAGE_RANGE.as_inclusive())
                            .step_by(0.1),
                    );
                    ui.end_row();

                    ui.label("Engine CC");
                    ui.add(
                        egui::Slider::new(
                            &mut self.listing.engine_cc,
                            ENGINE_CC_RANGE.as_inclusive(),
                        )
                        .step_by(1.0),
                    );
                    ui.end_row();

                    ui.label("Max Power");
                    ui.add(
                        egui::Slider::new(
                            &mut self.listing.max_power,
                            MAX_POWER_RANGE.as_inclusive(),
                        )
                        .step_by(0.1),
                    );
                    ui.end_row();

                    ui.label("No of Seats");
                    ui.add(egui::Slider::new(
                        &mut self.listing.seats,
                        SEATS_RANGE.as_inclusive(),
                    ));
                    ui.end_row();
                });

            ui.add_space(15.0);

            if ui.button(RichText::new("Predict").size(16.0)).clicked() {
                self.outcome = Some(run_prediction(ctx, &self.listing));
            }

            ui.add_space(10.0);

            match &self.outcome {
                Some(Ok(message)) => {
                    ui.label(RichText::new(message.as_str()).size(18.0).strong());
                }
                Some(Err(message)) => {
                    ui.label(RichText::new(message.as_str()).color(Color32::RED));
                }
                None => {}
            }
        });
    }
}

fn choice_row(ui: &mut Ui, label: &str, current: &mut String, options: &[String]) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.as_str())
        .width(220.0)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(current, option.clone(), option.as_str());
            }
        });
    ui.end_row();
}

/// Run one prediction and turn the outcome into display text
fn run_prediction(ctx: &PredictionContext, listing: &VehicleListing) -> Result<String, String> {
    match ctx.predict(listing) {
        Ok(prediction) => {
            info!(price = prediction.price, "prediction complete");
            Ok(prediction.message)
        }
        Err(e) => {
            warn!("prediction failed: {}", e);
            Err(format!("An error occurred during prediction: {}", e))
        }
    }
}
