//! Settings panel for the model and dataset paths

use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};
use tracing::{error, info};

use carprice_app::Config;

/// Settings panel
pub struct SettingsPanel {
    model_input: String,
    dataset_input: String,
    /// Whether the inputs differ from the saved config
    modified: bool,
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl SettingsPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            model_input: config.model_path.display().to_string(),
            dataset_input: config.dataset_path.display().to_string(),
            modified: false,
            status_message: None,
        }
    }

    /// Returns true when the caller should rebuild the prediction context
    pub fn ui(&mut self, ui: &mut Ui, config: &mut Config) -> bool {
        let mut reload = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.add_space(10.0);

            ui.label(RichText::new("Model artifact").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.text_edit_singleline(&mut self.model_input).changed() {
                    self.modified = true;
                }
                if ui.button("Browse...").clicked() {
                    if let Some(path) = pick_file("Select model artifact", "JSON", &["json"]) {
                        self.model_input = path.display().to_string();
                        self.modified = true;
                    }
                }
            });

            ui.add_space(15.0);

            ui.label(RichText::new("Reference dataset").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.text_edit_singleline(&mut self.dataset_input).changed() {
                    self.modified = true;
                }
                if ui.button("Browse...").clicked() {
                    if let Some(path) = pick_file("Select reference dataset", "CSV", &["csv"]) {
                        self.dataset_input = path.display().to_string();
                        self.modified = true;
                    }
                }
            });

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(15.0);

            ui.label(RichText::new("Current settings").strong());
            ui.add_space(5.0);

            egui::Frame::new()
                .fill(Color32::from_gray(30))
                .inner_margin(10.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    egui::Grid::new("current_config")
                        .num_columns(2)
                        .spacing([20.0, 6.0])
                        .show(ui, |ui| {
                            ui.label("Model:");
                            ui.label(config.model_path.display().to_string());
                            ui.end_row();

                            ui.label("Dataset:");
                            ui.label(config.dataset_path.display().to_string());
                            ui.end_row();

                            ui.label("CLI output:");
                            ui.label(config.output_format.to_string());
                            ui.end_row();
                        });
                });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        self.modified,
                        egui::Button::new(RichText::new("Save and reload").size(16.0)),
                    )
                    .clicked()
                {
                    reload = self.save_config(config);
                }

                if ui.button("Reload").clicked() {
                    reload = true;
                    self.status_message = None;
                }

                if ui.button("Revert").clicked() {
                    self.revert(config);
                }

                if self.modified {
                    ui.label(RichText::new("* unsaved changes").color(Color32::YELLOW));
                }
            });

            if let Some((ref msg, is_error)) = self.status_message {
                ui.add_space(10.0);
                let color = if is_error {
                    Color32::LIGHT_RED
                } else {
                    Color32::LIGHT_GREEN
                };
                ui.label(RichText::new(msg.as_str()).color(color));
            }
        });

        reload
    }

    fn revert(&mut self, config: &Config) {
        self.model_input = config.model_path.display().to_string();
        self.dataset_input = config.dataset_path.display().to_string();
        self.modified = false;
        self.status_message = None;
    }

    /// Copy the inputs into `config` and persist it. Returns true on success.
    fn save_config(&mut self, config: &mut Config) -> bool {
        let model = self.model_input.trim();
        let dataset = self.dataset_input.trim();
        if model.is_empty() || dataset.is_empty() {
            self.status_message = Some(("Both paths are required".to_string(), true));
            return false;
        }

        config.model_path = PathBuf::from(model);
        config.dataset_path = PathBuf::from(dataset);

        match config.save() {
            Ok(()) => {
                info!(
                    model = %config.model_path.display(),
                    dataset = %config.dataset_path.display(),
                    "settings saved"
                );
                self.modified = false;
                self.status_message = Some(("Settings saved".to_string(), false));
                true
            }
            Err(e) => {
                error!("failed to save config: {}", e);
                self.status_message = Some((format!("Save failed: {}", e), true));
                false
            }
        }
    }
}

fn pick_file(title: &str, filter_name: &str, extensions: &[&str]) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter(filter_name, extensions)
        .set_title(title)
        .pick_file()
}
