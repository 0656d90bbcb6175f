//! Main application structure with tab navigation

use eframe::egui::{self, Color32, RichText};
use tracing::{error, info};

use carprice_app::{Config, PredictionContext};

use crate::predict_panel::PredictPanel;
use crate::settings_panel::SettingsPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Predict,
    Settings,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Predict => "Predict",
            Tab::Settings => "Settings",
        }
    }
}

/// A loaded context and the form bound to its choices
struct Session {
    context: PredictionContext,
    predict_panel: PredictPanel,
}

/// Main application state
pub struct CarPriceApp {
    /// Currently selected tab
    current_tab: Tab,
    /// Loaded session, or the startup error text
    session: Result<Session, String>,
    /// Settings panel state
    settings_panel: SettingsPanel,
    /// Application configuration
    config: Config,
}

impl CarPriceApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            error!("failed to load config, using defaults: {}", e);
            Config::default()
        });

        let session = Self::start_session(&config);
        let settings_panel = SettingsPanel::new(&config);

        Self {
            current_tab: Tab::default(),
            session,
            settings_panel,
            config,
        }
    }

    fn start_session(config: &Config) -> Result<Session, String> {
        match PredictionContext::init(config) {
            Ok(context) => {
                let predict_panel = PredictPanel::new(context.default_listing());
                Ok(Session {
                    context,
                    predict_panel,
                })
            }
            Err(e) => {
                error!("{}", e);
                Err(e.to_string())
            }
        }
    }

    fn reload(&mut self) {
        info!("reloading model and dataset");
        self.session = Self::start_session(&self.config);
    }

    /// Render the tab bar
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Predict, Tab::Settings] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for CarPriceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        let mut reload_requested = false;
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Predict => match &mut self.session {
                Ok(session) => session.predict_panel.ui(ui, &session.context),
                Err(message) => {
                    ui.heading("Car Price Prediction ML Model");
                    ui.add_space(10.0);
                    ui.label(RichText::new(message.as_str()).color(Color32::RED));
                    ui.add_space(5.0);
                    ui.label("Fix the paths in Settings and reload.");
                }
            },
            Tab::Settings => {
                reload_requested = self.settings_panel.ui(ui, &mut self.config);
            }
        });

        if reload_requested {
            self.reload();
            if self.session.is_ok() {
                self.current_tab = Tab::Predict;
            }
        }
    }
}
