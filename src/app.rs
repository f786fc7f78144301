use eframe::egui;

use crate::color::PresetColors;
use crate::config::{AppConfig, Layout};
use crate::state::{AppState, Tab};
use crate::ui::{form, panels, presets};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FishPredictorApp {
    pub state: AppState,
    colors: PresetColors,
}

impl FishPredictorApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            colors: PresetColors::default(),
        }
    }
}

impl eframe::App for FishPredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.state.config.layout {
            Layout::Simple => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    form::simple_form(ui, &mut self.state);
                });
            }
            Layout::Full => {
                // ---- Top panel: artifacts menu + tabs ----
                egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
                    panels::top_bar(ui, &mut self.state);
                });

                // ---- Left side panel: about / tips ----
                egui::SidePanel::left("about_panel")
                    .default_width(240.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        panels::side_panel(ui);
                    });

                // ---- Central panel: active tab ----
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            match self.state.active_tab {
                                Tab::Predictor => form::predictor_tab(ui, &mut self.state),
                                Tab::Presets => {
                                    presets::presets_tab(ui, &mut self.state, &self.colors)
                                }
                            }
                            panels::footer(ui);
                        });
                });
            }
        }
    }
}
