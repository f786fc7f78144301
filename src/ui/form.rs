use eframe::egui::{self, Color32, RichText, Ui};
use fish_predictor::data::features::{MAX_LENGTH_CM, MAX_WEIGHT_G};

use crate::state::{AppState, NoticeLevel};

const SUCCESS_GREEN: Color32 = Color32::from_rgb(60, 170, 90);

// ---------------------------------------------------------------------------
// Input widgets
// ---------------------------------------------------------------------------

fn length_input(ui: &mut Ui, state: &mut AppState) {
    let mut length = state.form.length();
    let response = ui
        .add(
            egui::DragValue::new(&mut length)
                .range(0.0..=MAX_LENGTH_CM)
                .speed(0.1)
                .suffix(" cm"),
        )
        .on_hover_text("Measure the fish from head to tail in centimeters");
    if response.changed() {
        state.form.set_length(length);
    }
}

fn weight_input(ui: &mut Ui, state: &mut AppState) {
    let mut weight = state.form.weight();
    let response = ui
        .add(
            egui::DragValue::new(&mut weight)
                .range(0.0..=MAX_WEIGHT_G)
                .speed(1.0)
                .suffix(" g"),
        )
        .on_hover_text("Weigh the fish in grams");
    if response.changed() {
        state.form.set_weight(weight);
    }
}

fn ratio_input(ui: &mut Ui, state: &mut AppState) {
    let mut ratio = state.form.ratio();
    let response = ui
        .add(
            egui::DragValue::new(&mut ratio)
                .range(0.0..=f64::MAX)
                .speed(0.0001)
                .fixed_decimals(4),
        )
        .on_hover_text("Length ÷ Weight. Auto-calculated but you can adjust if needed.");
    if response.changed() {
        state.form.set_ratio(ratio);
    }
    if state.form.ratio_edited() && ui.small_button("Reset").clicked() {
        state.form.reset_ratio();
    }
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(20.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Notices and result
// ---------------------------------------------------------------------------

fn notices(ui: &mut Ui, state: &AppState) {
    for notice in &state.notices {
        let (prefix, color) = match notice.level {
            NoticeLevel::Error => ("❌", Color32::RED),
            NoticeLevel::Warning => ("⚠️", Color32::ORANGE),
            NoticeLevel::Info => ("ℹ️", Color32::LIGHT_BLUE),
        };
        ui.label(RichText::new(format!("{prefix} {}", notice.text)).color(color));
    }
}

fn result_cards(ui: &mut Ui, state: &AppState) {
    let Some(prediction) = &state.last_prediction else {
        return;
    };

    ui.separator();
    ui.columns(2, |cols| {
        cols[0].group(|ui: &mut Ui| {
            ui.heading(RichText::new("✅ Prediction Result").color(SUCCESS_GREEN));
            let line = match &prediction.species {
                Some(species) => format!("Species: {species}"),
                None => format!("Label: {}", prediction.label),
            };
            ui.label(RichText::new(line).size(18.0).strong());
        });

        cols[1].group(|ui: &mut Ui| {
            let f = &prediction.features;
            ui.heading("📋 Input Summary");
            ui.label(format!("Length: {:.1} cm", f.length));
            ui.label(format!("Weight: {:.1} g", f.weight));
            ui.label(format!("Ratio: {:.4}", f.ratio));
        });
    });
}

// ---------------------------------------------------------------------------
// Full layout – predictor tab
// ---------------------------------------------------------------------------

pub fn predictor_tab(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🐟 Fish Species Predictor");
    ui.add_space(4.0);
    ui.strong("Enter Fish Measurements");

    if let Some(preset) = state.selected_preset() {
        ui.label(RichText::new(format!("✨ Seeded from {}", preset.summary())).weak());
    }
    ui.add_space(6.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label("Length (cm)");
            length_input(ui, state);
        });
        ui.add_space(24.0);
        ui.vertical(|ui: &mut Ui| {
            ui.label("Weight (g)");
            weight_input(ui, state);
        });
        ui.add_space(24.0);
        metric(ui, "Auto Ratio", format!("{:.4}", state.form.auto_ratio()));
    });

    ui.add_space(6.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Length/Weight Ratio");
        ratio_input(ui, state);
    });

    egui::CollapsingHeader::new("📈 View Input Statistics")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                metric(ui, "Length", format!("{:.1} cm", state.form.length()));
                ui.add_space(24.0);
                metric(ui, "Weight", format!("{:.1} g", state.form.weight()));
                ui.add_space(24.0);
                metric(ui, "Ratio", format!("{:.4}", state.form.ratio()));
            });
        });

    ui.add_space(10.0);
    ui.vertical_centered(|ui: &mut Ui| {
        let button = egui::Button::new(RichText::new("🎯 Predict Fish Species").size(16.0))
            .min_size(egui::vec2(ui.available_width() * 0.5, 32.0));
        if ui.add(button).clicked() {
            state.predict();
        }
    });

    ui.add_space(6.0);
    notices(ui, state);
    result_cards(ui, state);
}

// ---------------------------------------------------------------------------
// Simple layout
// ---------------------------------------------------------------------------

pub fn simple_form(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Fish species predictor");
    ui.label("Predict fish species from length, weight, and length/weight ratio.");
    ui.add_space(8.0);

    egui::Grid::new("simple_inputs")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Length (cm)");
            length_input(ui, state);
            ui.end_row();

            ui.label("Weight (g)");
            weight_input(ui, state);
            ui.end_row();

            ui.label("Length/Weight ratio (length ÷ weight)");
            ui.horizontal(|ui: &mut Ui| ratio_input(ui, state));
            ui.end_row();
        });

    ui.add_space(8.0);
    if ui.button("Predict species").clicked() {
        state.predict();
    }

    notices(ui, state);
    if let Some(prediction) = &state.last_prediction {
        ui.label(RichText::new(prediction.to_string()).color(SUCCESS_GREEN).strong());
    }
}
