use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};
use fish_predictor::data::presets::PRESETS;

use crate::color::PresetColors;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Presets tab
// ---------------------------------------------------------------------------

/// Render the preset selector, table and scatter plot.
pub fn presets_tab(ui: &mut Ui, state: &mut AppState, colors: &PresetColors) {
    ui.heading("Load Example Fish Data");
    ui.add_space(4.0);

    let current = state.selected_preset().map(|p| p.name).unwrap_or("");
    egui::ComboBox::from_label("Select a fish preset")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for (i, preset) in PRESETS.iter().enumerate() {
                if ui
                    .selectable_label(state.selected_preset == Some(i), preset.name)
                    .clicked()
                {
                    state.select_preset(i);
                }
            }
        })
        .response
        .on_hover_text("Choose a typical fish to see a prediction");

    if let Some(preset) = state.selected_preset() {
        ui.label(RichText::new(format!("✨ {}", preset.summary())).color(Color32::LIGHT_BLUE));
    }

    ui.add_space(8.0);
    if let Some(index) = preset_table(ui, state.selected_preset, colors) {
        state.select_preset(index);
        state.active_tab = Tab::Predictor;
    }

    ui.add_space(8.0);
    preset_plot(ui, state, colors);
}

/// Table of presets. Returns the row whose "Use" button was clicked.
fn preset_table(ui: &mut Ui, selected: Option<usize>, colors: &PresetColors) -> Option<usize> {
    let mut chosen = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Fish", "Length (cm)", "Weight (g)", "Ratio", ""] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (i, preset) in PRESETS.iter().enumerate() {
                body.row(22.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        let mut text = RichText::new(preset.name).color(colors.color_for(i));
                        if selected == Some(i) {
                            text = text.strong();
                        }
                        ui.label(text);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", preset.length_cm));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", preset.weight_g));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.4}", preset.length_cm / preset.weight_g));
                    });
                    row.col(|ui: &mut Ui| {
                        if ui.small_button("Use").clicked() {
                            chosen = Some(i);
                        }
                    });
                });
            }
        });

    chosen
}

/// Length against weight for every preset, with the current input on top.
fn preset_plot(ui: &mut Ui, state: &AppState, colors: &PresetColors) {
    let current = [state.form.length(), state.form.weight()];

    Plot::new("preset_plot")
        .legend(Legend::default())
        .x_axis_label("Length (cm)")
        .y_axis_label("Weight (g)")
        .height(280.0)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, preset) in PRESETS.iter().enumerate() {
                let points = Points::new(PlotPoints::new(vec![[preset.length_cm, preset.weight_g]]))
                    .name(preset.name)
                    .color(colors.color_for(i))
                    .radius(5.0);
                plot_ui.points(points);
            }

            let input = Points::new(PlotPoints::new(vec![current]))
                .name("Current input")
                .shape(MarkerShape::Diamond)
                .color(Color32::WHITE)
                .radius(7.0);
            plot_ui.points(input);
        });
}
