use eframe::egui::{self, RichText, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the artifacts menu and the tab selector.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Artifacts", |ui: &mut Ui| {
            if ui.button("Choose folder…").clicked() {
                choose_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload artifacts").clicked() {
                state.reload_artifacts();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.active_tab, Tab::Predictor, "🎯 Predictor");
        ui.selectable_value(&mut state.active_tab, Tab::Presets, "📊 Presets");

        ui.separator();

        ui.label(
            RichText::new(format!(
                "Artifacts: {}",
                state.config.artifact_dir.display()
            ))
            .weak(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new("Powered by Machine Learning").italics());
        });
    });
}

// ---------------------------------------------------------------------------
// Left side panel – about and tips
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui) {
    ui.heading("📖 About This App");
    ui.label("This app uses a Decision Tree model to predict fish species based on:");
    ui.label("• Length: body length in centimeters");
    ui.label("• Weight: body weight in grams");
    ui.label("• Ratio: length-to-weight ratio");

    ui.separator();

    ui.strong("💡 Quick Tips");
    ui.label("• Use the Presets tab to try example fish");
    ui.label("• The model works best with realistic fish measurements");
    ui.label("• Different species have different length/weight ratios");
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.separator();
    egui::CollapsingHeader::new("ℹ️ How This Works")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Model Information");
            ui.label("A Decision Tree classifier trained on fish measurement data.");
            ui.add_space(4.0);
            ui.strong("Features used:");
            ui.label("• Length: the body length impacts species identification");
            ui.label("• Weight: related to body mass and species");
            ui.label("• Ratio: length-to-weight ratio is a key distinguishing feature");
            ui.add_space(4.0);
            ui.strong("How to get best results:");
            ui.label("1. Measure the fish accurately from head to tail");
            ui.label("2. Weigh the fish in grams");
            ui.label("3. The ratio will be automatically calculated");
            ui.label("4. Click \"Predict\" to see the predicted species");
        });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn choose_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Choose artifact folder")
        .set_directory(&state.config.artifact_dir)
        .pick_folder();

    match folder {
        Some(dir) => state.set_artifact_dir(dir),
        None => log::debug!("Folder dialog cancelled"),
    }
}
