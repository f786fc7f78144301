use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use fish_predictor::data::presets::PRESETS;

// ---------------------------------------------------------------------------
// Preset colours
// ---------------------------------------------------------------------------

/// `n` distinct colours on evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// One colour per entry of the preset table, shared by the table and the plot.
pub struct PresetColors {
    colors: Vec<Color32>,
}

impl Default for PresetColors {
    fn default() -> Self {
        Self {
            colors: generate_palette(PRESETS.len()),
        }
    }
}

impl PresetColors {
    pub fn color_for(&self, index: usize) -> Color32 {
        self.colors.get(index).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let colors = generate_palette(PRESETS.len());
        assert_eq!(colors.len(), 7);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn test_out_of_range_is_gray() {
        assert_eq!(PresetColors::default().color_for(99), Color32::GRAY);
    }
}
