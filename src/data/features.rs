use std::fmt;

use super::presets::Preset;

// ---------------------------------------------------------------------------
// Bounds and defaults
// ---------------------------------------------------------------------------

/// Upper bound of the length input, in centimetres.
pub const MAX_LENGTH_CM: f64 = 1000.0;

/// Upper bound of the weight input, in grams.
pub const MAX_WEIGHT_G: f64 = 100_000.0;

pub const DEFAULT_LENGTH_CM: f64 = 20.0;
pub const DEFAULT_WEIGHT_G: f64 = 200.0;

/// Number of features the classifier expects.
pub const FEATURE_COUNT: usize = 3;

/// Feature names in the order the model was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["length", "weight", "ratio"];

/// Length divided by weight, or `0.0` when the weight is zero.
pub fn auto_ratio(length: f64, weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        length / weight
    }
}

/// Clamp into `[0, max]`; NaN collapses to the lower bound.
fn clamp_measurement(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – the classifier input
// ---------------------------------------------------------------------------

/// Ordered classifier input: (length, weight, ratio).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub length: f64,
    pub weight: f64,
    pub ratio: f64,
}

impl FeatureVector {
    pub fn new(length: f64, weight: f64, ratio: f64) -> Self {
        Self {
            length,
            weight,
            ratio,
        }
    }

    /// The features as the model indexes them.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [self.length, self.weight, self.ratio]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length {:.1} cm, weight {:.1} g, ratio {:.4}",
            self.length, self.weight, self.ratio
        )
    }
}

// ---------------------------------------------------------------------------
// MeasurementForm – input collector state
// ---------------------------------------------------------------------------

/// Values behind the three form inputs.
///
/// Changing length or weight recomputes the ratio and discards a manual
/// override; the ratio can still be edited afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementForm {
    length: f64,
    weight: f64,
    ratio: f64,
    ratio_edited: bool,
}

impl Default for MeasurementForm {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH_CM, DEFAULT_WEIGHT_G)
    }
}

impl MeasurementForm {
    pub fn new(length: f64, weight: f64) -> Self {
        let length = clamp_measurement(length, MAX_LENGTH_CM);
        let weight = clamp_measurement(weight, MAX_WEIGHT_G);
        Self {
            length,
            weight,
            ratio: auto_ratio(length, weight),
            ratio_edited: false,
        }
    }

    /// Seed the form from a preset.
    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(preset.length_cm, preset.weight_g)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether the ratio currently holds a user-entered value.
    pub fn ratio_edited(&self) -> bool {
        self.ratio_edited
    }

    /// The ratio computed from the current length and weight.
    pub fn auto_ratio(&self) -> f64 {
        auto_ratio(self.length, self.weight)
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = clamp_measurement(length, MAX_LENGTH_CM);
        self.reset_ratio();
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = clamp_measurement(weight, MAX_WEIGHT_G);
        self.reset_ratio();
    }

    /// Overwrite the ratio. Negative or NaN input is clamped to zero.
    pub fn set_ratio(&mut self, ratio: f64) {
        self.ratio = clamp_measurement(ratio, f64::MAX);
        self.ratio_edited = true;
    }

    /// Drop a manual override and go back to the computed ratio.
    pub fn reset_ratio(&mut self) {
        self.ratio = self.auto_ratio();
        self.ratio_edited = false;
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        *self = Self::from_preset(preset);
    }

    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector::new(self.length, self.weight, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::presets::find_preset;

    #[test]
    fn test_zero_weight_gives_zero_ratio() {
        let mut form = MeasurementForm::default();
        form.set_length(123.0);
        form.set_weight(0.0);
        assert_eq!(form.ratio(), 0.0);
        assert_eq!(auto_ratio(999.0, 0.0), 0.0);
    }

    #[test]
    fn test_common_carp_ratio() {
        let carp = find_preset("Common Carp").unwrap();
        let form = MeasurementForm::from_preset(carp);
        assert_eq!(form.length(), 45.0);
        assert_eq!(form.weight(), 1250.0);
        assert!((form.ratio() - 0.036).abs() < 1e-12);
        assert_eq!(format!("{:.4}", form.ratio()), "0.0360");
    }

    #[test]
    fn test_defaults() {
        let form = MeasurementForm::default();
        assert_eq!(form.length(), 20.0);
        assert_eq!(form.weight(), 200.0);
        assert!((form.ratio() - 0.1).abs() < 1e-12);
        assert!(!form.ratio_edited());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut form = MeasurementForm::default();
        form.set_length(5000.0);
        form.set_weight(-3.0);
        assert_eq!(form.length(), MAX_LENGTH_CM);
        assert_eq!(form.weight(), 0.0);

        form.set_weight(1e9);
        assert_eq!(form.weight(), MAX_WEIGHT_G);

        form.set_length(f64::NAN);
        assert_eq!(form.length(), 0.0);

        form.set_ratio(-1.0);
        assert_eq!(form.ratio(), 0.0);
    }

    #[test]
    fn test_ratio_override_survives_until_inputs_change() {
        let mut form = MeasurementForm::new(30.0, 300.0);
        form.set_ratio(0.5);
        assert_eq!(form.ratio(), 0.5);
        assert!(form.ratio_edited());
        assert_eq!(form.feature_vector().ratio, 0.5);

        form.set_weight(600.0);
        assert!(!form.ratio_edited());
        assert!((form.ratio() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_feature_vector_order() {
        let form = MeasurementForm::new(50.0, 900.0);
        let v = form.feature_vector().as_array();
        assert_eq!(v[0], 50.0);
        assert_eq!(v[1], 900.0);
        assert!((v[2] - 50.0 / 900.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_preset_discards_override() {
        let mut form = MeasurementForm::default();
        form.set_ratio(2.0);
        form.apply_preset(find_preset("Pike").unwrap());
        assert_eq!(form.length(), 50.0);
        assert!(!form.ratio_edited());
    }
}
