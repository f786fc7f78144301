use std::path::PathBuf;

use fish_predictor::artifact::{ArtifactStore, LoadStatus};
use fish_predictor::data::presets::{Preset, PRESETS};
use fish_predictor::predict::{Prediction, Predictor};
use fish_predictor::MeasurementForm;

use crate::config::{AppConfig, Layout};

// ---------------------------------------------------------------------------
// Notices shown above the result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Predictor,
    Presets,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Values behind the length / weight / ratio inputs.
    pub form: MeasurementForm,

    /// Owns the artifact cache for this window.
    pub predictor: Predictor,

    /// Index into `PRESETS` of the selected preset (full layout only).
    pub selected_preset: Option<usize>,

    pub active_tab: Tab,

    /// Result of the last predict press.
    pub last_prediction: Option<Prediction>,

    /// Messages produced by the last action.
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let predictor = Predictor::new(ArtifactStore::new(config.artifact_paths()));

        // The full form starts on the first preset, the simple one on defaults.
        let (form, selected_preset) = match config.layout {
            Layout::Full => (MeasurementForm::from_preset(&PRESETS[0]), Some(0)),
            Layout::Simple => (MeasurementForm::default(), None),
        };

        Self {
            config,
            form,
            predictor,
            selected_preset,
            active_tab: Tab::Predictor,
            last_prediction: None,
            notices: Vec::new(),
        }
    }

    pub fn selected_preset(&self) -> Option<&'static Preset> {
        self.selected_preset.and_then(|i| PRESETS.get(i))
    }

    /// Select a preset and copy its measurements into the form.
    pub fn select_preset(&mut self, index: usize) {
        if let Some(preset) = PRESETS.get(index) {
            self.selected_preset = Some(index);
            self.form.apply_preset(preset);
            self.last_prediction = None;
        }
    }

    /// Run one prediction and turn every failure into a notice.
    pub fn predict(&mut self) {
        self.notices.clear();
        self.last_prediction = None;

        let features = self.form.feature_vector();
        let report = self.predictor.predict(&features);

        if let LoadStatus::Failed(e) = &report.load.model {
            self.notices.push(Notice::new(
                NoticeLevel::Error,
                format!("Could not load model: {e}"),
            ));
        }
        if let LoadStatus::Failed(e) = &report.load.encoder {
            self.notices.push(Notice::new(
                NoticeLevel::Warning,
                format!("Could not load encoder: {e}"),
            ));
        }

        match report.result {
            Ok(prediction) => {
                if let Some(e) = &prediction.decode_error {
                    self.notices.push(Notice::new(NoticeLevel::Warning, e.to_string()));
                }
                self.last_prediction = Some(prediction);
            }
            Err(e) => {
                self.notices.push(Notice::new(NoticeLevel::Error, e.to_string()));
            }
        }
    }

    /// Drop cached artifacts so the next prediction reads them again.
    pub fn reload_artifacts(&mut self) {
        self.predictor.store_mut().reset();
        self.last_prediction = None;
        self.notices = vec![Notice::new(
            NoticeLevel::Info,
            "Artifacts will be reloaded on the next prediction.",
        )];
        log::info!("Artifact cache cleared");
    }

    /// Point the store at a different folder.
    pub fn set_artifact_dir(&mut self, dir: PathBuf) {
        self.config = self.config.with_artifact_dir(dir);
        self.predictor = Predictor::new(ArtifactStore::new(self.config.artifact_paths()));
        self.last_prediction = None;
        self.notices = vec![Notice::new(
            NoticeLevel::Info,
            format!("Using artifacts from {}", self.config.artifact_dir.display()),
        )];
        log::info!("Artifact folder set to {}", self.config.artifact_dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;
    use clap::Parser;
    use fish_predictor::artifact::{ArtifactPaths, DecisionTree, LabelEncoder, TreeNode};

    fn config(layout: &str, dir: &std::path::Path) -> AppConfig {
        let dir = dir.to_string_lossy().to_string();
        AppConfig::from(
            Args::try_parse_from(["fish-predictor", "--layout", layout, "--artifact-dir", &dir])
                .unwrap(),
        )
    }

    fn write_model(dir: &std::path::Path) {
        let paths = ArtifactPaths::in_dir(dir);
        let tree = DecisionTree::new(2, TreeNode::split(1, 1000.0, TreeNode::leaf(0), TreeNode::leaf(1)));
        std::fs::write(&paths.model, serde_json::to_vec(&tree).unwrap()).unwrap();
    }

    #[test]
    fn test_full_layout_starts_on_first_preset() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config("full", dir.path()));
        assert_eq!(state.selected_preset().map(|p| p.name), Some("Common Carp"));
        assert_eq!(state.form.length(), 45.0);
        assert!((state.form.ratio() - 0.036).abs() < 1e-12);
    }

    #[test]
    fn test_simple_layout_starts_on_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config("simple", dir.path()));
        assert!(state.selected_preset().is_none());
        assert_eq!(state.form.length(), 20.0);
        assert_eq!(state.form.weight(), 200.0);
    }

    #[test]
    fn test_predict_without_model_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(config("simple", dir.path()));
        state.predict();

        assert!(state.last_prediction.is_none());
        assert!(state
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Error && n.text.contains("model not available")));
        assert!(state.notices.iter().any(|n| n.level == NoticeLevel::Warning));
    }

    #[test]
    fn test_predict_without_encoder_shows_label() {
        let dir = tempfile::tempdir().unwrap();
        write_model(dir.path());

        let mut state = AppState::new(config("full", dir.path()));
        state.predict();

        let prediction = state.last_prediction.as_ref().unwrap();
        assert_eq!(prediction.to_string(), "Predicted label: 1");
        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].level, NoticeLevel::Warning);
    }

    #[test]
    fn test_predict_with_encoder_shows_species() {
        let dir = tempfile::tempdir().unwrap();
        write_model(dir.path());
        let paths = ArtifactPaths::in_dir(dir.path());
        let encoder = LabelEncoder::fit(["Bream", "Common Carp"]);
        std::fs::write(&paths.encoder, serde_json::to_vec(&encoder).unwrap()).unwrap();

        let mut state = AppState::new(config("full", dir.path()));
        state.predict();

        assert!(state.notices.is_empty());
        let prediction = state.last_prediction.as_ref().unwrap();
        assert_eq!(prediction.species.as_deref(), Some("Common Carp"));
    }

    #[test]
    fn test_select_preset_updates_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(config("full", dir.path()));
        state.select_preset(5);
        assert_eq!(state.selected_preset().map(|p| p.name), Some("Salmon"));
        assert_eq!(state.form.weight(), 2000.0);

        state.select_preset(42);
        assert_eq!(state.selected_preset, Some(5));
    }

    #[test]
    fn test_set_artifact_dir_rebuilds_store() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        write_model(other.path());

        let mut state = AppState::new(config("simple", dir.path()));
        state.predict();
        assert!(state.last_prediction.is_none());

        state.set_artifact_dir(other.path().to_path_buf());
        state.predict();
        assert!(state.last_prediction.is_some());
    }
}
