use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fish_predictor::artifact::{ArtifactPaths, ENCODER_FILE, MODEL_FILE};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "fish-predictor")]
#[command(about = "Predict fish species from length, weight and length/weight ratio")]
pub struct Args {
    /// Folder holding the model and encoder files
    #[arg(short, long, env = "FISH_ARTIFACT_DIR", default_value = ".")]
    pub artifact_dir: PathBuf,

    /// Model file name inside the artifact folder
    #[arg(long, default_value = MODEL_FILE)]
    pub model_file: String,

    /// Encoder file name inside the artifact folder
    #[arg(long, default_value = ENCODER_FILE)]
    pub encoder_file: String,

    /// Which form to show
    #[arg(short, long, value_enum, default_value_t = Layout::Full)]
    pub layout: Layout,
}

/// The two form variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Three inputs and a button
    Simple,
    /// Tabs, presets, input summary and help
    Full,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Simple => write!(f, "simple"),
            Layout::Full => write!(f, "full"),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub artifact_dir: PathBuf,
    pub model_file: String,
    pub encoder_file: String,
    pub layout: Layout,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            artifact_dir: args.artifact_dir,
            model_file: args.model_file,
            encoder_file: args.encoder_file,
            layout: args.layout,
        }
    }
}

impl AppConfig {
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::with_files(&self.artifact_dir, &self.model_file, &self.encoder_file)
    }

    /// Same file names, different folder.
    pub fn with_artifact_dir(&self, dir: PathBuf) -> Self {
        Self {
            artifact_dir: dir,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from(Args::try_parse_from(["fish-predictor"]).unwrap());
        assert_eq!(config.layout, Layout::Full);
        assert_eq!(config.model_file, "decision_fish.json");
        assert_eq!(config.encoder_file, "decision_fish_encoder.json");
        assert_eq!(
            config.artifact_paths().model,
            Path::new(".").join("decision_fish.json")
        );
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "fish-predictor",
            "--artifact-dir",
            "models",
            "--layout",
            "simple",
            "--model-file",
            "tree.json",
        ])
        .unwrap();
        let config = AppConfig::from(args);
        assert_eq!(config.layout, Layout::Simple);
        assert_eq!(config.artifact_paths().model, Path::new("models").join("tree.json"));
    }

    #[test]
    fn test_rejects_unknown_layout() {
        assert!(Args::try_parse_from(["fish-predictor", "--layout", "fancy"]).is_err());
    }

    #[test]
    fn test_with_artifact_dir_keeps_file_names() {
        let config = AppConfig::from(
            Args::try_parse_from(["fish-predictor", "--encoder-file", "labels.json"]).unwrap(),
        );
        let moved = config.with_artifact_dir(PathBuf::from("elsewhere"));
        assert_eq!(
            moved.artifact_paths().encoder,
            Path::new("elsewhere").join("labels.json")
        );
        assert_eq!(moved.layout, config.layout);
    }

    #[test]
    fn test_layout_display() {
        assert_eq!(Layout::Simple.to_string(), "simple");
        assert_eq!(Layout::Full.to_string(), "full");
    }
}
