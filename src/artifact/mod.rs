/// Artifact layer: the pre-trained model and label encoder on disk.
///
/// ```text
///  decision_fish.json          decision_fish_encoder.json
///        │                              │
///        ▼                              ▼
///   ┌──────────────┐            ┌──────────────┐
///   │ DecisionTree │            │ LabelEncoder │
///   └──────────────┘            └──────────────┘
///        └──────────────┬───────────────┘
///                       ▼
///               ┌───────────────┐
///               │ ArtifactStore │  read once, cached for the session
///               └───────────────┘
/// ```

pub mod encoder;
pub mod error;
pub mod model;
pub mod store;

pub use encoder::LabelEncoder;
pub use error::PredictorError;
pub use model::{ClassLabel, Classifier, DecisionTree, TreeNode};
pub use store::{ArtifactPaths, ArtifactSource, ArtifactStore, FsSource, LoadReport, LoadStatus};

/// Default model file name inside the artifact folder.
pub const MODEL_FILE: &str = "decision_fish.json";

/// Default encoder file name inside the artifact folder.
pub const ENCODER_FILE: &str = "decision_fish_encoder.json";

/// Artifact format understood by this build.
pub const FORMAT_VERSION: u32 = 1;
