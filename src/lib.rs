//! Fish species prediction from three body measurements.
//!
//! The crate is split the same way the form works: [`data`] collects a
//! [`FeatureVector`], [`artifact`] loads the pre-trained decision tree and
//! label encoder, and [`predict`] binds the two together.

pub mod artifact;
pub mod data;
pub mod predict;

pub use artifact::{ArtifactPaths, ArtifactStore, PredictorError};
pub use data::features::{FeatureVector, MeasurementForm};
pub use data::presets::{Preset, PRESETS};
pub use predict::{Prediction, PredictionReport, Predictor};
