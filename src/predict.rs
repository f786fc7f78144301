//! Binding of form input to the cached artifacts.

use std::fmt;

use crate::artifact::{
    ArtifactSource, ArtifactStore, ClassLabel, Classifier, FsSource, LoadReport, PredictorError,
};
use crate::data::features::FeatureVector;

/// One successful classifier run.
#[derive(Debug)]
pub struct Prediction {
    /// Echo of the input that was scored.
    pub features: FeatureVector,
    pub label: ClassLabel,
    /// Decoded species name, when an encoder was available and knew the label.
    pub species: Option<String>,
    /// Why decoding was skipped or failed, if it was attempted.
    pub decode_error: Option<PredictorError>,
}

impl Prediction {
    /// The species name, falling back to the raw label.
    pub fn display_name(&self) -> String {
        match &self.species {
            Some(s) => s.clone(),
            None => self.label.to_string(),
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.species {
            Some(s) => write!(f, "Predicted species: {s}"),
            None => write!(f, "Predicted label: {}", self.label),
        }
    }
}

/// Everything one press of the predict button produced.
#[derive(Debug)]
pub struct PredictionReport {
    pub load: LoadReport,
    pub result: Result<Prediction, PredictorError>,
}

/// Owns the artifact cache for the lifetime of the window.
pub struct Predictor<S = FsSource> {
    store: ArtifactStore<S>,
}

impl<S: ArtifactSource> Predictor<S> {
    pub fn new(store: ArtifactStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ArtifactStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ArtifactStore<S> {
        &mut self.store
    }

    /// Load artifacts if needed, score `features` and decode the label.
    pub fn predict(&mut self, features: &FeatureVector) -> PredictionReport {
        let load = self.store.ensure_loaded();

        let Some(model) = self.store.model() else {
            return PredictionReport {
                load,
                result: Err(PredictorError::ModelUnavailable {
                    path: self.store.paths().model.clone(),
                }),
            };
        };

        let label = model.predict(features);
        let (species, decode_error) = match self.store.encoder() {
            Some(encoder) => match encoder.inverse_transform(label) {
                Ok(name) => (Some(name.to_string()), None),
                Err(e) => {
                    log::warn!("{e}; showing raw label");
                    (None, Some(e))
                }
            },
            None => (None, None),
        };

        let prediction = Prediction {
            features: *features,
            label,
            species,
            decode_error,
        };
        log::info!("{prediction} for {features}");

        PredictionReport {
            load,
            result: Ok(prediction),
        }
    }
}
