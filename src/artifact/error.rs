use std::path::PathBuf;

use thiserror::Error;

use super::model::ClassLabel;

/// Everything that can go wrong between reading an artifact and showing a
/// species name. None of these abort the form; they become messages.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("artifact '{}' not found", path.display())]
    ArtifactNotFound { path: PathBuf },

    #[error("could not read artifact '{}': {source}", path.display())]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not deserialize artifact '{}': {reason}", path.display())]
    DeserializationFailed { path: PathBuf, reason: String },

    #[error("could not decode label {label}: {reason}")]
    DecodeFailed { label: ClassLabel, reason: String },

    #[error("model not available, place the model file '{}' in the artifact folder", path.display())]
    ModelUnavailable { path: PathBuf },
}

impl PredictorError {
    /// Map an I/O failure on `path`, keeping "not found" distinct.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            PredictorError::ArtifactNotFound { path }
        } else {
            PredictorError::ArtifactUnreadable { path, source: err }
        }
    }

    pub fn deserialization(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PredictorError::DeserializationFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_is_distinct() {
        let err = PredictorError::from_io("m.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, PredictorError::ArtifactNotFound { .. }));

        let err = PredictorError::from_io(
            "m.json",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, PredictorError::ArtifactUnreadable { .. }));
    }

    #[test]
    fn test_messages_name_the_file() {
        let err = PredictorError::deserialization("decision_fish.json", "bad tree");
        assert_eq!(
            err.to_string(),
            "could not deserialize artifact 'decision_fish.json': bad tree"
        );
    }
}
