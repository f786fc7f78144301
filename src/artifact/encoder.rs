use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::PredictorError;
use super::model::ClassLabel;
use super::FORMAT_VERSION;

/// Maps class indices back to species names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub format_version: u32,
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Build an encoder the way the training side does: sorted, unique names.
    pub fn fit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            format_version: FORMAT_VERSION,
            classes: classes.into_iter().collect(),
        }
    }

    /// Parse and structurally check an encoder artifact.
    pub fn from_slice(path: &Path, bytes: &[u8]) -> Result<Self, PredictorError> {
        let encoder: LabelEncoder = serde_json::from_slice(bytes)
            .map_err(|e| PredictorError::deserialization(path, e.to_string()))?;
        encoder
            .validate()
            .map_err(|reason| PredictorError::deserialization(path, reason))?;
        Ok(encoder)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format_version {} (expected {FORMAT_VERSION})",
                self.format_version
            ));
        }
        if self.classes.is_empty() {
            return Err("encoder has no classes".to_string());
        }
        let unique: BTreeSet<&str> = self.classes.iter().map(String::as_str).collect();
        if unique.len() != self.classes.len() {
            return Err("encoder classes contain duplicates".to_string());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class index for a species name.
    pub fn transform(&self, name: &str) -> Option<ClassLabel> {
        self.classes.iter().position(|c| c == name).map(ClassLabel)
    }

    /// Species name for a class index.
    pub fn inverse_transform(&self, label: ClassLabel) -> Result<&str, PredictorError> {
        self.classes
            .get(label.0)
            .map(String::as_str)
            .ok_or_else(|| PredictorError::DecodeFailed {
                label,
                reason: format!("encoder only knows {} classes", self.classes.len()),
            })
    }
}
