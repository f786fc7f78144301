use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::PredictorError;
use super::FORMAT_VERSION;
use crate::data::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

// ---------------------------------------------------------------------------
// ClassLabel – raw classifier output
// ---------------------------------------------------------------------------

/// Class index produced by the classifier, before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassLabel(pub usize);

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that turns a feature vector into a class label.
pub trait Classifier {
    fn predict(&self, x: &FeatureVector) -> ClassLabel;
}

// ---------------------------------------------------------------------------
// Decision tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        class: ClassLabel,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub fn leaf(class: usize) -> Self {
        TreeNode::Leaf {
            class: ClassLabel(class),
        }
    }

    pub fn split(feature: usize, threshold: f64, left: TreeNode, right: TreeNode) -> Self {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Walk down to a leaf. Samples at or below the threshold go left.
    fn predict(&self, x: &[f64; FEATURE_COUNT]) -> ClassLabel {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    fn validate(&self, n_classes: usize) -> Result<(), String> {
        match self {
            TreeNode::Leaf { class } => {
                if class.0 >= n_classes {
                    return Err(format!(
                        "leaf class {class} out of range for {n_classes} classes"
                    ));
                }
                Ok(())
            }
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(format!(
                        "split on feature {feature} but the input has {FEATURE_COUNT} features"
                    ));
                }
                if !threshold.is_finite() {
                    return Err(format!("split on feature {feature} has a non-finite threshold"));
                }
                left.validate(n_classes)?;
                right.validate(n_classes)
            }
        }
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// A trained decision tree as stored in the model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub n_classes: usize,
    pub root: TreeNode,
}

impl DecisionTree {
    /// Wrap a root node with the current format header.
    pub fn new(n_classes: usize, root: TreeNode) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            n_classes,
            root,
        }
    }

    /// Parse and structurally check a model artifact.
    pub fn from_slice(path: &Path, bytes: &[u8]) -> Result<Self, PredictorError> {
        let tree: DecisionTree = serde_json::from_slice(bytes)
            .map_err(|e| PredictorError::deserialization(path, e.to_string()))?;
        tree.validate()
            .map_err(|reason| PredictorError::deserialization(path, reason))?;
        Ok(tree)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format_version {} (expected {FORMAT_VERSION})",
                self.format_version
            ));
        }
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(format!(
                "model expects {} features, the form provides {FEATURE_COUNT}",
                self.feature_names.len()
            ));
        }
        if self.n_classes == 0 {
            return Err("model declares zero classes".to_string());
        }
        self.root.validate(self.n_classes)
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, x: &FeatureVector) -> ClassLabel {
        self.root.predict(&x.as_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> DecisionTree {
        // weight <= 1000 → 0, else → 1
        DecisionTree::new(2, TreeNode::split(1, 1000.0, TreeNode::leaf(0), TreeNode::leaf(1)))
    }

    #[test]
    fn test_threshold_goes_left() {
        let tree = stump();
        assert_eq!(tree.predict(&FeatureVector::new(10.0, 1000.0, 0.01)), ClassLabel(0));
        assert_eq!(tree.predict(&FeatureVector::new(10.0, 1000.1, 0.01)), ClassLabel(1));
    }

    #[test]
    fn test_parse_json_layout() {
        let json = r#"{
            "format_version": 1,
            "feature_names": ["length", "weight", "ratio"],
            "n_classes": 2,
            "root": {"split": {"feature": 2, "threshold": 0.05,
                "left": {"leaf": {"class": 1}},
                "right": {"leaf": {"class": 0}}}}
        }"#;
        let tree = DecisionTree::from_slice(Path::new("m.json"), json.as_bytes()).unwrap();
        assert_eq!(tree.root.node_count(), 3);
        assert_eq!(tree.predict(&FeatureVector::new(45.0, 1250.0, 0.036)), ClassLabel(1));
    }

    #[test]
    fn test_garbage_is_deserialization_failure() {
        let err = DecisionTree::from_slice(Path::new("m.json"), b"\x80\x04pickle").unwrap_err();
        assert!(matches!(err, PredictorError::DeserializationFailed { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_feature() {
        let tree = DecisionTree::new(2, TreeNode::split(3, 1.0, TreeNode::leaf(0), TreeNode::leaf(1)));
        assert!(tree.validate().unwrap_err().contains("feature 3"));
    }

    #[test]
    fn test_rejects_out_of_range_class() {
        let tree = DecisionTree::new(2, TreeNode::leaf(2));
        assert!(tree.validate().is_err());
    }

    #[test]
    fn test_rejects_wrong_version_and_feature_count() {
        let mut tree = stump();
        tree.format_version = 7;
        assert!(tree.validate().unwrap_err().contains("format_version"));

        let mut tree = stump();
        tree.feature_names.pop();
        assert!(tree.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let tree = DecisionTree::new(
            2,
            TreeNode::split(0, f64::NAN, TreeNode::leaf(0), TreeNode::leaf(1)),
        );
        assert!(tree.validate().unwrap_err().contains("non-finite"));
    }
}
