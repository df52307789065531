//! Decision-tree inference.
//!
//! Trees are trained offline and exported as a flat node arena. Prediction
//! walks from the root, comparing one feature per split, and returns the
//! label of the reached leaf.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::features::FeatureRow;
use crate::error::AppError;

/// One node of an exported tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Interior split: go left when `features[feature] <= threshold`.
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    /// Terminal node carrying the predicted therapy label.
    Leaf { label: String },
}

/// A trained decision tree over the five-feature row. Node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Load a tree from its JSON artifact.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let tree: DecisionTree = serde_json::from_str(&raw)?;
        if tree.nodes.is_empty() {
            return Err(AppError::Artifact(format!(
                "{}: tree has no nodes",
                path.display()
            )));
        }
        Ok(tree)
    }

    /// Walk from the root to a leaf.
    ///
    /// Malformed trees (dangling child index, unknown feature column, or a
    /// walk longer than the node count, which implies a cycle) surface as
    /// errors, never panics.
    pub fn predict(&self, features: &FeatureRow) -> Result<&str, AppError> {
        let mut index = 0usize;
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { label }) => return Ok(label),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).ok_or_else(|| {
                        AppError::Internal(format!(
                            "tree references unknown feature column {}",
                            feature
                        ))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(AppError::Internal(format!(
                        "tree walk reached dangling node index {}",
                        index
                    )))
                }
            }
        }
        Err(AppError::Internal(
            "tree walk exceeded node count, cycle suspected".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(age: f32, bmi: f32) -> FeatureRow {
        FeatureRow {
            age,
            gender: 0.0,
            health_condition: 2.0,
            bmi,
            exercise_frequency: 0.0,
        }
    }

    fn sample_tree() -> DecisionTree {
        // Splits on BMI, then on age for the high-BMI branch.
        DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 3,
                    threshold: 25.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    label: "Surya Namaskar".to_string(),
                },
                TreeNode::Split {
                    feature: 0,
                    threshold: 50.0,
                    left: 3,
                    right: 4,
                },
                TreeNode::Leaf {
                    label: "Kapalabhati Pranayama".to_string(),
                },
                TreeNode::Leaf {
                    label: "Shavasana".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_predict_walks_to_the_correct_leaf() {
        let tree = sample_tree();
        assert_eq!(tree.predict(&row(30.0, 22.0)).unwrap(), "Surya Namaskar");
        assert_eq!(
            tree.predict(&row(30.0, 28.0)).unwrap(),
            "Kapalabhati Pranayama"
        );
        assert_eq!(tree.predict(&row(60.0, 28.0)).unwrap(), "Shavasana");
    }

    #[test]
    fn test_threshold_boundary_goes_left() {
        let tree = sample_tree();
        assert_eq!(tree.predict(&row(30.0, 25.0)).unwrap(), "Surya Namaskar");
    }

    #[test]
    fn test_dangling_child_index_is_an_error() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 7,
                right: 8,
            }],
        };
        assert!(tree.predict(&row(30.0, 22.0)).is_err());
    }

    #[test]
    fn test_cycle_is_an_error_not_a_hang() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Split {
                feature: 0,
                threshold: 1000.0,
                left: 0,
                right: 0,
            }],
        };
        assert!(tree.predict(&row(30.0, 22.0)).is_err());
    }

    #[test]
    fn test_unknown_feature_column_is_an_error() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Split {
                feature: 9,
                threshold: 1.0,
                left: 0,
                right: 0,
            }],
        };
        assert!(tree.predict(&row(30.0, 22.0)).is_err());
    }
}
