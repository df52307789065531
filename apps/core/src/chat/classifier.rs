//! Sequence-model intent inference.
//!
//! The trained artifact is a linear scorer over token indices: one weight row
//! per intent class plus a per-class bias, exported by the offline training
//! job. The forward pass sums the weight entries of each non-padding token,
//! adds the bias, and takes the argmax.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chat::tokenizer::PADDING_INDEX;
use crate::error::AppError;

/// Trained intent model weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentModel {
    /// Vocabulary size the weight rows are indexed by.
    pub vocab_size: usize,
    /// One row of per-token-index weights per class.
    pub weights: Vec<Vec<f32>>,
    /// Per-class bias.
    pub bias: Vec<f32>,
}

impl IntentModel {
    /// Load model weights from their JSON artifact, rejecting shape mismatches.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let model: IntentModel = serde_json::from_str(&raw)?;
        model
            .check_shape()
            .map_err(|reason| AppError::Artifact(format!("{}: {}", path.display(), reason)))?;
        Ok(model)
    }

    fn check_shape(&self) -> Result<(), String> {
        if self.weights.is_empty() {
            return Err("model has no classes".to_string());
        }
        if self.weights.len() != self.bias.len() {
            return Err(format!(
                "weight rows ({}) and bias entries ({}) disagree",
                self.weights.len(),
                self.bias.len()
            ));
        }
        if let Some(row) = self.weights.iter().find(|row| row.len() != self.vocab_size) {
            return Err(format!(
                "weight row of length {} does not match vocab_size {}",
                row.len(),
                self.vocab_size
            ));
        }
        Ok(())
    }

    /// Number of output classes.
    pub fn classes(&self) -> usize {
        self.weights.len()
    }

    /// Score a padded token-index sequence and return the winning class id.
    ///
    /// Ties break toward the lower class id. Token indices beyond the weight
    /// rows contribute nothing: tokenizer and model are trained together, so
    /// a mismatch is an artifact-packaging problem surfaced by the shape
    /// check, not a per-request failure.
    pub fn classify(&self, sequence: &[usize]) -> usize {
        let mut best_class = 0usize;
        let mut best_score = f32::NEG_INFINITY;

        for (class, (row, bias)) in self.weights.iter().zip(self.bias.iter()).enumerate() {
            let mut score = *bias;
            for &index in sequence {
                if index == PADDING_INDEX {
                    continue;
                }
                if let Some(weight) = row.get(index) {
                    score += weight;
                }
            }
            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }
        debug!(best_class, best_score = f64::from(best_score), "scored intent classes");
        best_class
    }
}

/// Label table mapping class ids back to intent labels, in training order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Load the label table from its JSON artifact.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let table: LabelTable = serde_json::from_str(&raw)?;
        if table.labels.is_empty() {
            return Err(AppError::Artifact(format!(
                "{}: label table is empty",
                path.display()
            )));
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Decode a class id to its intent label.
    pub fn decode(&self, class: usize) -> Result<&str, AppError> {
        self.labels
            .get(class)
            .map(String::as_str)
            .ok_or(AppError::UnknownClass(class))
    }
}
