//! Fixed-vocabulary tokenizer matching the offline training job.
//!
//! The vocabulary and sequence length were frozen at training time; this side
//! only replays the mapping: lowercase, split on non-alphanumeric boundaries,
//! look up each token (unknown tokens map to the reserved OOV index), then
//! pad from the front to the fixed length with the padding index 0.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Index reserved for sequence padding.
pub const PADDING_INDEX: usize = 0;

/// Frozen tokenizer state exported by the training job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tokenizer {
    /// Fixed output sequence length.
    pub seq_length: usize,
    /// Index assigned to out-of-vocabulary tokens.
    pub oov_index: usize,
    /// Word to index mapping. Indices start at 1; 0 is padding.
    pub vocab: HashMap<String, usize>,
}

impl Tokenizer {
    /// Load tokenizer state from its JSON artifact.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let tokenizer: Tokenizer = serde_json::from_str(&raw)?;
        if tokenizer.seq_length == 0 {
            return Err(AppError::Artifact(format!(
                "{}: seq_length must be nonzero",
                path.display()
            )));
        }
        Ok(tokenizer)
    }

    /// Split text into lowercase word tokens.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    /// Map text to a fixed-length padded token-index sequence.
    pub fn vectorize(&self, text: &str) -> Vec<usize> {
        let indices: Vec<usize> = self
            .tokenize(text)
            .iter()
            .map(|token| *self.vocab.get(token).unwrap_or(&self.oov_index))
            .collect();
        pad_sequence(indices, self.seq_length)
    }
}

/// Front-pad (or front-truncate) a sequence to `length`, matching the
/// training job's padding convention: the most recent tokens survive.
pub fn pad_sequence(mut indices: Vec<usize>, length: usize) -> Vec<usize> {
    if indices.len() > length {
        return indices.split_off(indices.len() - length);
    }
    let mut padded = vec![PADDING_INDEX; length - indices.len()];
    padded.append(&mut indices);
    padded
}
