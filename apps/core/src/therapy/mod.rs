//! # Therapy Module
//!
//! Recommendation engine mapping a user's health profile to therapy labels
//! through three independently trained classifiers.
//!
//! ## Components
//! - `features`: categorical encoding and BMI computation
//! - `tree`: decision-tree inference over exported artifacts
//! - `recommender`: per-slot prediction, failure isolation, deduplication

pub mod features;
pub mod recommender;
pub mod tree;

// Re-export main types for convenience
pub use features::FeatureRow;
pub use recommender::{TherapyRecommender, TherapySlot, ERROR_MARKER, SLOT_COUNT};
pub use tree::{DecisionTree, TreeNode};
