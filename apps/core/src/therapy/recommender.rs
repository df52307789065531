//! Therapy recommendation over three independent classifiers.
//!
//! Each slot holds one trained tree and is evaluated in isolation: a broken
//! or missing classifier contributes the error marker for its own slot and
//! never aborts the others.

use tracing::error;

use super::features::FeatureRow;
use super::tree::DecisionTree;

/// Marker surfaced for a slot whose classifier failed.
pub const ERROR_MARKER: &str = "Error";

/// Number of independent therapy slots.
pub const SLOT_COUNT: usize = 3;

/// One therapy slot: a named classifier that may have failed to load.
///
/// A slot with no tree stays permanently failed and yields the error marker
/// at prediction time.
#[derive(Debug, Clone, Default)]
pub struct TherapySlot {
    pub name: String,
    pub tree: Option<DecisionTree>,
}

/// Outcome of one slot's prediction. The error marker sentinel exists only
/// at the contract surface; internally a failure keeps its reason.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotOutcome {
    Predicted(String),
    Failed(String),
}

impl SlotOutcome {
    /// The string this slot contributes to the recommendation list.
    pub fn as_recommendation(&self) -> &str {
        match self {
            SlotOutcome::Predicted(label) => label,
            SlotOutcome::Failed(_) => ERROR_MARKER,
        }
    }
}

/// The recommendation engine over all therapy slots.
pub struct TherapyRecommender {
    slots: Vec<TherapySlot>,
}

impl TherapyRecommender {
    pub fn new(slots: Vec<TherapySlot>) -> Self {
        Self { slots }
    }

    /// Number of slots whose classifier loaded.
    pub fn loaded_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.tree.is_some()).count()
    }

    fn predict_slot(slot: &TherapySlot, features: &FeatureRow) -> SlotOutcome {
        match &slot.tree {
            None => SlotOutcome::Failed(format!("{}: classifier not loaded", slot.name)),
            Some(tree) => match tree.predict(features) {
                Ok(label) => SlotOutcome::Predicted(label.to_string()),
                Err(err) => SlotOutcome::Failed(format!("{}: {}", slot.name, err)),
            },
        }
    }

    /// Evaluate every slot and union the results.
    ///
    /// The returned list is deduplicated preserving slot order, so identical
    /// inputs always produce the identical list. With every slot broken the
    /// result is `["Error"]`, never empty.
    pub fn recommend(&self, features: &FeatureRow) -> Vec<String> {
        let mut recommendations: Vec<String> = Vec::with_capacity(self.slots.len());

        for slot in &self.slots {
            let outcome = Self::predict_slot(slot, features);
            if let SlotOutcome::Failed(reason) = &outcome {
                error!(slot = %slot.name, reason = %reason, "therapy slot failed");
            }
            let value = outcome.as_recommendation();
            if !recommendations.iter().any(|existing| existing == value) {
                recommendations.push(value.to_string());
            }
        }

        recommendations.extend(supplemental_therapies(features, &recommendations));
        recommendations
    }
}

/// Dataset-derived supplementary recommendations.
///
/// Meant to contribute extra therapies selected by proximity in age (±5
/// years) and BMI (±2 units) to the user's profile, on top of the three
/// classifier slots. Disabled until that proximity filter is specified:
/// always contributes nothing.
pub fn supplemental_therapies(_features: &FeatureRow, _already: &[String]) -> Vec<String> {
    Vec::new()
}
