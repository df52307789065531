//! Structured intent labels and condition reconciliation.
//!
//! The classifier and the response table speak in suffix-form labels
//! (`base_for_condition`). Internally an intent is a base plus an optional
//! condition, so the rewrite rule is expressed once instead of as repeated
//! string surgery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between an intent's base and its condition qualifier.
const CONDITION_SEPARATOR: &str = "_for_";

/// The condition tag callers send when no specific condition applies.
pub const GENERAL_CONDITION: &str = "general";

/// A discrete intent, optionally qualified by a health condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    base: String,
    condition: Option<String>,
}

impl Intent {
    /// Parse a suffix-form label. Everything before the first `_for_` is the
    /// base; the remainder, if any, is the condition.
    pub fn parse(label: &str) -> Self {
        match label.split_once(CONDITION_SEPARATOR) {
            Some((base, condition)) => Self {
                base: base.to_string(),
                condition: Some(condition.to_string()),
            },
            None => Self {
                base: label.to_string(),
                condition: None,
            },
        }
    }

    /// The intent's base, without any condition qualifier.
    #[allow(dead_code)]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The condition qualifier, if the label carries one.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    /// Suffix-form label used at the classifier/table boundary.
    pub fn label(&self) -> String {
        match &self.condition {
            Some(condition) => format!("{}{}{}", self.base, CONDITION_SEPARATOR, condition),
            None => self.base.clone(),
        }
    }

    /// Align this intent with a caller-declared health condition.
    ///
    /// The declared condition wins over the prediction: unless the tag is the
    /// generic value or its normalized form already appears in the label, the
    /// intent is requalified as `<base>_for_<tag>`. The result may be a label
    /// the classifier never produced; selection then simply finds no rows.
    pub fn reconcile_with(&self, declared_condition: &str) -> Intent {
        if declared_condition == GENERAL_CONDITION {
            return self.clone();
        }
        let tag = normalize_condition(declared_condition);
        if self.label().contains(&tag) {
            return self.clone();
        }
        Intent {
            base: self.base.clone(),
            condition: Some(tag),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Normalize a caller-supplied condition tag to label form: lower-cased,
/// spaces replaced with underscores.
pub fn normalize_condition(condition: &str) -> String {
    condition.to_lowercase().replace(' ', "_")
}
