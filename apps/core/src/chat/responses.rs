//! Curated response table lookup.
//!
//! The table is loaded once at startup and never mutated. Row order is
//! preserved from the source file: selection returns the first match in
//! table-storage order, and that tie-break is part of the contract.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chat::intent::{normalize_condition, Intent, GENERAL_CONDITION};
use crate::chat::language::{self, Language};
use crate::error::AppError;

/// One curated (intent, language, condition, response) record.
///
/// Field names follow the curated dataset's column headers; `Condition` is
/// accepted as an alias for `Health Condition`, the column's older spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    #[serde(rename = "Intent")]
    pub intent: String,
    #[serde(rename = "Language")]
    pub language: Language,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(
        rename = "Health Condition",
        alias = "Condition",
        default = "default_condition"
    )]
    pub health_condition: String,
}

fn default_condition() -> String {
    GENERAL_CONDITION.to_string()
}

/// Outcome of filtering the table for one (intent, language) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// The first matching row in table order.
    Matched(&'a ResponseRecord),
    /// No row matched; the caller gets the apology for this language.
    NoMatch(Language),
}

/// Read-only response table.
#[derive(Debug, Clone, Default)]
pub struct ResponseTable {
    records: Vec<ResponseRecord>,
}

impl ResponseTable {
    pub fn new(records: Vec<ResponseRecord>) -> Self {
        Self { records }
    }

    /// Load the table from its JSON artifact.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<ResponseRecord> = serde_json::from_str(&raw)?;
        info!(rows = records.len(), "loaded response table");
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter on exact intent and language. First row in table order wins;
    /// no cross-language fallback, no partial matching.
    pub fn select(&self, intent: &Intent, lang: Language) -> Selection<'_> {
        let label = intent.label();
        self.records
            .iter()
            .find(|record| record.intent == label && record.language == lang)
            .map(Selection::Matched)
            .unwrap_or(Selection::NoMatch(lang))
    }

    /// Render a selection to the string the endpoint returns.
    pub fn response_text(&self, intent: &Intent, lang: Language) -> String {
        match self.select(intent, lang) {
            Selection::Matched(record) => record.response.clone(),
            Selection::NoMatch(lang) => apology(lang),
        }
    }

    /// Startup consistency sweep over the curated table.
    ///
    /// Reports rows whose response text reads as the wrong language, rows
    /// whose condition column disagrees with the condition encoded in the
    /// intent label, and intents missing coverage in one of the two
    /// languages. Findings are logged by the caller; none are fatal.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for (row, record) in self.records.iter().enumerate() {
            let detected = language::detect(&record.response);
            if detected != record.language {
                issues.push(format!(
                    "row {}: response reads as {} but is filed under {}",
                    row, detected, record.language
                ));
            }

            let intent_condition = Intent::parse(&record.intent)
                .condition()
                .map(str::to_string)
                .unwrap_or_else(|| GENERAL_CONDITION.to_string());
            let column_condition = clean_condition(&record.health_condition);
            if intent_condition != GENERAL_CONDITION && column_condition != intent_condition {
                issues.push(format!(
                    "row {}: intent '{}' encodes condition '{}' but the condition column says '{}'",
                    row, record.intent, intent_condition, column_condition
                ));
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if seen.contains(&record.intent.as_str()) {
                continue;
            }
            seen.push(&record.intent);
            for lang in [Language::English, Language::Sinhala] {
                if !self
                    .records
                    .iter()
                    .any(|r| r.intent == record.intent && r.language == lang)
                {
                    issues.push(format!(
                        "intent '{}' has no {} response",
                        record.intent, lang
                    ));
                }
            }
        }

        issues
    }
}

/// Normalize a condition column value; the curated data uses `Healthy` and
/// `Unknown` interchangeably with the generic tag.
fn clean_condition(value: &str) -> String {
    match value.trim() {
        "" | "Unknown" | "Healthy" => GENERAL_CONDITION.to_string(),
        other => normalize_condition(other),
    }
}

/// Deterministic apology for an (intent, language) pair with no row.
pub fn apology(lang: Language) -> String {
    format!(
        "Sorry, I don't have a {} response for this query. Please try another language.",
        lang
    )
}
