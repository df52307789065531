//! Chat pipeline orchestrator.
//!
//! Coordinates language detection, intent classification, condition
//! reconciliation, and response selection over the artifacts loaded at
//! startup. Produces a `ChatTurn` diagnostic record per query; the HTTP
//! layer returns only the response string.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::classifier::{IntentModel, LabelTable};
use super::intent::Intent;
use super::language::{self, Language};
use super::responses::ResponseTable;
use super::tokenizer::Tokenizer;
use crate::error::AppError;

/// Fallback reply when classification fails mid-pipeline.
pub const FALLBACK_RESPONSE: &str = "Sorry, an error occurred while processing your request.";

/// Diagnostic record of one resolved chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub id: Uuid,
    /// Original user query.
    pub query: String,
    /// Detected query language.
    pub language: Language,
    /// Label produced by the classifier, before reconciliation.
    pub predicted_intent: String,
    /// Label after aligning with the declared health condition.
    pub reconciled_intent: String,
    /// The response text returned to the caller.
    pub response: String,
    /// Detected language of the chosen response (diagnostic only).
    pub response_language: Language,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
    /// Timestamp of resolution.
    pub timestamp: DateTime<Utc>,
}

/// The chatbot inference pipeline over the loaded artifacts.
pub struct ChatEngine {
    tokenizer: Tokenizer,
    model: IntentModel,
    labels: LabelTable,
    responses: ResponseTable,
}

impl ChatEngine {
    pub fn new(
        tokenizer: Tokenizer,
        model: IntentModel,
        labels: LabelTable,
        responses: ResponseTable,
    ) -> Self {
        Self {
            tokenizer,
            model,
            labels,
            responses,
        }
    }

    /// Run the full pipeline for one query.
    ///
    /// Never fails: a classification error collapses to the fixed fallback
    /// reply so the endpoint keeps its 200 contract.
    pub fn respond(&self, query: &str, declared_condition: &str) -> ChatTurn {
        let start = Instant::now();

        // 1. Detect the query language
        let lang = language::detect(query);

        // 2. Classify, reconcile, and select
        let (predicted_intent, reconciled_intent, response) =
            match self.resolve(query, declared_condition, lang) {
                Ok(parts) => parts,
                Err(err) => {
                    error!(%err, query, "chat pipeline failed");
                    (String::new(), String::new(), FALLBACK_RESPONSE.to_string())
                }
            };

        // 3. Secondary language check, diagnostic only
        let response_language = language::detect(&response);
        if response_language != lang {
            warn!(
                query_language = %lang,
                response_language = %response_language,
                "language mismatch in selected response"
            );
        }

        let turn = ChatTurn {
            id: Uuid::new_v4(),
            query: query.to_string(),
            language: lang,
            predicted_intent,
            reconciled_intent,
            response,
            response_language,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };
        info!(
            id = %turn.id,
            intent = %turn.reconciled_intent,
            language = %turn.language,
            elapsed_ms = turn.processing_time_ms,
            "chat turn resolved"
        );
        turn
    }

    fn resolve(
        &self,
        query: &str,
        declared_condition: &str,
        lang: Language,
    ) -> Result<(String, String, String), AppError> {
        let sequence = self.tokenizer.vectorize(query);
        let class = self.model.classify(&sequence);
        let predicted = Intent::parse(self.labels.decode(class)?);

        let reconciled = predicted.reconcile_with(declared_condition);
        if reconciled != predicted {
            warn!(
                predicted = %predicted,
                reconciled = %reconciled,
                condition = declared_condition,
                "declared condition not in predicted intent, requalified"
            );
        }

        let response = self.responses.response_text(&reconciled, lang);
        Ok((predicted.label(), reconciled.label(), response))
    }
}
