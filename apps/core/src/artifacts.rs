//! Startup artifact loading.
//!
//! Everything the request handlers read is loaded here, once, into an
//! immutable context shared by `Arc`. There is no reload path: a process
//! restart is the only way to pick up new artifacts.
//!
//! Chat-model artifacts are required: a failure aborts startup. The
//! response table degrades to an empty table (every lookup then yields the
//! apology) and each therapy tree degrades independently to a permanently
//! failed slot.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::chat::{ChatEngine, IntentModel, LabelTable, ResponseTable, Tokenizer};
use crate::error::AppError;
use crate::therapy::{DecisionTree, TherapyRecommender, TherapySlot, SLOT_COUNT};

const TOKENIZER_FILE: &str = "tokenizer.json";
const LABELS_FILE: &str = "label_encoder.json";
const MODEL_FILE: &str = "chat_model.json";
const RESPONSES_FILE: &str = "responses.json";
const THERAPY_FILES: [&str; SLOT_COUNT] = ["therapy_1.json", "therapy_2.json", "therapy_3.json"];
const THERAPY_SLOT_NAMES: [&str; SLOT_COUNT] = ["Therapy1", "Therapy2", "Therapy3"];

/// Immutable process-wide state handed to request handlers.
pub struct AppContext {
    pub chat: ChatEngine,
    pub recommender: TherapyRecommender,
    /// Artifact shape summary for the health endpoint.
    pub summary: ArtifactSummary,
}

/// Shape of the loaded artifacts, reported by `/healthz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSummary {
    pub labels: usize,
    pub vocabulary: usize,
    pub response_rows: usize,
    pub therapy_slots: usize,
}

/// Load every artifact from `data_dir` and assemble the request context.
pub fn load(data_dir: &Path) -> Result<AppContext, AppError> {
    let tokenizer = Tokenizer::load(&data_dir.join(TOKENIZER_FILE))?;
    let labels = LabelTable::load(&data_dir.join(LABELS_FILE))?;
    let model = IntentModel::load(&data_dir.join(MODEL_FILE))?;
    if model.classes() != labels.len() {
        return Err(AppError::Artifact(format!(
            "model has {} classes but the label table has {} entries",
            model.classes(),
            labels.len()
        )));
    }

    let responses = match ResponseTable::load(&data_dir.join(RESPONSES_FILE)) {
        Ok(table) => table,
        Err(err) => {
            error!(%err, "failed to load response table, continuing with an empty table");
            ResponseTable::default()
        }
    };
    for issue in responses.validate() {
        warn!(issue = %issue, "response table inconsistency");
    }

    let mut slots = Vec::with_capacity(SLOT_COUNT);
    for (file, name) in THERAPY_FILES.iter().zip(THERAPY_SLOT_NAMES) {
        let tree = match DecisionTree::load(&data_dir.join(file)) {
            Ok(tree) => Some(tree),
            Err(err) => {
                error!(slot = name, %err, "failed to load therapy classifier, slot will report errors");
                None
            }
        };
        slots.push(TherapySlot {
            name: name.to_string(),
            tree,
        });
    }
    let recommender = TherapyRecommender::new(slots);

    let summary = ArtifactSummary {
        labels: labels.len(),
        vocabulary: tokenizer.vocab.len(),
        response_rows: responses.len(),
        therapy_slots: recommender.loaded_slots(),
    };
    info!(
        labels = summary.labels,
        vocabulary = summary.vocabulary,
        response_rows = summary.response_rows,
        therapy_slots = summary.therapy_slots,
        "artifacts loaded"
    );

    Ok(AppContext {
        chat: ChatEngine::new(tokenizer, model, labels, responses),
        recommender,
        summary,
    })
}
