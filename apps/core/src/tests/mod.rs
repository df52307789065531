//! Test Module
//!
//! Cross-module test suite for the CeylonCare backend.
//!
//! ## Test Categories
//! - `chat_tests`: full chatbot pipeline over in-memory artifacts
//! - `therapy_tests`: feature encoding and recommendation scenarios
//! - `artifact_tests`: startup loading, degraded modes, shape checks
//! - `http_tests`: endpoint round-trips against a live listener
//!
//! Shared fixtures below build a small but fully wired artifact set: a
//! three-class intent model, a bilingual response table, and three therapy
//! trees.


use std::collections::HashMap;

use crate::artifacts::{AppContext, ArtifactSummary};
use crate::chat::{
    ChatEngine, IntentModel, LabelTable, Language, ResponseRecord, ResponseTable, Tokenizer,
};
use crate::therapy::{DecisionTree, TherapyRecommender, TherapySlot, TreeNode};

pub fn sample_tokenizer() -> Tokenizer {
    let vocab = HashMap::from([
        ("how".to_string(), 2),
        ("can".to_string(), 3),
        ("i".to_string(), 4),
        ("control".to_string(), 5),
        ("my".to_string(), 6),
        ("blood".to_string(), 7),
        ("sugar".to_string(), 8),
        ("naturally".to_string(), 9),
        ("pressure".to_string(), 10),
        ("hello".to_string(), 11),
        ("රුධිර".to_string(), 12),
        ("පීඩනය".to_string(), 13),
        ("පාලනය".to_string(), 14),
        ("හෙලෝ".to_string(), 15),
    ]);
    Tokenizer {
        seq_length: 50,
        oov_index: 1,
        vocab,
    }
}

pub fn sample_labels() -> LabelTable {
    LabelTable::new(vec![
        "blood_pressure_control_for_hypertension".to_string(),
        "blood_sugar_control".to_string(),
        "greeting".to_string(),
    ])
}

fn weight_row(entries: &[(usize, f32)]) -> Vec<f32> {
    let mut row = vec![0.0; 16];
    for (index, weight) in entries {
        row[*index] = *weight;
    }
    row
}

pub fn sample_model() -> IntentModel {
    IntentModel {
        vocab_size: 16,
        weights: vec![
            // blood_pressure_control_for_hypertension
            weight_row(&[(1, 0.1), (7, 1.0), (10, 3.0), (12, 1.5), (13, 3.0)]),
            // blood_sugar_control
            weight_row(&[(1, 0.1), (5, 0.5), (7, 1.0), (8, 3.0), (14, 0.8)]),
            // greeting
            weight_row(&[(1, 0.1), (11, 3.0), (15, 3.0)]),
        ],
        bias: vec![0.0, 0.0, 0.0],
    }
}

fn record(intent: &str, language: Language, response: &str, condition: &str) -> ResponseRecord {
    ResponseRecord {
        intent: intent.to_string(),
        language,
        response: response.to_string(),
        health_condition: condition.to_string(),
    }
}

pub fn sample_responses() -> ResponseTable {
    ResponseTable::new(sample_response_records())
}

pub fn sample_response_records() -> Vec<ResponseRecord> {
    vec![
        record(
            "blood_sugar_control_for_diabetes",
            Language::English,
            "Favor whole grains, legumes, and a short walk after meals.",
            "diabetes",
        ),
        record(
            "blood_sugar_control_for_diabetes",
            Language::Sinhala,
            "සම්පූර්ණ ධාන්ය සහ රනිල කුලයට අයත් ආහාර ගන්න.",
            "diabetes",
        ),
        record(
            "blood_pressure_control_for_hypertension",
            Language::English,
            "Cut back on salt and practice slow breathing daily.",
            "hypertension",
        ),
        record(
            "blood_pressure_control_for_hypertension",
            Language::Sinhala,
            "ලුණු අඩු කර දිනපතා සෙමින් හුස්ම ගැනීම පුහුණු වන්න.",
            "hypertension",
        ),
        record(
            "greeting",
            Language::English,
            "Hello! How can I help you today?",
            "general",
        ),
        record(
            "greeting",
            Language::Sinhala,
            "ආයුබෝවන්! මම ඔබට උදව් කරන්නේ කෙසේද?",
            "general",
        ),
        record(
            "blood_sugar_control",
            Language::English,
            "Balanced meals at regular times help keep energy steady.",
            "general",
        ),
    ]
}

pub fn sample_slots() -> Vec<TherapySlot> {
    let therapy1 = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 2,
                threshold: 1.5,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf {
                label: "Kapalabhati Pranayama".to_string(),
            },
            TreeNode::Split {
                feature: 3,
                threshold: 25.0,
                left: 3,
                right: 4,
            },
            TreeNode::Leaf {
                label: "Surya Namaskar".to_string(),
            },
            TreeNode::Leaf {
                label: "Shavasana".to_string(),
            },
        ],
    };
    let therapy2 = DecisionTree {
        nodes: vec![
            TreeNode::Split {
                feature: 1,
                threshold: 0.5,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf {
                label: "Anulom Vilom".to_string(),
            },
            TreeNode::Leaf {
                label: "Bhujangasana".to_string(),
            },
        ],
    };
    let therapy3 = DecisionTree {
        nodes: vec![TreeNode::Leaf {
            label: "Shavasana".to_string(),
        }],
    };

    vec![
        TherapySlot {
            name: "Therapy1".to_string(),
            tree: Some(therapy1),
        },
        TherapySlot {
            name: "Therapy2".to_string(),
            tree: Some(therapy2),
        },
        TherapySlot {
            name: "Therapy3".to_string(),
            tree: Some(therapy3),
        },
    ]
}

pub fn sample_engine() -> ChatEngine {
    ChatEngine::new(
        sample_tokenizer(),
        sample_model(),
        sample_labels(),
        sample_responses(),
    )
}

pub fn sample_context() -> AppContext {
    let responses = sample_responses();
    let summary = ArtifactSummary {
        labels: sample_labels().len(),
        vocabulary: sample_tokenizer().vocab.len(),
        response_rows: responses.len(),
        therapy_slots: sample_slots().len(),
    };
    AppContext {
        chat: sample_engine(),
        recommender: TherapyRecommender::new(sample_slots()),
        summary,
    }
}
