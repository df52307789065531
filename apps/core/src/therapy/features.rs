//! Feature encoding for the therapy recommender.
//!
//! Categorical fields map through fixed tables frozen at training time;
//! values absent from a table fall back to a fixed default code instead of
//! erroring. BMI is computed from weight (kg) and height (cm).

use serde::Serialize;

use crate::error::AppError;
use crate::models::PredictRequest;

fn gender_code(value: &str) -> f32 {
    match value.trim() {
        "Female" => 0.0,
        "Male" => 1.0,
        // unmapped values fall back to Male
        _ => 1.0,
    }
}

fn health_condition_code(value: &str) -> f32 {
    match value.trim() {
        "Both" => 0.0,
        "Diabetes" => 1.0,
        "Healthy" => 2.0,
        "Hypertension" => 3.0,
        // unmapped values fall back to Diabetes
        _ => 1.0,
    }
}

fn exercise_frequency_code(value: &str) -> f32 {
    match value.trim() {
        "Daily" => 0.0,
        "Rarely" => 1.0,
        "Weekly" => 2.0,
        // unmapped values fall back to Rarely
        _ => 1.0,
    }
}

/// One encoded feature row, in the training column order:
/// `[age, gender, health condition, BMI, exercise frequency]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRow {
    pub age: f32,
    pub gender: f32,
    pub health_condition: f32,
    pub bmi: f32,
    pub exercise_frequency: f32,
}

impl FeatureRow {
    /// Encode a request into the model's feature order.
    ///
    /// Height arrives in centimeters and must be positive; BMI is
    /// weight_kg / (height_m)^2.
    pub fn from_request(request: &PredictRequest) -> Result<Self, AppError> {
        if request.height <= 0.0 {
            return Err(AppError::Validation("height must be positive".to_string()));
        }
        let height_m = request.height / 100.0;
        let bmi = request.weight / (height_m * height_m);

        Ok(Self {
            age: request.age as f32,
            gender: gender_code(&request.gender),
            health_condition: health_condition_code(&request.health_condition),
            bmi: bmi as f32,
            exercise_frequency: exercise_frequency_code(&request.exercise_frequency),
        })
    }

    /// Feature value by column index, in training order.
    pub fn get(&self, feature: usize) -> Option<f32> {
        match feature {
            0 => Some(self.age),
            1 => Some(self.gender),
            2 => Some(self.health_condition),
            3 => Some(self.bmi),
            4 => Some(self.exercise_frequency),
            _ => None,
        }
    }
}
