use serde::Serialize;

use loan_inference::{LoanStatus, Prediction};

pub const LIVE_MESSAGE: &str = "Logistic Regression API is Live!";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PredictionResponse {
    pub status: LoanStatus,
    pub model_used: String,
}

impl PredictionResponse {
    pub fn new(prediction: &Prediction, model_used: &str) -> Self {
        PredictionResponse {
            status: prediction.status,
            model_used: model_used.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LiveMessage {
    pub message: String,
}

impl Default for LiveMessage {
    fn default() -> Self {
        LiveMessage {
            message: LIVE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ModelInfo {
    pub model_used: String,
    pub features: Vec<String>,
    pub classes: Vec<i64>,
    pub loaded_at: String,
}

/// Error body; `detail` is what the front-end displays.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorDetail { detail: detail.into() }
    }
}
