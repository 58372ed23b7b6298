use std::path::Path;

use chrono::{DateTime, Utc};
use log::{error, info};

use loan_inference::{LoanInput, LoanPredictor};

use crate::models::ModelInfo;

/// Process-wide model state, decided once at startup.
///
/// A failed load does not abort the process: the server keeps answering and
/// `/predict` reports the stored reason instead of a prediction.
#[derive(Debug)]
pub enum ModelState {
    Ready {
        predictor: LoanPredictor,
        loaded_at: DateTime<Utc>,
    },
    Unavailable {
        reason: String,
    },
}

impl ModelState {
    pub fn load(dir: &Path) -> Self {
        match LoanPredictor::load(dir) {
            Ok(predictor) => {
                info!("Successfully loaded {} assets.", predictor.model_name());
                ModelState::ready(predictor)
            }
            Err(e) => {
                error!("Error loading models from {}: {}", dir.display(), e);
                ModelState::Unavailable { reason: e.to_string() }
            }
        }
    }

    pub fn ready(predictor: LoanPredictor) -> Self {
        ModelState::Ready {
            predictor,
            loaded_at: Utc::now(),
        }
    }

    pub fn predictor(&self) -> Result<&LoanPredictor, &str> {
        match self {
            ModelState::Ready { predictor, .. } => Ok(predictor),
            ModelState::Unavailable { reason } => Err(reason.as_str()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready { .. })
    }

    pub fn info(&self) -> Option<ModelInfo> {
        match self {
            ModelState::Ready { predictor, loaded_at } => Some(ModelInfo {
                model_used: predictor.model_name().to_string(),
                features: LoanInput::FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
                classes: predictor.classes().to_vec(),
                loaded_at: loaded_at.to_rfc3339(),
            }),
            ModelState::Unavailable { .. } => None,
        }
    }
}
