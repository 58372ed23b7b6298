//! On-disk artifact formats.
//!
//! The fitted estimators are exported as JSON mirrors of their fitted
//! attributes. Both files live in one model directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{InferenceError, Result};

pub const SCALER_FILE: &str = "loan_scaler.json";
pub const MODEL_FILE: &str = "loan_lr_model.json";

/// Fitted standard-scaler attributes. `mean` is absent when the scaler was
/// fitted without centering; `scale`/`var` are absent when fitted without
/// scaling.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScalerArtifact {
    #[serde(default)]
    pub n_features_in: Option<usize>,
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    #[serde(default)]
    pub var: Option<Vec<f64>>,
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

/// Fitted binary logistic regression attributes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassifierArtifact {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    pub classes: Vec<i64>,
}

/// Paths of the two artifacts inside a model directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            scaler: dir.join(SCALER_FILE),
            model: dir.join(MODEL_FILE),
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| InferenceError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InferenceError::Format {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> InferenceError {
    InferenceError::InvalidArtifact {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

pub(crate) fn check_finite(path: &Path, field: &str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(invalid(path, format!("{field}[{i}] is not finite"))),
        None => Ok(()),
    }
}
