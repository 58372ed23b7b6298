use std::path::Path;

use log::info;
use ndarray::ArrayView1;

use crate::artifacts::{invalid, ArtifactPaths};
use crate::classifier::{sigmoid, LogisticRegression};
use crate::error::{InferenceError, Result};
use crate::scaler::StandardScaler;
use crate::types::{LoanInput, LoanStatus, Prediction};

pub const MODEL_NAME: &str = "Logistic Regression";

/// Fitted scaler and classifier, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct LoanPredictor {
    scaler: StandardScaler,
    classifier: LogisticRegression,
}

impl LoanPredictor {
    /// Pairs an in-memory scaler and classifier; both must be fitted on the
    /// loan feature set.
    pub fn new(scaler: StandardScaler, classifier: LogisticRegression) -> Result<Self> {
        for found in [scaler.n_features(), classifier.n_features()] {
            if found != LoanInput::FEATURE_COUNT {
                return Err(InferenceError::Dimension {
                    expected: LoanInput::FEATURE_COUNT,
                    found,
                });
            }
        }
        Ok(Self { scaler, classifier })
    }

    /// Loads `loan_scaler.json` and `loan_lr_model.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_paths(&ArtifactPaths::in_dir(dir))
    }

    pub fn load_paths(paths: &ArtifactPaths) -> Result<Self> {
        let scaler = StandardScaler::load(&paths.scaler)?;
        expect_width(&paths.scaler, "scaler", scaler.n_features())?;
        let classifier = LogisticRegression::load(&paths.model)?;
        expect_width(&paths.model, "model", classifier.n_features())?;

        info!(
            "Loaded {} assets from {} and {}",
            MODEL_NAME,
            paths.scaler.display(),
            paths.model.display()
        );
        Ok(Self { scaler, classifier })
    }

    pub fn classes(&self) -> [i64; 2] {
        self.classifier.classes()
    }

    pub fn model_name(&self) -> &'static str {
        MODEL_NAME
    }

    pub fn predict(&self, input: &LoanInput) -> Result<Prediction> {
        let features = input.to_features();
        if let Some(i) = features.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite {
                feature: LoanInput::FEATURE_NAMES[i],
            });
        }
        let scaled = self.scaler.transform(ArrayView1::from(&features[..]))?;
        let decision = self.classifier.decision_function(scaled.view())?;
        let class = self.classifier.class_for(decision);

        Ok(Prediction {
            status: LoanStatus::from_class(class),
            class,
            decision,
            probability: sigmoid(decision),
        })
    }
}

fn expect_width(path: &Path, what: &str, found: usize) -> Result<()> {
    if found == LoanInput::FEATURE_COUNT {
        return Ok(());
    }
    Err(invalid(
        path,
        format!(
            "{} fitted on {} features, expected {}",
            what,
            found,
            LoanInput::FEATURE_COUNT
        ),
    ))
}
