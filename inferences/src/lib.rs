//! Loan approval inference: a fitted standard scaler feeding a binary
//! logistic regression, both loaded from JSON artifacts.

pub mod artifacts;
pub mod classifier;
pub mod coerce;
pub mod error;
pub mod inference;
pub mod scaler;
pub mod types;

pub use artifacts::ArtifactPaths;
pub use classifier::LogisticRegression;
pub use coerce::{CoerceError, Numeric};
pub use error::{InferenceError, Result};
pub use inference::{LoanPredictor, MODEL_NAME};
pub use scaler::StandardScaler;
pub use types::{LoanInput, LoanStatus, Prediction};
