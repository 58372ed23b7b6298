use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading artifacts or running a prediction.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("cannot read artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact {path}: {reason}")]
    InvalidArtifact { path: PathBuf, reason: String },

    #[error("expected {expected} features, found {found}")]
    Dimension { expected: usize, found: usize },

    #[error("feature {feature} is not a finite number")]
    NonFinite { feature: &'static str },
}

pub type Result<T> = std::result::Result<T, InferenceError>;
