//! Error types for the predictor adapter boundary

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the predictor adapter.
///
/// Exactly two kinds exist: the artifact failed to load at startup, or a
/// single prediction failed. Underlying causes (I/O, model parsing, schema
/// mismatch) are carried as sources so callers can print the full chain.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// The model artifact is missing or could not be parsed.
    #[error("failed to load model artifact from {}", path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The model call failed or produced an invalid result.
    #[error("prediction failed")]
    Prediction {
        #[source]
        source: anyhow::Error,
    },
}

impl PredictorError {
    pub(crate) fn prediction(source: impl Into<anyhow::Error>) -> Self {
        PredictorError::Prediction {
            source: source.into(),
        }
    }
}
