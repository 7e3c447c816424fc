//! Prediction engine

mod encoding;
mod inference;
mod output;

pub use encoding::{encode_record, NUM_FEATURES};
pub use inference::{OnnxClassifier, DEFAULT_MODEL_PATH};
pub use output::{format_probability, format_result, ACCEPT_MESSAGE, DECLINE_MESSAGE};

use crate::error::PredictorError;
use crate::models::{ClientRecord, PredictionResult};

/// Trait for classifier implementations.
pub trait Classifier: Send + Sync {
    /// Per-class probabilities [p(decline), p(accept)] for one record.
    fn predict_proba(&self, record: &ClientRecord) -> Result<[f32; 2], PredictorError>;

    /// Score one record, validating the probability vector and deriving
    /// the label by argmax.
    fn predict(&self, record: &ClientRecord) -> Result<PredictionResult, PredictorError> {
        let probabilities = self.predict_proba(record)?;
        PredictionResult::from_probabilities(probabilities)
    }
}
