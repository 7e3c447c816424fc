//! ONNX Runtime inference using tract
//!
//! Loads the serialized classifier artifact once and runs synchronous
//! single-record inference against it.

use super::encoding::{encode_record, NUM_FEATURES};
use super::Classifier;
use crate::error::PredictorError;
use crate::models::ClientRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tract_onnx::prelude::*;
use tracing::{debug, info};

/// Fixed relative path of the model artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/bank_marketing.onnx";

/// Number of output classes from the model.
const NUM_CLASSES: usize = 2;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-based binary classifier using tract for lightweight inference.
///
/// The model handle is read-only after load; prediction requests against a
/// classifier that failed to load are impossible by construction.
#[derive(Debug)]
pub struct OnnxClassifier {
    model: TractModel,
    artifact_path: PathBuf,
}

impl OnnxClassifier {
    /// Load the model artifact from disk, exactly once per process lifetime.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        Self::try_load(path).map_err(|source| PredictorError::ModelLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    fn try_load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let model = Self::build_model(&bytes)?;

        info!(
            path = %path.display(),
            size_bytes = bytes.len(),
            "Model artifact loaded"
        );

        Ok(Self {
            model,
            artifact_path: path.to_path_buf(),
        })
    }

    /// Parse and optimize an ONNX model from bytes.
    fn build_model(model_bytes: &[u8]) -> Result<TractModel> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(model_bytes))
            .context("failed to parse ONNX model")?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .context("failed to set input shape")?
            .into_optimized()
            .context("failed to optimize model")?
            .into_runnable()
            .context("failed to create runnable model")?;
        Ok(model)
    }

    /// Path the artifact was loaded from.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Convert an encoded record to the model's input tensor.
    fn record_to_tensor(record: &ClientRecord) -> Result<Tensor> {
        let features = encode_record(record);
        let array = tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), features)
            .context("encoded record does not match model input shape")?;
        Ok(array.into())
    }

    fn run_model(&self, record: &ClientRecord) -> Result<[f32; NUM_CLASSES]> {
        let input = Self::record_to_tensor(record)?;
        let result = self.model.run(tvec!(input.into()))?;
        let output = result.first().context("no output from model")?;

        let view = output.to_array_view::<f32>()?;
        let values: Vec<f32> = view.iter().copied().collect();
        if values.len() != NUM_CLASSES {
            anyhow::bail!(
                "model output has {} values, expected {NUM_CLASSES}",
                values.len()
            );
        }
        Ok([values[0], values[1]])
    }
}

impl Classifier for OnnxClassifier {
    fn predict_proba(&self, record: &ClientRecord) -> Result<[f32; 2], PredictorError> {
        let start = Instant::now();
        let probabilities = self
            .run_model(record)
            .map_err(PredictorError::prediction)?;

        debug!(
            elapsed_us = start.elapsed().as_micros(),
            p_decline = probabilities[0],
            p_accept = probabilities[1],
            "Inference completed"
        );

        Ok(probabilities)
    }
}
