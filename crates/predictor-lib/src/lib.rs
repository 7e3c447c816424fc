//! Core library for term deposit subscription prediction
//!
//! This crate provides:
//! - The typed client record schema (categorical enumerations, numeric
//!   bounds, verbatim training-schema column names)
//! - Record-to-feature-vector encoding for the model artifact
//! - A classifier adapter that loads a serialized ONNX model once and
//!   scores one record per request
//! - Human-readable result formatting

pub mod error;
pub mod models;
pub mod predictor;
pub mod schema;

pub use error::PredictorError;
pub use models::{ClientRecord, Label, PredictionResult, PROBABILITY_TOLERANCE};
pub use predictor::{
    encode_record, format_probability, format_result, Classifier, OnnxClassifier,
    ACCEPT_MESSAGE, DECLINE_MESSAGE, DEFAULT_MODEL_PATH, NUM_FEATURES,
};
