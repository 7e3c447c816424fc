//! Prediction result formatting
//!
//! Maps a [`PredictionResult`] to the human-readable message shown to the
//! user, with the selected class probability as a percentage to two decimal
//! places.

use crate::models::{Label, PredictionResult};

/// Message shown when the predicted label is Accept.
pub const ACCEPT_MESSAGE: &str = "The client is likely to accept the term deposit offer.";

/// Message shown when the predicted label is Decline.
pub const DECLINE_MESSAGE: &str = "The client is unlikely to accept the term deposit offer.";

/// Render the final result message.
pub fn format_result(result: &PredictionResult) -> String {
    let message = match result.label {
        Label::Accept => ACCEPT_MESSAGE,
        Label::Decline => DECLINE_MESSAGE,
    };
    format!("{message} (probability: {})", format_probability(result.probability()))
}

/// Format a class probability as a percentage to two decimals.
pub fn format_probability(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}
