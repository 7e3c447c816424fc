//! Core data models for the deposit predictor

use crate::error::PredictorError;
use crate::schema::{
    bounds, CampaignOutcome, Contact, Education, Job, Marital, Month, Weekday, YesNoUnknown,
};
use serde::{Deserialize, Serialize};

/// Tolerance allowed when checking that a probability vector sums to 1.0.
pub const PROBABILITY_TOLERANCE: f32 = 1e-3;

/// One prospective client's attributes, immutable once constructed.
///
/// Field set and ordering match the training schema exactly; the serde
/// renames reproduce the dot-separated dataset column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub age: u32,
    pub job: Job,
    pub marital: Marital,
    pub education: Education,
    pub default: YesNoUnknown,
    pub housing: YesNoUnknown,
    pub loan: YesNoUnknown,
    pub contact: Contact,
    pub month: Month,
    pub day_of_week: Weekday,
    pub duration: u32,
    pub campaign: u32,
    pub pdays: u32,
    pub previous: u32,
    pub poutcome: CampaignOutcome,
    #[serde(rename = "emp.var.rate")]
    pub emp_var_rate: f64,
    #[serde(rename = "cons.price.idx")]
    pub cons_price_idx: f64,
    #[serde(rename = "cons.conf.idx")]
    pub cons_conf_idx: f64,
    pub euribor3m: f64,
    #[serde(rename = "nr.employed")]
    pub nr_employed: f64,
}

impl Default for ClientRecord {
    /// The record produced when every input is left at its declared default.
    fn default() -> Self {
        Self {
            age: bounds::AGE.default,
            job: Job::default(),
            marital: Marital::default(),
            education: Education::default(),
            default: YesNoUnknown::default(),
            housing: YesNoUnknown::default(),
            loan: YesNoUnknown::default(),
            contact: Contact::default(),
            month: Month::default(),
            day_of_week: Weekday::default(),
            duration: bounds::DURATION.default,
            campaign: bounds::CAMPAIGN.default,
            pdays: bounds::PDAYS.default,
            previous: bounds::PREVIOUS.default,
            poutcome: CampaignOutcome::default(),
            emp_var_rate: bounds::EMP_VAR_RATE.default,
            cons_price_idx: bounds::CONS_PRICE_IDX.default,
            cons_conf_idx: bounds::CONS_CONF_IDX.default,
            euribor3m: bounds::EURIBOR3M.default,
            nr_employed: bounds::NR_EMPLOYED.default,
        }
    }
}

/// Binary classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Class 0: the client is unlikely to accept the offer.
    Decline,
    /// Class 1: the client is likely to accept the offer.
    Accept,
}

impl Label {
    /// Index of this label in the probability vector.
    pub fn index(self) -> usize {
        match self {
            Label::Decline => 0,
            Label::Accept => 1,
        }
    }
}

/// Result of scoring one [`ClientRecord`]. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Label,
    /// Per-class probabilities [p(decline), p(accept)], summing to 1.0.
    pub probabilities: [f32; 2],
    pub generated_at: i64,
}

impl PredictionResult {
    /// Build a result from a model probability vector, deriving the label
    /// by argmax. Rejects vectors with negative entries or a sum outside
    /// 1.0 ± [`PROBABILITY_TOLERANCE`].
    pub fn from_probabilities(probabilities: [f32; 2]) -> Result<Self, PredictorError> {
        if probabilities.iter().any(|p| *p < 0.0) {
            return Err(PredictorError::prediction(anyhow::anyhow!(
                "model returned negative class probability: {probabilities:?}"
            )));
        }
        let sum: f32 = probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(PredictorError::prediction(anyhow::anyhow!(
                "model probabilities {probabilities:?} sum to {sum}, expected 1.0"
            )));
        }

        // Argmax with sklearn's tie behavior: an exact tie is class 0.
        let label = if probabilities[1] > probabilities[0] {
            Label::Accept
        } else {
            Label::Decline
        };

        Ok(Self {
            label,
            probabilities,
            generated_at: chrono::Utc::now().timestamp(),
        })
    }

    /// Probability of the predicted class.
    pub fn probability(&self) -> f32 {
        self.probabilities[self.label.index()]
    }
}
