//! End-to-end tests for the record → classifier → message flow
//!
//! Uses stub classifiers so the flow can be exercised without a model
//! artifact on disk; artifact load failures are covered against real files.

use predictor_lib::{
    format_result, ClientRecord, Classifier, Label, OnnxClassifier, PredictorError,
};
use predictor_lib::schema::{CampaignOutcome, Contact, Education, Job, Marital, Month, Weekday, YesNoUnknown};
use std::io::Write;

/// Classifier returning a fixed probability vector.
struct StubClassifier([f32; 2]);

impl Classifier for StubClassifier {
    fn predict_proba(&self, _record: &ClientRecord) -> Result<[f32; 2], PredictorError> {
        Ok(self.0)
    }
}

/// Classifier whose model call always fails.
struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict_proba(&self, _record: &ClientRecord) -> Result<[f32; 2], PredictorError> {
        Err(PredictorError::Prediction {
            source: anyhow::anyhow!("input schema mismatch: expected 62 columns"),
        })
    }
}

/// The worked example record: a married 30-year-old administrator contacted
/// by cellular in May.
fn example_record() -> ClientRecord {
    ClientRecord {
        age: 30,
        job: Job::Admin,
        marital: Marital::Married,
        education: Education::Tertiary,
        default: YesNoUnknown::No,
        housing: YesNoUnknown::Yes,
        loan: YesNoUnknown::No,
        contact: Contact::Cellular,
        month: Month::May,
        day_of_week: Weekday::Mon,
        duration: 200,
        campaign: 1,
        pdays: 999,
        previous: 0,
        poutcome: CampaignOutcome::Nonexistent,
        emp_var_rate: 1.1,
        cons_price_idx: 93.994,
        cons_conf_idx: -36.4,
        euribor3m: 4.857,
        nr_employed: 5191.0,
    }
}

#[test]
fn accept_prediction_formats_positive_message() {
    let classifier = StubClassifier([0.16, 0.84]);
    let result = classifier.predict(&example_record()).unwrap();

    assert_eq!(result.label, Label::Accept);
    let message = format_result(&result);
    assert!(message.contains("likely to accept"));
    assert!(message.contains("84.00%"));
}

#[test]
fn decline_prediction_formats_negative_message() {
    let classifier = StubClassifier([0.91, 0.09]);
    let result = classifier.predict(&example_record()).unwrap();

    assert_eq!(result.label, Label::Decline);
    let message = format_result(&result);
    assert!(message.contains("unlikely to accept"));
    assert!(message.contains("91.00%"));
}

#[test]
fn invalid_model_output_is_caught_as_prediction_failure() {
    let classifier = StubClassifier([0.9, 0.4]);
    let err = classifier.predict(&example_record()).unwrap_err();
    assert!(matches!(err, PredictorError::Prediction { .. }));
}

#[test]
fn model_failure_surfaces_its_cause() {
    let err = FailingClassifier.predict(&example_record()).unwrap_err();
    let chain = format!("{:#}", anyhow::Error::from(err));
    assert!(chain.contains("prediction failed"));
    assert!(chain.contains("input schema mismatch"));
}

#[test]
fn absent_artifact_reports_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("bank_marketing.onnx");

    let err = OnnxClassifier::load(&missing).unwrap_err();
    assert!(matches!(err, PredictorError::ModelLoad { .. }));
    assert!(err.to_string().contains("bank_marketing.onnx"));
}

#[test]
fn corrupt_artifact_reports_load_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
    file.flush().unwrap();

    let err = OnnxClassifier::load(file.path()).unwrap_err();
    assert!(matches!(err, PredictorError::ModelLoad { .. }));
}

#[test]
fn example_record_encodes_to_expected_layout() {
    let features = predictor_lib::encode_record(&example_record());
    assert_eq!(features.len(), predictor_lib::NUM_FEATURES);
    assert_eq!(features[0], 30.0); // age
    assert_eq!(features[1], 1.0); // job = admin.
    assert_eq!(features[52], 999.0); // pdays
    assert_eq!(features[61], 5191.0); // nr.employed
}
