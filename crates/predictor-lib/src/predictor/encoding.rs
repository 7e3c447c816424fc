//! Record encoding for ML inference
//!
//! Maps a [`ClientRecord`] onto the fixed feature vector the model artifact
//! was exported against: columns in training-schema order, each categorical
//! expanded to a one-hot block over its enumeration order, numerics passed
//! through as f32. The scaler lives inside the exported graph, so numeric
//! values are not normalized here.

use crate::models::ClientRecord;
use crate::schema::{CampaignOutcome, Contact, Education, Job, Marital, Month, Weekday, YesNoUnknown};

/// Number of input features expected by the model.
///
/// 10 numeric columns plus one-hot blocks for the 10 categorical columns
/// (12 + 4 + 4 + 3 + 3 + 3 + 3 + 12 + 5 + 3).
pub const NUM_FEATURES: usize = 62;

/// Encode a record into the model's input layout.
pub fn encode_record(record: &ClientRecord) -> Vec<f32> {
    let mut features = Vec::with_capacity(NUM_FEATURES);

    features.push(record.age as f32);
    push_one_hot(&mut features, Job::ALL, record.job);
    push_one_hot(&mut features, Marital::ALL, record.marital);
    push_one_hot(&mut features, Education::ALL, record.education);
    push_one_hot(&mut features, YesNoUnknown::ALL, record.default);
    push_one_hot(&mut features, YesNoUnknown::ALL, record.housing);
    push_one_hot(&mut features, YesNoUnknown::ALL, record.loan);
    push_one_hot(&mut features, Contact::ALL, record.contact);
    push_one_hot(&mut features, Month::ALL, record.month);
    push_one_hot(&mut features, Weekday::ALL, record.day_of_week);
    features.push(record.duration as f32);
    features.push(record.campaign as f32);
    features.push(record.pdays as f32);
    features.push(record.previous as f32);
    push_one_hot(&mut features, CampaignOutcome::ALL, record.poutcome);
    features.push(record.emp_var_rate as f32);
    features.push(record.cons_price_idx as f32);
    features.push(record.cons_conf_idx as f32);
    features.push(record.euribor3m as f32);
    features.push(record.nr_employed as f32);

    debug_assert_eq!(features.len(), NUM_FEATURES);
    features
}

fn push_one_hot<T: Copy + PartialEq>(out: &mut Vec<f32>, all: &[T], value: T) {
    for candidate in all {
        out.push(if *candidate == value { 1.0 } else { 0.0 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_length() {
        assert_eq!(encode_record(&ClientRecord::default()).len(), NUM_FEATURES);
    }

    #[test]
    fn test_one_hot_blocks_sum_to_one() {
        let features = encode_record(&ClientRecord::default());
        // (offset, width) of every categorical block in layout order.
        let blocks = [
            (1, 12),  // job
            (13, 4),  // marital
            (17, 4),  // education
            (21, 3),  // default
            (24, 3),  // housing
            (27, 3),  // loan
            (30, 3),  // contact
            (33, 12), // month
            (45, 5),  // day_of_week
            (54, 3),  // poutcome
        ];
        for (offset, width) in blocks {
            let sum: f32 = features[offset..offset + width].iter().sum();
            assert_eq!(sum, 1.0, "block at offset {offset} is not one-hot");
        }
    }

    #[test]
    fn test_numeric_passthrough_positions() {
        let record = ClientRecord {
            age: 42,
            duration: 350,
            campaign: 3,
            previous: 2,
            ..ClientRecord::default()
        };
        let features = encode_record(&record);
        assert_eq!(features[0], 42.0);
        assert_eq!(features[50], 350.0);
        assert_eq!(features[51], 3.0);
        assert_eq!(features[52], 999.0);
        assert_eq!(features[53], 2.0);
        assert!((features[57] - 1.1).abs() < 1e-6);
        assert!((features[58] - 93.994).abs() < 1e-3);
        assert_eq!(features[61], 5191.0);
    }

    #[test]
    fn test_categorical_selects_expected_slot() {
        let record = ClientRecord {
            job: Job::Student,
            poutcome: crate::schema::CampaignOutcome::Success,
            ..ClientRecord::default()
        };
        let features = encode_record(&record);
        // Student is the 9th job variant (index 8 within the block).
        assert_eq!(features[1 + 8], 1.0);
        assert_eq!(features[1], 0.0);
        // Success is the 3rd poutcome variant.
        assert_eq!(features[54 + 2], 1.0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let record = ClientRecord::default();
        assert_eq!(encode_record(&record), encode_record(&record));
    }
}
