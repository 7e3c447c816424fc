//! Client attribute form
//!
//! One argument per record field, each constrained to its declared domain
//! with the form's default value. Range and enumeration enforcement happens
//! at argument parsing, so an out-of-domain value can never reach the
//! constructed [`ClientRecord`].

use clap::Args;
use predictor_lib::schema::{
    bounds, CampaignOutcome, Contact, Education, FieldBounds, Job, Marital, Month, Weekday,
    YesNoUnknown,
};
use predictor_lib::ClientRecord;

/// Client attributes, one flag per training-schema column.
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Age in years (18-100)
    #[arg(long, default_value_t = bounds::AGE.default,
          value_parser = clap::value_parser!(u32).range(18..=100))]
    pub age: u32,

    /// Profession
    #[arg(long, default_value_t = Job::default())]
    pub job: Job,

    /// Marital status
    #[arg(long, default_value_t = Marital::default())]
    pub marital: Marital,

    /// Education level
    #[arg(long, default_value_t = Education::default())]
    pub education: Education,

    /// Has credit in default
    #[arg(long, default_value_t = YesNoUnknown::default())]
    pub default: YesNoUnknown,

    /// Has a housing loan
    #[arg(long, default_value_t = YesNoUnknown::default())]
    pub housing: YesNoUnknown,

    /// Has a personal loan
    #[arg(long, default_value_t = YesNoUnknown::default())]
    pub loan: YesNoUnknown,

    /// Contact communication type
    #[arg(long, default_value_t = Contact::default())]
    pub contact: Contact,

    /// Month of last contact
    #[arg(long, default_value_t = Month::default())]
    pub month: Month,

    /// Weekday of last contact
    #[arg(long, default_value_t = Weekday::default())]
    pub day_of_week: Weekday,

    /// Last contact duration in seconds (0-5000)
    #[arg(long, default_value_t = bounds::DURATION.default,
          value_parser = clap::value_parser!(u32).range(0..=5000))]
    pub duration: u32,

    /// Contacts performed during this campaign (1-50)
    #[arg(long, default_value_t = bounds::CAMPAIGN.default,
          value_parser = clap::value_parser!(u32).range(1..=50))]
    pub campaign: u32,

    /// Days since last contact of a previous campaign, 999 if never (0-999)
    #[arg(long, default_value_t = bounds::PDAYS.default,
          value_parser = clap::value_parser!(u32).range(0..=999))]
    pub pdays: u32,

    /// Contacts performed before this campaign (0-50)
    #[arg(long, default_value_t = bounds::PREVIOUS.default,
          value_parser = clap::value_parser!(u32).range(0..=50))]
    pub previous: u32,

    /// Outcome of the previous campaign
    #[arg(long, default_value_t = CampaignOutcome::default())]
    pub poutcome: CampaignOutcome,

    /// Employment variation rate, % (-10.0 to 10.0)
    #[arg(long, default_value_t = bounds::EMP_VAR_RATE.default,
          allow_negative_numbers = true,
          value_parser = parse_emp_var_rate)]
    pub emp_var_rate: f64,

    /// Consumer price index (90.0 to 100.0)
    #[arg(long, default_value_t = bounds::CONS_PRICE_IDX.default,
          value_parser = parse_cons_price_idx)]
    pub cons_price_idx: f64,

    /// Consumer confidence index (-50.0 to 0.0)
    #[arg(long, default_value_t = bounds::CONS_CONF_IDX.default,
          allow_negative_numbers = true,
          value_parser = parse_cons_conf_idx)]
    pub cons_conf_idx: f64,

    /// 3-month Euribor rate, % (0.0 to 10.0)
    #[arg(long, default_value_t = bounds::EURIBOR3M.default,
          value_parser = parse_euribor3m)]
    pub euribor3m: f64,

    /// Number of employees (0.0 to 10000.0)
    #[arg(long, default_value_t = bounds::NR_EMPLOYED.default,
          value_parser = parse_nr_employed)]
    pub nr_employed: f64,
}

impl ClientArgs {
    /// Assemble the collected fields into a record. Infallible: every
    /// field is already constrained to its domain.
    pub fn into_record(self) -> ClientRecord {
        ClientRecord {
            age: self.age,
            job: self.job,
            marital: self.marital,
            education: self.education,
            default: self.default,
            housing: self.housing,
            loan: self.loan,
            contact: self.contact,
            month: self.month,
            day_of_week: self.day_of_week,
            duration: self.duration,
            campaign: self.campaign,
            pdays: self.pdays,
            previous: self.previous,
            poutcome: self.poutcome,
            emp_var_rate: self.emp_var_rate,
            cons_price_idx: self.cons_price_idx,
            cons_conf_idx: self.cons_conf_idx,
            euribor3m: self.euribor3m,
            nr_employed: self.nr_employed,
        }
    }
}

fn parse_bounded_f64(s: &str, bounds: FieldBounds<f64>) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if bounds.contains(value) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is out of range {}..={}",
            bounds.min, bounds.max
        ))
    }
}

fn parse_emp_var_rate(s: &str) -> Result<f64, String> {
    parse_bounded_f64(s, bounds::EMP_VAR_RATE)
}

fn parse_cons_price_idx(s: &str) -> Result<f64, String> {
    parse_bounded_f64(s, bounds::CONS_PRICE_IDX)
}

fn parse_cons_conf_idx(s: &str) -> Result<f64, String> {
    parse_bounded_f64(s, bounds::CONS_CONF_IDX)
}

fn parse_euribor3m(s: &str) -> Result<f64, String> {
    parse_bounded_f64(s, bounds::EURIBOR3M)
}

fn parse_nr_employed(s: &str) -> Result<f64, String> {
    parse_bounded_f64(s, bounds::NR_EMPLOYED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        client: ClientArgs,
    }

    #[test]
    fn test_defaults_produce_default_record() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.client.into_record(), ClientRecord::default());
    }

    #[test]
    fn test_full_form_parses() {
        let cli = TestCli::try_parse_from([
            "test",
            "--age", "30",
            "--job", "admin.",
            "--marital", "married",
            "--education", "tertiary",
            "--default", "no",
            "--housing", "yes",
            "--loan", "no",
            "--contact", "cellular",
            "--month", "may",
            "--day-of-week", "mon",
            "--duration", "200",
            "--campaign", "1",
            "--pdays", "999",
            "--previous", "0",
            "--poutcome", "nonexistent",
            "--emp-var-rate", "1.1",
            "--cons-price-idx", "93.994",
            "--cons-conf-idx", "-36.4",
            "--euribor3m", "4.857",
            "--nr-employed", "5191.0",
        ])
        .unwrap();

        let record = cli.client.into_record();
        assert_eq!(record.education, Education::Tertiary);
        assert_eq!(record.default, YesNoUnknown::No);
        assert_eq!(record.month, Month::May);
        assert_eq!(record.poutcome, CampaignOutcome::Nonexistent);
        assert!((record.cons_conf_idx - -36.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        assert!(TestCli::try_parse_from(["test", "--age", "17"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--age", "101"]).is_err());
    }

    #[test]
    fn test_out_of_range_float_rejected() {
        assert!(TestCli::try_parse_from(["test", "--cons-price-idx", "89.9"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--emp-var-rate", "11.0"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--cons-conf-idx", "0.5"]).is_err());
    }

    #[test]
    fn test_unknown_enumeration_value_rejected() {
        assert!(TestCli::try_parse_from(["test", "--job", "astronaut"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--month", "januar"]).is_err());
    }

    #[test]
    fn test_dataset_spelling_accepted() {
        let cli = TestCli::try_parse_from(["test", "--job", "blue-collar"]).unwrap();
        assert_eq!(cli.client.job, Job::BlueCollar);
    }

    #[test]
    fn test_campaign_lower_bound() {
        assert!(TestCli::try_parse_from(["test", "--campaign", "0"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--campaign", "1"]).is_ok());
    }
}
