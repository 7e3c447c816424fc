//! Term Deposit Predictor CLI
//!
//! Collects one client's attributes as typed, range-validated arguments,
//! scores them against the pre-trained classifier artifact, and prints the
//! predicted label with its probability.

mod form;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use output::OutputFormat;
use predictor_lib::{
    format_result, ClientRecord, Classifier, Label, OnnxClassifier, PredictionResult,
    DEFAULT_MODEL_PATH,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

const TITLE: &str = "Term Deposit Subscription Predictor";
const DESCRIPTION: &str =
    "Predicts whether a client will accept a term deposit offer, based on \
     personal attributes and campaign history.";

/// Term Deposit Predictor CLI
#[derive(Parser)]
#[command(name = "bmp")]
#[command(author, version, about = "CLI for the term deposit subscription predictor", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one client record against the loaded model
    Predict {
        /// Path to the model artifact
        #[arg(long, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,

        #[command(flatten)]
        client: form::ClientArgs,
    },

    /// List the input fields with their domains and defaults
    Fields,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Predict { model, client } => predict(&model, client, cli.format),
        Commands::Fields => fields(cli.format),
    }
}

fn predict(model_path: &std::path::Path, client: form::ClientArgs, format: OutputFormat) -> ExitCode {
    if matches!(format, OutputFormat::Table) {
        println!("{}", TITLE.bold());
        println!("{DESCRIPTION}\n");
    }

    let record = client.into_record();
    tracing::debug!(?record, "Collected client record");
    if matches!(format, OutputFormat::Table) {
        println!("{}", output::record_table(&record));
    }

    // Load the artifact exactly once; nothing is predicted against an
    // unloaded model.
    let classifier = match OnnxClassifier::load(model_path) {
        Ok(classifier) => {
            // In JSON mode stdout carries nothing but the payload.
            if matches!(format, OutputFormat::Table) {
                output::print_success(&format!(
                    "Model artifact loaded from {}",
                    classifier.artifact_path().display()
                ));
            }
            classifier
        }
        Err(err) => {
            output::print_error(&format!("{:#}", anyhow::Error::from(err)));
            return ExitCode::FAILURE;
        }
    };

    let result = match classifier.predict(&record) {
        Ok(result) => result,
        Err(err) => {
            // Non-fatal: the command can simply be re-run.
            output::print_error(&format!("{:#}", anyhow::Error::from(err)));
            return ExitCode::FAILURE;
        }
    };

    match format {
        OutputFormat::Table => match result.label {
            Label::Accept => output::print_success(&format_result(&result)),
            Label::Decline => output::print_warning(&format_result(&result)),
        },
        OutputFormat::Json => match predict_payload(&record, &result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                output::print_error(&format!("failed to render result as JSON: {err}"));
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// The complete stdout payload for `predict --format json`.
fn predict_payload(record: &ClientRecord, result: &PredictionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "record": record,
        "result": result,
        "message": format_result(result),
    }))
}

/// One row of the `fields` listing.
#[derive(Tabled, serde::Serialize)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Default")]
    default: String,
}

fn fields(format: OutputFormat) -> ExitCode {
    use predictor_lib::schema::{
        bounds, CampaignOutcome, Contact, Education, Job, Marital, Month, Weekday, YesNoUnknown,
    };

    fn choices<T: Copy + std::fmt::Display + Default>(all: &[T]) -> (String, String) {
        let domain = all
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        (domain, T::default().to_string())
    }

    fn numeric<T: std::fmt::Display + Copy>(
        b: predictor_lib::schema::FieldBounds<T>,
    ) -> (String, String) {
        (format!("{}..={}", b.min, b.max), b.default.to_string())
    }

    let specs: [(&'static str, &'static str, (String, String)); 20] = [
        ("age", "integer", numeric(bounds::AGE)),
        ("job", "choice", choices(Job::ALL)),
        ("marital", "choice", choices(Marital::ALL)),
        ("education", "choice", choices(Education::ALL)),
        ("default", "choice", choices(YesNoUnknown::ALL)),
        ("housing", "choice", choices(YesNoUnknown::ALL)),
        ("loan", "choice", choices(YesNoUnknown::ALL)),
        ("contact", "choice", choices(Contact::ALL)),
        ("month", "choice", choices(Month::ALL)),
        ("day_of_week", "choice", choices(Weekday::ALL)),
        ("duration", "integer", numeric(bounds::DURATION)),
        ("campaign", "integer", numeric(bounds::CAMPAIGN)),
        ("pdays", "integer", numeric(bounds::PDAYS)),
        ("previous", "integer", numeric(bounds::PREVIOUS)),
        ("poutcome", "choice", choices(CampaignOutcome::ALL)),
        ("emp.var.rate", "float", numeric(bounds::EMP_VAR_RATE)),
        ("cons.price.idx", "float", numeric(bounds::CONS_PRICE_IDX)),
        ("cons.conf.idx", "float", numeric(bounds::CONS_CONF_IDX)),
        ("euribor3m", "float", numeric(bounds::EURIBOR3M)),
        ("nr.employed", "float", numeric(bounds::NR_EMPLOYED)),
    ];

    let rows: Vec<FieldRow> = specs
        .into_iter()
        .map(|(field, kind, (domain, default))| FieldRow {
            field,
            kind,
            domain,
            default,
        })
        .collect();

    match format {
        OutputFormat::Table => {
            println!("{}", Table::new(&rows).with(Style::rounded()));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                output::print_error(&format!("failed to render fields as JSON: {err}"));
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
