//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use predictor_lib::ClientRecord;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// One row of the entered-record display.
#[derive(Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl RecordRow {
    fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Render the record as a field/value table using the verbatim
/// training-schema column names.
pub fn record_table(record: &ClientRecord) -> String {
    let rows = vec![
        RecordRow::new("age", record.age),
        RecordRow::new("job", record.job),
        RecordRow::new("marital", record.marital),
        RecordRow::new("education", record.education),
        RecordRow::new("default", record.default),
        RecordRow::new("housing", record.housing),
        RecordRow::new("loan", record.loan),
        RecordRow::new("contact", record.contact),
        RecordRow::new("month", record.month),
        RecordRow::new("day_of_week", record.day_of_week),
        RecordRow::new("duration", record.duration),
        RecordRow::new("campaign", record.campaign),
        RecordRow::new("pdays", record.pdays),
        RecordRow::new("previous", record.previous),
        RecordRow::new("poutcome", record.poutcome),
        RecordRow::new("emp.var.rate", record.emp_var_rate),
        RecordRow::new("cons.price.idx", record.cons_price_idx),
        RecordRow::new("cons.conf.idx", record.cons_conf_idx),
        RecordRow::new("euribor3m", record.euribor3m),
        RecordRow::new("nr.employed", record.nr_employed),
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
