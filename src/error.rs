use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum DashboardError {
    #[error("CSV error: {0}")]
    #[diagnostic(code(orderlens::csv))]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(orderlens::io))]
    IoError(#[from] std::io::Error),

    #[error("Schema violation: missing required column `{column}`")]
    #[diagnostic(
        code(orderlens::schema),
        help("the input header must contain every order column the engine aggregates over")
    )]
    SchemaViolation { column: String },

    #[error("Data integrity error at line {line}: column `{column}` {reason}")]
    #[diagnostic(code(orderlens::data_integrity))]
    DataIntegrity {
        line: u64,
        column: &'static str,
        reason: String,
    },

    #[error("Invalid timestamp `{value}` at line {line}")]
    #[diagnostic(
        code(orderlens::timestamp),
        help("expected `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`")
    )]
    InvalidTimestamp { line: u64, value: String },

    #[error("Cannot compute RFM on an empty order table")]
    #[diagnostic(
        code(orderlens::empty_dataset),
        help("recency is relative to the latest purchase, which an empty selection does not have")
    )]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, DashboardError>;
