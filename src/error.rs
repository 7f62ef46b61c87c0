// src/error.rs
use thiserror::Error;

/// Errors that abort a ledger-generation request.
///
/// Orders with non-positive or non-numeric totals are not errors; they are
/// excluded by the join stage and counted there.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The input is missing a column the pipeline reads.
    #[error("input is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// An order date field contains no `YYYY-M-D` shaped substring.
    #[error("no date found in order date field `{0}`")]
    DateNotMatched(String),

    #[error("csv decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
