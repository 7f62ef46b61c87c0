// src/report/mod.rs
pub mod xlsx;

use crate::error::LedgerError;
use crate::pipeline::join::ReportRow;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{4}-\d{1,2}-\d{1,2}").expect("date pattern should be a valid regex")
});

/// One positioned data row of the ledger sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based running number (the `L.p.` column).
    pub index: usize,
    pub date: String,
    pub name: String,
    pub company: String,
    pub tax: f64,
    pub product_name: String,
    pub price: f64,
}

/// The assembled sheet: data rows plus the trailing total-formula cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub rows: Vec<TableRow>,
    /// Sum formula over the price column, recomputed by the spreadsheet
    /// consumer rather than precomputed here.
    pub total_formula: String,
}

/// Pull the first `YYYY-M-D` shaped substring out of a date field.
pub fn extract_date(raw: &str) -> Result<&str, LedgerError> {
    DATE_RE
        .find(raw)
        .map(|m| m.as_str())
        .ok_or_else(|| LedgerError::DateNotMatched(raw.to_string()))
}

/// Lay the joined rows out as sheet rows and derive the total formula.
///
/// The sheet has its header at row 1 and data at rows 2..=N+1, so the
/// formula spans exactly the data rows written: `=SUM(G2:G{N+1})`.
pub fn assemble(rows: &[ReportRow]) -> Result<ReportTable, LedgerError> {
    let mut table_rows = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        table_rows.push(TableRow {
            index: idx + 1,
            date: extract_date(&row.date)?.to_string(),
            name: row.name.clone(),
            company: row.company.clone(),
            tax: row.tax,
            product_name: row.product_name.clone(),
            price: row.price,
        });
    }

    Ok(ReportTable {
        total_formula: format!("=SUM(G2:G{})", rows.len() + 1),
        rows: table_rows,
    })
}
