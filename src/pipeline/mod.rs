// src/pipeline/mod.rs
pub mod join;
pub mod line_items;
pub mod orders;

use crate::error::LedgerError;
use crate::ingest;
use crate::report::{self, xlsx};
use chrono::Utc;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Summary of one ledger-generation run.
#[derive(Debug)]
pub struct LedgerSummary {
    /// File name of the workbook written under the reports directory.
    pub file_name: String,
    pub rows_written: usize,
    pub orders_excluded: usize,
}

/// Run the whole pipeline for one uploaded export: decode, classify,
/// project, join, assemble and write the workbook into `reports_dir`.
///
/// The caller owns the input file and deletes it after this returns.
#[instrument(level = "info", skip(input_path, reports_dir), fields(input = %input_path.display()))]
pub fn generate_ledger(input_path: &Path, reports_dir: &Path) -> Result<LedgerSummary, LedgerError> {
    let rows = ingest::decode_file(input_path)?;
    let orders = orders::eligible_orders(&rows)?;
    let items = line_items::project_line_items(&rows)?;
    info!(
        rows = rows.len(),
        orders = orders.len(),
        line_items = items.len(),
        "classified export"
    );

    let joined = join::join_orders(&orders, &items);
    if joined.excluded > 0 {
        warn!(
            excluded = joined.excluded,
            "orders dropped for non-positive or non-numeric totals"
        );
    }

    let table = report::assemble(&joined.rows)?;
    let file_name = format!("Ewidencja-{}.xlsx", Utc::now().timestamp_millis());
    xlsx::write_workbook(&table, &reports_dir.join(&file_name))?;
    info!(rows = table.rows.len(), file = %file_name, "ledger written");

    Ok(LedgerSummary {
        file_name,
        rows_written: table.rows.len(),
        orders_excluded: joined.excluded,
    })
}
