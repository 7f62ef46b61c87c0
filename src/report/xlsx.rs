// src/report/xlsx.rs
use crate::error::LedgerError;
use crate::report::ReportTable;
use rust_xlsxwriter::{Format, Formula, Workbook};
use std::fs;
use std::path::Path;
use tracing::debug;

const SHEET_NAME: &str = "Ewidencja";
const HEADERS: [&str; 7] = [
    "L.p.",
    "Data",
    "Imię i nazwisko",
    "Firma",
    "Podatek",
    "Nazwa",
    "Koszt całkowity",
];
// (column, width) pairs carried over from the legacy sheet layout.
const COLUMN_WIDTHS: [(u16, f64); 5] = [(1, 12.0), (2, 20.0), (3, 20.0), (5, 50.0), (6, 15.0)];

/// Write the assembled table to `path` as a one-sheet workbook.
///
/// The workbook is serialized to memory first and renamed into place, so an
/// aborted request never leaves a half-written artifact behind.
pub fn write_workbook(table: &ReportTable, path: &Path) -> Result<(), LedgerError> {
    let fmt_percent = Format::new().set_num_format("0%");
    let fmt_price = Format::new().set_num_format("0.00");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    worksheet.autofilter(0, 0, 0, (HEADERS.len() - 1) as u16)?;
    for (col, width) in COLUMN_WIDTHS {
        worksheet.set_column_width(col, width)?;
    }

    for (offset, row) in table.rows.iter().enumerate() {
        let sheet_row = (offset + 1) as u32;
        worksheet.write_number(sheet_row, 0, row.index as f64)?;
        worksheet.write_string(sheet_row, 1, &row.date)?;
        worksheet.write_string(sheet_row, 2, &row.name)?;
        worksheet.write_string(sheet_row, 3, &row.company)?;
        worksheet.write_number_with_format(sheet_row, 4, row.tax, &fmt_percent)?;
        worksheet.write_string(sheet_row, 5, &row.product_name)?;
        worksheet.write_number_with_format(sheet_row, 6, row.price, &fmt_price)?;
    }

    let total_row = (table.rows.len() + 1) as u32;
    worksheet.write_formula_with_format(
        total_row,
        6,
        Formula::new(table.total_formula.as_str()),
        &fmt_price,
    )?;

    let buffer = workbook.save_to_buffer()?;
    let tmp_path = path.with_extension("xlsx.tmp");
    fs::write(&tmp_path, &buffer)?;
    fs::rename(&tmp_path, path)?;
    debug!(bytes = buffer.len(), path = %path.display(), "workbook written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::join::{ReportRow, TAX_RATE};
    use crate::report::assemble;
    use anyhow::Result;

    #[test]
    fn writes_a_workbook_file_with_no_leftover_temp() -> Result<()> {
        let rows = vec![ReportRow {
            date: "2023-07-04T10:00:00Z".to_string(),
            name: "Jan Kowalski".to_string(),
            company: "Acme Sp. z o.o.".to_string(),
            tax: TAX_RATE,
            product_name: "Blue Mug, Red Mug".to_string(),
            price: 12.5,
        }];
        let table = assemble(&rows)?;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Ewidencja-1.xlsx");
        write_workbook(&table, &path)?;

        assert!(path.is_file());
        assert!(fs::metadata(&path)?.len() > 0);
        assert!(!path.with_extension("xlsx.tmp").exists());
        Ok(())
    }

    #[test]
    fn writes_an_empty_table_without_error() -> Result<()> {
        let table = assemble(&[])?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Ewidencja-empty.xlsx");
        write_workbook(&table, &path)?;
        assert!(path.is_file());
        Ok(())
    }
}
