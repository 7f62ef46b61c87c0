// src/ingest/mod.rs
use crate::error::LedgerError;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// One decoded export line, keyed by the header row. Values are untyped
/// text; the pipeline stages decide what each row means.
pub type RawRow = HashMap<String, String>;

/// Decode a header-keyed delimited stream into raw rows, in source order.
///
/// The first line defines the field names and every subsequent line maps
/// positionally onto them. Any malformed line (bad quoting, field-count
/// mismatch) aborts the whole decode; a partial ledger is worse than none.
pub fn decode<R: Read>(reader: R) -> Result<Vec<RawRow>, LedgerError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: RawRow = result?;
        rows.push(row);
    }
    debug!(rows = rows.len(), "decoded export");
    Ok(rows)
}

/// Decode an export file from disk.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>, LedgerError> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_keys_every_record() -> Result<(), LedgerError> {
        let input = "Type,OrderId,BuyerName\norder,ORD-1,Jan Kowalski\nlineItem,ORD-1,\n";
        let rows = decode(input.as_bytes())?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Type").map(String::as_str), Some("order"));
        assert_eq!(rows[0].get("OrderId").map(String::as_str), Some("ORD-1"));
        assert_eq!(rows[1].get("BuyerName").map(String::as_str), Some(""));
        Ok(())
    }

    #[test]
    fn field_count_mismatch_aborts_the_decode() {
        let input = "Type,OrderId\norder,ORD-1,extra-field\n";
        let err = decode(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LedgerError::Csv(_)));
    }

    #[test]
    fn quoted_fields_keep_embedded_separators() -> Result<(), LedgerError> {
        let input = "Type,BuyerName\norder,\"Kowalski, Jan\"\n";
        let rows = decode(input.as_bytes())?;
        assert_eq!(
            rows[0].get("BuyerName").map(String::as_str),
            Some("Kowalski, Jan")
        );
        Ok(())
    }
}
