//! Turns a marketplace order export (CSV, orders and line items
//! interleaved in one row stream) into an accounting ledger workbook:
//! decode, classify, project, join, assemble, serialize.

pub mod config;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod server;
