// src/config.rs
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Where uploads land, where finished ledgers are published, and the port
/// the service listens on. Threaded explicitly into the server and the
/// workbook writer; there is no process-wide base path.
#[derive(Debug, Clone)]
pub struct Config {
    pub uploads_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment, falling back to the
    /// defaults used in development (`uploads/`, `excel/`, port 3000).
    pub fn from_env() -> Result<Self> {
        let uploads_dir = env::var("LEDGER_UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));
        let reports_dir = env::var("LEDGER_REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("excel"));
        let port = match env::var("LEDGER_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("LEDGER_PORT `{raw}` is not a valid port"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            uploads_dir,
            reports_dir,
            port,
        })
    }

    /// Create the upload and report directories if they do not exist yet.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.uploads_dir, &self.reports_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
        Ok(())
    }
}
