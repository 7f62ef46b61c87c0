use allegro_ledger::{config::Config, server};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = Config::from_env()?;
    config.ensure_dirs()?;
    info!(
        uploads = %config.uploads_dir.display(),
        reports = %config.reports_dir.display(),
        port = config.port,
        "startup"
    );

    server::serve(Arc::new(config)).await
}
