// src/server.rs
use crate::config::Config;
use crate::pipeline;
use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Extension, Router,
};
use chrono::Utc;
use hyper::Server;
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::{error, info};

/// Multipart field that carries the export file.
const UPLOAD_FIELD: &str = "csv";

#[derive(Debug, Serialize)]
struct UploadResponse {
    message: &'static str,
    #[serde(rename = "fileName")]
    file_name: String,
}

fn reject(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn index() -> impl IntoResponse {
    Html(include_str!("../static/index.html"))
}

/// Receive the export, run the pipeline, publish the ledger.
///
/// The upload is stored under a per-request unique name and deleted once
/// the pipeline has consumed it, whether generation succeeded or not.
async fn upload(
    Extension(config): Extension<Arc<Config>>,
    mut multipart: Multipart,
) -> Response {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(UPLOAD_FIELD) => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                return reject(
                    StatusCode::BAD_REQUEST,
                    format!("missing `{UPLOAD_FIELD}` upload field"),
                )
            }
            Err(e) => return reject(StatusCode::BAD_REQUEST, e.to_string()),
        }
    };

    let content_type = field.content_type().unwrap_or_default().to_string();
    if !content_type.contains("csv") {
        return reject(
            StatusCode::BAD_REQUEST,
            "please upload only a csv file".to_string(),
        );
    }

    let original_name = field.file_name().unwrap_or("export.csv").to_string();
    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return reject(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let upload_path = config.uploads_dir.join(format!(
        "{UPLOAD_FIELD}-{}-{original_name}",
        Utc::now().timestamp_millis()
    ));
    if let Err(e) = tokio::fs::write(&upload_path, &bytes).await {
        error!("storing upload failed: {e}");
        return reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }

    let reports_dir = config.reports_dir.clone();
    let pipeline_input = upload_path.clone();
    let result =
        tokio::task::spawn_blocking(move || pipeline::generate_ledger(&pipeline_input, &reports_dir))
            .await;

    // the source file is consumed either way
    if let Err(e) = tokio::fs::remove_file(&upload_path).await {
        error!("deleting upload {} failed: {e}", upload_path.display());
    }

    match result {
        Ok(Ok(summary)) => {
            info!(file = %summary.file_name, rows = summary.rows_written, "upload processed");
            Json(UploadResponse {
                message: "Plik excel wygenerowany",
                file_name: summary.file_name,
            })
            .into_response()
        }
        Ok(Err(e)) => {
            error!("ledger generation failed: {e}");
            reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(e) => {
            error!("pipeline task failed: {e}");
            reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Build the router: upload page, upload endpoint, and static serving of
/// generated workbooks so the returned file name is directly downloadable.
pub fn create_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/upload", post(upload))
        .fallback_service(ServeDir::new(&config.reports_dir))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(Extension(config))
}

/// Start the HTTP server on the configured port.
pub async fn serve(config: Arc<Config>) -> anyhow::Result<()> {
    let app = create_router(config.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
