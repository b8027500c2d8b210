//! Analysis endpoint handlers

use axum::{
  extract::{Extension, Multipart, Path, State},
  http::StatusCode,
  response::Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use sentiment::{AnalysisError, TabularDataset};

use crate::analysis::{run_analysis, AnalysisRun};
use crate::demo::demo_dataset;
use crate::server::handlers::{failure, ApiFailure, ApiResult};
use crate::server::middleware::RequestContext;
use crate::server::state::AppState;
use crate::server::types::{AnalysisResponse, BaseResponse, SessionSummary};

/// Multipart field carrying the CSV upload
const FILE_FIELD: &str = "file";

/// POST /analyze - Analyze an uploaded CSV file
pub async fn analyze(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  mut multipart: Multipart,
) -> ApiResult<AnalysisResponse> {
  let transaction_id = context.request_id;
  let bad_request = |key: &str, message: &str| {
    warn!(request_id = %transaction_id, key, "Rejected upload: {message}");
    failure(StatusCode::BAD_REQUEST, key, message, transaction_id)
  };

  let mut upload = None;
  loop {
    let field = multipart
      .next_field()
      .await
      .map_err(|e| bad_request("invalid_multipart", &format!("Invalid upload: {e}")))?;
    let Some(field) = field else { break };

    if field.name() == Some(FILE_FIELD) {
      let filename = field.file_name().unwrap_or_default().to_string();
      let bytes =
        field.bytes().await.map_err(|e| bad_request("invalid_multipart", &format!("Invalid upload: {e}")))?;
      upload = Some((filename, bytes));
      break;
    }
  }

  let Some((filename, bytes)) = upload else {
    return Err(bad_request("no_file", "No file uploaded"));
  };
  if filename.is_empty() {
    return Err(bad_request("no_file_selected", "No file selected"));
  }
  if !filename.to_lowercase().ends_with(".csv") {
    return Err(bad_request("not_csv", "Please upload a CSV file"));
  }

  info!(request_id = %transaction_id, filename = %filename, bytes = bytes.len(), "Received upload");

  let run = analyze_blocking(&state, transaction_id, move || TabularDataset::from_csv_reader(&bytes[..])).await?;
  let session = state.sessions.insert(filename, run).await;

  Ok(Json(BaseResponse::success(AnalysisResponse::new(session.id, session.run.report.clone()), transaction_id)))
}

/// GET /demo - Analyze the bundled workshop dataset
pub async fn demo(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> ApiResult<AnalysisResponse> {
  let transaction_id = context.request_id;

  let run = analyze_blocking(&state, transaction_id, demo_dataset).await?;
  let session = state.sessions.insert("demo", run).await;

  Ok(Json(BaseResponse::success(AnalysisResponse::new(session.id, session.run.report.clone()), transaction_id)))
}

/// GET /sessions/{id} - Summary of a stored analysis
pub async fn session(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Path(id): Path<Uuid>,
) -> ApiResult<SessionSummary> {
  match state.sessions.get(&id).await {
    Some(session) => Ok(Json(BaseResponse::success(session.summary(), context.request_id))),
    None => Err(failure(StatusCode::NOT_FOUND, "session_not_found", &format!("No session {id}"), context.request_id)),
  }
}

/// Load and analyze off the async runtime
async fn analyze_blocking<F>(state: &AppState, transaction_id: Uuid, load: F) -> Result<AnalysisRun, ApiFailure>
where
  F: FnOnce() -> sentiment::Result<TabularDataset> + Send + 'static,
{
  let analyzer = state.analyzer.clone();
  let config = state.config.clone();

  let result = tokio::task::spawn_blocking(move || {
    let dataset = load()?;
    run_analysis(&analyzer, &dataset, &config.charts)
  })
  .await
  .map_err(|e| {
    failure(StatusCode::INTERNAL_SERVER_ERROR, "analysis_failed", &format!("Analysis failed: {e}"), transaction_id)
  })?;

  result.map_err(|e| analysis_failure(&e, transaction_id))
}

fn analysis_failure(error: &AnalysisError, transaction_id: Uuid) -> ApiFailure {
  warn!(request_id = %transaction_id, key = error.key(), "Analysis failed: {error}");

  match error {
    AnalysisError::EmptyDataset => failure(StatusCode::BAD_REQUEST, error.key(), "Empty dataset", transaction_id),
    AnalysisError::MalformedRow { .. } | AnalysisError::Csv(_) => failure(
      StatusCode::BAD_REQUEST,
      error.key(),
      &format!("Analysis failed: {error}"),
      transaction_id,
    ),
    _ => failure(
      StatusCode::INTERNAL_SERVER_ERROR,
      error.key(),
      &format!("Analysis failed: {error}"),
      transaction_id,
    ),
  }
}
