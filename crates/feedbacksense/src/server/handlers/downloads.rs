//! Report and dataset downloads

use std::sync::Arc;

use axum::{
  extract::{Extension, Path, State},
  http::{header, StatusCode},
  response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::server::handlers::{failure, ApiFailure};
use crate::server::middleware::RequestContext;
use crate::server::session::AnalysisSession;
use crate::server::state::AppState;

const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// GET /download-insights - Insights report of the latest analysis
pub async fn download_insights(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> Result<Response, ApiFailure> {
  match state.sessions.latest().await {
    Some(session) => Ok(insights_attachment(&session)),
    None => Err(failure(
      StatusCode::NOT_FOUND,
      "no_insights",
      "No insights available for download",
      context.request_id,
    )),
  }
}

/// GET /download-dataset - Analyzed dataset of the latest analysis
pub async fn download_dataset(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
) -> Result<Response, ApiFailure> {
  match state.sessions.latest().await {
    Some(session) => dataset_attachment(&session, context.request_id),
    None => Err(failure(StatusCode::NOT_FOUND, "no_dataset", "No dataset available for download", context.request_id)),
  }
}

/// GET /sessions/{id}/insights
pub async fn session_insights(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Path(id): Path<Uuid>,
) -> Result<Response, ApiFailure> {
  let session = find_session(&state, id, context.request_id).await?;
  Ok(insights_attachment(&session))
}

/// GET /sessions/{id}/dataset
pub async fn session_dataset(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  Path(id): Path<Uuid>,
) -> Result<Response, ApiFailure> {
  let session = find_session(&state, id, context.request_id).await?;
  dataset_attachment(&session, context.request_id)
}

async fn find_session(state: &AppState, id: Uuid, transaction_id: Uuid) -> Result<Arc<AnalysisSession>, ApiFailure> {
  state
    .sessions
    .get(&id)
    .await
    .ok_or_else(|| failure(StatusCode::NOT_FOUND, "session_not_found", &format!("No session {id}"), transaction_id))
}

fn insights_attachment(session: &AnalysisSession) -> Response {
  attachment(TEXT_CONTENT_TYPE, &session.run.report_filename(), session.run.render_report())
}

fn dataset_attachment(session: &AnalysisSession, transaction_id: Uuid) -> Result<Response, ApiFailure> {
  let body = session.run.dataset_csv().map_err(|e| {
    failure(StatusCode::INTERNAL_SERVER_ERROR, "export_failed", &format!("Export failed: {e}"), transaction_id)
  })?;
  Ok(attachment(CSV_CONTENT_TYPE, &session.run.dataset_filename(), body))
}

fn attachment(content_type: &str, filename: &str, body: String) -> Response {
  (
    [
      (header::CONTENT_TYPE, content_type.to_string()),
      (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
    ],
    body,
  )
    .into_response()
}
