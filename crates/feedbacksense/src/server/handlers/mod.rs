//! Endpoint handlers

pub mod analysis;
pub mod downloads;
pub mod status;

use axum::{http::StatusCode, response::Json};
use uuid::Uuid;

use crate::server::types::{ApiError, BaseResponse};

/// Error half of every handler result
pub type ApiFailure = (StatusCode, Json<BaseResponse<()>>);

pub type ApiResult<T> = Result<Json<BaseResponse<T>>, ApiFailure>;

pub(crate) fn failure(status: StatusCode, key: &str, message: &str, transaction_id: Uuid) -> ApiFailure {
  (status, Json(BaseResponse::<()>::error(vec![ApiError::new(key, message)], transaction_id)))
}
