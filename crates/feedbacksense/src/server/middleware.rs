//! Request context and middleware for the FeedbackSense REST API
//!
//! Every request gets a context with a generated id and its metadata,
//! injected into the request extensions for handlers to pick up.

use axum::{
  extract::Request,
  http::{HeaderMap, Method, Uri},
  middleware::Next,
  response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Request context containing request metadata
#[derive(Clone, Debug)]
pub struct RequestContext {
  /// Unique ID for this request, reused as the response transaction id
  pub request_id: Uuid,
  /// HTTP method
  pub method: Method,
  /// Request URI
  pub uri: Uri,
  /// Request headers
  pub headers: HeaderMap,
}

impl RequestContext {
  pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
    Self { request_id: Uuid::new_v4(), method, uri, headers }
  }

  fn user_agent(&self) -> &str {
    self.headers.get("user-agent").and_then(|v| v.to_str().ok()).unwrap_or("none")
  }

  /// Log request start
  pub fn log_request_start(&self) {
    info!(
      request_id = %self.request_id,
      method = %self.method,
      path = self.uri.path(),
      user_agent = self.user_agent(),
      "Request started"
    );
  }

  /// Log request completion with status
  pub fn log_request_complete(&self, status_code: u16, duration_ms: f64) {
    info!(
      request_id = %self.request_id,
      method = %self.method,
      path = self.uri.path(),
      status = status_code,
      duration_ms,
      "Request completed"
    );
  }
}

/// Middleware to inject RequestContext into all requests
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
  let context =
    RequestContext::new(request.method().clone(), request.uri().clone(), request.headers().clone());

  let start_time = Instant::now();
  context.log_request_start();

  request.extensions_mut().insert(context.clone());
  let response = next.run(request).await;

  let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
  context.log_request_complete(response.status().as_u16(), duration_ms);

  response
}
