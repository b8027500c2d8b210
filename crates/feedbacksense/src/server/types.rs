//! REST API types with schemars annotations for schema generation

use chrono::{DateTime, Local};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sentiment::{Insight, SummaryStats};

use crate::analysis::AnalysisReport;
use crate::charts::ChartData;

// Base Response Structure
// ======================

/// Base response object for all JSON endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BaseResponse<T> {
  /// API versioning information
  pub versioning: VersionInfo,

  /// Transaction ID for logging correlation
  pub transaction_id: Uuid,

  /// Optional error information
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub errors: Vec<ApiError>,

  /// Response data (generic for different endpoint types)
  #[serde(flatten)]
  pub data: T,
}

/// API versioning information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionInfo {
  /// The latest version of the API
  pub latest: String,

  /// The version of the API requested by the client
  pub requested: String,

  /// The version of the API that was used in producing the response
  pub resolved: String,
}

/// API error information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
  /// Error key, unique to the error source
  pub key: String,

  /// Human readable error message
  pub message: String,

  /// Error stack trace (if available)
  #[serde(default)]
  pub stack: Vec<String>,

  /// Additional error context
  #[serde(default)]
  pub context: serde_json::Value,
}

// Status/Version Endpoints
// =======================

/// Response for /status endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  pub status: String,
  pub version: String,
  /// Analyses currently held in memory
  pub sessions: usize,
}

/// Response for /version endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  /// Current API version
  pub version: String,
}

/// Response for /api endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiInfoResponse {
  /// Latest API version
  pub latest: String,

  /// Version information
  pub versions: ApiVersions,
}

/// API version details
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiVersions {
  /// Latest version
  pub latest: String,

  /// Currently active versions
  pub active: Vec<String>,
}

// Analysis Endpoints
// ==================

/// Response for /analyze and /demo
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResponse {
  /// Key for the session endpoints
  pub session_id: Uuid,

  /// Column the feedback text was read from
  pub text_column: String,

  pub insights: Vec<Insight>,

  pub charts: ChartData,

  pub stats: SummaryStats,
}

impl AnalysisResponse {
  pub fn new(session_id: Uuid, report: AnalysisReport) -> Self {
    Self {
      session_id,
      text_column: report.text_column,
      insights: report.insights,
      charts: report.charts,
      stats: report.stats,
    }
  }
}

/// Response for /sessions/{id}
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SessionSummary {
  pub session_id: Uuid,

  /// Upload filename, or "demo"
  pub source: String,

  pub text_column: String,

  pub stats: SummaryStats,

  pub created_at: DateTime<Local>,
}

// Helper Functions
// ================

impl<T> BaseResponse<T> {
  /// Create a successful response
  pub fn success(data: T, transaction_id: Uuid) -> Self {
    Self { versioning: VersionInfo::current(), transaction_id, errors: Vec::new(), data }
  }

  /// Create an error response
  pub fn error(errors: Vec<ApiError>, transaction_id: Uuid) -> BaseResponse<()> {
    BaseResponse { versioning: VersionInfo::current(), transaction_id, errors, data: () }
  }
}

impl VersionInfo {
  fn current() -> Self {
    let version = env!("CARGO_PKG_VERSION");
    Self { latest: version.to_string(), requested: version.to_string(), resolved: version.to_string() }
  }
}

impl ApiError {
  /// Create a new API error
  pub fn new(key: &str, message: &str) -> Self {
    Self { key: key.to_string(), message: message.to_string(), stack: Vec::new(), context: serde_json::Value::Null }
  }
}
