//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for validation and storage.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::debug;

use super::dto::{DataResponse, ExamResult, HealthResponse, MessageResponse, ResultFilter};
use super::error::AppError;
use super::state::AppState;
use crate::api::ResultId;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const RESULT_NOT_FOUND: &str = "Result not found";

/// Path ids that do not parse can never name a stored record.
fn parse_id(raw: &str) -> Result<ResultId, AppError> {
    ResultId::parse(raw).ok_or_else(|| AppError::NotFound(RESULT_NOT_FOUND.to_string()))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Liveness check; also reports whether the store answers.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let (status, message) = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => ("ok", "Student Result Management API is running".to_string()),
        Ok(false) => ("degraded", "Result store is unavailable".to_string()),
        Err(e) => ("degraded", format!("Result store error: {}", e.public_message())),
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        message,
        timestamp: chrono::Utc::now(),
    }))
}

// =============================================================================
// Result CRUD
// =============================================================================

/// GET /results?studentId=&subjectId=&examType=
///
/// List results, optionally filtered by equality on any of the query fields.
pub async fn list_results(
    State(state): State<AppState>,
    query: Result<Query<ResultFilter>, QueryRejection>,
) -> HandlerResult<DataResponse<Vec<ExamResult>>> {
    let Query(filter) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let page = db_services::list_results(state.repository.as_ref(), filter).await?;
    Ok(Json(DataResponse::list(page.items, page.total)))
}

/// GET /results/{id}
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<DataResponse<ExamResult>> {
    let id = parse_id(&id)?;
    let record = db_services::get_result(state.repository.as_ref(), id).await?;
    Ok(Json(DataResponse::new(record)))
}

/// POST /results
///
/// Create a result. `percentage` and `grade` are computed, never taken from the body.
pub async fn create_result(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<ExamResult>>), AppError> {
    let body = json_body(body)?;
    let record = db_services::create_result(state.repository.as_ref(), &state.rules, &body).await?;
    debug!(id = %record.id, "result created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(record))))
}

/// PUT /results/{id}
///
/// Apply a partial update; unsupplied fields keep their values.
pub async fn update_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<DataResponse<ExamResult>> {
    let id = parse_id(&id)?;
    let body = json_body(body)?;
    let record =
        db_services::update_result(state.repository.as_ref(), &state.rules, id, &body).await?;
    debug!(id = %record.id, "result updated");
    Ok(Json(DataResponse::new(record)))
}

/// DELETE /results/{id}
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<MessageResponse> {
    let id = parse_id(&id)?;
    db_services::delete_result(state.repository.as_ref(), id).await?;
    debug!(id = %id, "result deleted");
    Ok(Json(MessageResponse::new("Result deleted successfully")))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
