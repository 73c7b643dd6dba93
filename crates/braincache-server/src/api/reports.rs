use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use braincache_core::services::reports;
use braincache_models::{Report, ReportStatus};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct FileReportRequest {
    pub reason: String,
}

// POST /api/contents/{id}/reports
pub async fn file_report(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(content_id): Path<String>,
    Json(req): Json<FileReportRequest>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    let report = reports::file(&core, &user, &content_id, &req.reason).await?;
    Ok(Json(ApiResponse::ok(report)))
}

// GET /api/reports
pub async fn list_reports(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<Report>>>, ApiError> {
    let visible = reports::list_visible(&core, &user).await?;
    Ok(Json(ApiResponse::ok(visible)))
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: ReportStatus,
}

// PUT /api/reports/{id}/status
pub async fn set_report_status(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<ApiResponse<Report>>, ApiError> {
    let report = reports::set_status(&core, &user, &id, req.status).await?;
    Ok(Json(ApiResponse::ok(report)))
}
