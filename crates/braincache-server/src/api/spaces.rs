use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use braincache_core::services::spaces;
use braincache_models::{ContentItem, Space};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SpaceRequest {
    pub name: String,
    pub description: Option<String>,
}

// POST /api/spaces
pub async fn create_space(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<SpaceRequest>,
) -> Result<Json<ApiResponse<Space>>, ApiError> {
    let space = spaces::create(&core, &user, &req.name, req.description).await?;
    Ok(Json(ApiResponse::ok(space)))
}

// GET /api/spaces
pub async fn list_spaces(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<Space>>>, ApiError> {
    let owned = spaces::list_own(&core, &user.id).await?;
    Ok(Json(ApiResponse::ok(owned)))
}

// GET /api/spaces/{id}
pub async fn get_space(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Space>>, ApiError> {
    let space = spaces::get(&core, &user.id, &id).await?;
    Ok(Json(ApiResponse::ok(space)))
}

// PUT /api/spaces/{id}
pub async fn update_space(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<SpaceRequest>,
) -> Result<Json<ApiResponse<Space>>, ApiError> {
    let space = spaces::update(&core, &user.id, &id, &req.name, req.description).await?;
    Ok(Json(ApiResponse::ok(space)))
}

// DELETE /api/spaces/{id}
pub async fn delete_space(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    spaces::delete(&core, &user.id, &id).await?;
    Ok(Json(ApiResponse::message("space deleted")))
}

// GET /api/spaces/{id}/contents
pub async fn list_space_contents(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<ContentItem>>>, ApiError> {
    let items = spaces::list_contents(&core, &user.id, &id).await?;
    Ok(Json(ApiResponse::ok(items)))
}
