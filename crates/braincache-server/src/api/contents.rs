use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use braincache_core::services::content;
use braincache_models::{ContentItem, ContentType};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateContentRequest {
    pub title: String,
    pub target: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub space_id: Option<String>,
}

// POST /api/contents
pub async fn create_content(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateContentRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    let item = content::create(
        &core,
        &user,
        &req.title,
        &req.target,
        req.content_type,
        req.space_id,
    )
    .await?;
    Ok(Json(ApiResponse::ok(item)))
}

#[derive(Deserialize)]
pub struct ListContentsQuery {
    pub space_id: Option<String>,
}

// GET /api/contents
pub async fn list_contents(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(query): Query<ListContentsQuery>,
) -> Result<Json<ApiResponse<Vec<ContentItem>>>, ApiError> {
    let items = content::list_own(&core, &user.id, query.space_id.as_deref()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

// GET /api/contents/{id}
pub async fn get_content(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    let item = content::get(&core, &user.id, &id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

#[derive(Deserialize)]
pub struct UpdateContentRequest {
    pub title: String,
    pub target: String,
    pub space_id: Option<String>,
}

// PUT /api/contents/{id}
pub async fn update_content(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateContentRequest>,
) -> Result<Json<ApiResponse<ContentItem>>, ApiError> {
    let item = content::update(&core, &user.id, &id, &req.title, &req.target, req.space_id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

// DELETE /api/contents/{id}
pub async fn delete_content(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    content::delete(&core, &user.id, &id).await?;
    Ok(Json(ApiResponse::message("content deleted")))
}
