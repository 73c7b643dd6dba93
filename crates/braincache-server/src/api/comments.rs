use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use braincache_core::services::comments;
use braincache_models::Comment;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CommentRequest {
    pub body: String,
}

// POST /api/spaces/{id}/comments
pub async fn add_comment(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(space_id): Path<String>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let comment = comments::add(&core, &user, &space_id, &req.body).await?;
    Ok(Json(ApiResponse::ok(comment)))
}

// GET /api/spaces/{id}/comments
pub async fn list_comments(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(space_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Comment>>>, ApiError> {
    let listed = comments::list(&core, &user.id, &space_id).await?;
    Ok(Json(ApiResponse::ok(listed)))
}

// PUT /api/comments/{id}
pub async fn edit_comment(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    let comment = comments::edit(&core, &user.id, &id, &req.body).await?;
    Ok(Json(ApiResponse::ok(comment)))
}

// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    comments::delete(&core, &user.id, &id).await?;
    Ok(Json(ApiResponse::message("comment deleted")))
}
