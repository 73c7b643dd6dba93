use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use braincache_core::services::users;
use braincache_models::{Plan, User};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub handle: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

// POST /api/users
pub async fn register_user(
    State(core): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = users::register(&core, &req.handle, &req.first_name, req.last_name).await?;
    Ok(Json(ApiResponse::ok(user)))
}

// GET /api/users/me
pub async fn get_me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<ApiResponse<User>> {
    Json(ApiResponse::ok(user))
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: Option<String>,
}

// PUT /api/users/me
pub async fn update_me(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = users::update_profile(&core, &user.id, &req.first_name, req.last_name).await?;
    Ok(Json(ApiResponse::ok(user)))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub email: String,
}

// GET /api/users/search?email=
pub async fn search_users(
    State(core): State<AppState>,
    Extension(_caller): Extension<CurrentUser>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let found = users::search(&core, &query.email).await?;
    Ok(Json(ApiResponse::ok(found)))
}

#[derive(Deserialize)]
pub struct SetPlanRequest {
    pub plan: Plan,
}

// PUT /api/users/{id}/plan
pub async fn set_plan(
    State(core): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<SetPlanRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = users::set_plan(&core, &caller, &id, req.plan).await?;
    Ok(Json(ApiResponse::ok(user)))
}
