use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use braincache_core::CoreError;
use braincache_core::services::grants;
use braincache_models::{Grant, GrantWithGrantee, Permission, ResourceKind, SharedResource};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GrantRequest {
    pub resource_kind: String,
    pub resource_id: String,
    pub grantee_id: String,
    pub permission: String,
}

#[derive(Deserialize)]
pub struct RevokeRequest {
    pub resource_kind: String,
    pub resource_id: String,
    pub grantee_id: String,
}

fn parse_kind(value: &str) -> Result<ResourceKind, ApiError> {
    Ok(value
        .parse::<ResourceKind>()
        .map_err(CoreError::Validation)?)
}

fn parse_permission(value: &str) -> Result<Permission, ApiError> {
    Ok(value.parse::<Permission>().map_err(CoreError::Validation)?)
}

// POST /api/grants
pub async fn create_grant(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<GrantRequest>,
) -> Result<Json<ApiResponse<Grant>>, ApiError> {
    let kind = parse_kind(&req.resource_kind)?;
    let permission = parse_permission(&req.permission)?;
    let grant = grants::create(
        &core,
        &user,
        kind,
        &req.resource_id,
        &req.grantee_id,
        permission,
    )
    .await?;
    Ok(Json(ApiResponse::ok(grant)))
}

// PUT /api/grants
pub async fn update_grant(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<GrantRequest>,
) -> Result<Json<ApiResponse<Grant>>, ApiError> {
    let kind = parse_kind(&req.resource_kind)?;
    let permission = parse_permission(&req.permission)?;
    let grant = grants::update_permission(
        &core,
        &user,
        kind,
        &req.resource_id,
        &req.grantee_id,
        permission,
    )
    .await?;
    Ok(Json(ApiResponse::ok(grant)))
}

// DELETE /api/grants
pub async fn revoke_grant(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<RevokeRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let kind = parse_kind(&req.resource_kind)?;
    grants::revoke(&core, &user, kind, &req.resource_id, &req.grantee_id).await?;
    Ok(Json(ApiResponse::message("grant revoked")))
}

// GET /api/grants/resource/{kind}/{id}
pub async fn list_resource_grants(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<GrantWithGrantee>>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let listed = grants::list_for_resource(&core, &user, kind, &id).await?;
    Ok(Json(ApiResponse::ok(listed)))
}

// GET /api/grants/shared-with-me/{kind}
pub async fn list_shared_with_me(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(kind): Path<String>,
) -> Result<Json<ApiResponse<Vec<SharedResource>>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let shared = grants::list_shared_with_me(&core, &user.id, kind).await?;
    Ok(Json(ApiResponse::ok(shared)))
}
