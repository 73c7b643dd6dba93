use crate::api::{ApiError, ApiResponse, AppState};
use crate::auth::CurrentUser;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use braincache_core::services::share_links;
use braincache_models::{ResolvedShare, ShareLink, ShareScope};

// POST /api/share/brain/enable
pub async fn enable_brain_share(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<ShareLink>>, ApiError> {
    let link = share_links::enable(&core, &user, ShareScope::Brain).await?;
    Ok(Json(ApiResponse::ok(link)))
}

// POST /api/share/brain/disable
pub async fn disable_brain_share(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    share_links::disable(&core, &user, ShareScope::Brain).await?;
    Ok(Json(ApiResponse::message("sharing disabled")))
}

// POST /api/share/contents/{id}/enable
pub async fn enable_content_share(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ShareLink>>, ApiError> {
    let scope = ShareScope::Content { content_id: id };
    let link = share_links::enable(&core, &user, scope).await?;
    Ok(Json(ApiResponse::ok(link)))
}

// POST /api/share/contents/{id}/disable
pub async fn disable_content_share(
    State(core): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let scope = ShareScope::Content { content_id: id };
    share_links::disable(&core, &user, scope).await?;
    Ok(Json(ApiResponse::message("sharing disabled")))
}

// GET /api/share/{token} - anonymous, always read-only
pub async fn resolve_share_link(
    State(core): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<ResolvedShare>>, ApiError> {
    let resolved = share_links::resolve(&core, &token).await?;
    Ok(Json(ApiResponse::ok(resolved)))
}
