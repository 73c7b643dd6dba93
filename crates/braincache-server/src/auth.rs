//! Identity middleware.
//!
//! The fronting auth collaborator authenticates every request and forwards
//! the caller's user id in the identity header. This service trusts that
//! identity unconditionally and only resolves it to a full user record;
//! it performs no token validation of its own.

use crate::api::{ApiError, AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use braincache_models::User;

pub const USER_HEADER: &str = "x-braincache-user";

/// The resolved caller, available to protected handlers as an extension.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub async fn identity_middleware(
    State(core): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(user_id) = req
        .headers()
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
    else {
        return Err(ApiError::unauthorized("missing identity header"));
    };

    let user: Option<User> = core.storage.users.get(&user_id)?;
    let Some(user) = user else {
        return Err(ApiError::unauthorized("unknown user"));
    };

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}
