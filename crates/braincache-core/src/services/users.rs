//! User account services.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::storage::now_ms;
use braincache_models::{Plan, Role, User};
use tracing::info;

const MIN_SEARCH_LEN: usize = 2;

/// Register a new account. Invoked by the auth collaborator after signup
/// or first OAuth login.
pub async fn register(
    core: &AppCore,
    handle: &str,
    first_name: &str,
    last_name: Option<String>,
) -> Result<User> {
    let handle = handle.trim();
    if handle.is_empty() || !handle.contains('@') {
        return Err(CoreError::Validation(
            "handle must be an email address".to_string(),
        ));
    }
    if first_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "first name must not be empty".to_string(),
        ));
    }
    if core.storage.users.find_by_handle(handle)?.is_some() {
        return Err(CoreError::Conflict(format!(
            "handle {handle} is already taken"
        )));
    }

    let now = now_ms();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        handle: handle.to_string(),
        first_name: first_name.trim().to_string(),
        last_name,
        plan: Plan::Free,
        role: Role::User,
        created_at: now,
        updated_at: now,
    };
    core.storage.users.put(&user)?;

    info!(user_id = %user.id, "registered user");
    Ok(user)
}

pub async fn get(core: &AppCore, user_id: &str) -> Result<User> {
    core.storage
        .users
        .get(user_id)?
        .ok_or(CoreError::NotFound("user"))
}

pub async fn update_profile(
    core: &AppCore,
    user_id: &str,
    first_name: &str,
    last_name: Option<String>,
) -> Result<User> {
    if first_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "first name must not be empty".to_string(),
        ));
    }

    let mut user = get(core, user_id).await?;
    user.first_name = first_name.trim().to_string();
    user.last_name = last_name;
    user.updated_at = now_ms();
    core.storage.users.put(&user)?;
    Ok(user)
}

/// Directory search used when picking a grantee.
pub async fn search(core: &AppCore, fragment: &str) -> Result<Vec<User>> {
    let fragment = fragment.trim();
    if fragment.len() < MIN_SEARCH_LEN {
        return Err(CoreError::Validation(format!(
            "search term must be at least {MIN_SEARCH_LEN} characters"
        )));
    }
    Ok(core.storage.users.search_by_handle(fragment)?)
}

/// Change a user's plan. Admin-only; the payment collaborator calls this
/// after a successful checkout.
pub async fn set_plan(core: &AppCore, caller: &User, user_id: &str, plan: Plan) -> Result<User> {
    if !caller.is_admin() {
        return Err(CoreError::Forbidden);
    }

    let mut user = get(core, user_id).await?;
    user.plan = plan;
    user.updated_at = now_ms();
    core.storage.users.put(&user)?;

    info!(user_id = %user.id, ?plan, "changed user plan");
    Ok(user)
}
