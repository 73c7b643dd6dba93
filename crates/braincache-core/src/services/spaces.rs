//! Space services.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::policy;
use crate::storage::now_ms;
use braincache_models::{ContentItem, Plan, ResourceKind, Space, User};
use tracing::info;

pub async fn create(
    core: &AppCore,
    owner: &User,
    name: &str,
    description: Option<String>,
) -> Result<Space> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "space name must not be empty".to_string(),
        ));
    }

    if owner.plan == Plan::Free {
        let owned = core.storage.spaces.count_by_owner(&owner.id)?;
        if owned >= core.config.free_space_limit {
            return Err(CoreError::Validation(format!(
                "free plan allows at most {} spaces",
                core.config.free_space_limit
            )));
        }
    }

    let now = now_ms();
    let space = Space {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.trim().to_string(),
        description,
        owner_id: owner.id.clone(),
        created_at: now,
        updated_at: now,
    };
    core.storage.spaces.put(&space)?;

    info!(space_id = %space.id, owner_id = %space.owner_id, "created space");
    Ok(space)
}

pub async fn get(core: &AppCore, caller_id: &str, space_id: &str) -> Result<Space> {
    policy::require_read(&core.storage, caller_id, ResourceKind::Space, space_id)?;
    core.storage
        .spaces
        .get(space_id)?
        .ok_or(CoreError::Forbidden)
}

/// Spaces the user owns. Spaces shared with them are listed through the
/// grants service instead.
pub async fn list_own(core: &AppCore, user_id: &str) -> Result<Vec<Space>> {
    Ok(core.storage.spaces.list_by_owner(user_id)?)
}

pub async fn update(
    core: &AppCore,
    caller_id: &str,
    space_id: &str,
    name: &str,
    description: Option<String>,
) -> Result<Space> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "space name must not be empty".to_string(),
        ));
    }

    policy::require_write(&core.storage, caller_id, ResourceKind::Space, space_id)?;

    let mut space = core
        .storage
        .spaces
        .get(space_id)?
        .ok_or(CoreError::Forbidden)?;
    space.name = name.trim().to_string();
    space.description = description;
    space.updated_at = now_ms();
    core.storage.spaces.put(&space)?;
    Ok(space)
}

/// Delete a space. Owner-only, never open to grantees.
///
/// Items filed in the space survive as unfiled; grants and comments on the
/// space are dropped. These are independent writes, not a transaction.
pub async fn delete(core: &AppCore, caller_id: &str, space_id: &str) -> Result<()> {
    policy::require_owner(&core.storage, caller_id, ResourceKind::Space, space_id)?;

    for mut item in core.storage.contents.list_by_space(space_id)? {
        item.space_id = None;
        item.updated_at = now_ms();
        core.storage.contents.put(&item)?;
    }
    core.storage
        .grants
        .remove_all_for_resource(ResourceKind::Space, space_id)?;
    core.storage.comments.remove_all_for_space(space_id)?;
    core.storage.spaces.delete(space_id)?;

    info!(space_id, "deleted space");
    Ok(())
}

/// Items inside a space, readable by anyone with read access to the space.
pub async fn list_contents(
    core: &AppCore,
    caller_id: &str,
    space_id: &str,
) -> Result<Vec<ContentItem>> {
    policy::require_read(&core.storage, caller_id, ResourceKind::Space, space_id)?;
    let space = core
        .storage
        .spaces
        .get(space_id)?
        .ok_or(CoreError::Forbidden)?;

    let mut items = core.storage.contents.list_by_space(space_id)?;
    // Grants are resource-scoped: never let a space grant expose an item
    // that somehow belongs to someone other than the space owner.
    items.retain(|item| item.owner_id == space.owner_id);
    Ok(items)
}
