//! Permission resolution.
//!
//! One implementation of the precedence rule (owner > grant > none), used
//! by every protected operation instead of conditionals scattered through
//! route handlers. Grant records are strictly resource-scoped; the access
//! check for a content item falls back to the grant on its containing
//! space, but no grant row is ever implied or created by another.
//!
//! Missing resources resolve to no access. Callers see the same rejection
//! for "does not exist" and "exists but private", so probing a gated route
//! never reveals whether a resource exists.

use crate::error::{CoreError, Result};
use crate::storage::Storage;
use braincache_models::{ContentItem, EffectivePermission, ResourceKind};

/// Owner id of a resource, if the resource exists.
pub fn resource_owner(
    storage: &Storage,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<Option<String>> {
    let owner = match kind {
        ResourceKind::Space => storage.spaces.get(resource_id)?.map(|s| s.owner_id),
        ResourceKind::Content => storage.contents.get(resource_id)?.map(|c| c.owner_id),
    };
    Ok(owner)
}

pub fn is_owner(
    storage: &Storage,
    user_id: &str,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<bool> {
    Ok(resource_owner(storage, kind, resource_id)?.as_deref() == Some(user_id))
}

/// The core read behind every protected route: resolve what a user may do
/// with a resource. Ownership dominates; a grant a user somehow holds on
/// their own resource is ignored in favor of `Owner`.
pub fn effective_permission(
    storage: &Storage,
    user_id: &str,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<EffectivePermission> {
    match kind {
        ResourceKind::Space => {
            let Some(space) = storage.spaces.get(resource_id)? else {
                return Ok(EffectivePermission::None);
            };
            if space.owner_id == user_id {
                return Ok(EffectivePermission::Owner);
            }
            match storage.grants.get(kind, resource_id, user_id)? {
                Some(grant) => Ok(grant.permission.into()),
                None => Ok(EffectivePermission::None),
            }
        }
        ResourceKind::Content => {
            let Some(item) = storage.contents.get(resource_id)? else {
                return Ok(EffectivePermission::None);
            };
            content_permission(storage, user_id, &item)
        }
    }
}

/// Resolution for a content item already in hand: ownership, then a direct
/// content grant, then the grant on the containing space.
pub fn content_permission(
    storage: &Storage,
    user_id: &str,
    item: &ContentItem,
) -> Result<EffectivePermission> {
    if item.owner_id == user_id {
        return Ok(EffectivePermission::Owner);
    }
    if let Some(grant) = storage
        .grants
        .get(ResourceKind::Content, &item.id, user_id)?
    {
        return Ok(grant.permission.into());
    }
    if let Some(space_id) = &item.space_id
        && let Some(grant) = storage.grants.get(ResourceKind::Space, space_id, user_id)?
    {
        return Ok(grant.permission.into());
    }
    Ok(EffectivePermission::None)
}

/// Gate for read operations. Returns the resolved permission so callers
/// can reuse it without a second lookup.
pub fn require_read(
    storage: &Storage,
    user_id: &str,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<EffectivePermission> {
    let permission = effective_permission(storage, user_id, kind, resource_id)?;
    if permission.can_read() {
        Ok(permission)
    } else {
        Err(CoreError::Forbidden)
    }
}

/// Gate for write operations: `read` is not enough.
pub fn require_write(
    storage: &Storage,
    user_id: &str,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<EffectivePermission> {
    let permission = effective_permission(storage, user_id, kind, resource_id)?;
    if permission.can_write() {
        Ok(permission)
    } else {
        Err(CoreError::Forbidden)
    }
}

/// Gate for owner-only operations: grants never suffice.
pub fn require_owner(
    storage: &Storage,
    user_id: &str,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<()> {
    if is_owner(storage, user_id, kind, resource_id)? {
        Ok(())
    } else {
        Err(CoreError::Forbidden)
    }
}
