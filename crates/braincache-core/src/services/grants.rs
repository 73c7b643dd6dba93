//! Grant services: direct user-to-user sharing.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::policy;
use crate::storage::now_ms;
use braincache_models::{
    Grant, GrantWithGrantee, Permission, ResourceKind, SharedResource, User,
};
use tracing::{debug, info};

/// Create or refresh a grant. Re-granting an existing (resource, grantee)
/// pair overwrites the permission level; no history is kept.
pub async fn create(
    core: &AppCore,
    caller: &User,
    kind: ResourceKind,
    resource_id: &str,
    grantee_id: &str,
    permission: Permission,
) -> Result<Grant> {
    policy::require_owner(&core.storage, &caller.id, kind, resource_id)?;

    if grantee_id == caller.id {
        return Err(CoreError::Conflict(
            "cannot grant access to yourself".to_string(),
        ));
    }
    if core.storage.users.get(grantee_id)?.is_none() {
        return Err(CoreError::NotFound("user"));
    }

    let grant = Grant {
        resource_kind: kind,
        resource_id: resource_id.to_string(),
        grantee_id: grantee_id.to_string(),
        permission,
        granted_at: now_ms(),
    };
    core.storage.grants.upsert(&grant)?;

    info!(
        kind = %kind,
        resource_id,
        grantee_id,
        ?permission,
        "granted access"
    );
    Ok(grant)
}

/// Change the permission level of an existing grant.
pub async fn update_permission(
    core: &AppCore,
    caller: &User,
    kind: ResourceKind,
    resource_id: &str,
    grantee_id: &str,
    permission: Permission,
) -> Result<Grant> {
    policy::require_owner(&core.storage, &caller.id, kind, resource_id)?;

    let Some(mut grant) = core.storage.grants.get(kind, resource_id, grantee_id)? else {
        return Err(CoreError::NotFound("grant"));
    };
    grant.permission = permission;
    core.storage.grants.upsert(&grant)?;
    Ok(grant)
}

/// Revoke a grant. Idempotent: revoking a grant that does not exist is
/// not an error.
pub async fn revoke(
    core: &AppCore,
    caller: &User,
    kind: ResourceKind,
    resource_id: &str,
    grantee_id: &str,
) -> Result<()> {
    policy::require_owner(&core.storage, &caller.id, kind, resource_id)?;

    let removed = core.storage.grants.remove(kind, resource_id, grantee_id)?;
    if removed {
        info!(kind = %kind, resource_id, grantee_id, "revoked access");
    }
    Ok(())
}

/// Active grants on a resource with grantee display info, for the owner's
/// sharing panel.
pub async fn list_for_resource(
    core: &AppCore,
    caller: &User,
    kind: ResourceKind,
    resource_id: &str,
) -> Result<Vec<GrantWithGrantee>> {
    policy::require_owner(&core.storage, &caller.id, kind, resource_id)?;

    let mut grants = Vec::new();
    for grant in core.storage.grants.list_for_resource(kind, resource_id)? {
        let Some(grantee) = core.storage.users.get(&grant.grantee_id)? else {
            debug!(grantee_id = %grant.grantee_id, "skipping grant for missing user");
            continue;
        };
        grants.push(GrantWithGrantee {
            grantee_handle: grantee.handle.clone(),
            grantee_name: grantee.display_name(),
            grant,
        });
    }
    Ok(grants)
}

/// Resources shared with the caller through grants, with resolved
/// permission and owner display info.
pub async fn list_shared_with_me(
    core: &AppCore,
    user_id: &str,
    kind: ResourceKind,
) -> Result<Vec<SharedResource>> {
    let mut shared = Vec::new();
    for grant in core.storage.grants.list_for_grantee(user_id, kind)? {
        let resolved = match kind {
            ResourceKind::Space => core
                .storage
                .spaces
                .get(&grant.resource_id)?
                .map(|s| (s.name, s.owner_id)),
            ResourceKind::Content => core
                .storage
                .contents
                .get(&grant.resource_id)?
                .map(|c| (c.title, c.owner_id)),
        };
        let Some((name, owner_id)) = resolved else {
            debug!(resource_id = %grant.resource_id, "skipping grant on missing resource");
            continue;
        };
        let Some(owner) = core.storage.users.get(&owner_id)? else {
            debug!(owner_id = %owner_id, "skipping grant with missing owner");
            continue;
        };
        shared.push(SharedResource {
            resource_kind: kind,
            resource_id: grant.resource_id,
            name,
            permission: grant.permission,
            owner_id,
            owner_name: owner.display_name(),
        });
    }
    Ok(shared)
}
