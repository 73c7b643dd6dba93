//! Share link services: anonymous, read-only, token-based access.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::policy;
use crate::storage::now_ms;
use braincache_models::{ResolvedShare, ResourceKind, ShareLink, ShareScope, User};
use tracing::info;

const TOKEN_PREFIX: &str = "bcl_";

/// Mint an opaque share token: 32 hex characters behind a fixed prefix.
fn mint_token() -> String {
    format!("{TOKEN_PREFIX}{}", uuid::Uuid::new_v4().simple())
}

/// Turn sharing on for a scope. Idempotent: while a link is active,
/// enabling again returns the same token.
pub async fn enable(core: &AppCore, owner: &User, scope: ShareScope) -> Result<ShareLink> {
    if let ShareScope::Content { content_id } = &scope {
        policy::require_owner(&core.storage, &owner.id, ResourceKind::Content, content_id)?;
    }

    if let Some(existing) = core.storage.share_links.get_for_scope(&owner.id, &scope)? {
        return Ok(existing);
    }

    let link = ShareLink {
        token: mint_token(),
        owner_id: owner.id.clone(),
        scope,
        created_at: now_ms(),
    };
    core.storage.share_links.put(&link)?;

    info!(owner_id = %link.owner_id, "enabled share link");
    Ok(link)
}

/// Turn sharing off for a scope. The active token stops resolving
/// permanently; re-enabling later mints a brand-new one. No-op when
/// nothing was enabled.
pub async fn disable(core: &AppCore, owner: &User, scope: ShareScope) -> Result<()> {
    if let ShareScope::Content { content_id } = &scope {
        policy::require_owner(&core.storage, &owner.id, ResourceKind::Content, content_id)?;
    }

    let removed = core.storage.share_links.remove_scope(&owner.id, &scope)?;
    if removed {
        info!(owner_id = %owner.id, "disabled share link");
    }
    Ok(())
}

/// Anonymous resolution. Always read-only: whatever grants the requester
/// may hold are discovered separately and never widen this path.
pub async fn resolve(core: &AppCore, token: &str) -> Result<ResolvedShare> {
    let Some(link) = core.storage.share_links.resolve_token(token)? else {
        return Err(CoreError::NotFound("share link"));
    };
    let Some(owner) = core.storage.users.get(&link.owner_id)? else {
        return Err(CoreError::NotFound("share link"));
    };

    let (items, is_single_item) = match &link.scope {
        ShareScope::Brain => (core.storage.contents.list_by_owner(&owner.id)?, false),
        ShareScope::Content { content_id } => {
            let Some(item) = core.storage.contents.get(content_id)? else {
                // Never serve partial data for a link whose item is gone
                return Err(CoreError::NotFound("share link"));
            };
            (vec![item], true)
        }
    };

    Ok(ResolvedShare {
        owner_id: owner.id.clone(),
        owner_name: owner.display_name(),
        is_single_item,
        items,
    })
}
