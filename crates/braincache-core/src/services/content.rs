//! Content item services.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::policy;
use crate::storage::now_ms;
use braincache_models::{ContentItem, ContentType, ResourceKind, ShareScope, User};
use tracing::info;

/// Check that a space id names a space the item's owner owns. Items are
/// never filed into someone else's space.
fn check_space_assignment(core: &AppCore, owner_id: &str, space_id: &str) -> Result<()> {
    let Some(space) = core.storage.spaces.get(space_id)? else {
        return Err(CoreError::Validation("space does not exist".to_string()));
    };
    if space.owner_id != owner_id {
        return Err(CoreError::Validation(
            "content can only be filed into a space its owner owns".to_string(),
        ));
    }
    Ok(())
}

pub async fn create(
    core: &AppCore,
    owner: &User,
    title: &str,
    target: &str,
    content_type: ContentType,
    space_id: Option<String>,
) -> Result<ContentItem> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if target.trim().is_empty() {
        return Err(CoreError::Validation(
            "target must not be empty".to_string(),
        ));
    }
    if let Some(space_id) = &space_id {
        check_space_assignment(core, &owner.id, space_id)?;
    }

    let now = now_ms();
    let item = ContentItem {
        id: uuid::Uuid::new_v4().to_string(),
        title: title.trim().to_string(),
        target: target.to_string(),
        content_type,
        owner_id: owner.id.clone(),
        space_id,
        created_at: now,
        updated_at: now,
    };
    core.storage.contents.put(&item)?;

    info!(content_id = %item.id, owner_id = %item.owner_id, "created content item");
    Ok(item)
}

pub async fn get(core: &AppCore, caller_id: &str, content_id: &str) -> Result<ContentItem> {
    let Some(item) = core.storage.contents.get(content_id)? else {
        return Err(CoreError::Forbidden);
    };
    if !policy::content_permission(&core.storage, caller_id, &item)?.can_read() {
        return Err(CoreError::Forbidden);
    }
    Ok(item)
}

/// The caller's own items, optionally narrowed to one space.
pub async fn list_own(
    core: &AppCore,
    owner_id: &str,
    space_id: Option<&str>,
) -> Result<Vec<ContentItem>> {
    let mut items = core.storage.contents.list_by_owner(owner_id)?;
    if let Some(space_id) = space_id {
        items.retain(|item| item.space_id.as_deref() == Some(space_id));
    }
    Ok(items)
}

pub async fn update(
    core: &AppCore,
    caller_id: &str,
    content_id: &str,
    title: &str,
    target: &str,
    space_id: Option<String>,
) -> Result<ContentItem> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if target.trim().is_empty() {
        return Err(CoreError::Validation(
            "target must not be empty".to_string(),
        ));
    }

    let Some(mut item) = core.storage.contents.get(content_id)? else {
        return Err(CoreError::Forbidden);
    };
    if !policy::content_permission(&core.storage, caller_id, &item)?.can_write() {
        return Err(CoreError::Forbidden);
    }
    // Refiling is validated against the item's owner, not the caller: a
    // read-write grantee may move an item only between the owner's spaces.
    if let Some(space_id) = &space_id
        && item.space_id.as_deref() != Some(space_id)
    {
        check_space_assignment(core, &item.owner_id, space_id)?;
    }

    item.title = title.trim().to_string();
    item.target = target.to_string();
    item.space_id = space_id;
    item.updated_at = now_ms();
    core.storage.contents.put(&item)?;
    Ok(item)
}

/// Delete an item. Allowed for the owner and read-write grantees.
///
/// Grants on the item and its single-item share link are dropped with it.
pub async fn delete(core: &AppCore, caller_id: &str, content_id: &str) -> Result<()> {
    let Some(item) = core.storage.contents.get(content_id)? else {
        return Err(CoreError::Forbidden);
    };
    if !policy::content_permission(&core.storage, caller_id, &item)?.can_write() {
        return Err(CoreError::Forbidden);
    }

    core.storage
        .grants
        .remove_all_for_resource(ResourceKind::Content, content_id)?;
    core.storage.share_links.remove_scope(
        &item.owner_id,
        &ShareScope::Content {
            content_id: content_id.to_string(),
        },
    )?;
    core.storage.contents.delete(content_id)?;

    info!(content_id, "deleted content item");
    Ok(())
}
