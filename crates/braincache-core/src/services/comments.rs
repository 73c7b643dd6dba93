//! Comment services.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::policy;
use crate::storage::now_ms;
use braincache_models::{Comment, ResourceKind, User};

pub async fn add(
    core: &AppCore,
    author: &User,
    space_id: &str,
    body: &str,
) -> Result<Comment> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "comment body must not be empty".to_string(),
        ));
    }
    // Commenting needs at least read access to the space
    policy::require_read(&core.storage, &author.id, ResourceKind::Space, space_id)?;

    let now = now_ms();
    let comment = Comment {
        id: uuid::Uuid::new_v4().to_string(),
        space_id: space_id.to_string(),
        author_id: author.id.clone(),
        body: body.trim().to_string(),
        edited: false,
        created_at: now,
        updated_at: now,
    };
    core.storage.comments.put(&comment)?;
    Ok(comment)
}

/// Edit a comment. Author-only, even against the space owner.
pub async fn edit(
    core: &AppCore,
    caller_id: &str,
    comment_id: &str,
    body: &str,
) -> Result<Comment> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "comment body must not be empty".to_string(),
        ));
    }

    let Some(mut comment) = core.storage.comments.get(comment_id)? else {
        return Err(CoreError::NotFound("comment"));
    };
    if comment.author_id != caller_id {
        return Err(CoreError::Forbidden);
    }

    comment.body = body.trim().to_string();
    comment.edited = true;
    comment.updated_at = now_ms();
    core.storage.comments.put(&comment)?;
    Ok(comment)
}

/// Delete a comment. Allowed for the author and for the space owner.
pub async fn delete(core: &AppCore, caller_id: &str, comment_id: &str) -> Result<()> {
    let Some(comment) = core.storage.comments.get(comment_id)? else {
        return Err(CoreError::NotFound("comment"));
    };

    let space_owner = core
        .storage
        .spaces
        .get(&comment.space_id)?
        .map(|space| space.owner_id);
    let allowed =
        comment.author_id == caller_id || space_owner.as_deref() == Some(caller_id);
    if !allowed {
        return Err(CoreError::Forbidden);
    }

    core.storage.comments.delete(comment_id)?;
    Ok(())
}

pub async fn list(core: &AppCore, caller_id: &str, space_id: &str) -> Result<Vec<Comment>> {
    policy::require_read(&core.storage, caller_id, ResourceKind::Space, space_id)?;
    Ok(core.storage.comments.list_by_space(space_id)?)
}
