//! Typed comment storage wrapper.

use anyhow::Result;
use braincache_models::Comment;
use braincache_storage::CommentStorage as RawStorage;

#[derive(Clone)]
pub struct CommentStorage {
    inner: RawStorage,
}

impl CommentStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Create or update a comment record.
    pub fn put(&self, comment: &Comment) -> Result<()> {
        let data = serde_json::to_vec(comment)?;
        self.inner.put_raw(&comment.id, &data)
    }

    pub fn get(&self, id: &str) -> Result<Option<Comment>> {
        let Some(data) = self.inner.get_raw(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.inner.delete(id)
    }

    /// Comments on a space, oldest first.
    pub fn list_by_space(&self, space_id: &str) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            let comment: Comment = serde_json::from_slice(&data)?;
            if comment.space_id == space_id {
                comments.push(comment);
            }
        }
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    /// Drop every comment on one space, for delete cascades.
    pub fn remove_all_for_space(&self, space_id: &str) -> Result<usize> {
        let mut removed = 0;
        for comment in self.list_by_space(space_id)? {
            if self.inner.delete(&comment.id)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
