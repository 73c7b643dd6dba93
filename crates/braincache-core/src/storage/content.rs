//! Typed content item storage wrapper.

use anyhow::Result;
use braincache_models::ContentItem;
use braincache_storage::ContentStorage as RawStorage;

#[derive(Clone)]
pub struct ContentStorage {
    inner: RawStorage,
}

impl ContentStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Create or update a content item record.
    pub fn put(&self, item: &ContentItem) -> Result<()> {
        let data = serde_json::to_vec(item)?;
        self.inner.put_raw(&item.id, &data)
    }

    pub fn get(&self, id: &str) -> Result<Option<ContentItem>> {
        let Some(data) = self.inner.get_raw(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.inner.delete(id)
    }

    /// Every item the user owns, newest first. The whole-brain share path
    /// and the owner's library view both read this.
    pub fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ContentItem>> {
        let mut items = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            let item: ContentItem = serde_json::from_slice(&data)?;
            if item.owner_id == owner_id {
                items.push(item);
            }
        }
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(items)
    }

    pub fn list_by_space(&self, space_id: &str) -> Result<Vec<ContentItem>> {
        let mut items = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            let item: ContentItem = serde_json::from_slice(&data)?;
            if item.space_id.as_deref() == Some(space_id) {
                items.push(item);
            }
        }
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(items)
    }
}
