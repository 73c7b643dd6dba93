//! Typed space storage wrapper.

use anyhow::Result;
use braincache_models::Space;
use braincache_storage::SpaceStorage as RawStorage;

#[derive(Clone)]
pub struct SpaceStorage {
    inner: RawStorage,
}

impl SpaceStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Create or update a space record.
    pub fn put(&self, space: &Space) -> Result<()> {
        let data = serde_json::to_vec(space)?;
        self.inner.put_raw(&space.id, &data)
    }

    pub fn get(&self, id: &str) -> Result<Option<Space>> {
        let Some(data) = self.inner.get_raw(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.inner.delete(id)
    }

    pub fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Space>> {
        let mut spaces = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            let space: Space = serde_json::from_slice(&data)?;
            if space.owner_id == owner_id {
                spaces.push(space);
            }
        }
        spaces.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(spaces)
    }

    /// How many spaces the user currently owns, for plan limit checks.
    pub fn count_by_owner(&self, owner_id: &str) -> Result<usize> {
        Ok(self.list_by_owner(owner_id)?.len())
    }
}
