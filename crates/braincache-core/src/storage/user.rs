//! Typed user storage wrapper.

use anyhow::Result;
use braincache_models::User;
use braincache_storage::UserStorage as RawStorage;

#[derive(Clone)]
pub struct UserStorage {
    inner: RawStorage,
}

impl UserStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Create or update a user record.
    pub fn put(&self, user: &User) -> Result<()> {
        let data = serde_json::to_vec(user)?;
        self.inner.put_raw(&user.id, &data)
    }

    pub fn get(&self, id: &str) -> Result<Option<User>> {
        let Some(data) = self.inner.get_raw(id)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Exact handle lookup. Handles are unique; the first match wins.
    pub fn find_by_handle(&self, handle: &str) -> Result<Option<User>> {
        for (_, data) in self.inner.list_raw()? {
            let user: User = serde_json::from_slice(&data)?;
            if user.handle == handle {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    /// Case-insensitive substring search over handles, for grantee lookup.
    pub fn search_by_handle(&self, fragment: &str) -> Result<Vec<User>> {
        let needle = fragment.to_lowercase();
        let mut users = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            let user: User = serde_json::from_slice(&data)?;
            if user.handle.to_lowercase().contains(&needle) {
                users.push(user);
            }
        }
        users.sort_by(|a, b| a.handle.cmp(&b.handle));
        Ok(users)
    }
}
