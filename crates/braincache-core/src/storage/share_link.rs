//! Typed share link storage wrapper.

use anyhow::Result;
use braincache_models::{ShareLink, ShareScope};
use braincache_storage::ShareLinkStorage as RawStorage;

#[derive(Clone)]
pub struct ShareLinkStorage {
    inner: RawStorage,
}

impl ShareLinkStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Persist a link under both its token and its scope key.
    pub fn put(&self, link: &ShareLink) -> Result<()> {
        let data = serde_json::to_vec(link)?;
        let scope_key = link.scope.key(&link.owner_id);
        self.inner.insert(&link.token, &scope_key, &data)
    }

    /// The active link for an (owner, scope) pair, if sharing is enabled.
    pub fn get_for_scope(
        &self,
        owner_id: &str,
        scope: &ShareScope,
    ) -> Result<Option<ShareLink>> {
        let Some(token) = self.inner.token_for_scope(&scope.key(owner_id))? else {
            return Ok(None);
        };
        self.resolve_token(&token)
    }

    /// Anonymous lookup by token.
    pub fn resolve_token(&self, token: &str) -> Result<Option<ShareLink>> {
        let Some(data) = self.inner.get_by_token(token)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Delete the binding for a scope. The token never resolves again.
    /// Returns false when nothing was enabled.
    pub fn remove_scope(&self, owner_id: &str, scope: &ShareScope) -> Result<bool> {
        self.inner.delete_scope(&scope.key(owner_id))
    }
}
