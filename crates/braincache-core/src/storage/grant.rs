//! Typed grant storage wrapper.

use anyhow::Result;
use braincache_models::{Grant, ResourceKind};
use braincache_storage::GrantStorage as RawStorage;

#[derive(Clone)]
pub struct GrantStorage {
    inner: RawStorage,
}

impl GrantStorage {
    pub fn new(inner: RawStorage) -> Self {
        Self { inner }
    }

    /// Insert or replace the grant for its (resource, grantee) pair.
    /// The key encodes the pair, so re-granting can never duplicate.
    pub fn upsert(&self, grant: &Grant) -> Result<()> {
        let data = serde_json::to_vec(grant)?;
        self.inner.put_raw(&grant.key(), &data)
    }

    pub fn get(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        grantee_id: &str,
    ) -> Result<Option<Grant>> {
        let key = Grant::key_for(kind, resource_id, grantee_id);
        let Some(data) = self.inner.get_raw(&key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Remove a grant. Returns false when none existed.
    pub fn remove(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        grantee_id: &str,
    ) -> Result<bool> {
        let key = Grant::key_for(kind, resource_id, grantee_id);
        self.inner.delete(&key)
    }

    /// All grants on one resource.
    pub fn list_for_resource(
        &self,
        kind: ResourceKind,
        resource_id: &str,
    ) -> Result<Vec<Grant>> {
        let prefix = Grant::resource_prefix(kind, resource_id);
        let mut grants = Vec::new();
        for (_, data) in self.inner.scan_prefix(&prefix)? {
            grants.push(serde_json::from_slice(&data)?);
        }
        Ok(grants)
    }

    /// All grants held by one user for a resource kind.
    pub fn list_for_grantee(
        &self,
        grantee_id: &str,
        kind: ResourceKind,
    ) -> Result<Vec<Grant>> {
        let mut grants = Vec::new();
        for (_, data) in self.inner.list_raw()? {
            let grant: Grant = serde_json::from_slice(&data)?;
            if grant.grantee_id == grantee_id && grant.resource_kind == kind {
                grants.push(grant);
            }
        }
        Ok(grants)
    }

    /// Drop every grant on one resource, for delete cascades.
    pub fn remove_all_for_resource(
        &self,
        kind: ResourceKind,
        resource_id: &str,
    ) -> Result<usize> {
        let prefix = Grant::resource_prefix(kind, resource_id);
        let mut removed = 0;
        for (key, _) in self.inner.scan_prefix(&prefix)? {
            if self.inner.delete(&key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
