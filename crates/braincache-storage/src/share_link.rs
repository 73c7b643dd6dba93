//! Share link storage - token-keyed bindings with a scope index.
//!
//! Two tables back this store: `share_links:data` maps token -> link bytes
//! for anonymous resolution, and `share_links:scope` maps the
//! `owner_id:scope` key -> token so enable/disable can find the active
//! token for a scope without scanning. Both tables are written in one
//! transaction so they never disagree.

use anyhow::Result;
use redb::{Database, ReadableDatabase, TableDefinition};
use std::sync::Arc;

const LINK_DATA: TableDefinition<&str, &[u8]> = TableDefinition::new("share_links:data");
const LINK_SCOPE: TableDefinition<&str, &str> = TableDefinition::new("share_links:scope");

/// Share link storage with byte-level API.
#[derive(Debug, Clone)]
pub struct ShareLinkStorage {
    db: Arc<Database>,
}

impl ShareLinkStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(LINK_DATA)?;
        write_txn.open_table(LINK_SCOPE)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Store a link binding: token -> data plus scope -> token index.
    pub fn insert(&self, token: &str, scope_key: &str, data: &[u8]) -> Result<()> {
        let txn = self.db.begin_write()?;
        {
            let mut data_table = txn.open_table(LINK_DATA)?;
            data_table.insert(token, data)?;
            drop(data_table);

            let mut scope_table = txn.open_table(LINK_SCOPE)?;
            scope_table.insert(scope_key, token)?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Look up raw link data by token.
    pub fn get_by_token(&self, token: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LINK_DATA)?;

        if let Some(value) = table.get(token)? {
            Ok(Some(value.value().to_vec()))
        } else {
            Ok(None)
        }
    }

    /// Look up the active token for a scope key.
    pub fn token_for_scope(&self, scope_key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LINK_SCOPE)?;

        if let Some(value) = table.get(scope_key)? {
            Ok(Some(value.value().to_string()))
        } else {
            Ok(None)
        }
    }

    /// Remove the binding for a scope, killing its token permanently.
    /// Returns true if a link existed.
    pub fn delete_scope(&self, scope_key: &str) -> Result<bool> {
        let txn = self.db.begin_write()?;
        let existed = {
            let mut scope_table = txn.open_table(LINK_SCOPE)?;
            let token = scope_table
                .remove(scope_key)?
                .map(|guard| guard.value().to_string());
            drop(scope_table);

            match token {
                Some(token) => {
                    let mut data_table = txn.open_table(LINK_DATA)?;
                    data_table.remove(token.as_str())?;
                    true
                }
                None => false,
            }
        };
        txn.commit()?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup() -> (ShareLinkStorage, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = ShareLinkStorage::new(db).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_insert_and_lookup_both_ways() {
        let (storage, _temp_dir) = setup();

        storage.insert("tok-1", "u-1:brain", b"link data").unwrap();

        assert_eq!(storage.get_by_token("tok-1").unwrap().unwrap(), b"link data");
        assert_eq!(
            storage.token_for_scope("u-1:brain").unwrap().unwrap(),
            "tok-1"
        );
    }

    #[test]
    fn test_delete_scope_kills_token() {
        let (storage, _temp_dir) = setup();

        storage.insert("tok-1", "u-1:brain", b"link data").unwrap();
        assert!(storage.delete_scope("u-1:brain").unwrap());

        assert!(storage.get_by_token("tok-1").unwrap().is_none());
        assert!(storage.token_for_scope("u-1:brain").unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_scope_is_noop() {
        let (storage, _temp_dir) = setup();

        assert!(!storage.delete_scope("u-1:brain").unwrap());
    }

    #[test]
    fn test_scopes_are_independent() {
        let (storage, _temp_dir) = setup();

        storage.insert("tok-1", "u-1:brain", b"brain").unwrap();
        storage
            .insert("tok-2", "u-1:content:ct-1", b"item")
            .unwrap();

        assert!(storage.delete_scope("u-1:brain").unwrap());
        assert_eq!(storage.get_by_token("tok-2").unwrap().unwrap(), b"item");
    }
}
