//! Space storage - byte-level API for spaces.

use crate::define_simple_storage;

define_simple_storage! {
    /// Spaces keyed by space id.
    pub struct SpaceStorage { table: "spaces" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::Database;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_put_and_get_raw() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = SpaceStorage::new(db).unwrap();

        let data = b"test space data";
        storage.put_raw("sp-001", data).unwrap();

        let retrieved = storage.get_raw("sp-001").unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap(), data);
    }

    #[test]
    fn test_exists_and_delete() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = SpaceStorage::new(db).unwrap();

        assert!(!storage.exists("sp-001").unwrap());

        storage.put_raw("sp-001", b"data").unwrap();
        assert!(storage.exists("sp-001").unwrap());

        let deleted = storage.delete("sp-001").unwrap();
        assert!(deleted);
        assert!(!storage.exists("sp-001").unwrap());

        // Deleting again reports nothing removed
        assert!(!storage.delete("sp-001").unwrap());
    }

    #[test]
    fn test_list_raw() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = SpaceStorage::new(db).unwrap();

        storage.put_raw("sp-001", b"data1").unwrap();
        storage.put_raw("sp-002", b"data2").unwrap();

        let spaces = storage.list_raw().unwrap();
        assert_eq!(spaces.len(), 2);
    }
}
