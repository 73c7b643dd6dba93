//! User storage - byte-level API for user accounts.

use crate::define_simple_storage;

define_simple_storage! {
    /// User accounts keyed by user id. Handle uniqueness is enforced by the
    /// typed layer, which scans this table.
    pub struct UserStorage { table: "users" }
}
