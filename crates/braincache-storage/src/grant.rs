//! Grant storage - byte-level API for permission grants.
//!
//! Keys follow `kind:resource_id:grantee_id`, so every grant on one
//! resource shares the `kind:resource_id:` prefix and a single upsert per
//! key is all the uniqueness the (resource, grantee) pair needs.

use crate::define_simple_storage;

define_simple_storage! {
    /// Permission grants keyed by `kind:resource_id:grantee_id`.
    pub struct GrantStorage { table: "grants" }
}
