//! Comment storage - byte-level API for space comments.

use crate::define_simple_storage;

define_simple_storage! {
    /// Comments keyed by comment id.
    pub struct CommentStorage { table: "comments" }
}
