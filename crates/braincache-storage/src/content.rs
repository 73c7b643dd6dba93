//! Content item storage - byte-level API for saved artifacts.

use crate::define_simple_storage;

define_simple_storage! {
    /// Content items keyed by content id. Owner and space filtering happens
    /// in the typed layer after deserialization.
    pub struct ContentStorage { table: "contents" }
}
