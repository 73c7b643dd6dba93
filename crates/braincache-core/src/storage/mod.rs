//! Storage layer with typed wrappers around braincache-storage.
//!
//! This module provides type-safe access to the persistence layer by
//! wrapping the byte-level APIs from braincache-storage with the model
//! structs from braincache-models.

pub mod comment;
pub mod content;
pub mod grant;
pub mod report;
pub mod share_link;
pub mod space;
pub mod user;

use anyhow::Result;

pub use comment::CommentStorage;
pub use content::ContentStorage;
pub use grant::GrantStorage;
pub use report::ReportStorage;
pub use share_link::ShareLinkStorage;
pub use space::SpaceStorage;
pub use user::UserStorage;

/// Current time as epoch milliseconds. All model timestamps use this.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Central storage manager that initializes all storage subsystems.
///
/// Provides typed access to every table through wrapper types that convert
/// between model structs and byte-level storage.
pub struct Storage {
    pub users: UserStorage,
    pub spaces: SpaceStorage,
    pub contents: ContentStorage,
    pub grants: GrantStorage,
    pub share_links: ShareLinkStorage,
    pub comments: CommentStorage,
    pub reports: ReportStorage,
}

impl Storage {
    /// Create a new storage instance at the given path.
    pub fn new(path: &str) -> Result<Self> {
        let raw = braincache_storage::Storage::new(path)?;

        Ok(Self {
            users: UserStorage::new(raw.users),
            spaces: SpaceStorage::new(raw.spaces),
            contents: ContentStorage::new(raw.contents),
            grants: GrantStorage::new(raw.grants),
            share_links: ShareLinkStorage::new(raw.share_links),
            comments: CommentStorage::new(raw.comments),
            reports: ReportStorage::new(raw.reports),
        })
    }
}
