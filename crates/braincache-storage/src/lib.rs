//! BrainCache storage - low-level persistence layer.
//!
//! This crate provides the document store for BrainCache, using redb as the
//! embedded database. It exposes byte-level APIs only; typed wrappers that
//! convert between bytes and the model structs live in braincache-core.
//!
//! # Tables
//!
//! - `users` - user accounts, keyed by user id
//! - `spaces` - spaces, keyed by space id
//! - `contents` - content items, keyed by content id
//! - `grants` - permission grants, keyed by `kind:resource_id:grantee_id`
//! - `share_links:data/scope` - share links, keyed by token with a
//!   secondary scope index
//! - `comments` - space comments, keyed by comment id
//! - `reports` - abuse reports, keyed by report id

pub mod comment;
pub mod content;
pub mod grant;
pub mod report;
pub mod share_link;
pub mod simple_storage;
pub mod space;
pub mod user;

use anyhow::Result;
use redb::Database;
use std::sync::Arc;

pub use comment::CommentStorage;
pub use content::ContentStorage;
pub use grant::GrantStorage;
pub use report::ReportStorage;
pub use share_link::ShareLinkStorage;
pub use simple_storage::SimpleStorage;
pub use space::SpaceStorage;
pub use user::UserStorage;

/// Central storage manager that initializes all tables.
pub struct Storage {
    db: Arc<Database>,
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
    ///
    /// Creates the database file if it doesn't exist and opens all tables.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let users = UserStorage::new(db.clone())?;
        let spaces = SpaceStorage::new(db.clone())?;
        let contents = ContentStorage::new(db.clone())?;
        let grants = GrantStorage::new(db.clone())?;
        let share_links = ShareLinkStorage::new(db.clone())?;
        let comments = CommentStorage::new(db.clone())?;
        let reports = ReportStorage::new(db.clone())?;

        Ok(Self {
            db,
            users,
            spaces,
            contents,
            grants,
            share_links,
            comments,
            reports,
        })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}
