//! Content item data models.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Kind of saved artifact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Link,
    Document,
    Youtube,
    Twitter,
    Article,
    Note,
}

/// A single saved artifact: link, uploaded document, embed, or note.
///
/// The owner is immutable. `space_id`, when present, must name a space
/// owned by the same user (items are never re-parented across owners).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Link URL, uploaded-file URL, or note body depending on `content_type`.
    pub target: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub owner_id: String,
    pub space_id: Option<String>,
    #[ts(type = "number")]
    pub created_at: i64,
    #[ts(type = "number")]
    pub updated_at: i64,
}
