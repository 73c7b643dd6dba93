//! Comment data models.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Feedback attached to a space by a user with at least read access.
///
/// Only the author may edit; the author or the space owner may delete.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comment {
    pub id: String,
    pub space_id: String,
    pub author_id: String,
    pub body: String,
    #[serde(default)]
    pub edited: bool,
    #[ts(type = "number")]
    pub created_at: i64,
    #[ts(type = "number")]
    pub updated_at: i64,
}
