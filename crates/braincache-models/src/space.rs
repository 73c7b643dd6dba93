//! Space data models.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named collection of content items owned by exactly one user.
///
/// The owner is set at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: String,
    #[ts(type = "number")]
    pub created_at: i64,
    #[ts(type = "number")]
    pub updated_at: i64,
}
