//! Sharing and permission data models.
//!
//! Two independent sharing mechanisms exist: direct user-to-user grants
//! (read or read-write, per resource) and anonymous share links (read-only
//! tokens, per owner scope). Ownership always dominates both.

use crate::content::ContentItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Kind of resource a grant can target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Space,
    Content,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Space => "space",
            ResourceKind::Content => "content",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "space" => Ok(ResourceKind::Space),
            "content" => Ok(ResourceKind::Content),
            other => Err(format!("unknown resource kind: {other}")),
        }
    }
}

/// Permission level carried by a grant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
    Read,
    ReadWrite,
}

impl Permission {
    pub fn allows_write(self) -> bool {
        self == Permission::ReadWrite
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Permission::Read),
            "read-write" => Ok(Permission::ReadWrite),
            other => Err(format!("unknown permission: {other}")),
        }
    }
}

/// Resolved access level for a (user, resource) pair.
///
/// Ownership dominates: a grant held by the owner on their own resource is
/// ignored in favor of `Owner`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum EffectivePermission {
    None,
    Read,
    ReadWrite,
    Owner,
}

impl EffectivePermission {
    pub fn can_read(self) -> bool {
        self != EffectivePermission::None
    }

    pub fn can_write(self) -> bool {
        matches!(
            self,
            EffectivePermission::ReadWrite | EffectivePermission::Owner
        )
    }
}

impl From<Permission> for EffectivePermission {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Read => EffectivePermission::Read,
            Permission::ReadWrite => EffectivePermission::ReadWrite,
        }
    }
}

/// A directed permission edge from a resource to a grantee user.
///
/// At most one grant exists per (resource, grantee) pair; re-granting
/// replaces the permission level in place.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Grant {
    pub resource_kind: ResourceKind,
    pub resource_id: String,
    pub grantee_id: String,
    pub permission: Permission,
    #[ts(type = "number")]
    pub granted_at: i64,
}

impl Grant {
    /// Storage key uniquely identifying the (resource, grantee) pair.
    pub fn key(&self) -> String {
        Self::key_for(self.resource_kind, &self.resource_id, &self.grantee_id)
    }

    pub fn key_for(kind: ResourceKind, resource_id: &str, grantee_id: &str) -> String {
        format!("{}:{}:{}", kind.as_str(), resource_id, grantee_id)
    }

    /// Key prefix matching every grant on one resource.
    pub fn resource_prefix(kind: ResourceKind, resource_id: &str) -> String {
        format!("{}:{}:", kind.as_str(), resource_id)
    }
}

/// Grant enriched with grantee display info, for the owner's sharing panel.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrantWithGrantee {
    pub grant: Grant,
    pub grantee_handle: String,
    pub grantee_name: String,
}

/// A resource visible to a user through a grant, with owner display info.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SharedResource {
    pub resource_kind: ResourceKind,
    pub resource_id: String,
    /// Space name or content title.
    pub name: String,
    pub permission: Permission,
    pub owner_id: String,
    pub owner_name: String,
}

/// What a share link exposes: the owner's whole brain or a single item.
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShareScope {
    Brain,
    Content { content_id: String },
}

impl ShareScope {
    /// Storage key for the (owner, scope) pair. One active link per key.
    pub fn key(&self, owner_id: &str) -> String {
        match self {
            ShareScope::Brain => format!("{owner_id}:brain"),
            ShareScope::Content { content_id } => {
                format!("{owner_id}:content:{content_id}")
            }
        }
    }
}

/// An anonymous read-only access token bound to one owner scope.
///
/// Disabling deletes the binding permanently; re-enabling mints a brand-new
/// token and the old one never resolves again.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareLink {
    pub token: String,
    pub owner_id: String,
    pub scope: ShareScope,
    #[ts(type = "number")]
    pub created_at: i64,
}

/// Read-only payload returned when an anonymous token resolves.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedShare {
    pub owner_id: String,
    pub owner_name: String,
    pub is_single_item: bool,
    pub items: Vec<ContentItem>,
}
