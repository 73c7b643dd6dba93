//! Shared data models for BrainCache.
//!
//! Every tier (storage, core services, API server) speaks these types.
//! All of them serialize as JSON documents and export TypeScript bindings
//! for the SPA client via ts-rs.

pub mod comment;
pub mod content;
pub mod report;
pub mod sharing;
pub mod space;
pub mod user;

pub use comment::Comment;
pub use content::{ContentItem, ContentType};
pub use report::{Report, ReportStatus};
pub use sharing::{
    EffectivePermission, Grant, GrantWithGrantee, Permission, ResolvedShare, ResourceKind,
    ShareLink, ShareScope, SharedResource,
};
pub use space::Space;
pub use user::{Plan, Role, User};
