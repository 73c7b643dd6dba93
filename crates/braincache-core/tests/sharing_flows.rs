//! End-to-end tests for the sharing and permission-resolution services.

use braincache_core::services::{comments, content, grants, reports, share_links, spaces, users};
use braincache_core::{AppConfig, AppCore, CoreError};
use braincache_models::{
    ContentType, Permission, Plan, ReportStatus, ResourceKind, Role, ShareScope, User,
};
use tempfile::tempdir;

async fn setup() -> (AppCore, tempfile::TempDir) {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let core = AppCore::new(db_path.to_str().unwrap(), AppConfig::default())
        .await
        .unwrap();
    (core, temp_dir)
}

async fn register(core: &AppCore, handle: &str, name: &str) -> User {
    users::register(core, handle, name, None).await.unwrap()
}

/// Registered user promoted to admin out of band, the way the bootstrap
/// tooling does it.
async fn register_admin(core: &AppCore, handle: &str) -> User {
    let mut user = register(core, handle, "Admin").await;
    user.role = Role::Admin;
    core.storage.users.put(&user).unwrap();
    user
}

async fn add_item(core: &AppCore, owner: &User, title: &str, space_id: Option<String>) -> String {
    content::create(
        core,
        owner,
        title,
        "https://example.com/a",
        ContentType::Link,
        space_id,
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn grant_upsert_keeps_single_row() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "research", None).await.unwrap();

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();
    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::ReadWrite,
    )
    .await
    .unwrap();

    let listed = grants::list_for_resource(&core, &owner, ResourceKind::Space, &space.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].grant.permission, Permission::ReadWrite);
    assert_eq!(listed[0].grantee_handle, "g@example.com");
}

#[tokio::test]
async fn self_grant_is_rejected() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    let err = grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &owner.id,
        Permission::Read,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));
}

#[tokio::test]
async fn grant_requires_ownership_and_existing_grantee() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let outsider = register(&core, "x@example.com", "Outsider").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    let err = grants::create(
        &core,
        &outsider,
        ResourceKind::Space,
        &space.id,
        &outsider.id,
        Permission::Read,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));

    let err = grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        "no-such-user",
        Permission::Read,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::NotFound("user")));
}

#[tokio::test]
async fn update_permission_requires_existing_grant() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    let err = grants::update_permission(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::ReadWrite,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::NotFound("grant")));
}

#[tokio::test]
async fn revoking_missing_grant_is_noop() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    grants::revoke(&core, &owner, ResourceKind::Space, &space.id, &grantee.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn read_grantee_cannot_write_read_write_can() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();
    let item_id = add_item(&core, &owner, "article", Some(space.id.clone())).await;

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();

    // Read works, writes do not
    content::get(&core, &grantee.id, &item_id).await.unwrap();
    let err = content::delete(&core, &grantee.id, &item_id).await.unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));

    grants::update_permission(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::ReadWrite,
    )
    .await
    .unwrap();

    content::delete(&core, &grantee.id, &item_id).await.unwrap();
}

#[tokio::test]
async fn revoked_grantee_loses_access() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();
    spaces::get(&core, &grantee.id, &space.id).await.unwrap();

    grants::revoke(&core, &owner, ResourceKind::Space, &space.id, &grantee.id)
        .await
        .unwrap();

    let err = spaces::get(&core, &grantee.id, &space.id).await.unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
}

#[tokio::test]
async fn shared_with_me_resolves_owner_info() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Olive").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "papers", None).await.unwrap();

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::ReadWrite,
    )
    .await
    .unwrap();

    let shared = grants::list_shared_with_me(&core, &grantee.id, ResourceKind::Space)
        .await
        .unwrap();
    assert_eq!(shared.len(), 1);
    assert_eq!(shared[0].name, "papers");
    assert_eq!(shared[0].permission, Permission::ReadWrite);
    assert_eq!(shared[0].owner_id, owner.id);
    assert_eq!(shared[0].owner_name, "Olive");
}

#[tokio::test]
async fn enable_is_idempotent_until_disabled() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;

    let first = share_links::enable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    let second = share_links::enable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    assert_eq!(first.token, second.token);

    share_links::disable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    let third = share_links::enable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    assert_ne!(first.token, third.token);

    // The dead token never resolves again
    let err = share_links::resolve(&core, &first.token).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound("share link")));
    share_links::resolve(&core, &third.token).await.unwrap();
}

#[tokio::test]
async fn whole_brain_share_exposes_every_owned_item_read_only() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();
    add_item(&core, &owner, "filed", Some(space.id.clone())).await;
    add_item(&core, &owner, "unfiled", None).await;

    let link = share_links::enable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    assert!(link.token.len() >= 10);

    let resolved = share_links::resolve(&core, &link.token).await.unwrap();
    assert!(!resolved.is_single_item);
    assert_eq!(resolved.owner_id, owner.id);
    assert_eq!(resolved.items.len(), 2);

    share_links::disable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    let err = share_links::resolve(&core, &link.token).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound("share link")));
}

#[tokio::test]
async fn single_item_share_is_narrow() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    add_item(&core, &owner, "other", None).await;
    let shared_id = add_item(&core, &owner, "shared", None).await;

    let link = share_links::enable(
        &core,
        &owner,
        ShareScope::Content {
            content_id: shared_id.clone(),
        },
    )
    .await
    .unwrap();

    let resolved = share_links::resolve(&core, &link.token).await.unwrap();
    assert!(resolved.is_single_item);
    assert_eq!(resolved.items.len(), 1);
    assert_eq!(resolved.items[0].id, shared_id);
}

#[tokio::test]
async fn brain_and_item_links_coexist() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let item_id = add_item(&core, &owner, "doc", None).await;

    let brain = share_links::enable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    let single = share_links::enable(
        &core,
        &owner,
        ShareScope::Content {
            content_id: item_id.clone(),
        },
    )
    .await
    .unwrap();
    assert_ne!(brain.token, single.token);

    // Disabling one leaves the other resolving
    share_links::disable(&core, &owner, ShareScope::Brain)
        .await
        .unwrap();
    let resolved = share_links::resolve(&core, &single.token).await.unwrap();
    assert_eq!(resolved.items[0].id, item_id);
}

#[tokio::test]
async fn share_link_requires_content_ownership() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let outsider = register(&core, "x@example.com", "Outsider").await;
    let item_id = add_item(&core, &owner, "doc", None).await;

    let err = share_links::enable(
        &core,
        &outsider,
        ShareScope::Content {
            content_id: item_id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
}

#[tokio::test]
async fn content_grant_does_not_open_siblings() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();
    let granted_id = add_item(&core, &owner, "granted", Some(space.id.clone())).await;
    let sibling_id = add_item(&core, &owner, "sibling", Some(space.id.clone())).await;

    grants::create(
        &core,
        &owner,
        ResourceKind::Content,
        &granted_id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();

    content::get(&core, &grantee.id, &granted_id).await.unwrap();

    let err = content::get(&core, &grantee.id, &sibling_id).await.unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
    let err = spaces::get(&core, &grantee.id, &space.id).await.unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
    let err = content::update(
        &core,
        &grantee.id,
        &granted_id,
        "renamed",
        "https://example.com/a",
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
}

#[tokio::test]
async fn commenting_requires_read_access() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let stranger = register(&core, "v@example.com", "Stranger").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::ReadWrite,
    )
    .await
    .unwrap();

    let comment = comments::add(&core, &grantee, &space.id, "nice collection")
        .await
        .unwrap();
    assert!(!comment.edited);

    let err = comments::add(&core, &stranger, &space.id, "hello")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
}

#[tokio::test]
async fn comment_edit_is_author_only_delete_includes_space_owner() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();

    let comment = comments::add(&core, &grantee, &space.id, "first")
        .await
        .unwrap();

    // The space owner cannot edit someone else's comment
    let err = comments::edit(&core, &owner.id, &comment.id, "edited")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));

    let edited = comments::edit(&core, &grantee.id, &comment.id, "second")
        .await
        .unwrap();
    assert!(edited.edited);

    // But the space owner may delete it
    comments::delete(&core, &owner.id, &comment.id).await.unwrap();
    assert!(
        comments::list(&core, &owner.id, &space.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn free_plan_space_limit_is_enforced() {
    let (core, _tmp) = setup().await;
    let admin = register_admin(&core, "admin@example.com").await;
    let user = register(&core, "u@example.com", "User").await;

    for i in 0..core.config.free_space_limit {
        spaces::create(&core, &user, &format!("space {i}"), None)
            .await
            .unwrap();
    }
    let err = spaces::create(&core, &user, "one too many", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));

    // Upgrading lifts the cap
    let user = users::set_plan(&core, &admin, &user.id, Plan::Pro).await.unwrap();
    spaces::create(&core, &user, "pro space", None).await.unwrap();
}

#[tokio::test]
async fn plan_change_is_admin_only() {
    let (core, _tmp) = setup().await;
    let user = register(&core, "u@example.com", "User").await;
    let other = register(&core, "w@example.com", "Other").await;

    let err = users::set_plan(&core, &user, &other.id, Plan::Pro)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
}

#[tokio::test]
async fn duplicate_handle_conflicts() {
    let (core, _tmp) = setup().await;
    register(&core, "u@example.com", "User").await;

    let err = users::register(&core, "u@example.com", "Again", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));
}

#[tokio::test]
async fn space_delete_unfiles_items_and_drops_grants() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();
    let item_id = add_item(&core, &owner, "doc", Some(space.id.clone())).await;

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();
    comments::add(&core, &grantee, &space.id, "hi").await.unwrap();

    spaces::delete(&core, &owner.id, &space.id).await.unwrap();

    // The item survives, unfiled, and the space grant no longer opens it
    let item = content::get(&core, &owner.id, &item_id).await.unwrap();
    assert_eq!(item.space_id, None);
    let err = content::get(&core, &grantee.id, &item_id).await.unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
    assert!(
        grants::list_shared_with_me(&core, &grantee.id, ResourceKind::Space)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn report_visibility_and_transitions() {
    let (core, _tmp) = setup().await;
    let admin = register_admin(&core, "admin@example.com").await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let reporter = register(&core, "r@example.com", "Reporter").await;
    let item_id = add_item(&core, &owner, "spam?", None).await;

    let err = reports::file(&core, &owner, &item_id, "reporting myself")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));

    let report = reports::file(&core, &reporter, &item_id, "looks abusive")
        .await
        .unwrap();
    assert_eq!(report.status, ReportStatus::Pending);

    // Content owner and admin see it, the reporter's own view is empty
    assert_eq!(reports::list_visible(&core, &owner).await.unwrap().len(), 1);
    assert_eq!(reports::list_visible(&core, &admin).await.unwrap().len(), 1);
    assert!(reports::list_visible(&core, &reporter).await.unwrap().is_empty());

    let err = reports::set_status(&core, &reporter, &report.id, ReportStatus::Ignored)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));

    let resolved = reports::set_status(&core, &admin, &report.id, ReportStatus::Resolved)
        .await
        .unwrap();
    assert_eq!(resolved.status, ReportStatus::Resolved);
}

#[tokio::test]
async fn listing_space_contents_requires_read() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let grantee = register(&core, "g@example.com", "Grantee").await;
    let stranger = register(&core, "v@example.com", "Stranger").await;
    let space = spaces::create(&core, &owner, "notes", None).await.unwrap();
    add_item(&core, &owner, "doc", Some(space.id.clone())).await;

    grants::create(
        &core,
        &owner,
        ResourceKind::Space,
        &space.id,
        &grantee.id,
        Permission::Read,
    )
    .await
    .unwrap();

    let items = spaces::list_contents(&core, &grantee.id, &space.id)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);

    let err = spaces::list_contents(&core, &stranger.id, &space.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Forbidden));
}

#[tokio::test]
async fn content_must_be_filed_into_own_space() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let other = register(&core, "x@example.com", "Other").await;
    let other_space = spaces::create(&core, &other, "theirs", None).await.unwrap();

    let err = content::create(
        &core,
        &owner,
        "doc",
        "https://example.com/a",
        ContentType::Link,
        Some(other_space.id.clone()),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[tokio::test]
async fn deleting_content_kills_its_share_link() {
    let (core, _tmp) = setup().await;
    let owner = register(&core, "o@example.com", "Owner").await;
    let item_id = add_item(&core, &owner, "doc", None).await;

    let link = share_links::enable(
        &core,
        &owner,
        ShareScope::Content {
            content_id: item_id.clone(),
        },
    )
    .await
    .unwrap();

    content::delete(&core, &owner.id, &item_id).await.unwrap();

    let err = share_links::resolve(&core, &link.token).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound("share link")));
}
