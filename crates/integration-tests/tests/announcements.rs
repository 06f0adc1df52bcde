//! Announcement banner management.

#![allow(clippy::unwrap_used)]

use soycart_core::AnnouncementId;
use soycart_integration_tests::TestContext;
use soycart_server::db::RepositoryError;
use soycart_server::db::announcements::AnnouncementPatch;
use soycart_server::services::announcements::AnnouncementError;

#[tokio::test]
async fn new_announcements_are_active_and_newest_first() {
    let ctx = TestContext::new().await;
    let service = ctx.announcements();

    let first = service
        .create("Opening week", "Free taste at the CET lobby!")
        .await
        .unwrap();
    let second = service
        .create("New flavor", "Ube Soya is back")
        .await
        .unwrap();

    assert!(first.active);

    let active = service.list_active().await.unwrap();
    let ids: Vec<_> = active.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn deactivated_announcements_hide_from_shoppers_only() {
    let ctx = TestContext::new().await;
    let service = ctx.announcements();

    let announcement = service
        .create("Opening week", "Free taste at the CET lobby!")
        .await
        .unwrap();

    let updated = service
        .update(
            announcement.id,
            AnnouncementPatch {
                active: Some(false),
                ..AnnouncementPatch::default()
            },
        )
        .await
        .unwrap();

    // Partial update left the text alone
    assert_eq!(updated.title, "Opening week");
    assert!(!updated.active);

    assert!(service.list_active().await.unwrap().is_empty());
    assert_eq!(service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() {
    let ctx = TestContext::new().await;
    let service = ctx.announcements();

    let announcement = service
        .create("Opening week", "Free taste at the CET lobby!")
        .await
        .unwrap();

    let updated = service
        .update(
            announcement.id,
            AnnouncementPatch {
                message: Some("Free taste moved to the CBA lobby".to_owned()),
                ..AnnouncementPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, announcement.title);
    assert_eq!(updated.message, "Free taste moved to the CBA lobby");
    assert!(updated.active);
}

#[tokio::test]
async fn blank_titles_and_messages_are_rejected() {
    let ctx = TestContext::new().await;
    let service = ctx.announcements();

    assert!(matches!(
        service.create("  ", "body").await,
        Err(AnnouncementError::EmptyTitle)
    ));
    assert!(matches!(
        service.create("title", "").await,
        Err(AnnouncementError::EmptyMessage)
    ));
}

#[tokio::test]
async fn delete_removes_the_announcement() {
    let ctx = TestContext::new().await;
    let service = ctx.announcements();

    let announcement = service.create("Opening week", "Free taste!").await.unwrap();

    service.delete(announcement.id).await.unwrap();
    assert!(service.list_all().await.unwrap().is_empty());

    let result = service.delete(announcement.id).await;
    assert!(matches!(
        result,
        Err(AnnouncementError::Repository(RepositoryError::NotFound))
    ));
}

#[tokio::test]
async fn update_on_missing_announcement_is_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx
        .announcements()
        .update(
            AnnouncementId::new(42),
            AnnouncementPatch {
                title: Some("ghost".to_owned()),
                ..AnnouncementPatch::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AnnouncementError::Repository(RepositoryError::NotFound))
    ));
}
