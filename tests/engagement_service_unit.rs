mod support;

use std::sync::Arc;

use ngo_core::application::commands::comments::{
    CommentCommandService, CreateCommentCommand, UpdateCommentCommand,
};
use ngo_core::application::commands::subscriptions::SubscriptionCommandService;
use ngo_core::application::error::ApplicationError;
use ngo_core::domain::subscription::SubscriptionStatus;
use support::{
    InMemoryBlogRepo, InMemoryCommentRepo, InMemorySubscriptionRepo, MemorySlugLookup,
    admin_actor, member_actor,
};

fn sample_comment(blog_id: i64) -> CreateCommentCommand {
    CreateCommentCommand {
        blog_id,
        name: "Ravi".into(),
        email: "ravi@example.org".into(),
        profile_image: None,
        body: "Thanks for sharing this.".into(),
    }
}

#[tokio::test]
async fn comment_on_missing_blog_is_not_found() {
    let blogs = Arc::new(InMemoryBlogRepo::new(MemorySlugLookup::new()));
    let service = CommentCommandService::new(Arc::new(InMemoryCommentRepo::new()), blogs);

    let err = service.create_comment(sample_comment(42)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn new_comments_await_moderation() {
    let comments = Arc::new(InMemoryCommentRepo::new());
    let blogs = seeded_blog_repo().await;
    let service = CommentCommandService::new(comments.clone(), blogs);

    let created = service.create_comment(sample_comment(1)).await.unwrap();
    assert!(!created.is_approved);

    let approved = service
        .set_approved(&admin_actor(), created.id, true)
        .await
        .unwrap();
    assert!(approved.is_approved);
}

#[tokio::test]
async fn comment_requires_a_body() {
    let blogs = seeded_blog_repo().await;
    let service = CommentCommandService::new(Arc::new(InMemoryCommentRepo::new()), blogs);

    let mut command = sample_comment(1);
    command.body = "   ".into();
    let err = service.create_comment(command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn moderation_requires_admin() {
    let blogs = seeded_blog_repo().await;
    let comments = Arc::new(InMemoryCommentRepo::new());
    let service = CommentCommandService::new(comments, blogs);

    let created = service.create_comment(sample_comment(1)).await.unwrap();
    let err = service
        .set_approved(&member_actor(), created.id, true)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn admin_edits_touch_only_the_given_fields() {
    let blogs = seeded_blog_repo().await;
    let comments = Arc::new(InMemoryCommentRepo::new());
    let service = CommentCommandService::new(comments, blogs);

    let created = service.create_comment(sample_comment(1)).await.unwrap();

    let err = service
        .update_comment(&member_actor(), created.id, UpdateCommentCommand::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let updated = service
        .update_comment(
            &admin_actor(),
            created.id,
            UpdateCommentCommand {
                body: Some("Edited for tone.".into()),
                profile_image: Some("/uploads/comments/new.png".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.body, "Edited for tone.");
    assert_eq!(updated.profile_image.as_deref(), Some("/uploads/comments/new.png"));
    assert_eq!(updated.name, "Ravi");

    let err = service
        .update_comment(&admin_actor(), 99, UpdateCommentCommand::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_) | ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_subscription_is_a_conflict() {
    let service = SubscriptionCommandService::new(Arc::new(InMemorySubscriptionRepo::new()));

    let created = service.subscribe("news@example.org").await.unwrap();
    assert_eq!(created.email, "news@example.org");

    let err = service.subscribe("news@example.org").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    // Case differences collapse onto the same address.
    let err = service.subscribe("News@Example.ORG").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn subscription_email_is_validated() {
    let service = SubscriptionCommandService::new(Arc::new(InMemorySubscriptionRepo::new()));
    let err = service.subscribe("not-an-email").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[tokio::test]
async fn admin_can_unsubscribe_an_address() {
    let repo = Arc::new(InMemorySubscriptionRepo::new());
    let service = SubscriptionCommandService::new(repo.clone());

    let created = service.subscribe("leaving@example.org").await.unwrap();
    let updated = service
        .set_status(&admin_actor(), created.id, SubscriptionStatus::Unsubscribed)
        .await
        .unwrap();
    assert_eq!(updated.status, "unsubscribed");
}

async fn seeded_blog_repo() -> Arc<InMemoryBlogRepo> {
    use chrono::Utc;
    use ngo_core::domain::blog::{BlogRepository, NewBlog};
    use ngo_core::domain::slug::{Slug, Title};

    let repo = Arc::new(InMemoryBlogRepo::new(MemorySlugLookup::new()));
    repo.insert(NewBlog {
        title: Title::new("Seeded Post").unwrap(),
        slug: Slug::new("seeded-post").unwrap(),
        excerpt: "e".into(),
        content: "c".into(),
        featured_image: None,
        is_featured: false,
        tags: vec![],
        read_time: "1 min".into(),
        sections: vec![],
        author_name: "a".into(),
        author_bio: None,
        published_date: Utc::now(),
        category: "General".into(),
        meta_title: None,
        meta_description: None,
        seo_keywords: None,
    })
    .await
    .unwrap();
    repo
}
