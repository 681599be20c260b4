mod support;

use std::sync::Arc;

use chrono::Utc;

use ngo_core::application::commands::blogs::{
    BlogCommandService, CreateBlogCommand, UpdateBlogCommand,
};
use ngo_core::application::error::ApplicationError;
use ngo_core::domain::slug::SlugAssigner;
use support::{FixedClock, InMemoryBlogRepo, MemorySlugLookup, admin_actor, member_actor};

fn service(lookup: &Arc<MemorySlugLookup>) -> BlogCommandService {
    let repo = Arc::new(InMemoryBlogRepo::new(lookup.clone()));
    let assigner = Arc::new(SlugAssigner::new(lookup.clone()));
    let clock = Arc::new(FixedClock(Utc::now()));
    BlogCommandService::new(repo, assigner, clock)
}

fn sample_create(title: &str) -> CreateBlogCommand {
    CreateBlogCommand {
        title: title.to_string(),
        excerpt: "A short excerpt.".into(),
        content: "Full body text.".into(),
        featured_image: None,
        is_featured: false,
        tags: vec!["community".into()],
        read_time: "4 min".into(),
        sections: vec![],
        author_name: "Asha".into(),
        author_bio: None,
        published_date: None,
        category: "Health".into(),
        meta_title: None,
        meta_description: None,
        seo_keywords: None,
    }
}

#[tokio::test]
async fn create_derives_slug_from_title() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let admin = admin_actor();

    let blog = service
        .create_blog(&admin, sample_create("Trans Awareness Workshop!"))
        .await
        .unwrap();
    assert_eq!(blog.slug, "trans-awareness-workshop");
}

#[tokio::test]
async fn duplicate_titles_get_suffixed_slugs() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let admin = admin_actor();

    let first = service
        .create_blog(&admin, sample_create("Monthly Update"))
        .await
        .unwrap();
    let second = service
        .create_blog(&admin, sample_create("Monthly Update"))
        .await
        .unwrap();
    let third = service
        .create_blog(&admin, sample_create("Monthly Update"))
        .await
        .unwrap();

    assert_eq!(first.slug, "monthly-update");
    assert_eq!(second.slug, "monthly-update-1");
    assert_eq!(third.slug, "monthly-update-2");
}

#[tokio::test]
async fn resaving_the_same_title_keeps_the_slug_unsuffixed() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let admin = admin_actor();

    let created = service
        .create_blog(&admin, sample_create("Pride March Recap"))
        .await
        .unwrap();

    let updated = service
        .update_blog(
            &admin,
            created.id,
            UpdateBlogCommand {
                title: Some("Pride March Recap".into()),
                ..UpdateBlogCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, "pride-march-recap");
}

#[tokio::test]
async fn update_without_title_leaves_slug_alone() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let admin = admin_actor();

    let created = service
        .create_blog(&admin, sample_create("Volunteer Drive"))
        .await
        .unwrap();

    let updated = service
        .update_blog(
            &admin,
            created.id,
            UpdateBlogCommand {
                excerpt: Some("Revised excerpt.".into()),
                ..UpdateBlogCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, created.slug);
    assert_eq!(updated.excerpt, "Revised excerpt.");
}

#[tokio::test]
async fn changing_the_title_reslugs_into_free_space() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let admin = admin_actor();

    let created = service
        .create_blog(&admin, sample_create("Old Name"))
        .await
        .unwrap();
    service
        .create_blog(&admin, sample_create("New Name"))
        .await
        .unwrap();

    let updated = service
        .update_blog(
            &admin,
            created.id,
            UpdateBlogCommand {
                title: Some("New Name".into()),
                ..UpdateBlogCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.slug, "new-name-1");
}

#[tokio::test]
async fn non_admin_writes_are_forbidden() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let member = member_actor();

    let err = service
        .create_blog(&member, sample_create("Nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = service.delete_blog(&member, 1).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn update_of_missing_blog_is_not_found() {
    let lookup = MemorySlugLookup::new();
    let service = service(&lookup);
    let admin = admin_actor();

    let err = service
        .update_blog(&admin, 99, UpdateBlogCommand::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
