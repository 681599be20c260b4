mod support;

use ngo_core::domain::errors::DomainError;
use ngo_core::domain::slug::{SlugAssigner, SlugScope, Title};
use support::MemorySlugLookup;

#[tokio::test]
async fn identical_titles_get_increasing_suffixes() {
    let lookup = MemorySlugLookup::new();
    let assigner = SlugAssigner::new(lookup.clone());
    let title = Title::new("Annual Fundraiser").unwrap();

    for (id, expected) in [
        (1, "annual-fundraiser"),
        (2, "annual-fundraiser-1"),
        (3, "annual-fundraiser-2"),
        (4, "annual-fundraiser-3"),
    ] {
        let slug = assigner.assign(&title, SlugScope::Blog, None).await.unwrap();
        assert_eq!(slug.as_str(), expected);
        lookup.claim(SlugScope::Blog, id, slug.as_str()).unwrap();
    }
}

#[tokio::test]
async fn symbol_only_title_falls_back_to_untitled() {
    let lookup = MemorySlugLookup::new();
    let assigner = SlugAssigner::new(lookup.clone());

    let title = Title::new("!!! ???").unwrap();
    let slug = assigner.assign(&title, SlugScope::Idea, None).await.unwrap();
    assert_eq!(slug.as_str(), "untitled");

    lookup.claim(SlugScope::Idea, 1, "untitled").unwrap();
    let slug = assigner.assign(&title, SlugScope::Idea, None).await.unwrap();
    assert_eq!(slug.as_str(), "untitled-1");
}

#[tokio::test]
async fn update_with_unchanged_title_keeps_own_slug() {
    let lookup = MemorySlugLookup::new();
    lookup.seed(SlugScope::Event, 7, "pride-week");
    let assigner = SlugAssigner::new(lookup.clone());

    let title = Title::new("Pride Week").unwrap();
    let slug = assigner
        .assign(&title, SlugScope::Event, Some(7))
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "pride-week");

    // The same title from a different entity still collides.
    let slug = assigner.assign(&title, SlugScope::Event, None).await.unwrap();
    assert_eq!(slug.as_str(), "pride-week-1");
}

#[tokio::test]
async fn scopes_do_not_share_slugs() {
    let lookup = MemorySlugLookup::new();
    lookup.seed(SlugScope::Blog, 1, "community-health");
    let assigner = SlugAssigner::new(lookup.clone());

    let title = Title::new("Community Health").unwrap();
    let slug = assigner.assign(&title, SlugScope::Media, None).await.unwrap();
    assert_eq!(slug.as_str(), "community-health");
}

// The check-then-insert window is open between probing and the actual write.
// When two writers both probe before either claims, the store's unique gate
// must reject the loser.
#[tokio::test]
async fn racing_writers_resolve_through_the_unique_gate() {
    let lookup = MemorySlugLookup::new();
    let assigner = SlugAssigner::new(lookup.clone());
    let title = Title::new("Annual Gala").unwrap();

    let first = assigner.assign(&title, SlugScope::Blog, None).await.unwrap();
    let second = assigner.assign(&title, SlugScope::Blog, None).await.unwrap();
    assert_eq!(first.as_str(), "annual-gala");
    assert_eq!(second.as_str(), "annual-gala");

    let winner = lookup.claim(SlugScope::Blog, 1, first.as_str());
    let loser = lookup.claim(SlugScope::Blog, 2, second.as_str());
    assert!(winner.is_ok());
    assert!(matches!(loser, Err(DomainError::Conflict(_))));

    // The loser retries and lands on the suffixed candidate.
    let retry = assigner.assign(&title, SlugScope::Blog, None).await.unwrap();
    assert_eq!(retry.as_str(), "annual-gala-1");
    lookup.claim(SlugScope::Blog, 2, retry.as_str()).unwrap();
}
