use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, Title};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub i64);

impl EventId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("event id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EventId> for i64 {
    fn from(value: EventId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: Title,
    pub slug: Slug,
    pub date: NaiveDate,
    /// Display time, e.g. "18:00" or "6 PM onwards".
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: Title,
    pub slug: Slug,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub title: Option<Title>,
    pub slug: Option<Slug>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event>;
    async fn update(&self, id: EventId, update: EventUpdate) -> DomainResult<Event>;
    async fn delete(&self, id: EventId) -> DomainResult<()>;
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Event>>;
    /// All events, soonest first.
    async fn list(&self) -> DomainResult<Vec<Event>>;
}
