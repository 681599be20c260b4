//! In-memory test doubles for repositories and ports.

use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use ngo_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use ngo_core::application::error::{ApplicationError, ApplicationResult};
use ngo_core::application::ports::{
    mailer::{Mailer, OutgoingEmail},
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use ngo_core::domain::blog::{Blog, BlogFilter, BlogId, BlogRepository, BlogUpdate, NewBlog};
use ngo_core::domain::comment::{Comment, CommentRepository, CommentUpdate, NewComment};
use ngo_core::domain::errors::{DomainError, DomainResult};
use ngo_core::domain::slug::{Slug, SlugLookup, SlugScope};
use ngo_core::domain::submission::{
    Appointment, AppointmentRepository, ContactMessage, ContactRepository, MembershipApplication,
    MembershipRepository, NewAppointment, NewContactMessage, NewMembershipApplication,
};
use ngo_core::domain::subscription::{Subscription, SubscriptionRepository, SubscriptionStatus};
use ngo_core::domain::user::{EmailAddress, NewUser, Role, User, UserId, UserRepository};

/* -------------------------------- actors -------------------------------- */

pub fn admin_actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(1).unwrap(),
        name: "admin".into(),
        role: Role::Admin,
        issued_at: Utc::now(),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

pub fn member_actor() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(2).unwrap(),
        name: "member".into(),
        role: Role::Member,
        issued_at: Utc::now(),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

/* -------------------------------- slugs -------------------------------- */

/// Slug table shared between the lookup and the in-memory repositories.
/// `claim` mirrors the database unique constraint: check and insert happen
/// under one lock, so a racing second writer gets `Conflict`.
#[derive(Default)]
pub struct MemorySlugLookup {
    taken: Mutex<HashMap<SlugScope, Vec<(i64, String)>>>,
}

impl MemorySlugLookup {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, scope: SlugScope, id: i64, slug: &str) {
        self.taken
            .lock()
            .unwrap()
            .entry(scope)
            .or_default()
            .push((id, slug.to_string()));
    }

    pub fn claim(&self, scope: SlugScope, id: i64, slug: &str) -> DomainResult<()> {
        let mut taken = self.taken.lock().unwrap();
        let rows = taken.entry(scope).or_default();
        if rows.iter().any(|(owner, s)| *owner != id && s == slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        rows.retain(|(owner, _)| *owner != id);
        rows.push((id, slug.to_string()));
        Ok(())
    }

    pub fn release(&self, scope: SlugScope, id: i64) {
        let mut taken = self.taken.lock().unwrap();
        if let Some(rows) = taken.get_mut(&scope) {
            rows.retain(|(owner, _)| *owner != id);
        }
    }
}

#[async_trait]
impl SlugLookup for MemorySlugLookup {
    async fn exists(
        &self,
        scope: SlugScope,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        let taken = self.taken.lock().unwrap();
        Ok(taken
            .get(&scope)
            .map(|rows| {
                rows.iter()
                    .any(|(owner, s)| s == candidate && Some(*owner) != exclude_id)
            })
            .unwrap_or(false))
    }
}

/* -------------------------------- blogs -------------------------------- */

pub struct InMemoryBlogRepo {
    slugs: Arc<MemorySlugLookup>,
    inner: Mutex<HashMap<i64, Blog>>,
    next_id: AtomicI64,
}

impl InMemoryBlogRepo {
    pub fn new(slugs: Arc<MemorySlugLookup>) -> Self {
        Self {
            slugs,
            inner: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepo {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.slugs.claim(SlugScope::Blog, id, blog.slug.as_str())?;

        let now = Utc::now();
        let stored = Blog {
            id: BlogId::new(id)?,
            title: blog.title,
            slug: blog.slug,
            excerpt: blog.excerpt,
            content: blog.content,
            featured_image: blog.featured_image,
            is_featured: blog.is_featured,
            tags: blog.tags,
            read_time: blog.read_time,
            sections: blog.sections,
            author_name: blog.author_name,
            author_bio: blog.author_bio,
            published_date: blog.published_date,
            category: blog.category,
            meta_title: blog.meta_title,
            meta_description: blog.meta_description,
            seo_keywords: blog.seo_keywords,
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: BlogId, update: BlogUpdate) -> DomainResult<Blog> {
        if let Some(slug) = &update.slug {
            self.slugs
                .claim(SlugScope::Blog, i64::from(id), slug.as_str())?;
        }

        let mut map = self.inner.lock().unwrap();
        let blog = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("blog not found".into()))?;

        if let Some(title) = update.title {
            blog.title = title;
        }
        if let Some(slug) = update.slug {
            blog.slug = slug;
        }
        if let Some(excerpt) = update.excerpt {
            blog.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            blog.content = content;
        }
        if let Some(featured_image) = update.featured_image {
            blog.featured_image = featured_image;
        }
        if let Some(is_featured) = update.is_featured {
            blog.is_featured = is_featured;
        }
        if let Some(tags) = update.tags {
            blog.tags = tags;
        }
        if let Some(read_time) = update.read_time {
            blog.read_time = read_time;
        }
        if let Some(sections) = update.sections {
            blog.sections = sections;
        }
        if let Some(author_name) = update.author_name {
            blog.author_name = author_name;
        }
        if let Some(author_bio) = update.author_bio {
            blog.author_bio = Some(author_bio);
        }
        if let Some(category) = update.category {
            blog.category = category;
        }
        if let Some(meta_title) = update.meta_title {
            blog.meta_title = Some(meta_title);
        }
        if let Some(meta_description) = update.meta_description {
            blog.meta_description = Some(meta_description);
        }
        if let Some(seo_keywords) = update.seo_keywords {
            blog.seo_keywords = Some(seo_keywords);
        }
        blog.updated_at = Utc::now();
        Ok(blog.clone())
    }

    async fn delete(&self, id: BlogId) -> DomainResult<()> {
        let removed = self.inner.lock().unwrap().remove(&i64::from(id));
        if removed.is_none() {
            return Err(DomainError::NotFound("blog not found".into()));
        }
        self.slugs.release(SlugScope::Blog, i64::from(id));
        Ok(())
    }

    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Blog>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|b| b.slug == *slug)
            .cloned())
    }

    async fn list(
        &self,
        filter: &BlogFilter,
        limit: Option<u32>,
        offset: u32,
    ) -> DomainResult<(Vec<Blog>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut rows: Vec<Blog> = map
            .values()
            .filter(|b| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|c| b.category == c)
                    && (!filter.featured_only || b.is_featured)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then(b.published_date.cmp(&a.published_date))
        });
        let total = rows.len() as u64;
        let rows = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit.map(|l| l as usize).unwrap_or(usize::MAX))
            .collect();
        Ok((rows, total))
    }

    async fn distinct_categories(&self) -> DomainResult<Vec<String>> {
        let map = self.inner.lock().unwrap();
        let mut categories: Vec<String> = map.values().map(|b| b.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

/* -------------------------------- comments -------------------------------- */

#[derive(Default)]
pub struct InMemoryCommentRepo {
    inner: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
}

impl InMemoryCommentRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let stored = Comment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            blog_id: comment.blog_id,
            name: comment.name,
            email: comment.email,
            profile_image: comment.profile_image,
            body: comment.body,
            is_approved: comment.is_approved,
            created_at: Utc::now(),
        };
        self.inner.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, update: CommentUpdate) -> DomainResult<Comment> {
        let mut rows = self.inner.lock().unwrap();
        let comment = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        if let Some(name) = update.name {
            comment.name = name;
        }
        if let Some(email) = update.email {
            comment.email = email;
        }
        if let Some(profile_image) = update.profile_image {
            comment.profile_image = Some(profile_image);
        }
        if let Some(body) = update.body {
            comment.body = body;
        }
        Ok(comment.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut rows = self.inner.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Comment>> {
        Ok(self.inner.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn list_for_blog(
        &self,
        blog_id: BlogId,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let rows = self.inner.lock().unwrap();
        let mut approved: Vec<Comment> = rows
            .iter()
            .filter(|c| c.blog_id == blog_id && c.is_approved)
            .cloned()
            .collect();
        approved.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = approved.len() as u64;
        let page = approved
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn count_for_blog(&self, blog_id: BlogId) -> DomainResult<u64> {
        let rows = self.inner.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|c| c.blog_id == blog_id && c.is_approved)
            .count() as u64)
    }

    async fn list_all(&self) -> DomainResult<Vec<Comment>> {
        let mut rows = self.inner.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> DomainResult<Comment> {
        let mut rows = self.inner.lock().unwrap();
        let comment = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.is_approved = approved;
        Ok(comment.clone())
    }
}

/* -------------------------------- subscriptions -------------------------------- */

#[derive(Default)]
pub struct InMemorySubscriptionRepo {
    inner: Mutex<Vec<Subscription>>,
    next_id: AtomicI64,
}

impl InMemorySubscriptionRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepo {
    async fn insert(&self, email: &str) -> DomainResult<Subscription> {
        let mut rows = self.inner.lock().unwrap();
        if rows.iter().any(|s| s.email == email) {
            return Err(DomainError::Conflict("email already subscribed".into()));
        }
        let stored = Subscription {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: email.to_string(),
            status: SubscriptionStatus::Active,
            subscribed_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Subscription>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn list(&self, status: Option<SubscriptionStatus>) -> DomainResult<Vec<Subscription>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: i64, status: SubscriptionStatus) -> DomainResult<Subscription> {
        let mut rows = self.inner.lock().unwrap();
        let sub = rows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::NotFound("subscription not found".into()))?;
        sub.status = status;
        Ok(sub.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut rows = self.inner.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("subscription not found".into()));
        }
        Ok(())
    }
}

/* -------------------------------- submissions -------------------------------- */

#[derive(Default)]
pub struct InMemoryContactRepo {
    inner: Mutex<Vec<ContactMessage>>,
    next_id: AtomicI64,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn stored(&self) -> Vec<ContactMessage> {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepo {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let now = Utc::now();
        let stored = ContactMessage {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: message.name,
            email: message.email,
            phone: message.phone,
            subject: message.subject,
            message: message.message,
            status: "pending".into(),
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ContactMessage>> {
        Ok(self.inner.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ContactMessage>> {
        Ok(self.stored())
    }

    async fn set_status(&self, id: i64, status: &str) -> DomainResult<ContactMessage> {
        let mut rows = self.inner.lock().unwrap();
        let message = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;
        message.status = status.to_string();
        message.updated_at = Utc::now();
        Ok(message.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAppointmentRepo {
    inner: Mutex<Vec<Appointment>>,
    next_id: AtomicI64,
}

impl InMemoryAppointmentRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepo {
    async fn insert(&self, appointment: NewAppointment) -> DomainResult<Appointment> {
        let now = Utc::now();
        let stored = Appointment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: appointment.name,
            mobile: appointment.mobile,
            email: appointment.email,
            message: appointment.message,
            status: "new".into(),
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Appointment>> {
        Ok(self.inner.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Appointment>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn set_status(&self, id: i64, status: &str) -> DomainResult<Appointment> {
        let mut rows = self.inner.lock().unwrap();
        let appointment = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("appointment not found".into()))?;
        appointment.status = status.to_string();
        appointment.updated_at = Utc::now();
        Ok(appointment.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryMembershipRepo {
    inner: Mutex<Vec<MembershipApplication>>,
    next_id: AtomicI64,
}

impl InMemoryMembershipRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepo {
    async fn insert(
        &self,
        application: NewMembershipApplication,
    ) -> DomainResult<MembershipApplication> {
        let now = Utc::now();
        let stored = MembershipApplication {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            first_name: application.first_name,
            last_name: application.last_name,
            email: application.email,
            mobile: application.mobile,
            address: application.address,
            motivation: application.motivation,
            id_proof_file: application.id_proof_file,
            status: "pending".into(),
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<MembershipApplication>> {
        Ok(self.inner.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<MembershipApplication>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn set_status(&self, id: i64, status: &str) -> DomainResult<MembershipApplication> {
        let mut rows = self.inner.lock().unwrap();
        let application = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DomainError::NotFound("membership application not found".into()))?;
        application.status = status.to_string();
        application.updated_at = Utc::now();
        Ok(application.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.inner.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }
}

/* -------------------------------- users -------------------------------- */

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
    reset_tokens: Mutex<HashMap<i64, (String, DateTime<Utc>)>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
            reset_tokens: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn reset_token_for(&self, id: UserId) -> Option<String> {
        self.reset_tokens
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .map(|(token, _)| token.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let now = Utc::now();
        let stored = User {
            id: UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            profile_pic: user.profile_pic,
            mobile: user.mobile,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn set_reset_token(
        &self,
        id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        if !self.inner.lock().unwrap().iter().any(|u| u.id == id) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        self.reset_tokens
            .lock()
            .unwrap()
            .insert(i64::from(id), (token.to_string(), expires_at));
        Ok(())
    }

    async fn find_by_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<User>> {
        let tokens = self.reset_tokens.lock().unwrap();
        let holder = tokens
            .iter()
            .find(|(_, (stored, expires))| stored == token && *expires > now)
            .map(|(id, _)| *id);
        drop(tokens);
        Ok(holder
            .and_then(|id| self.inner.lock().unwrap().iter().find(|u| i64::from(u.id) == id).cloned()))
    }

    async fn reset_password(&self, id: UserId, password_hash: &str) -> DomainResult<()> {
        let mut users = self.inner.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        drop(users);
        self.reset_tokens.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}

/* -------------------------------- ports -------------------------------- */

pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", i64::from(subject.user_id)),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized("invalid token"))
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Captures outgoing mail so tests can assert on recipients and subjects.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Mail dispatch is spawned off the request path, so give those tasks a
    /// chance to run before asserting.
    pub async fn wait_for(&self, count: usize) -> Vec<OutgoingEmail> {
        for _ in 0..100 {
            if self.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.sent()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
