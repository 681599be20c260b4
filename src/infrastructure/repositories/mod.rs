mod error;
mod postgres_blog;
mod postgres_comment;
mod postgres_event;
mod postgres_gallery;
mod postgres_idea;
mod postgres_media;
mod postgres_story;
mod postgres_submission;
mod postgres_subscription;
mod postgres_user;
mod slug_lookup;

pub use error::map_sqlx;
pub use postgres_blog::PostgresBlogRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_event::PostgresEventRepository;
pub use postgres_gallery::PostgresGalleryRepository;
pub use postgres_idea::PostgresIdeaRepository;
pub use postgres_media::PostgresMediaRepository;
pub use postgres_story::PostgresStoryRepository;
pub use postgres_submission::{
    PostgresAppointmentRepository, PostgresContactRepository, PostgresMembershipRepository,
};
pub use postgres_subscription::PostgresSubscriptionRepository;
pub use postgres_user::PostgresUserRepository;
pub use slug_lookup::PostgresSlugLookup;
