use std::sync::Arc;

use crate::{
    application::{
        commands::{
            blogs::BlogCommandService,
            comments::CommentCommandService,
            events::EventCommandService,
            gallery::GalleryCommandService,
            ideas::IdeaCommandService,
            media::MediaCommandService,
            stories::StoryCommandService,
            submissions::{MailBranding, SubmissionCommandService},
            subscriptions::SubscriptionCommandService,
            users::UserCommandService,
        },
        ports::{
            mailer::Mailer,
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            blogs::BlogQueryService, comments::CommentQueryService, events::EventQueryService,
            gallery::GalleryQueryService, ideas::IdeaQueryService, media::MediaQueryService,
            stories::StoryQueryService, submissions::SubmissionQueryService,
            subscriptions::SubscriptionQueryService,
        },
    },
    domain::{
        blog::BlogRepository,
        comment::CommentRepository,
        event::EventRepository,
        gallery::GalleryRepository,
        idea::IdeaRepository,
        media::MediaRepository,
        slug::{SlugAssigner, SlugLookup},
        story::StoryRepository,
        submission::{AppointmentRepository, ContactRepository, MembershipRepository},
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Repository handles needed to assemble [`ApplicationServices`].
pub struct Repositories {
    pub blogs: Arc<dyn BlogRepository>,
    pub ideas: Arc<dyn IdeaRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub events: Arc<dyn EventRepository>,
    pub stories: Arc<dyn StoryRepository>,
    pub gallery: Arc<dyn GalleryRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub users: Arc<dyn UserRepository>,
    pub slug_lookup: Arc<dyn SlugLookup>,
}

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub idea_commands: Arc<IdeaCommandService>,
    pub idea_queries: Arc<IdeaQueryService>,
    pub media_commands: Arc<MediaCommandService>,
    pub media_queries: Arc<MediaQueryService>,
    pub event_commands: Arc<EventCommandService>,
    pub event_queries: Arc<EventQueryService>,
    pub story_commands: Arc<StoryCommandService>,
    pub story_queries: Arc<StoryQueryService>,
    pub gallery_commands: Arc<GalleryCommandService>,
    pub gallery_queries: Arc<GalleryQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub subscription_queries: Arc<SubscriptionQueryService>,
    pub submission_commands: Arc<SubmissionCommandService>,
    pub submission_queries: Arc<SubmissionQueryService>,
    pub user_commands: Arc<UserCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        branding: MailBranding,
    ) -> Self {
        let slugs = Arc::new(SlugAssigner::new(Arc::clone(&repos.slug_lookup)));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&repos.blogs),
            Arc::clone(&slugs),
            Arc::clone(&clock),
        ));
        let blog_queries = Arc::new(BlogQueryService::new(Arc::clone(&repos.blogs)));

        let idea_commands = Arc::new(IdeaCommandService::new(
            Arc::clone(&repos.ideas),
            Arc::clone(&slugs),
        ));
        let idea_queries = Arc::new(IdeaQueryService::new(Arc::clone(&repos.ideas)));

        let media_commands = Arc::new(MediaCommandService::new(
            Arc::clone(&repos.media),
            Arc::clone(&slugs),
        ));
        let media_queries = Arc::new(MediaQueryService::new(Arc::clone(&repos.media)));

        let event_commands = Arc::new(EventCommandService::new(
            Arc::clone(&repos.events),
            Arc::clone(&slugs),
        ));
        let event_queries = Arc::new(EventQueryService::new(Arc::clone(&repos.events)));

        let story_commands = Arc::new(StoryCommandService::new(
            Arc::clone(&repos.stories),
            Arc::clone(&clock),
        ));
        let story_queries = Arc::new(StoryQueryService::new(Arc::clone(&repos.stories)));

        let gallery_commands = Arc::new(GalleryCommandService::new(Arc::clone(&repos.gallery)));
        let gallery_queries = Arc::new(GalleryQueryService::new(Arc::clone(&repos.gallery)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.blogs),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.blogs),
        ));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(Arc::clone(
            &repos.subscriptions,
        )));
        let subscription_queries = Arc::new(SubscriptionQueryService::new(Arc::clone(
            &repos.subscriptions,
        )));

        let submission_commands = Arc::new(SubmissionCommandService::new(
            Arc::clone(&repos.contacts),
            Arc::clone(&repos.appointments),
            Arc::clone(&repos.memberships),
            Arc::clone(&mailer),
            branding.clone(),
        ));
        let submission_queries = Arc::new(SubmissionQueryService::new(
            Arc::clone(&repos.contacts),
            Arc::clone(&repos.appointments),
            Arc::clone(&repos.memberships),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&mailer),
            Arc::clone(&clock),
            branding,
        ));

        Self {
            blog_commands,
            blog_queries,
            idea_commands,
            idea_queries,
            media_commands,
            media_queries,
            event_commands,
            event_queries,
            story_commands,
            story_queries,
            gallery_commands,
            gallery_queries,
            comment_commands,
            comment_queries,
            subscription_commands,
            subscription_queries,
            submission_commands,
            submission_queries,
            user_commands,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
