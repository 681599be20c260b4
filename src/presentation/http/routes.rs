use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{
        auth, blogs, comments, events, forms, gallery, health, ideas, media, stories,
        subscriptions,
    },
    middleware::rate_limit::rate_limit_layer,
    openapi,
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, patch, post, put},
};
use std::path::Path;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, uploads_dir: &Path, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/healthz", get(health::healthz))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/auth/profile", get(auth::profile))
        .route(
            "/api/blogs",
            get(blogs::list_blogs).post(blogs::create_blog),
        )
        .route("/api/blogs/categories", get(blogs::list_categories))
        .route("/api/blogs/slug/{slug}", get(blogs::get_blog_by_slug))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route(
            "/api/blogs/{id}/comments",
            get(comments::list_for_blog).post(comments::create_comment),
        )
        .route(
            "/api/blogs/{id}/comments/count",
            get(comments::count_for_blog),
        )
        .route("/api/comments", get(comments::list_all))
        .route("/api/comments/{id}/approve", patch(comments::set_approved))
        .route(
            "/api/comments/{id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/api/ideas",
            get(ideas::list_ideas).post(ideas::create_idea),
        )
        .route("/api/ideas/categories", get(ideas::list_categories))
        .route("/api/ideas/slug/{slug}", get(ideas::get_idea_by_slug))
        .route(
            "/api/ideas/{id}",
            get(ideas::get_idea)
                .put(ideas::update_idea)
                .delete(ideas::delete_idea),
        )
        .route("/api/ideas/{id}/like", post(ideas::like_idea))
        .route(
            "/api/media",
            get(media::list_media).post(media::create_media),
        )
        .route("/api/media/kinds", get(media::list_kinds))
        .route("/api/media/slug/{slug}", get(media::get_media_by_slug))
        .route(
            "/api/media/{id}",
            get(media::get_media)
                .put(media::update_media)
                .delete(media::delete_media),
        )
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/api/events/slug/{slug}", get(events::get_event_by_slug))
        .route(
            "/api/events/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/api/stories",
            get(stories::list_stories).post(stories::create_story),
        )
        .route("/api/stories/categories", get(stories::list_categories))
        .route(
            "/api/stories/{id}",
            get(stories::get_story)
                .put(stories::update_story)
                .delete(stories::delete_story),
        )
        .route(
            "/api/gallery",
            get(gallery::list_items).post(gallery::create_item),
        )
        .route("/api/gallery/categories", get(gallery::list_categories))
        .route(
            "/api/gallery/{id}",
            get(gallery::get_item)
                .put(gallery::update_item)
                .delete(gallery::delete_item),
        )
        .route(
            "/api/subscriptions",
            get(subscriptions::list_subscriptions).post(subscriptions::subscribe),
        )
        .route(
            "/api/subscriptions/{id}",
            patch(subscriptions::set_status).delete(subscriptions::delete_subscription),
        )
        .route("/api/contact", post(forms::submit_contact).get(forms::list_contacts))
        .route(
            "/api/contact/{id}",
            get(forms::get_contact).delete(forms::delete_contact),
        )
        .route("/api/contact/{id}/status", put(forms::set_contact_status))
        .route(
            "/api/appointments",
            post(forms::submit_appointment).get(forms::list_appointments),
        )
        .route(
            "/api/appointments/{id}",
            get(forms::get_appointment).delete(forms::delete_appointment),
        )
        .route(
            "/api/appointments/{id}/status",
            put(forms::set_appointment_status),
        )
        .route(
            "/api/memberships",
            post(forms::submit_membership).get(forms::list_memberships),
        )
        .route(
            "/api/memberships/{id}",
            get(forms::get_membership).delete(forms::delete_membership),
        )
        .route(
            "/api/memberships/{id}/status",
            put(forms::set_membership_status),
        )
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(rate_limit_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}
