use crate::application::dto::{
    AppointmentDto, AuthTokenDto, BlogDto, CommentDto, ContactDto, EventDto, GalleryItemDto,
    IdeaDto, LoginResponseDto, MediaDto, MembershipAddressDto, MembershipDto, StoryDto,
    SubscriptionDto, UserDto,
};
use axum::{Router, response::Redirect, routing::get};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::health::healthz,
        crate::presentation::http::controllers::auth::signup,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::forgot_password,
        crate::presentation::http::controllers::auth::reset_password,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::blogs::list_blogs,
        crate::presentation::http::controllers::blogs::create_blog,
        crate::presentation::http::controllers::blogs::list_categories,
        crate::presentation::http::controllers::blogs::get_blog_by_slug,
        crate::presentation::http::controllers::blogs::get_blog,
        crate::presentation::http::controllers::blogs::update_blog,
        crate::presentation::http::controllers::blogs::delete_blog,
        crate::presentation::http::controllers::comments::list_for_blog,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::count_for_blog,
        crate::presentation::http::controllers::comments::list_all,
        crate::presentation::http::controllers::comments::set_approved,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::ideas::list_ideas,
        crate::presentation::http::controllers::ideas::create_idea,
        crate::presentation::http::controllers::ideas::list_categories,
        crate::presentation::http::controllers::ideas::get_idea_by_slug,
        crate::presentation::http::controllers::ideas::get_idea,
        crate::presentation::http::controllers::ideas::update_idea,
        crate::presentation::http::controllers::ideas::delete_idea,
        crate::presentation::http::controllers::ideas::like_idea,
        crate::presentation::http::controllers::media::list_media,
        crate::presentation::http::controllers::media::create_media,
        crate::presentation::http::controllers::media::list_kinds,
        crate::presentation::http::controllers::media::get_media_by_slug,
        crate::presentation::http::controllers::media::get_media,
        crate::presentation::http::controllers::media::update_media,
        crate::presentation::http::controllers::media::delete_media,
        crate::presentation::http::controllers::events::list_events,
        crate::presentation::http::controllers::events::create_event,
        crate::presentation::http::controllers::events::get_event_by_slug,
        crate::presentation::http::controllers::events::get_event,
        crate::presentation::http::controllers::events::update_event,
        crate::presentation::http::controllers::events::delete_event,
        crate::presentation::http::controllers::stories::list_stories,
        crate::presentation::http::controllers::stories::create_story,
        crate::presentation::http::controllers::stories::list_categories,
        crate::presentation::http::controllers::stories::get_story,
        crate::presentation::http::controllers::stories::update_story,
        crate::presentation::http::controllers::stories::delete_story,
        crate::presentation::http::controllers::gallery::list_items,
        crate::presentation::http::controllers::gallery::create_item,
        crate::presentation::http::controllers::gallery::list_categories,
        crate::presentation::http::controllers::gallery::get_item,
        crate::presentation::http::controllers::gallery::update_item,
        crate::presentation::http::controllers::gallery::delete_item,
        crate::presentation::http::controllers::subscriptions::subscribe,
        crate::presentation::http::controllers::subscriptions::list_subscriptions,
        crate::presentation::http::controllers::subscriptions::set_status,
        crate::presentation::http::controllers::subscriptions::delete_subscription,
        crate::presentation::http::controllers::forms::submit_contact,
        crate::presentation::http::controllers::forms::list_contacts,
        crate::presentation::http::controllers::forms::get_contact,
        crate::presentation::http::controllers::forms::set_contact_status,
        crate::presentation::http::controllers::forms::delete_contact,
        crate::presentation::http::controllers::forms::submit_appointment,
        crate::presentation::http::controllers::forms::list_appointments,
        crate::presentation::http::controllers::forms::get_appointment,
        crate::presentation::http::controllers::forms::set_appointment_status,
        crate::presentation::http::controllers::forms::delete_appointment,
        crate::presentation::http::controllers::forms::submit_membership,
        crate::presentation::http::controllers::forms::list_memberships,
        crate::presentation::http::controllers::forms::get_membership,
        crate::presentation::http::controllers::forms::set_membership_status,
        crate::presentation::http::controllers::forms::delete_membership,
    ),
    components(schemas(
        AppointmentDto,
        AuthTokenDto,
        BlogDto,
        CommentDto,
        ContactDto,
        EventDto,
        GalleryItemDto,
        IdeaDto,
        LoginResponseDto,
        MediaDto,
        MembershipAddressDto,
        MembershipDto,
        StoryDto,
        SubscriptionDto,
        UserDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "auth", description = "Accounts, sessions and password recovery"),
        (name = "blogs", description = "Blog posts and their comments"),
        (name = "content", description = "Ideas, media, events, stories and gallery"),
        (name = "engagement", description = "Forms, subscriptions and submissions")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
