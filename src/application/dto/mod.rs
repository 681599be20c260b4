pub mod auth;
pub mod content;
pub mod engagement;
pub mod pagination;

pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResponseDto, TokenSubject, UserDto};
pub use content::{
    BlogDto, BlogSectionDto, EventDto, GalleryItemDto, IdeaDto, MediaDto, StoryDto,
};
pub use engagement::{
    AppointmentDto, CommentDto, ContactDto, MembershipAddressDto, MembershipDto, SubscriptionDto,
};
pub use pagination::{Page, page_offset};
