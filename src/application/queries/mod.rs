pub mod blogs;
pub mod comments;
pub mod events;
pub mod gallery;
pub mod ideas;
pub mod media;
pub mod stories;
pub mod submissions;
pub mod subscriptions;
