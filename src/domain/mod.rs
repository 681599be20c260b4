pub mod blog;
pub mod comment;
pub mod errors;
pub mod event;
pub mod gallery;
pub mod idea;
pub mod media;
pub mod slug;
pub mod story;
pub mod submission;
pub mod subscription;
pub mod user;
