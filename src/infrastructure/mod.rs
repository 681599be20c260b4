pub mod database;
pub mod mailer;
pub mod repositories;
pub mod security;
pub mod time;
pub mod uploads;
