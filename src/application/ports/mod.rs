pub mod mailer;
pub mod security;
pub mod time;
pub mod uploads;
