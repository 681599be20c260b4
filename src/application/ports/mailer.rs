use crate::application::ApplicationResult;
use async_trait::async_trait;

/// An outbound email with both plain-text and HTML renderings.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Fire-and-forget delivery channel. Callers spawn sends off the request
/// path and log failures; a mail error never fails the originating request.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> ApplicationResult<()>;
}
