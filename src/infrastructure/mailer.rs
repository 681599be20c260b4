use crate::application::{
    error::ApplicationResult,
    ports::mailer::{Mailer, OutgoingEmail},
};
use async_trait::async_trait;

/// Mail delivery that only writes to the log. Stands in for a real SMTP
/// relay in development and test environments; swap the port implementation
/// to integrate a provider.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> ApplicationResult<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body_len = email.text.len(),
            "outgoing email"
        );
        tracing::debug!(text = %email.text, "email body");
        Ok(())
    }
}
