//! Public form submissions (contact, appointment, membership): persist the
//! record, then send a confirmation to the submitter and a notification to
//! the site inbox. Mail is fire-and-forget; delivery failures are logged
//! and never fail the request.

use super::{ensure_admin, require_field};
use crate::{
    application::{
        dto::{AppointmentDto, AuthenticatedUser, ContactDto, MembershipDto},
        error::{ApplicationError, ApplicationResult},
        ports::mailer::{Mailer, OutgoingEmail},
    },
    domain::{
        submission::{
            AppointmentRepository, ContactRepository, MembershipAddress, MembershipRepository,
            NewAppointment, NewContactMessage, NewMembershipApplication,
        },
        user::EmailAddress,
    },
};
use std::sync::Arc;

/// Sender-side identity rendered into outgoing mail, plus the public site
/// base URL used when a message carries a link back to the frontend.
#[derive(Debug, Clone)]
pub struct MailBranding {
    pub org_name: String,
    pub inbox: String,
    pub frontend_url: String,
}

pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

pub struct SubmitAppointmentCommand {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
}

pub struct SubmitMembershipCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub address: MembershipAddress,
    pub motivation: Option<String>,
    pub id_proof_file: Option<String>,
}

pub struct SubmissionCommandService {
    contacts: Arc<dyn ContactRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    memberships: Arc<dyn MembershipRepository>,
    mailer: Arc<dyn Mailer>,
    branding: MailBranding,
}

impl SubmissionCommandService {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        memberships: Arc<dyn MembershipRepository>,
        mailer: Arc<dyn Mailer>,
        branding: MailBranding,
    ) -> Self {
        Self {
            contacts,
            appointments,
            memberships,
            mailer,
            branding,
        }
    }

    pub async fn submit_contact(
        &self,
        command: SubmitContactCommand,
    ) -> ApplicationResult<ContactDto> {
        require_field(&command.name, "name")?;
        require_field(&command.subject, "subject")?;
        require_field(&command.message, "message")?;
        let email = EmailAddress::new(&command.email)?;

        let saved = self
            .contacts
            .insert(NewContactMessage {
                name: command.name,
                email: email.as_str().to_string(),
                phone: command.phone,
                subject: command.subject,
                message: command.message,
            })
            .await?;

        self.dispatch(confirmation_email(
            &self.branding,
            email.as_str(),
            &saved.name,
            "contacting us",
            &format!("Subject: {}\n\n{}", saved.subject, saved.message),
        ));
        self.dispatch(inbox_notification(
            &self.branding,
            "New contact message",
            &format!(
                "From: {} <{}>\nSubject: {}\n\n{}",
                saved.name,
                saved.email,
                saved.subject,
                saved.message
            ),
        ));

        Ok(saved.into())
    }

    pub async fn submit_appointment(
        &self,
        command: SubmitAppointmentCommand,
    ) -> ApplicationResult<AppointmentDto> {
        require_field(&command.name, "name")?;
        require_field(&command.mobile, "mobile")?;
        require_field(&command.message, "message")?;
        let email = EmailAddress::new(&command.email)?;

        let saved = self
            .appointments
            .insert(NewAppointment {
                name: command.name,
                mobile: command.mobile,
                email: email.as_str().to_string(),
                message: command.message,
            })
            .await?;

        self.dispatch(confirmation_email(
            &self.branding,
            email.as_str(),
            &saved.name,
            "requesting an appointment",
            &saved.message,
        ));
        self.dispatch(inbox_notification(
            &self.branding,
            "New appointment request",
            &format!(
                "From: {} <{}> ({})\n\n{}",
                saved.name, saved.email, saved.mobile, saved.message
            ),
        ));

        Ok(saved.into())
    }

    pub async fn submit_membership(
        &self,
        command: SubmitMembershipCommand,
    ) -> ApplicationResult<MembershipDto> {
        require_field(&command.first_name, "first name")?;
        require_field(&command.last_name, "last name")?;
        let email = EmailAddress::new(&command.email)?;

        let saved = self
            .memberships
            .insert(NewMembershipApplication {
                first_name: command.first_name,
                last_name: command.last_name,
                email: email.as_str().to_string(),
                mobile: command.mobile,
                address: command.address,
                motivation: command.motivation,
                id_proof_file: command.id_proof_file,
            })
            .await?;

        let full_name = format!("{} {}", saved.first_name, saved.last_name);
        self.dispatch(confirmation_email(
            &self.branding,
            email.as_str(),
            &full_name,
            "applying for membership",
            "Our team will review your application and get back to you.",
        ));
        self.dispatch(inbox_notification(
            &self.branding,
            "New membership application",
            &format!("From: {full_name} <{}>", saved.email),
        ));

        Ok(saved.into())
    }

    pub async fn set_contact_status(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        status: &str,
    ) -> ApplicationResult<ContactDto> {
        ensure_admin(actor)?;
        require_field(status, "status")?;
        let updated = self.contacts.set_status(id, status).await?;
        Ok(updated.into())
    }

    pub async fn set_appointment_status(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        status: &str,
    ) -> ApplicationResult<AppointmentDto> {
        ensure_admin(actor)?;
        require_field(status, "status")?;
        let updated = self.appointments.set_status(id, status).await?;
        Ok(updated.into())
    }

    pub async fn set_membership_status(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        status: &str,
    ) -> ApplicationResult<MembershipDto> {
        ensure_admin(actor)?;
        require_field(status, "status")?;
        let updated = self.memberships.set_status(id, status).await?;
        Ok(updated.into())
    }

    pub async fn delete_contact(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.contacts.delete(id).await
            .map_err(ApplicationError::from)
    }

    pub async fn delete_appointment(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.appointments.delete(id).await.map_err(ApplicationError::from)
    }

    pub async fn delete_membership(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_admin(actor)?;
        self.memberships.delete(id).await.map_err(ApplicationError::from)
    }

    fn dispatch(&self, email: OutgoingEmail) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(err) = mailer.send(email).await {
                tracing::warn!(error = %err, "failed to send submission email");
            }
        });
    }
}

fn confirmation_email(
    branding: &MailBranding,
    to: &str,
    name: &str,
    reason: &str,
    details: &str,
) -> OutgoingEmail {
    let subject = format!("Thank you for {reason} - {}", branding.org_name);
    let text = format!(
        "Dear {name},\n\nThank you for {reason}. We have received your submission \
         and one of our team members will respond shortly.\n\n{details}\n\nWith \
         solidarity,\n{} Team",
        branding.org_name
    );
    let html = format!(
        "<p>Dear <strong>{name}</strong>,</p>\
         <p>Thank you for {reason}. We have received your submission and one of \
         our team members will respond shortly.</p>\
         <pre>{details}</pre>\
         <p>With solidarity,<br/>{} Team</p>",
        branding.org_name
    );
    OutgoingEmail {
        to: to.to_string(),
        subject,
        text,
        html,
    }
}

fn inbox_notification(branding: &MailBranding, subject: &str, body: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: branding.inbox.clone(),
        subject: subject.to_string(),
        text: body.to_string(),
        html: format!("<pre>{body}</pre>"),
    }
}
