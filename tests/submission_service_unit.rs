mod support;

use std::sync::Arc;

use ngo_core::application::commands::submissions::{
    MailBranding, SubmissionCommandService, SubmitAppointmentCommand, SubmitContactCommand,
    SubmitMembershipCommand,
};
use ngo_core::application::error::ApplicationError;
use ngo_core::domain::submission::MembershipAddress;
use support::{
    InMemoryAppointmentRepo, InMemoryContactRepo, InMemoryMembershipRepo, RecordingMailer,
    admin_actor, member_actor,
};

fn service(
    contacts: Arc<InMemoryContactRepo>,
    mailer: Arc<RecordingMailer>,
) -> SubmissionCommandService {
    SubmissionCommandService::new(
        contacts,
        Arc::new(InMemoryAppointmentRepo::new()),
        Arc::new(InMemoryMembershipRepo::new()),
        mailer,
        MailBranding {
            org_name: "Sneh Foundation".into(),
            inbox: "contact@sneh.test".into(),
            frontend_url: "http://sneh.test".into(),
        },
    )
}

#[tokio::test]
async fn contact_submission_sends_confirmation_and_notification() {
    let contacts = Arc::new(InMemoryContactRepo::new());
    let mailer = RecordingMailer::new();
    let service = service(contacts.clone(), mailer.clone());

    let saved = service
        .submit_contact(SubmitContactCommand {
            name: "Meera".into(),
            email: "Meera@Example.org".into(),
            phone: None,
            subject: "Volunteering".into(),
            message: "How can I help?".into(),
        })
        .await
        .unwrap();
    assert_eq!(saved.email, "meera@example.org");
    assert_eq!(contacts.stored().len(), 1);

    let sent = mailer.wait_for(2).await;
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().any(|m| m.to == "meera@example.org"));
    assert!(sent.iter().any(|m| m.to == "contact@sneh.test"));
}

#[tokio::test]
async fn invalid_contact_email_stores_nothing() {
    let contacts = Arc::new(InMemoryContactRepo::new());
    let mailer = RecordingMailer::new();
    let service = service(contacts.clone(), mailer.clone());

    let err = service
        .submit_contact(SubmitContactCommand {
            name: "Meera".into(),
            email: "no-at-sign".into(),
            phone: None,
            subject: "Hi".into(),
            message: "Hello".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert!(contacts.stored().is_empty());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn contact_starts_pending_and_admin_updates_status() {
    let contacts = Arc::new(InMemoryContactRepo::new());
    let mailer = RecordingMailer::new();
    let service = service(contacts.clone(), mailer.clone());

    let saved = service
        .submit_contact(SubmitContactCommand {
            name: "Meera".into(),
            email: "meera@example.org".into(),
            phone: None,
            subject: "Volunteering".into(),
            message: "How can I help?".into(),
        })
        .await
        .unwrap();
    assert_eq!(saved.status, "pending");

    let err = service
        .set_contact_status(&member_actor(), saved.id, "resolved")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let updated = service
        .set_contact_status(&admin_actor(), saved.id, "resolved")
        .await
        .unwrap();
    assert_eq!(updated.status, "resolved");
    assert_eq!(contacts.stored()[0].status, "resolved");
}

#[tokio::test]
async fn appointment_starts_new_and_admin_updates_status() {
    let mailer = RecordingMailer::new();
    let service = service(Arc::new(InMemoryContactRepo::new()), mailer.clone());

    let saved = service
        .submit_appointment(SubmitAppointmentCommand {
            name: "Dev".into(),
            mobile: "9999999999".into(),
            email: "dev@example.org".into(),
            message: "Counselling session".into(),
        })
        .await
        .unwrap();
    assert_eq!(saved.status, "new");

    let updated = service
        .set_appointment_status(&admin_actor(), saved.id, "confirmed")
        .await
        .unwrap();
    assert_eq!(updated.status, "confirmed");
}

#[tokio::test]
async fn membership_application_notifies_both_sides() {
    let mailer = RecordingMailer::new();
    let service = service(Arc::new(InMemoryContactRepo::new()), mailer.clone());

    let saved = service
        .submit_membership(SubmitMembershipCommand {
            first_name: "Anya".into(),
            last_name: "Rao".into(),
            email: "anya@example.org".into(),
            mobile: None,
            address: MembershipAddress::default(),
            motivation: Some("Community work".into()),
            id_proof_file: Some("/uploads/memberships/abc.pdf".into()),
        })
        .await
        .unwrap();
    assert_eq!(saved.status, "pending");

    let sent = mailer.wait_for(2).await;
    assert!(sent.iter().any(|m| m.to == "anya@example.org"));
    assert!(
        sent.iter()
            .any(|m| m.to == "contact@sneh.test" && m.subject.contains("membership"))
    );
}
