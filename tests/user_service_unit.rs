mod support;

use std::sync::Arc;

use chrono::{Duration, Utc};
use ngo_core::application::commands::submissions::MailBranding;
use ngo_core::application::commands::users::{
    LoginCommand, ResetPasswordCommand, SignupCommand, UserCommandService,
};
use ngo_core::application::error::ApplicationError;
use ngo_core::domain::user::{Role, UserId, UserRepository};
use support::{
    DummyPasswordHasher, DummyTokenManager, FixedClock, InMemoryUserRepo, RecordingMailer,
    admin_actor,
};

fn service(repo: Arc<InMemoryUserRepo>) -> UserCommandService {
    service_with_mailer(repo, RecordingMailer::new())
}

fn service_with_mailer(
    repo: Arc<InMemoryUserRepo>,
    mailer: Arc<RecordingMailer>,
) -> UserCommandService {
    UserCommandService::new(
        repo,
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        mailer,
        Arc::new(FixedClock(Utc::now())),
        MailBranding {
            org_name: "Sneh Foundation".into(),
            inbox: "contact@sneh.test".into(),
            frontend_url: "http://sneh.test".into(),
        },
    )
}

fn signup(name: &str, email: &str, role: Option<Role>) -> SignupCommand {
    SignupCommand {
        name: name.to_string(),
        email: email.to_string(),
        password: "correct horse".into(),
        role,
        profile_pic: None,
        mobile: None,
    }
}

#[tokio::test]
async fn first_account_becomes_admin() {
    let service = service(Arc::new(InMemoryUserRepo::new()));

    let first = service
        .signup(None, signup("Founder", "founder@example.org", None))
        .await
        .unwrap();
    assert_eq!(first.user.role, Role::Admin);

    let second = service
        .signup(None, signup("Next", "next@example.org", None))
        .await
        .unwrap();
    assert_eq!(second.user.role, Role::Member);
}

#[tokio::test]
async fn only_admins_mint_further_admins() {
    let service = service(Arc::new(InMemoryUserRepo::new()));
    service
        .signup(None, signup("Founder", "founder@example.org", None))
        .await
        .unwrap();

    let err = service
        .signup(
            None,
            signup("Sneaky", "sneaky@example.org", Some(Role::Admin)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let granted = service
        .signup(
            Some(&admin_actor()),
            signup("Second Admin", "admin2@example.org", Some(Role::Admin)),
        )
        .await
        .unwrap();
    assert_eq!(granted.user.role, Role::Admin);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let service = service(Arc::new(InMemoryUserRepo::new()));
    service
        .signup(None, signup("One", "same@example.org", None))
        .await
        .unwrap();

    let err = service
        .signup(None, signup("Two", "Same@Example.org", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn short_passwords_are_rejected() {
    let service = service(Arc::new(InMemoryUserRepo::new()));
    let mut command = signup("One", "one@example.org", None);
    command.password = "short".into();

    let err = service.signup(None, command).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn login_round_trip_and_bad_password() {
    let service = service(Arc::new(InMemoryUserRepo::new()));
    service
        .signup(None, signup("Founder", "founder@example.org", None))
        .await
        .unwrap();

    let ok = service
        .login(LoginCommand {
            email: "founder@example.org".into(),
            password: "correct horse".into(),
        })
        .await
        .unwrap();
    assert!(!ok.auth.token.is_empty());

    let err = service
        .login(LoginCommand {
            email: "founder@example.org".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn forgot_password_stores_token_and_mails_reset_link() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let mailer = RecordingMailer::new();
    let service = service_with_mailer(repo.clone(), mailer.clone());

    let created = service
        .signup(None, signup("Founder", "founder@example.org", None))
        .await
        .unwrap();

    service.forgot_password("founder@example.org").await.unwrap();

    let token = repo
        .reset_token_for(UserId::new(created.user.id).unwrap())
        .expect("token stored");
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "founder@example.org");
    assert!(sent[0].text.contains(&format!(
        "http://sneh.test/reset-password?token={token}"
    )));
}

#[tokio::test]
async fn forgot_password_for_unknown_email_is_not_found() {
    let service = service(Arc::new(InMemoryUserRepo::new()));
    let err = service
        .forgot_password("nobody@example.org")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn reset_password_consumes_the_token() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let service = service(repo.clone());
    let created = service
        .signup(None, signup("Founder", "founder@example.org", None))
        .await
        .unwrap();

    service.forgot_password("founder@example.org").await.unwrap();
    let token = repo
        .reset_token_for(UserId::new(created.user.id).unwrap())
        .unwrap();

    service
        .reset_password(ResetPasswordCommand {
            token: token.clone(),
            password: "a new longer password".into(),
        })
        .await
        .unwrap();

    let ok = service
        .login(LoginCommand {
            email: "founder@example.org".into(),
            password: "a new longer password".into(),
        })
        .await
        .unwrap();
    assert!(!ok.auth.token.is_empty());

    let old = service
        .login(LoginCommand {
            email: "founder@example.org".into(),
            password: "correct horse".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(old, ApplicationError::Unauthorized(_)));

    // The token is single use.
    let reused = service
        .reset_password(ResetPasswordCommand {
            token,
            password: "yet another password".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(reused, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn expired_or_unknown_reset_tokens_are_rejected() {
    let repo = Arc::new(InMemoryUserRepo::new());
    let service = service(repo.clone());
    let created = service
        .signup(None, signup("Founder", "founder@example.org", None))
        .await
        .unwrap();

    let err = service
        .reset_password(ResetPasswordCommand {
            token: "no-such-token".into(),
            password: "a new longer password".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let id = UserId::new(created.user.id).unwrap();
    repo.set_reset_token(id, "stale", Utc::now() - Duration::minutes(1))
        .await
        .unwrap();
    let err = service
        .reset_password(ResetPasswordCommand {
            token: "stale".into(),
            password: "a new longer password".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}
