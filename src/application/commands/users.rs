use super::{require_field, submissions::MailBranding};
use crate::{
    application::{
        dto::{AuthenticatedUser, LoginResponseDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
        ports::{
            mailer::{Mailer, OutgoingEmail},
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
    },
    domain::user::{EmailAddress, NewUser, Role, UserRepository},
};
use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

/// Reset tokens are single-use and expire after this long.
const RESET_TOKEN_TTL_HOURS: i64 = 1;

pub struct SignupCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub profile_pic: Option<String>,
    pub mobile: Option<String>,
}

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
}

pub struct UserCommandService {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenManager>,
    mailer: Arc<dyn Mailer>,
    clock: Arc<dyn Clock>,
    branding: MailBranding,
}

impl UserCommandService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        branding: MailBranding,
    ) -> Self {
        Self {
            repo,
            hasher,
            tokens,
            mailer,
            clock,
            branding,
        }
    }

    /// The very first account becomes admin; after that only an
    /// authenticated admin may grant the admin role.
    pub async fn signup(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: SignupCommand,
    ) -> ApplicationResult<LoginResponseDto> {
        require_field(&command.name, "name")?;
        if command.password.len() < 8 {
            return Err(ApplicationError::validation(
                "password must be at least 8 characters",
            ));
        }
        let email = EmailAddress::new(&command.email)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("user already exists"));
        }

        let first_account = self.repo.count().await? == 0;
        let role = match command.role {
            Some(Role::Admin) if first_account || actor.is_some_and(AuthenticatedUser::is_admin) => {
                Role::Admin
            }
            Some(Role::Admin) => {
                return Err(ApplicationError::forbidden(
                    "only admins can create admin accounts",
                ));
            }
            Some(Role::Member) | None if first_account => Role::Admin,
            Some(Role::Member) | None => Role::Member,
        };

        let password_hash = self.hasher.hash(&command.password).await?;
        let created = self
            .repo
            .insert(NewUser {
                name: command.name,
                email,
                password_hash,
                role,
                profile_pic: command.profile_pic,
                mobile: command.mobile,
            })
            .await?;
        tracing::info!(user_id = i64::from(created.id), role = %created.role, "user registered");

        let auth = self
            .tokens
            .issue(TokenSubject {
                user_id: created.id,
                name: created.name.clone(),
                role: created.role,
            })
            .await?;

        Ok(LoginResponseDto {
            user: created.into(),
            auth,
        })
    }

    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResponseDto> {
        let email = EmailAddress::new(&command.email)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is deactivated"));
        }

        self.hasher
            .verify(&command.password, &user.password_hash)
            .await?;

        let auth = self
            .tokens
            .issue(TokenSubject {
                user_id: user.id,
                name: user.name.clone(),
                role: user.role,
            })
            .await?;

        Ok(LoginResponseDto {
            user: user.into(),
            auth,
        })
    }

    /// Issues a single-use reset token and mails the account holder a link
    /// to the frontend reset page. The link expires after one hour.
    pub async fn forgot_password(&self, email: &str) -> ApplicationResult<()> {
        let email = EmailAddress::new(email)?;
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let token = format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );
        let expires_at = self.clock.now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
        self.repo.set_reset_token(user.id, &token, expires_at).await?;

        let reset_url = format!(
            "{}/reset-password?token={token}",
            self.branding.frontend_url.trim_end_matches('/')
        );
        self.mailer
            .send(reset_password_email(&self.branding, email.as_str(), &user.name, &reset_url))
            .await?;
        tracing::info!(user_id = i64::from(user.id), "password reset email sent");
        Ok(())
    }

    /// Consumes a reset token: verifies it is known and unexpired, stores the
    /// new password hash and clears the token.
    pub async fn reset_password(&self, command: ResetPasswordCommand) -> ApplicationResult<()> {
        require_field(&command.token, "token")?;
        if command.password.len() < 8 {
            return Err(ApplicationError::validation(
                "password must be at least 8 characters",
            ));
        }

        let user = self
            .repo
            .find_by_reset_token(&command.token, self.clock.now())
            .await?
            .ok_or_else(|| ApplicationError::validation("invalid or expired token"))?;

        let password_hash = self.hasher.hash(&command.password).await?;
        self.repo.reset_password(user.id, &password_hash).await?;
        tracing::info!(user_id = i64::from(user.id), "password reset");
        Ok(())
    }

    pub async fn profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}

fn reset_password_email(
    branding: &MailBranding,
    to: &str,
    name: &str,
    reset_url: &str,
) -> OutgoingEmail {
    let subject = format!("Password reset request - {}", branding.org_name);
    let text = format!(
        "Dear {name},\n\nWe received a request to reset your password. Open the \
         link below to choose a new one; it expires in one hour.\n\n{reset_url}\n\n\
         If you did not request this, you can ignore this email.\n\n{} Team",
        branding.org_name
    );
    let html = format!(
        "<p>Dear <strong>{name}</strong>,</p>\
         <p>We received a request to reset your password. The link below expires \
         in one hour.</p>\
         <p><a href=\"{reset_url}\">Reset your password</a></p>\
         <p>If you did not request this, you can ignore this email.</p>\
         <p>{} Team</p>",
        branding.org_name
    );
    OutgoingEmail {
        to: to.to_string(),
        subject,
        text,
        html,
    }
}
