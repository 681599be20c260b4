use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(
    facts: Vec<biscuit_auth::builder::Fact>,
) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(fact.predicate);
    }

    let id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let name = ctx
        .name
        .ok_or_else(|| ApplicationError::unauthorized("missing user name"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    Ok(AuthenticatedUser {
        id: UserId::new(id).map_err(ApplicationError::from)?,
        name,
        role,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: biscuit_auth::builder::Predicate) {
        use biscuit_auth::builder::Term;

        match predicate.name.as_str() {
            "user" => {
                if predicate.terms.len() == 2 {
                    if let Term::Integer(id) = predicate.terms[0] {
                        self.user_id = Some(id);
                    }
                    if let Term::Str(name) = predicate.terms[1].clone() {
                        self.name = Some(name);
                    }
                }
            }
            "role" => {
                if let Some(Term::Str(role_name)) = predicate.terms.first() {
                    if let Ok(parsed) = role_name.parse() {
                        self.role = Some(parsed);
                    }
                }
            }
            "issued_at" => {
                if let Some(Term::Date(seconds)) = predicate.terms.first() {
                    self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
                }
            }
            "expires_at" => {
                if let Some(Term::Date(seconds)) = predicate.terms.first() {
                    self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
                }
            }
            _ => {}
        }
    }
}
