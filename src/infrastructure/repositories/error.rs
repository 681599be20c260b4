use crate::domain::errors::DomainError;

const CNT_BLOG_SLUG: &str = "blogs_slug_key";
const CNT_IDEA_SLUG: &str = "ideas_slug_key";
const CNT_MEDIA_SLUG: &str = "media_slug_key";
const CNT_EVENT_SLUG: &str = "events_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_SUBSCRIPTION_EMAIL: &str = "subscriptions_email_key";
const CNT_COMMENT_BLOG: &str = "comments_blog_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_BLOG_SLUG | CNT_IDEA_SLUG | CNT_MEDIA_SLUG | CNT_EVENT_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_SUBSCRIPTION_EMAIL => {
                        DomainError::Conflict("email already subscribed".into())
                    }
                    CNT_COMMENT_BLOG => DomainError::NotFound("blog not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
