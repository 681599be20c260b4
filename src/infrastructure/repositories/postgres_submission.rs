//! Postgres persistence for the three public form submissions.

use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::submission::{
    Appointment, AppointmentRepository, ContactMessage, ContactRepository, MembershipAddress,
    MembershipApplication, MembershipRepository, NewAppointment, NewContactMessage,
    NewMembershipApplication,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CONTACT_COLUMNS: &str = "id, name, email, phone, subject, message, status, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContactRow> for ContactMessage {
    fn from(row: ContactRow) -> Self {
        ContactMessage {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "INSERT INTO contacts (name, email, phone, subject, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(message.name)
        .bind(message.email)
        .bind(message.phone)
        .bind(message.subject)
        .bind(message.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ContactMessage>> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(ContactMessage::from))
    }

    async fn list(&self) -> DomainResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactRow>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    async fn set_status(&self, id: i64, status: &str) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, ContactRow>(&format!(
            "UPDATE contacts SET status = $2, updated_at = now() WHERE id = $1
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("contact message not found".into()));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresAppointmentRepository {
    pool: PgPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AppointmentRow {
    id: i64,
    name: String,
    mobile: String,
    email: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: row.id,
            name: row.name,
            mobile: row.mobile,
            email: row.email,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn insert(&self, appointment: NewAppointment) -> DomainResult<Appointment> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "INSERT INTO appointments (name, mobile, email, message)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, mobile, email, message, status, created_at, updated_at",
        )
        .bind(appointment.name)
        .bind(appointment.mobile)
        .bind(appointment.email)
        .bind(appointment.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Appointment>> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, name, mobile, email, message, status, created_at, updated_at
             FROM appointments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Appointment::from))
    }

    async fn list(&self) -> DomainResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, name, mobile, email, message, status, created_at, updated_at
             FROM appointments ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn set_status(&self, id: i64, status: &str) -> DomainResult<Appointment> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "UPDATE appointments SET status = $2, updated_at = now() WHERE id = $1
             RETURNING id, name, mobile, email, message, status, created_at, updated_at",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("appointment not found".into()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("appointment not found".into()));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const MEMBERSHIP_COLUMNS: &str = "id, first_name, last_name, email, mobile, address, motivation, \
     id_proof_file, status, created_at, updated_at";

#[derive(Debug, FromRow)]
struct MembershipRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    mobile: Option<String>,
    address: Json<MembershipAddress>,
    motivation: Option<String>,
    id_proof_file: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MembershipRow> for MembershipApplication {
    fn from(row: MembershipRow) -> Self {
        MembershipApplication {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            mobile: row.mobile,
            address: row.address.0,
            motivation: row.motivation,
            id_proof_file: row.id_proof_file,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn insert(
        &self,
        application: NewMembershipApplication,
    ) -> DomainResult<MembershipApplication> {
        let row = sqlx::query_as::<_, MembershipRow>(&format!(
            "INSERT INTO memberships (first_name, last_name, email, mobile, address, motivation, id_proof_file)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {MEMBERSHIP_COLUMNS}"
        ))
        .bind(application.first_name)
        .bind(application.last_name)
        .bind(application.email)
        .bind(application.mobile)
        .bind(Json(application.address))
        .bind(application.motivation)
        .bind(application.id_proof_file)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<MembershipApplication>> {
        let row = sqlx::query_as::<_, MembershipRow>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(MembershipApplication::from))
    }

    async fn list(&self) -> DomainResult<Vec<MembershipApplication>> {
        let rows = sqlx::query_as::<_, MembershipRow>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM memberships ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(MembershipApplication::from).collect())
    }

    async fn set_status(&self, id: i64, status: &str) -> DomainResult<MembershipApplication> {
        let row = sqlx::query_as::<_, MembershipRow>(&format!(
            "UPDATE memberships SET status = $2, updated_at = now() WHERE id = $1
             RETURNING {MEMBERSHIP_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("membership application not found".into()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM memberships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("membership application not found".into()));
        }
        Ok(())
    }
}
