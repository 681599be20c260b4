//! Website form submissions: contact messages, appointment requests and
//! membership applications. All three share the submit-then-notify flow.

use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
}

/// Postal address block captured by the membership form, stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MembershipAddress {
    #[serde(default)]
    pub house_flat_no: Option<String>,
    #[serde(default)]
    pub street_area: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub pin_zip_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MembershipApplication {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub address: MembershipAddress,
    pub motivation: Option<String>,
    pub id_proof_file: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMembershipApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub address: MembershipAddress,
    pub motivation: Option<String>,
    pub id_proof_file: Option<String>,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ContactMessage>>;
    async fn list(&self) -> DomainResult<Vec<ContactMessage>>;
    async fn set_status(&self, id: i64, status: &str) -> DomainResult<ContactMessage>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn insert(&self, appointment: NewAppointment) -> DomainResult<Appointment>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Appointment>>;
    async fn list(&self) -> DomainResult<Vec<Appointment>>;
    async fn set_status(&self, id: i64, status: &str) -> DomainResult<Appointment>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn insert(
        &self,
        application: NewMembershipApplication,
    ) -> DomainResult<MembershipApplication>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<MembershipApplication>>;
    async fn list(&self) -> DomainResult<Vec<MembershipApplication>>;
    async fn set_status(&self, id: i64, status: &str) -> DomainResult<MembershipApplication>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
