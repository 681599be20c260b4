use crate::{
    application::{
        commands::ensure_admin,
        dto::{AppointmentDto, AuthenticatedUser, ContactDto, MembershipDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::submission::{AppointmentRepository, ContactRepository, MembershipRepository},
};
use std::sync::Arc;

pub struct SubmissionQueryService {
    contacts: Arc<dyn ContactRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl SubmissionQueryService {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        memberships: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            contacts,
            appointments,
            memberships,
        }
    }

    pub async fn list_contacts(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ContactDto>> {
        ensure_admin(actor)?;
        let messages = self.contacts.list().await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }

    pub async fn get_contact(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<ContactDto> {
        ensure_admin(actor)?;
        let message = self
            .contacts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("contact message not found"))?;
        Ok(message.into())
    }

    pub async fn list_appointments(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<AppointmentDto>> {
        ensure_admin(actor)?;
        let appointments = self.appointments.list().await?;
        Ok(appointments.into_iter().map(Into::into).collect())
    }

    pub async fn get_appointment(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<AppointmentDto> {
        ensure_admin(actor)?;
        let appointment = self
            .appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("appointment not found"))?;
        Ok(appointment.into())
    }

    pub async fn list_memberships(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<MembershipDto>> {
        ensure_admin(actor)?;
        let applications = self.memberships.list().await?;
        Ok(applications.into_iter().map(Into::into).collect())
    }

    pub async fn get_membership(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<MembershipDto> {
        ensure_admin(actor)?;
        let application = self
            .memberships
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("membership application not found"))?;
        Ok(application.into())
    }
}
