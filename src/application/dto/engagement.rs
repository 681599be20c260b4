use crate::domain::{
    comment::Comment,
    submission::{Appointment, ContactMessage, MembershipAddress, MembershipApplication},
    subscription::Subscription,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub blog_id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub body: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            blog_id: comment.blog_id.into(),
            name: comment.name,
            email: comment.email,
            profile_image: comment.profile_image,
            body: comment.body,
            is_approved: comment.is_approved,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: i64,
    pub email: String,
    pub status: String,
    pub subscribed_at: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionDto {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            email: subscription.email,
            status: subscription.status.as_str().to_string(),
            subscribed_at: subscription.subscribed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            phone: message.phone,
            subject: message.subject,
            message: message.message,
            status: message.status,
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            name: appointment.name,
            mobile: appointment.mobile,
            email: appointment.email,
            message: appointment.message,
            status: appointment.status,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MembershipAddressDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_flat_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_zip_code: Option<String>,
}

impl From<MembershipAddress> for MembershipAddressDto {
    fn from(address: MembershipAddress) -> Self {
        Self {
            house_flat_no: address.house_flat_no,
            street_area: address.street_area,
            city: address.city,
            district: address.district,
            state: address.state,
            country: address.country,
            pin_zip_code: address.pin_zip_code,
        }
    }
}

impl From<MembershipAddressDto> for MembershipAddress {
    fn from(dto: MembershipAddressDto) -> Self {
        Self {
            house_flat_no: dto.house_flat_no,
            street_area: dto.street_area,
            city: dto.city,
            district: dto.district,
            state: dto.state,
            country: dto.country,
            pin_zip_code: dto.pin_zip_code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MembershipDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub address: MembershipAddressDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_proof_file: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MembershipApplication> for MembershipDto {
    fn from(application: MembershipApplication) -> Self {
        Self {
            id: application.id,
            first_name: application.first_name,
            last_name: application.last_name,
            email: application.email,
            mobile: application.mobile,
            address: application.address.into(),
            motivation: application.motivation,
            id_proof_file: application.id_proof_file,
            status: application.status,
            created_at: application.created_at,
            updated_at: application.updated_at,
        }
    }
}
