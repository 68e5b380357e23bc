use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::notification_models::{Notification, NotificationStatus};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendNotificationRequest {
    pub user_id: i64,
    pub booking_id: i64,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: String,
}

/// External shape of a notification; field-for-field copy of the stored record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: i64,
    pub booking_id: i64,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub status: NotificationStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            booking_id: n.booking_id,
            recipient: n.recipient,
            subject: n.subject,
            message: n.message,
            notification_type: n.notification_type,
            status: n.status,
            sent_at: n.sent_at,
            created_at: n.created_at,
        }
    }
}
