use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationStatus::Pending => write!(f, "PENDING"),
            NotificationStatus::Sent => write!(f, "SENT"),
            NotificationStatus::Failed => write!(f, "FAILED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: i64,
    pub booking_id: i64,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub notification_type: String,
    pub status: NotificationStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A notification that has not been persisted yet. The id and created_at
/// columns are filled in by the database on insert.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: i64,
    pub booking_id: i64,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub notification_type: String,
    pub status: NotificationStatus,
    pub sent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_status_display() {
        assert_eq!(NotificationStatus::Pending.to_string(), "PENDING");
        assert_eq!(NotificationStatus::Sent.to_string(), "SENT");
        assert_eq!(NotificationStatus::Failed.to_string(), "FAILED");
    }

    #[test]
    fn test_notification_status_serde() {
        assert_eq!(
            serde_json::to_string(&NotificationStatus::Sent).unwrap(),
            "\"SENT\""
        );
        assert_eq!(
            serde_json::from_str::<NotificationStatus>("\"FAILED\"").unwrap(),
            NotificationStatus::Failed
        );
    }
}
