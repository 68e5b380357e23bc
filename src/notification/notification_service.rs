use crate::error::{AppError, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::notification_channel::NotificationChannel;
use super::notification_dto::{NotificationResponse, SendNotificationRequest};
use super::notification_models::{NewNotification, Notification, NotificationStatus};
use super::notification_repository::NotificationRepository;

/// Service layer for notification orchestration: builds the record, runs the
/// delivery seam, persists the outcome.
#[derive(Clone)]
pub struct NotificationService {
    repo: NotificationRepository,
    channel: Arc<dyn NotificationChannel>,
}

impl NotificationService {
    pub fn new(repo: NotificationRepository, channel: Arc<dyn NotificationChannel>) -> Self {
        Self { repo, channel }
    }

    /// A notification's status is decided here, once; no later operation ever
    /// transitions it. Delivery failure is recorded in the row, not returned
    /// as an error.
    pub async fn send_notification(
        &self,
        payload: SendNotificationRequest,
    ) -> Result<NotificationResponse> {
        let new = dispatch(self.channel.as_ref(), payload).await;
        let notification = self.repo.save(&new).await?;
        Ok(notification.into())
    }

    pub async fn get_notification_by_id(&self, id: Uuid) -> Result<NotificationResponse> {
        let found = self.repo.find_by_id(id).await?;
        found_or_not_found(found)
    }

    pub async fn get_all_notifications(&self) -> Result<Vec<NotificationResponse>> {
        let notifications = self.repo.find_all().await?;
        Ok(notifications.into_iter().map(Into::into).collect())
    }

    pub async fn get_notifications_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<NotificationResponse>> {
        let notifications = self.repo.find_by_user_id(user_id).await?;
        Ok(notifications.into_iter().map(Into::into).collect())
    }

    pub async fn get_notifications_by_booking_id(
        &self,
        booking_id: i64,
    ) -> Result<Vec<NotificationResponse>> {
        let notifications = self.repo.find_by_booking_id(booking_id).await?;
        Ok(notifications.into_iter().map(Into::into).collect())
    }
}

/// Copy the request into an unsaved record, attempt delivery, and stamp the
/// final status: SENT with sent_at on success, FAILED with no sent_at
/// otherwise.
async fn dispatch(
    channel: &dyn NotificationChannel,
    payload: SendNotificationRequest,
) -> NewNotification {
    let mut new = NewNotification {
        user_id: payload.user_id,
        booking_id: payload.booking_id,
        recipient: payload.recipient,
        subject: payload.subject,
        message: payload.message,
        notification_type: payload.notification_type,
        status: NotificationStatus::Pending,
        sent_at: None,
    };

    match channel.deliver(&new).await {
        Ok(()) => {
            new.status = NotificationStatus::Sent;
            new.sent_at = Some(Utc::now());
        }
        Err(e) => {
            warn!("Notification delivery failed: {}", e);
            new.status = NotificationStatus::Failed;
        }
    }

    new
}

/// Lookup by an id that was never issued is the one client-visible error this
/// service produces.
fn found_or_not_found(found: Option<Notification>) -> Result<NotificationResponse> {
    found
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound("Notification not found".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::notification_channel::{DeliveryError, NoopChannel};
    use async_trait::async_trait;

    struct FailingChannel;

    #[async_trait]
    impl NotificationChannel for FailingChannel {
        async fn deliver(
            &self,
            _notification: &NewNotification,
        ) -> std::result::Result<(), DeliveryError> {
            Err(DeliveryError("smtp connection refused".into()))
        }
    }

    fn request() -> SendNotificationRequest {
        SendNotificationRequest {
            user_id: 1,
            booking_id: 10,
            recipient: "a@x.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
            notification_type: "EMAIL".to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_marks_sent_on_success() {
        let new = dispatch(&NoopChannel, request()).await;

        assert_eq!(new.status, NotificationStatus::Sent);
        assert!(new.sent_at.is_some());
        assert_eq!(new.user_id, 1);
        assert_eq!(new.booking_id, 10);
        assert_eq!(new.recipient, "a@x.com");
        assert_eq!(new.subject, "S");
        assert_eq!(new.message, "M");
        assert_eq!(new.notification_type, "EMAIL");
    }

    #[tokio::test]
    async fn test_dispatch_marks_failed_on_channel_error() {
        let new = dispatch(&FailingChannel, request()).await;

        assert_eq!(new.status, NotificationStatus::Failed);
        assert!(new.sent_at.is_none());
    }

    #[test]
    fn test_missing_notification_yields_not_found() {
        let result = found_or_not_found(None);

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_found_notification_projects_all_fields() {
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: 1,
            booking_id: 10,
            recipient: "a@x.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
            notification_type: "EMAIL".to_string(),
            status: NotificationStatus::Sent,
            sent_at: Some(Utc::now()),
            created_at: Utc::now(),
        };

        let response = found_or_not_found(Some(notification.clone())).unwrap();

        assert_eq!(response.id, notification.id);
        assert_eq!(response.user_id, notification.user_id);
        assert_eq!(response.booking_id, notification.booking_id);
        assert_eq!(response.recipient, notification.recipient);
        assert_eq!(response.subject, notification.subject);
        assert_eq!(response.message, notification.message);
        assert_eq!(response.notification_type, notification.notification_type);
        assert_eq!(response.status, notification.status);
        assert_eq!(response.sent_at, notification.sent_at);
        assert_eq!(response.created_at, notification.created_at);
    }
}
