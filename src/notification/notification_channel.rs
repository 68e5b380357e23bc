use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::notification_models::NewNotification;

#[derive(Error, Debug)]
#[error("delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// Seam for the outbound send. A real email/SMS transport can be swapped in
/// here without touching the service layer; delivery failure is absorbed into
/// the record's status, never surfaced to the caller.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn deliver(&self, notification: &NewNotification) -> Result<(), DeliveryError>;
}

/// Simulated delivery: logs the attempt and always succeeds.
pub struct NoopChannel;

#[async_trait]
impl NotificationChannel for NoopChannel {
    async fn deliver(&self, notification: &NewNotification) -> Result<(), DeliveryError> {
        info!(
            recipient = %notification.recipient,
            notification_type = %notification.notification_type,
            "Simulated notification delivery"
        );
        Ok(())
    }
}
