use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::notification_models::{NewNotification, Notification};

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist one notification as a single transaction. If the insert or the
    /// commit fails the transaction rolls back on drop, so a partial record is
    /// never visible.
    pub async fn save(&self, new: &NewNotification) -> Result<Notification> {
        let mut tx = self.pool.begin().await?;

        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications
                (user_id, booking_id, recipient, subject, message, notification_type, status, sent_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(new.user_id)
        .bind(new.booking_id)
        .bind(&new.recipient)
        .bind(&new.subject)
        .bind(&new.message)
        .bind(&new.notification_type)
        .bind(new.status)
        .bind(new.sent_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(notification)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(notification)
    }

    // Lists are ordered by insertion so repeated reads are deterministic.
    pub async fn find_all(&self) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn find_by_booking_id(&self, booking_id: i64) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE booking_id = $1 ORDER BY created_at, id",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }
}
