use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{error::Result, state::AppState};

use super::notification_dto::{NotificationResponse, SendNotificationRequest};

/// Send a notification (simulated delivery) and persist the outcome
#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = SendNotificationRequest,
    responses(
        (status = 201, description = "Notification recorded", body = NotificationResponse)
    ),
    tag = "notifications"
)]
pub async fn send_notification(
    State(state): State<AppState>,
    Json(payload): Json<SendNotificationRequest>,
) -> Result<impl IntoResponse> {
    let notification = state.notification_service.send_notification(payload).await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

/// Get a notification by id
#[utoipa::path(
    get,
    path = "/api/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification found", body = NotificationResponse),
        (status = 404, description = "Notification not found")
    ),
    tag = "notifications"
)]
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NotificationResponse>> {
    let notification = state.notification_service.get_notification_by_id(id).await?;

    Ok(Json(notification))
}

/// List all notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "List of notifications", body = Vec<NotificationResponse>)
    ),
    tag = "notifications"
)]
pub async fn get_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationResponse>>> {
    let notifications = state.notification_service.get_all_notifications().await?;

    Ok(Json(notifications))
}

/// List notifications for a user
#[utoipa::path(
    get,
    path = "/api/notifications/user/{user_id}",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "List of notifications", body = Vec<NotificationResponse>)
    ),
    tag = "notifications"
)]
pub async fn get_notifications_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<NotificationResponse>>> {
    let notifications = state
        .notification_service
        .get_notifications_by_user_id(user_id)
        .await?;

    Ok(Json(notifications))
}

/// List notifications for a booking
#[utoipa::path(
    get,
    path = "/api/notifications/booking/{booking_id}",
    params(
        ("booking_id" = i64, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "List of notifications", body = Vec<NotificationResponse>)
    ),
    tag = "notifications"
)]
pub async fn get_notifications_by_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Vec<NotificationResponse>>> {
    let notifications = state
        .notification_service
        .get_notifications_by_booking_id(booking_id)
        .await?;

    Ok(Json(notifications))
}
