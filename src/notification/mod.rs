// Declare submodules
pub mod notification_channel;
pub mod notification_dto;
pub mod notification_handlers;
pub mod notification_models;
pub mod notification_repository;
pub mod notification_service;

// Re-export public items
pub use notification_channel::{NoopChannel, NotificationChannel};
pub use notification_dto::{NotificationResponse, SendNotificationRequest};
pub use notification_handlers::{
    get_notification, get_notifications, get_notifications_by_booking, get_notifications_by_user,
    send_notification,
};
pub use notification_models::{Notification, NotificationStatus};
pub use notification_repository::NotificationRepository;
pub use notification_service::NotificationService;
