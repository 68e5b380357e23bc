use crate::db::DbPool;
use crate::notification::NotificationService;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub notification_service: NotificationService,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()),
        }
    }
}
