use crate::{
    error::Result,
    notification::{self, NotificationResponse, NotificationStatus, SendNotificationRequest},
    state::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notification::notification_handlers::send_notification,
        notification::notification_handlers::get_notification,
        notification::notification_handlers::get_notifications,
        notification::notification_handlers::get_notifications_by_user,
        notification::notification_handlers::get_notifications_by_booking,
    ),
    components(
        schemas(
            SendNotificationRequest,
            NotificationResponse,
            NotificationStatus,
        )
    ),
    tags(
        (name = "notifications", description = "Notification endpoints")
    )
)]
struct ApiDoc;

async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    sqlx::query("SELECT 1").execute(&state.db).await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let notification_routes = Router::new()
        .route(
            "/",
            get(notification::get_notifications).post(notification::send_notification),
        )
        .route("/:id", get(notification::get_notification))
        .route("/user/:user_id", get(notification::get_notifications_by_user))
        .route(
            "/booking/:booking_id",
            get(notification::get_notifications_by_booking),
        );

    let api_routes = Router::new().nest("/notifications", notification_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
