// Route table and middleware
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::handlers::{
    get_series, health_check, list_series, mail_digest, observations_by_channel,
    observations_by_series, web_series_page,
};
use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/series", get(list_series))
        .route("/api/series/:series_id", get(get_series))
        .route("/api/observations/by-series/:series_id", get(observations_by_series))
        .route("/api/observations/by-channel/:channel", get(observations_by_channel))
        .route("/api/mail/latest", get(mail_digest))
        .route("/web/series/:series_id", get(web_series_page))
        .layer(middleware::from_fn_with_state(request_timeout, enforce_deadline))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Drop the handler (and its in-flight query) once `limit` elapses
async fn enforce_deadline(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::Timeout(limit).into_response(),
    }
}
