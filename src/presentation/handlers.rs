// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::views::{render_series_page, NO_WEB_DATA};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

type ApiResult = Result<Response, ApiError>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all series
pub async fn list_series(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult {
    let series = state.series_service.list_series().await?;
    Ok(json_response(&series, accepts_brotli(&headers)).await?)
}

/// Look up one series; 404 when absent
pub async fn get_series(
    Path(series_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult {
    let series = state
        .series_service
        .get_series(&series_id)
        .await?
        .ok_or(ApiError::SeriesNotFound(series_id))?;

    Ok(json_response(&series, accepts_brotli(&headers)).await?)
}

/// Observations of a series, newest first
pub async fn observations_by_series(
    Path(series_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult {
    let rows = state.observation_service.by_series(&series_id).await?;
    Ok(json_response(&rows, accepts_brotli(&headers)).await?)
}

/// Observations of a channel, newest first
pub async fn observations_by_channel(
    Path(channel): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> ApiResult {
    let rows = state.observation_service.by_channel(&channel).await?;
    Ok(json_response(&rows, accepts_brotli(&headers)).await?)
}

/// Digest of the configured channel
pub async fn mail_digest(headers: HeaderMap, State(state): State<Arc<AppState>>) -> ApiResult {
    let rows = state.digest_service.digest().await?;
    Ok(json_response(&rows, accepts_brotli(&headers)).await?)
}

/// Rendered page of a series' web-channel observations
pub async fn web_series_page(
    Path(series_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult {
    let rows = state.observation_service.web_view(&series_id).await?;

    if rows.is_empty() {
        return Ok(NO_WEB_DATA.into_response());
    }

    Ok(Html(render_series_page(&series_id, &rows)).into_response())
}
