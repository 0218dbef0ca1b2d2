// HTTP error mapping
use crate::application::observation_repository::StoreError;
use crate::infrastructure::http_response::EncodeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("series {0} not found")]
    SeriesNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Encoding(#[from] EncodeError),

    #[error("request did not complete within {0:?}")]
    Timeout(Duration),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::SeriesNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
            ApiError::Encoding(e) => {
                tracing::error!("Response encoding error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
            ApiError::Timeout(limit) => {
                tracing::error!("Request abandoned after {:?}", limit);
                (StatusCode::GATEWAY_TIMEOUT, "store did not respond in time".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
