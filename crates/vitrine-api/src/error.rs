use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use vitrine_core::listing::ListingError;
use vitrine_util::format::format_error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("rate limited")]
    RateLimited,
    /// A query against the marketplace backend failed. The message is the
    /// human-readable line shown to the user as a transient notice.
    #[error("{0}")]
    Upstream(String),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "rate limited".to_string()),
            ApiError::Upstream(msg) => {
                tracing::warn!("backend query failed: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            ApiError::Internal(err) => {
                tracing::error!("API internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message, "message": message }))).into_response()
    }
}

impl From<vitrine_client::ClientError> for ApiError {
    fn from(e: vitrine_client::ClientError) -> Self {
        ApiError::Upstream(format_error(&e))
    }
}

impl From<ListingError> for ApiError {
    fn from(e: ListingError) -> Self {
        match e {
            ListingError::FetchInFlight => ApiError::Conflict(e.to_string()),
            ListingError::NoNextPage | ListingError::InvalidLimit => {
                ApiError::BadRequest(e.to_string())
            }
            ListingError::StaleTicket => ApiError::Conflict(e.to_string()),
        }
    }
}
