use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portkey_service::ShortenError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP-facing wrapper around the service error taxonomy.
#[derive(Debug)]
pub struct ApiError(ShortenError);

impl From<ShortenError> for ApiError {
    fn from(err: ShortenError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ShortenError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ShortenError::NotFound(_) => StatusCode::NOT_FOUND,
            ShortenError::CodeExhausted { .. } => StatusCode::CONFLICT,
            ShortenError::PersistenceFailed(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}
