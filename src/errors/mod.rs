use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("request body is not a valid event")]
    InvalidPayload,
    #[error("event id is required")]
    MissingId,
    #[error("event not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The body strings are part of the wire contract; clients match on
        // them verbatim, so they stay plain text.
        let (status, body) = match self {
            AppError::InvalidPayload => (StatusCode::BAD_REQUEST, "Invalid JSON"),
            AppError::MissingId => (StatusCode::BAD_REQUEST, "ID is required"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Event not found"),
        };

        (status, body).into_response()
    }
}
