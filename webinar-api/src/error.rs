use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use webinar_core::ChangeSeatsError;

#[derive(Debug)]
pub enum AppError {
    AuthorizationError(String),
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthorizationError(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ChangeSeatsError> for AppError {
    fn from(err: ChangeSeatsError) -> Self {
        match err {
            ChangeSeatsError::WebinarNotFound => AppError::NotFoundError(err.to_string()),
            ChangeSeatsError::NotOrganizer => AppError::AuthorizationError(err.to_string()),
            ChangeSeatsError::SeatCountDecreased
            | ChangeSeatsError::SeatCountExceedsMaximum => AppError::ValidationError(err.to_string()),
            ChangeSeatsError::Repository(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}
