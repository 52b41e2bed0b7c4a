use crate::events::error::RegistryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body of the JSON API.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let status = match err {
            RegistryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::Conflict(_) | RegistryError::CapacityExceeded(_) => StatusCode::CONFLICT,
        };

        Self::new(status, err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn not_found_should_map_to_404() {
        let err = ApiError::from(RegistryError::event_not_found());

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Evento no encontrado");
    }

    #[test_log::test]
    fn full_event_should_map_to_409() {
        assert_eq!(
            ApiError::from(RegistryError::event_full()).status(),
            StatusCode::CONFLICT
        );
    }
}
