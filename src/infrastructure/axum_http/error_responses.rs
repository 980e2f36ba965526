use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DeliveryError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for DeliveryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DeliveryError::Validation(_)
            | DeliveryError::InvalidIdentifier(_)
            | DeliveryError::InvalidStatus(_)
            | DeliveryError::TransitionNotAllowed { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            DeliveryError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // Don't leak internal error detail to the client
            DeliveryError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        let cases = [
            (
                DeliveryError::Validation("senderName too short".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DeliveryError::InvalidIdentifier("abc".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DeliveryError::InvalidStatus("lost".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (DeliveryError::NotFound, StatusCode::NOT_FOUND),
            (
                DeliveryError::Storage(anyhow!("pool exhausted")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
