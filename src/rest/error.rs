use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::climate::ClimateError;

use super::models::ErrorResponse;

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ClimateError::InvalidDate(raw, err) => {
                log::warn!("Invalid date {}: {}", raw, err);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ClimateError::DateOutOfRange { .. } => {
                log::warn!("{}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ClimateError::Storage(err) => {
                log::error!("Query failed: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}
