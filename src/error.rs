use crate::io_struct::FieldError;
use crate::model::ModelError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request validation failed ({} error(s))", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Payload exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Inference failed: {0}")]
    Inference(#[from] ModelError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => json!({ "detail": errors }),
            ApiError::PayloadTooLarge { .. } => json!({ "detail": self.to_string() }),
            // internals stay in the server log
            ApiError::Inference(_) => json!({ "detail": "Internal Server Error" }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
