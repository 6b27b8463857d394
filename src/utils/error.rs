use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::utils::helpers::service_name;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),
}

impl CustomError {
    /// The human-readable part of the error, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            CustomError::InternalServerError(msg)
            | CustomError::NotFoundError(msg)
            | CustomError::ValidationError(msg) => msg,
        }
    }

    fn code(&self) -> &'static str {
        match *self {
            CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
            CustomError::ValidationError(..) => "VALIDATION_ERROR",
        }
    }
}

/// Logs a store failure and replaces it with a message that is safe to return.
pub fn store_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> CustomError {
    move |e| {
        error!("{context}: {e}");
        CustomError::InternalServerError(context.to_string())
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "error": self.message(),
            "code": self.code(),
            "httpStatusCode": self.status_code().as_u16(),
            "service": service_name(),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn error_body_carries_bare_message() {
        let err = CustomError::NotFoundError("Post not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Post not found");
        assert_eq!(value["code"], "NOT_FOUND_ERROR");
        assert_eq!(value["httpStatusCode"], 404);
    }

    #[test]
    fn store_error_hides_driver_detail() {
        let err = store_error("Failed to fetch posts")(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to fetch posts");
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = CustomError::ValidationError("All fields are required".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Validation Error: All fields are required");
    }
}
