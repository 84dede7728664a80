use lambda_http::{Body, Response};
use thiserror::Error;

use soilsense::shared::error::{error_codes, ErrorResponse};

/// Main error type for the Dashboard API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found error: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Authentication-specific errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header is missing")]
    MissingToken,

    #[error("Bearer token is invalid")]
    InvalidToken,

    #[error("Authorization header format is invalid")]
    InvalidFormat,
}

/// Validation-specific errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{message}")]
    Field { field: String, message: String },
}

impl From<soilsense::ValidationError> for ValidationError {
    fn from(err: soilsense::ValidationError) -> Self {
        ValidationError::Field {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<soilsense::ValidationError> for ApiError {
    fn from(err: soilsense::ValidationError) -> Self {
        ApiError::Validation(err.into())
    }
}

/// Not found errors
#[derive(Debug, Error)]
pub enum NotFoundError {
    #[error("Resource not found")]
    ResourceNotFound,
}

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("DynamoDB error: {0}")]
    DynamoDb(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Convert error to HTTP response with appropriate status code and error payload
    pub fn to_http_response(&self, request_id: &str) -> Response<Body> {
        let (status, error_code, message): (u16, &str, String) = match self {
            // Authentication errors
            ApiError::Auth(AuthError::MissingToken) => (
                401,
                error_codes::MISSING_TOKEN,
                String::from("Authorization header is required"),
            ),
            ApiError::Auth(AuthError::InvalidToken) => (
                401,
                error_codes::INVALID_TOKEN,
                String::from("Bearer token is invalid"),
            ),
            ApiError::Auth(AuthError::InvalidFormat) => (
                401,
                error_codes::UNAUTHORIZED,
                String::from("Authorization header format is invalid"),
            ),

            // Validation errors
            ApiError::Validation(ValidationError::MissingField(field)) => (
                400,
                error_codes::MISSING_FIELD,
                format!("Required field missing: {}", field),
            ),
            ApiError::Validation(ValidationError::InvalidBody(msg)) => {
                (400, error_codes::INVALID_FORMAT, msg.clone())
            }
            ApiError::Validation(ValidationError::Field { field, message }) => {
                (400, error_codes::for_field(field), message.clone())
            }

            // Not found errors
            ApiError::NotFound(NotFoundError::ResourceNotFound) => (
                404,
                error_codes::NOT_FOUND,
                String::from("Resource not found"),
            ),

            ApiError::Database(_) => (
                500,
                error_codes::DATABASE_ERROR,
                String::from("Internal database error occurred"),
            ),
            ApiError::Internal(_) => (
                500,
                error_codes::INTERNAL_ERROR,
                String::from("Internal server error occurred"),
            ),
        };

        let error_response = ErrorResponse::new(error_code, &message, request_id);

        let body = error_response
            .to_json()
            .unwrap_or_else(|_| String::from(r#"{"error":"INTERNAL_ERROR","message":"Failed to serialize error response","request_id":""}"#));

        Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| {
                Response::new(Body::from(
                    r#"{"error":"INTERNAL_ERROR","message":"Failed to build response"}"#,
                ))
            })
    }
}

impl<E> From<aws_sdk_dynamodb::error::SdkError<E>> for DatabaseError
where
    E: std::fmt::Debug,
{
    fn from(err: aws_sdk_dynamodb::error::SdkError<E>) -> Self {
        DatabaseError::DynamoDb(format!("{:?}", err))
    }
}

impl From<serde_dynamo::Error> for DatabaseError {
    fn from(err: serde_dynamo::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            _ => panic!("Expected text body"),
        }
    }

    #[test]
    fn test_auth_error_to_http_response() {
        let response = ApiError::Auth(AuthError::MissingToken).to_http_response("req-123");

        assert_eq!(response.status(), 401);
        let body = body_text(&response);
        assert!(body.contains("MISSING_TOKEN"));
        assert!(body.contains("req-123"));
    }

    #[test]
    fn test_threshold_validation_maps_to_invalid_thresholds() {
        let error: ApiError = soilsense::ValidationError::new(
            "dry_season_settings",
            "moisture_min must not exceed moisture_max",
        )
        .into();
        let response = error.to_http_response("req-456");

        assert_eq!(response.status(), 400);
        let body = body_text(&response);
        assert!(body.contains("INVALID_THRESHOLDS"));
        assert!(body.contains("moisture_min must not exceed moisture_max"));
    }

    #[test]
    fn test_plant_preference_validation_code() {
        let error: ApiError =
            soilsense::ValidationError::new("plant_preference", "unknown").into();
        let body = body_text(&error.to_http_response("req-1"));
        assert!(body.contains("INVALID_PLANT_PREFERENCE"));
    }

    #[test]
    fn test_not_found_error_to_http_response() {
        let response =
            ApiError::NotFound(NotFoundError::ResourceNotFound).to_http_response("req-789");

        assert_eq!(response.status(), 404);
        assert!(body_text(&response).contains("NOT_FOUND"));
    }

    #[test]
    fn test_database_error_hides_details() {
        let error = ApiError::Database(DatabaseError::DynamoDb("Connection refused".to_string()));
        let response = error.to_http_response("req-202");

        assert_eq!(response.status(), 500);
        let body = body_text(&response);
        assert!(body.contains("DATABASE_ERROR"));
        assert!(!body.contains("Connection refused"));
    }

    #[test]
    fn test_error_response_includes_request_id() {
        let errors = vec![
            ApiError::Auth(AuthError::InvalidToken),
            ApiError::Validation(ValidationError::MissingField("sensor_data".to_string())),
            ApiError::NotFound(NotFoundError::ResourceNotFound),
            ApiError::Internal("boom".to_string()),
        ];

        for error in errors {
            let body = body_text(&error.to_http_response("test-request-id"));
            assert!(
                body.contains("test-request-id"),
                "Error response should include request_id"
            );
        }
    }
}
