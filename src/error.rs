use lambda_http::{Body, Response};
use thiserror::Error;

use soilsense::shared::error::{error_codes, ErrorResponse};

/// Main error type for the SoilBot API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Internal error: {0}")]
    Internal(String),
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
            ApiError::Database(_) => (
                500,
                error_codes::DATABASE_ERROR,
                "Internal database error occurred".to_string(),
            ),
            ApiError::Internal(_) => (
                500,
                error_codes::INTERNAL_ERROR,
                "Internal server error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse::new(error_code, &message, request_id);

        let body = error_response
            .to_json()
            .unwrap_or_else(|_| r#"{"error":"INTERNAL_ERROR","message":"Failed to serialize error response","request_id":""}"#.to_string());

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

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}
