use serde::{Deserialize, Serialize};

/// Standard error response payload
/// Contains stable machine-readable error code, human-readable message, and request ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code (e.g., "MISSING_FIELD", "INVALID_TOKEN")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Request ID for tracing and debugging
    pub request_id: String,
}

impl ErrorResponse {
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            request_id: request_id.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Common error codes used across the SoilBot and dashboard APIs
pub mod error_codes {
    // Authentication errors
    pub const MISSING_TOKEN: &str = "MISSING_TOKEN";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

    // Validation errors
    pub const MISSING_FIELD: &str = "MISSING_FIELD";
    pub const INVALID_FORMAT: &str = "INVALID_FORMAT";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const MESSAGE_TOO_LONG: &str = "MESSAGE_TOO_LONG";
    pub const INVALID_CONVERSATION_ID: &str = "INVALID_CONVERSATION_ID";
    pub const INVALID_PLANT_PREFERENCE: &str = "INVALID_PLANT_PREFERENCE";
    pub const INVALID_THRESHOLDS: &str = "INVALID_THRESHOLDS";

    // Not found errors
    pub const NOT_FOUND: &str = "NOT_FOUND";

    // Database errors
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";

    // Internal errors
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

    /// Code reported for a field-level validation failure
    pub fn for_field(field: &str) -> &'static str {
        match field {
            "message" => MESSAGE_TOO_LONG,
            "conversation_id" => INVALID_CONVERSATION_ID,
            "plant_preference" => INVALID_PLANT_PREFERENCE,
            "dry_season_settings" | "wet_season_settings" => INVALID_THRESHOLDS,
            "user_id" => INVALID_FORMAT,
            _ => INVALID_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_creation() {
        let error = ErrorResponse::new("MISSING_FIELD", "Required field missing: message", "req-1");

        assert_eq!(error.error, "MISSING_FIELD");
        assert_eq!(error.message, "Required field missing: message");
        assert_eq!(error.request_id, "req-1");
    }

    #[test]
    fn test_error_response_to_json() {
        let error = ErrorResponse::new("INVALID_TOKEN", "Bearer token is invalid", "req-2");

        let json = error.to_json().unwrap();
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.error, "INVALID_TOKEN");
        assert_eq!(parsed.request_id, "req-2");
    }

    #[test]
    fn test_codes_for_fields() {
        assert_eq!(error_codes::for_field("message"), "MESSAGE_TOO_LONG");
        assert_eq!(error_codes::for_field("conversation_id"), "INVALID_CONVERSATION_ID");
        assert_eq!(error_codes::for_field("wet_season_settings"), "INVALID_THRESHOLDS");
        assert_eq!(error_codes::for_field("monitoring_interval_dry"), "INVALID_VALUE");
    }
}
