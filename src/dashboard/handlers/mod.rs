pub mod dashboard;
pub mod iot;
pub mod plants;
pub mod sensors;
pub mod settings;

use lambda_http::{Body, Request, RequestExt, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ValidationError};
use soilsense::PlantPreference;

/// Parse a JSON request body; an empty body parses as `{}`
pub fn parse_json_body<T: DeserializeOwned>(event: &Request) -> Result<T, ApiError> {
    let body_bytes: &[u8] = match event.body() {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
        Body::Empty => b"{}",
    };

    serde_json::from_slice(body_bytes).map_err(|e| {
        ApiError::Validation(ValidationError::InvalidBody(format!("Invalid JSON: {}", e)))
    })
}

pub fn json_response(status: u16, body: &serde_json::Value) -> Result<Response<Body>, ApiError> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// First value of a query string parameter
pub fn query_param(event: &Request, name: &str) -> Option<String> {
    event
        .query_string_parameters()
        .first(name)
        .map(str::to_string)
}

/// Preset used when a settings row has to be created for this request
pub fn requested_preference(event: &Request) -> PlantPreference {
    PlantPreference::or_default(query_param(event, "plant_preference").as_deref())
}
