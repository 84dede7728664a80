use lambda_http::{Body, Response};
use tracing::info;

use super::json_response;
use crate::error::ApiError;
use soilsense::predefined_questions;

/// List the predefined question menu
pub fn handle_questions(request_id: &str) -> Result<Response<Body>, ApiError> {
    info!(request_id = %request_id, "Listing predefined questions");

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "data": predefined_questions()
        }),
    )
}
