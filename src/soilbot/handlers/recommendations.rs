use lambda_http::{Body, Request, Response};
use serde::Deserialize;
use tracing::{info, warn};

use super::{json_response, parse_json_body};
use crate::error::ApiError;
use soilsense::{detect_current_season, generate_recommendations, Clock, SensorReading};

/// Request payload for POST /recommendations
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub sensor_data: Option<SensorReading>,
}

/// Advisory list for a reading
///
/// A missing or empty `sensor_data` object is rejected with the plain
/// `{success: false, error}` shape the chat client expects.
pub async fn handle_recommendations(
    event: Request,
    request_id: &str,
    clock: &dyn Clock,
) -> Result<Response<Body>, ApiError> {
    let request: RecommendationsRequest = parse_json_body(&event)?;

    let reading = match request.sensor_data {
        Some(reading) if reading != SensorReading::default() => reading,
        _ => {
            warn!(request_id = %request_id, "Recommendations requested without sensor data");
            return json_response(
                400,
                &serde_json::json!({
                    "success": false,
                    "error": "Sensor data required"
                }),
            );
        }
    };

    let season = detect_current_season(clock.today());
    let recommendations = generate_recommendations(&reading, season);

    info!(
        request_id = %request_id,
        count = recommendations.len(),
        season = season.as_str(),
        "Generated recommendations"
    );

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "data": recommendations
        }),
    )
}
