use lambda_http::{Body, Response};

use super::json_response;
use crate::error::ApiError;
use soilsense::{Clock, SensorSource, SimulatedSensorSource};

/// Handler for GET /sensor-data
pub fn get_sensor_data(clock: &dyn Clock) -> Result<Response<Body>, ApiError> {
    let reading = SimulatedSensorSource.current_reading(clock);
    let body = serde_json::to_value(&reading)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize reading: {}", e)))?;

    json_response(200, &body)
}
