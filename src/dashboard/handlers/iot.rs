use lambda_http::{Body, Request, Response};

use super::{json_response, requested_preference};
use super::settings::load_resolved_settings;
use crate::config::DashboardConfig;
use crate::error::ApiError;
use soilsense::{current_monitoring_interval, validate_user_id, Clock};

/// Handler for GET /users/{user_id}/iot/seasonal-config
///
/// What a field device needs to schedule its next wake-up.
pub async fn get_iot_seasonal_config(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
) -> Result<Response<Body>, ApiError> {
    validate_user_id(user_id)?;

    let settings =
        load_resolved_settings(config, clock, user_id, requested_preference(&event)).await?;

    json_response(
        200,
        &serde_json::json!({
            "current_season": settings.current_season,
            "monitoring_interval": current_monitoring_interval(&settings),
            "power_conservation": settings.power_conservation_enabled
        }),
    )
}
