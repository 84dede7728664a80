use lambda_http::{Body, Request, RequestExt, Response};
use serde::Deserialize;
use tracing::info;

use super::{json_response, parse_json_body};
use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::repo::seasonal_settings::{get_settings, put_settings};
use soilsense::{
    apply_plant_preset, detect_current_season, plant_preset, validate_plant_preference,
    validate_user_id, Clock,
};

#[derive(Debug, Clone, Deserialize)]
struct PlantPreferenceRequest {
    #[serde(default)]
    plant_preference: Option<String>,
}

/// Handler for PUT /users/{user_id}/plant-preference
///
/// Resets both bands to the new preset when the user already has settings.
/// Users without a settings row get the preset on first read instead.
pub async fn update_plant_preference(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
) -> Result<Response<Body>, ApiError> {
    let request_id = event.lambda_context().request_id.clone();

    validate_user_id(user_id)?;
    let request: PlantPreferenceRequest = parse_json_body(&event)?;
    let preference = validate_plant_preference(request.plant_preference.as_deref())?;

    let existing = get_settings(
        &config.dynamodb_client,
        &config.seasonal_settings_table,
        user_id,
    )
    .await?;

    if let Some(mut settings) = existing {
        apply_plant_preset(&mut settings, preference);
        settings.updated_at = clock.now_rfc3339();
        put_settings(
            &config.dynamodb_client,
            &config.seasonal_settings_table,
            &settings,
        )
        .await?;
    }

    info!(
        request_id = %request_id,
        user_id = %user_id,
        plant_preference = preference.as_str(),
        "Plant preference updated"
    );

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "message": "Plant preference updated successfully",
            "plant_data": plant_preset(preference).guide
        }),
    )
}

/// Handler for GET /plants/{plant_preference}
pub fn get_plant_recommendations(
    clock: &dyn Clock,
    plant_key: &str,
) -> Result<Response<Body>, ApiError> {
    let preference = validate_plant_preference(Some(plant_key))?;
    let guide = &plant_preset(preference).guide;
    let season = detect_current_season(clock.today());

    json_response(
        200,
        &serde_json::json!({
            "plant_type": preference.as_str(),
            "current_season": season,
            "recommendations": guide.recommendations,
            "season_tips": guide.season_tips.for_season(season),
            "optimal_conditions": guide.ideal_conditions
        }),
    )
}
