use lambda_http::{Body, Request, RequestExt, Response};
use serde::Deserialize;
use tracing::info;

use super::{json_response, parse_json_body, requested_preference};
use crate::config::DashboardConfig;
use crate::error::{ApiError, ValidationError};
use crate::repo::seasonal_settings::{first_or_create, put_settings};
use soilsense::{
    default_seasonal_settings, detect_current_season, evaluate_thresholds, resolve_season,
    sanitize_reading, validate_monitoring_interval, validate_thresholds, validate_user_id, Clock,
    PlantPreference, Season, SeasonMode, SeasonalSettings, SeasonalThresholds, SensorReading,
};

/// Request payload for PUT /users/{user_id}/seasonal-settings
///
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub season_mode: Option<SeasonMode>,
    #[serde(default)]
    pub current_season: Option<Season>,
    #[serde(default)]
    pub dry_season_settings: Option<SeasonalThresholds>,
    #[serde(default)]
    pub wet_season_settings: Option<SeasonalThresholds>,
    #[serde(default)]
    pub monitoring_interval_dry: Option<u32>,
    #[serde(default)]
    pub monitoring_interval_wet: Option<u32>,
    #[serde(default)]
    pub power_conservation_enabled: Option<bool>,
}

impl SettingsUpdate {
    pub fn validate(&self) -> Result<(), soilsense::ValidationError> {
        if let Some(band) = &self.dry_season_settings {
            validate_thresholds("dry_season_settings", band)?;
        }
        if let Some(band) = &self.wet_season_settings {
            validate_thresholds("wet_season_settings", band)?;
        }
        if let Some(minutes) = self.monitoring_interval_dry {
            validate_monitoring_interval("monitoring_interval_dry", minutes)?;
        }
        if let Some(minutes) = self.monitoring_interval_wet {
            validate_monitoring_interval("monitoring_interval_wet", minutes)?;
        }
        Ok(())
    }

    /// Copy the provided fields onto `settings`, then re-resolve the season
    ///
    /// The mode has the last word: a manual mode pins the season and auto
    /// follows the calendar, so an explicit `current_season` only sticks when
    /// it agrees with the mode.
    pub fn apply(&self, settings: &mut SeasonalSettings, today: chrono::NaiveDate, now: &str) {
        if let Some(mode) = self.season_mode {
            settings.season_mode = mode;
        }
        if let Some(season) = self.current_season {
            settings.current_season = season;
        }
        if let Some(band) = self.dry_season_settings {
            settings.dry_season_settings = band;
        }
        if let Some(band) = self.wet_season_settings {
            settings.wet_season_settings = band;
        }
        if let Some(minutes) = self.monitoring_interval_dry {
            settings.monitoring_interval_dry = minutes;
        }
        if let Some(minutes) = self.monitoring_interval_wet {
            settings.monitoring_interval_wet = minutes;
        }
        if let Some(enabled) = self.power_conservation_enabled {
            settings.power_conservation_enabled = enabled;
        }

        resolve_season(settings, today);
        settings.updated_at = now.to_string();
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ThresholdCheckRequest {
    #[serde(default)]
    sensor_data: Option<SensorReading>,
}

/// First-or-create the user's settings and bring the season up to date
///
/// A season change is written back before returning.
pub async fn load_resolved_settings(
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
    preference: PlantPreference,
) -> Result<SeasonalSettings, ApiError> {
    let today = clock.today();
    let defaults = default_seasonal_settings(
        user_id,
        preference,
        detect_current_season(today),
        &clock.now_rfc3339(),
    );

    let mut settings = first_or_create(
        &config.dynamodb_client,
        &config.seasonal_settings_table,
        defaults,
    )
    .await?;

    if resolve_season(&mut settings, today) {
        settings.updated_at = clock.now_rfc3339();
        put_settings(
            &config.dynamodb_client,
            &config.seasonal_settings_table,
            &settings,
        )
        .await?;

        info!(
            user_id = %user_id,
            current_season = settings.current_season.as_str(),
            "Season updated on read"
        );
    }

    Ok(settings)
}

/// Handler for GET /users/{user_id}/seasonal-settings
pub async fn get_seasonal_settings(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
) -> Result<Response<Body>, ApiError> {
    validate_user_id(user_id)?;
    let preference = requested_preference(&event);

    let settings = load_resolved_settings(config, clock, user_id, preference).await?;

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "seasonal_settings": settings
        }),
    )
}

/// Handler for PUT /users/{user_id}/seasonal-settings
pub async fn update_seasonal_settings(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
) -> Result<Response<Body>, ApiError> {
    let request_id = event.lambda_context().request_id.clone();

    validate_user_id(user_id)?;
    let update: SettingsUpdate = parse_json_body(&event)?;
    update.validate()?;

    let preference = requested_preference(&event);
    let mut settings = load_resolved_settings(config, clock, user_id, preference).await?;

    update.apply(&mut settings, clock.today(), &clock.now_rfc3339());

    put_settings(
        &config.dynamodb_client,
        &config.seasonal_settings_table,
        &settings,
    )
    .await?;

    info!(
        request_id = %request_id,
        user_id = %user_id,
        season_mode = settings.season_mode.as_str(),
        current_season = settings.current_season.as_str(),
        "Seasonal settings updated"
    );

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "seasonal_settings": settings
        }),
    )
}

/// Handler for POST /users/{user_id}/threshold-check
pub async fn check_thresholds(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
) -> Result<Response<Body>, ApiError> {
    validate_user_id(user_id)?;
    let request: ThresholdCheckRequest = parse_json_body(&event)?;
    let reading = request
        .sensor_data
        .ok_or_else(|| ValidationError::MissingField("sensor_data".to_string()))?;

    let settings =
        load_resolved_settings(config, clock, user_id, requested_preference(&event)).await?;

    let (reading, rejected) = sanitize_reading(&reading);
    if !rejected.is_empty() {
        info!(user_id = %user_id, rejected = ?rejected, "Ignoring out-of-range sensor fields");
    }

    let report = evaluate_thresholds(&reading, &settings);

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "threshold_report": report
        }),
    )
}
