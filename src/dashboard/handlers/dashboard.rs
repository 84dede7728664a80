use chrono::Duration;
use lambda_http::{Body, Request, RequestExt, Response};
use tracing::info;

use super::settings::load_resolved_settings;
use super::{json_response, requested_preference};
use crate::config::DashboardConfig;
use crate::error::ApiError;
use soilsense::{
    evaluate_thresholds, plant_preset, season_guide, season_transition, seasonal_forecast_text,
    validate_user_id, Clock, PlantPreference, SeasonalSettings, SensorReading,
};

const TOTAL_SENSORS: u32 = 3;
const BATTERY_LEVEL: u32 = 85;

/// Handler for GET /users/{user_id}/dashboard
pub async fn get_dashboard(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    user_id: &str,
) -> Result<Response<Body>, ApiError> {
    let request_id = event.lambda_context().request_id.clone();

    validate_user_id(user_id)?;
    let preference = requested_preference(&event);

    let settings = load_resolved_settings(config, clock, user_id, preference).await?;
    let reading = config.sensor_source().current_reading(clock);

    let body = build_dashboard(&reading, &settings, preference, clock);

    info!(
        request_id = %request_id,
        user_id = %user_id,
        current_season = settings.current_season.as_str(),
        alerts_count = %body["statistics"]["alerts_count"],
        "Dashboard assembled"
    );

    json_response(200, &body)
}

/// Assemble the dashboard document for one reading and settings row
pub fn build_dashboard(
    reading: &SensorReading,
    settings: &SeasonalSettings,
    preference: PlantPreference,
    clock: &dyn Clock,
) -> serde_json::Value {
    let today = clock.today();
    let report = evaluate_thresholds(reading, settings);
    let last_sync_time = (clock.now_utc() - Duration::minutes(2)).to_rfc3339();

    serde_json::json!({
        "sensor_data": reading,
        "seasonal_settings": settings,
        "statistics": {
            "total_sensors": TOTAL_SENSORS,
            "alerts_count": report.alerts_count,
            "last_sync_time": last_sync_time,
            "battery_level": BATTERY_LEVEL
        },
        "weather": {
            "temperature": 32,
            "humidity": 78,
            "condition": "Cerah Berawan",
            "rainfall": 0,
            "wind_speed": 5,
            "seasonal_forecast": seasonal_forecast_text(today)
        },
        "seasonal_recommendations": season_guide(settings.current_season),
        "season_transition": season_transition(settings.current_season, today),
        "threshold_report": report,
        "plant_data": plant_preset(preference).guide,
        "user_preference": preference.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilsense::{default_seasonal_settings, DemoSensorSource, FixedClock, Season, SensorSource};

    #[test]
    fn test_dashboard_with_demo_reading_in_dry_season() {
        let clock = FixedClock::from_rfc3339("2024-05-01T08:00:00Z").unwrap();
        let settings = default_seasonal_settings(
            "farmer-1",
            PlantPreference::LahanKering,
            Season::Dry,
            "2024-05-01T08:00:00+00:00",
        );
        let reading = DemoSensorSource.current_reading(&clock);

        let body = build_dashboard(&reading, &settings, PlantPreference::LahanKering, &clock);

        // moisture 63 > 60 is above the dry band, pH 6.8 is within [6.0, 7.5]
        assert_eq!(body["statistics"]["alerts_count"], 1);
        assert_eq!(body["threshold_report"]["moisture"], "above");
        assert_eq!(body["threshold_report"]["ph"], "within");
        assert_eq!(body["statistics"]["total_sensors"], 3);
        assert_eq!(body["statistics"]["battery_level"], 85);
        assert_eq!(body["statistics"]["last_sync_time"], "2024-05-01T07:58:00+00:00");
        assert_eq!(
            body["weather"]["seasonal_forecast"],
            "Transisi ke musim kemarau - monitoring kelembaban intensif"
        );
        assert_eq!(body["seasonal_recommendations"]["title"], "Musim Kemarau");
        assert_eq!(body["season_transition"]["estimated_date"], "Oktober");
        assert_eq!(body["season_transition"]["days_remaining"], 153);
        assert_eq!(body["plant_data"]["name"], "Lahan Kering");
        assert_eq!(body["user_preference"], "lahan-kering");
        assert_eq!(body["sensor_data"]["npk"]["potassium"], 78.0);
    }

    #[test]
    fn test_dashboard_wet_season_band() {
        let clock = FixedClock::from_rfc3339("2024-11-15T08:00:00Z").unwrap();
        let settings = default_seasonal_settings(
            "farmer-1",
            PlantPreference::Sawah,
            Season::Wet,
            "2024-11-15T08:00:00+00:00",
        );
        let reading = DemoSensorSource.current_reading(&clock);

        let body = build_dashboard(&reading, &settings, PlantPreference::Sawah, &clock);

        // sawah wet band {60,90,5.5,6.8}: 63 and 6.8 are both inside, inclusive
        assert_eq!(body["statistics"]["alerts_count"], 0);
        assert_eq!(body["seasonal_recommendations"]["title"], "Musim Hujan");
        assert_eq!(body["season_transition"]["estimated_date"], "April");
        assert_eq!(body["plant_data"]["name"], "Tanaman Sawah");
    }
}
