//! Seasonal threshold evaluation.
//!
//! Compares a reading against the band of the settings' current season.
//! Bounds are inclusive and a quantity that was not measured never counts
//! as an alert.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{SensorReading, Season, SeasonMode, SeasonalSettings, SeasonalThresholds};
use crate::season::detect_current_season;

/// Where one measured quantity sits relative to its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandCheck {
    Within,
    Below,
    Above,
    NotMeasured,
}

impl BandCheck {
    pub fn is_alert(&self) -> bool {
        matches!(self, BandCheck::Below | BandCheck::Above)
    }
}

/// Result of evaluating one reading against one settings row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub season: Season,
    pub band: SeasonalThresholds,
    pub moisture: BandCheck,
    pub ph: BandCheck,
    pub alerts_count: u8,
}

/// Band of the settings' current season
pub fn active_band(settings: &SeasonalSettings) -> SeasonalThresholds {
    match settings.current_season {
        Season::Dry => settings.dry_season_settings,
        Season::Wet => settings.wet_season_settings,
    }
}

pub fn check_band(value: Option<f64>, min: f64, max: f64) -> BandCheck {
    match value {
        None => BandCheck::NotMeasured,
        Some(v) if v < min => BandCheck::Below,
        Some(v) if v > max => BandCheck::Above,
        Some(_) => BandCheck::Within,
    }
}

pub fn evaluate_thresholds(reading: &SensorReading, settings: &SeasonalSettings) -> ThresholdReport {
    let band = active_band(settings);
    let moisture = check_band(reading.moisture, band.moisture_min, band.moisture_max);
    let ph = check_band(reading.ph, band.ph_min, band.ph_max);

    let alerts_count = [moisture, ph].iter().filter(|c| c.is_alert()).count() as u8;

    ThresholdReport {
        season: settings.current_season,
        band,
        moisture,
        ph,
        alerts_count,
    }
}

/// Number of measured quantities outside the active band, in {0, 1, 2}
pub fn count_alerts(reading: &SensorReading, settings: &SeasonalSettings) -> u8 {
    evaluate_thresholds(reading, settings).alerts_count
}

pub fn is_within_moisture_threshold(moisture: f64, settings: &SeasonalSettings) -> bool {
    let band = active_band(settings);
    check_band(Some(moisture), band.moisture_min, band.moisture_max) == BandCheck::Within
}

pub fn is_within_ph_threshold(ph: f64, settings: &SeasonalSettings) -> bool {
    let band = active_band(settings);
    check_band(Some(ph), band.ph_min, band.ph_max) == BandCheck::Within
}

/// Monitoring interval in minutes for the current season
pub fn current_monitoring_interval(settings: &SeasonalSettings) -> u32 {
    match settings.current_season {
        Season::Dry => settings.monitoring_interval_dry,
        Season::Wet => settings.monitoring_interval_wet,
    }
}

/// Season the row should be in on `date`
pub fn effective_season(settings: &SeasonalSettings, date: NaiveDate) -> Season {
    match settings.season_mode {
        SeasonMode::Auto => detect_current_season(date),
        SeasonMode::ManualDry => Season::Dry,
        SeasonMode::ManualWet => Season::Wet,
    }
}

/// Bring `current_season` in line with the mode; returns true when it changed
pub fn resolve_season(settings: &mut SeasonalSettings, date: NaiveDate) -> bool {
    let season = effective_season(settings, date);
    if settings.current_season == season {
        return false;
    }
    settings.current_season = season;
    true
}
