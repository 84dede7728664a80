//! Calendar-driven season rules.
//!
//! Indonesian dry season runs April through September; every other month is
//! wet. All functions are pure in the date they are given.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::Season;

pub const DRY_SEASON_FIRST_MONTH: u32 = 4;
pub const DRY_SEASON_LAST_MONTH: u32 = 9;

/// Season for a calendar month (1-12)
pub fn season_for_month(month: u32) -> Season {
    if (DRY_SEASON_FIRST_MONTH..=DRY_SEASON_LAST_MONTH).contains(&month) {
        Season::Dry
    } else {
        Season::Wet
    }
}

pub fn detect_current_season(date: NaiveDate) -> Season {
    season_for_month(date.month())
}

/// One-line advisory for the weather card
pub fn seasonal_forecast_text(date: NaiveDate) -> &'static str {
    match date.month() {
        3..=5 => "Transisi ke musim kemarau - monitoring kelembaban intensif",
        9..=11 => "Transisi ke musim hujan - siapkan drainase tambahan",
        6..=8 => "Puncak musim kemarau - konservasi air maksimal",
        _ => "Musim hujan - pantau drainase dan pH tanah",
    }
}

/// Season card shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonGuide {
    pub season: Season,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: [&'static str; 4],
    pub optimal_watering: &'static str,
    pub monitoring_frequency: &'static str,
}

pub fn season_guide(season: Season) -> SeasonGuide {
    match season {
        Season::Dry => SeasonGuide {
            season,
            icon: "🌞",
            title: "Musim Kemarau",
            description: "Fokus pada irigasi & konservasi air",
            recommendations: [
                "Tingkatkan frekuensi monitoring kelembapan tanah",
                "Siapkan sistem irigasi tambahan untuk antisipasi kekeringan",
                "Pantau efisiensi solar panel untuk charging optimal",
                "Pertimbangkan mulsa untuk mengurangi evaporasi air",
            ],
            optimal_watering: "Pagi (06:00-08:00) dan sore (16:00-18:00)",
            monitoring_frequency: "Setiap 30 menit",
        },
        Season::Wet => SeasonGuide {
            season,
            icon: "🌧️",
            title: "Musim Hujan",
            description: "Fokus pada drainase & pencegahan penyakit",
            recommendations: [
                "Pastikan sistem drainase tanah berfungsi optimal",
                "Monitor pH tanah lebih sering karena perubahan curah hujan",
                "Aktifkan mode hemat daya untuk mengoptimalkan battery",
                "Waspada penyakit tanaman akibat kelembapan tinggi",
            ],
            optimal_watering: "Sesuaikan dengan curah hujan alami",
            monitoring_frequency: "Setiap 60 menit",
        },
    }
}

/// Countdown to the next season change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonTransition {
    pub next_season: Season,
    pub next_season_name: &'static str,
    pub estimated_date: &'static str,
    pub days_remaining: i64,
    pub preparation_tips: [&'static str; 3],
}

pub fn season_transition(current: Season, today: NaiveDate) -> SeasonTransition {
    match current {
        Season::Dry => {
            // Past September a dry row is overdue for the switch
            let days_remaining = if today.month() <= DRY_SEASON_LAST_MONTH {
                days_until(today, today.year(), DRY_SEASON_LAST_MONTH + 1)
            } else {
                0
            };

            SeasonTransition {
                next_season: Season::Wet,
                next_season_name: Season::Wet.display_name(),
                estimated_date: "Oktober",
                days_remaining,
                preparation_tips: [
                    "Siapkan sistem drainase",
                    "Cek kondisi atap/pelindung sensor",
                    "Backup data penting",
                ],
            }
        }
        Season::Wet => {
            let year = if today.month() >= DRY_SEASON_FIRST_MONTH {
                today.year() + 1
            } else {
                today.year()
            };

            SeasonTransition {
                next_season: Season::Dry,
                next_season_name: Season::Dry.display_name(),
                estimated_date: "April",
                days_remaining: days_until(today, year, DRY_SEASON_FIRST_MONTH),
                preparation_tips: [
                    "Siapkan sistem irigasi",
                    "Cek kondisi solar panel",
                    "Stok air untuk irigasi darurat",
                ],
            }
        }
    }
}

fn days_until(today: NaiveDate, year: i32, month: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|target| (target - today).num_days())
        .unwrap_or(0)
}
