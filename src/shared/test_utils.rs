//! Test utilities for property-based testing
//!
//! This module provides generators and utilities for property-based tests
//! using the proptest framework. It includes generators for sensor readings,
//! threshold bands, seasonal settings, calendar dates and chat messages.

pub mod generators {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use crate::domain::{
        NpkReading, PlantPreference, Season, SeasonMode, SeasonalSettings, SeasonalThresholds,
        SensorReading,
    };

    /// Generate a moisture percentage inside the sensor domain
    pub fn moisture() -> impl Strategy<Value = f64> {
        0.0..=100.0f64
    }

    /// Generate a pH value inside the sensor domain
    pub fn ph() -> impl Strategy<Value = f64> {
        0.0..=14.0f64
    }

    /// Generate an NPK block where each nutrient may be missing
    pub fn npk() -> impl Strategy<Value = NpkReading> {
        (
            prop::option::of(0.0..=100.0f64),
            prop::option::of(0.0..=100.0f64),
            prop::option::of(0.0..=100.0f64),
        )
            .prop_map(|(nitrogen, phosphorus, potassium)| NpkReading {
                nitrogen,
                phosphorus,
                potassium,
            })
    }

    /// Generate a reading with any subset of fields present
    pub fn sensor_reading() -> impl Strategy<Value = SensorReading> {
        (
            prop::option::of(moisture()),
            prop::option::of(ph()),
            prop::option::of(npk()),
            prop::option::of(-40.0..=85.0f64),
        )
            .prop_map(|(moisture, ph, npk, temperature)| SensorReading {
                moisture,
                ph,
                npk,
                temperature,
                last_update: None,
            })
    }

    /// Generate a reading with moisture and pH always present
    pub fn complete_reading() -> impl Strategy<Value = SensorReading> {
        (moisture(), ph(), npk()).prop_map(|(moisture, ph, npk)| SensorReading {
            moisture: Some(moisture),
            ph: Some(ph),
            npk: Some(npk),
            temperature: None,
            last_update: None,
        })
    }

    /// Generate a well-formed band (min <= max for both quantities)
    pub fn thresholds() -> impl Strategy<Value = SeasonalThresholds> {
        (moisture(), moisture(), ph(), ph()).prop_map(|(m1, m2, p1, p2)| {
            SeasonalThresholds::new(m1.min(m2), m1.max(m2), p1.min(p2), p1.max(p2))
        })
    }

    pub fn season() -> impl Strategy<Value = Season> {
        prop_oneof![Just(Season::Dry), Just(Season::Wet)]
    }

    pub fn season_mode() -> impl Strategy<Value = SeasonMode> {
        prop_oneof![
            Just(SeasonMode::Auto),
            Just(SeasonMode::ManualDry),
            Just(SeasonMode::ManualWet),
        ]
    }

    pub fn plant_preference() -> impl Strategy<Value = PlantPreference> {
        prop::sample::select(PlantPreference::ALL.to_vec())
    }

    /// Generate a complete settings row with arbitrary bands
    pub fn seasonal_settings() -> impl Strategy<Value = SeasonalSettings> {
        (
            season_mode(),
            season(),
            thresholds(),
            thresholds(),
            1u32..=1440,
            1u32..=1440,
            any::<bool>(),
        )
            .prop_map(
                |(season_mode, current_season, dry, wet, interval_dry, interval_wet, power)| {
                    SeasonalSettings {
                        user_id: "user-prop".to_string(),
                        season_mode,
                        current_season,
                        dry_season_settings: dry,
                        wet_season_settings: wet,
                        monitoring_interval_dry: interval_dry,
                        monitoring_interval_wet: interval_wet,
                        power_conservation_enabled: power,
                        created_at: "2024-01-01T00:00:00+00:00".to_string(),
                        updated_at: "2024-01-01T00:00:00+00:00".to_string(),
                    }
                },
            )
    }

    /// Generate a calendar date between 2020 and 2035
    pub fn date() -> impl Strategy<Value = NaiveDate> {
        (2020i32..=2035, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
        })
    }

    /// Generate a month number
    pub fn month() -> impl Strategy<Value = u32> {
        1u32..=12
    }

    /// Generate a chat message that contains none of the classifier keywords
    pub fn neutral_message() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "halo",
            "selamat pagi",
            "terima kasih",
            "bagaimana kabar",
            "tolong bantu saya",
            "apa kabar bot",
        ])
        .prop_map(|s| s.to_string())
    }

    /// Generate one keyword from a given family list
    pub fn keyword_from(keywords: &'static [&'static str]) -> impl Strategy<Value = String> {
        prop::sample::select(keywords.to_vec()).prop_map(|s| s.to_string())
    }

    /// Generate a valid conversation id
    pub fn conversation_id() -> impl Strategy<Value = String> {
        prop::string::string_regex("[A-Za-z0-9_.:-]{1,128}")
            .expect("Valid regex for conversation_id")
    }

    /// Generate an invalid conversation id
    pub fn invalid_conversation_id() -> impl Strategy<Value = String> {
        prop_oneof![
            // Too long
            prop::string::string_regex("[A-Za-z0-9]{129,200}").expect("Valid regex"),
            // Unsafe characters
            Just("conversation with spaces".to_string()),
            Just("conv/../../etc".to_string()),
            // Empty
            Just("".to_string()),
        ]
    }
}

pub mod helpers {
    /// Helper to check a band is well formed
    pub fn is_well_formed(band: &crate::domain::SeasonalThresholds) -> bool {
        band.moisture_min <= band.moisture_max && band.ph_min <= band.ph_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_thresholds_generator(band in generators::thresholds()) {
            assert!(helpers::is_well_formed(&band));
        }

        #[test]
        fn test_sensor_reading_generator_stays_in_domain(reading in generators::sensor_reading()) {
            let (sanitized, rejected) = crate::sensor_validation::sanitize_reading(&reading);
            assert!(rejected.is_empty());
            assert_eq!(sanitized, reading);
        }

        #[test]
        fn test_conversation_id_generator(id in generators::conversation_id()) {
            assert!(crate::validators::validate_conversation_id(&id).is_ok());
        }

        #[test]
        fn test_invalid_conversation_id_generator(id in generators::invalid_conversation_id()) {
            assert!(crate::validators::validate_conversation_id(&id).is_err());
        }

        #[test]
        fn test_neutral_message_generator(message in generators::neutral_message()) {
            assert_eq!(
                crate::classifier::classify(&message),
                crate::classifier::ResponseFamily::General
            );
        }
    }
}
