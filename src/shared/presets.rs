use serde::Serialize;

use crate::domain::{PlantPreference, Season, SeasonMode, SeasonalSettings, SeasonalThresholds};

pub const DEFAULT_MONITORING_INTERVAL_DRY: u32 = 30;
pub const DEFAULT_MONITORING_INTERVAL_WET: u32 = 60;

/// Ideal growing environment for a plant type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealConditions {
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub sunlight: &'static str,
}

/// Per-season one-liners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonTips {
    pub dry: &'static str,
    pub wet: &'static str,
}

impl SeasonTips {
    pub fn for_season(&self, season: Season) -> &'static str {
        match season {
            Season::Dry => self.dry,
            Season::Wet => self.wet,
        }
    }
}

/// Descriptive guidance shown for a plant type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantGuide {
    pub name: &'static str,
    pub optimal_moisture: &'static str,
    pub optimal_ph: &'static str,
    pub key_nutrients: [&'static str; 2],
    pub recommendations: [&'static str; 4],
    pub season_tips: SeasonTips,
    pub ideal_conditions: IdealConditions,
}

/// Default bands plus guidance for one plant type
#[derive(Debug, Clone, PartialEq)]
pub struct PlantPreset {
    pub preference: PlantPreference,
    pub dry_season: SeasonalThresholds,
    pub wet_season: SeasonalThresholds,
    pub guide: PlantGuide,
}

impl PlantPreset {
    pub fn band_for(&self, season: Season) -> SeasonalThresholds {
        match season {
            Season::Dry => self.dry_season,
            Season::Wet => self.wet_season,
        }
    }
}

static PLANT_PRESETS: [PlantPreset; 3] = [
    PlantPreset {
        preference: PlantPreference::Sawah,
        dry_season: SeasonalThresholds::new(40.0, 70.0, 5.5, 7.0),
        wet_season: SeasonalThresholds::new(60.0, 90.0, 5.5, 6.8),
        guide: PlantGuide {
            name: "Tanaman Sawah",
            optimal_moisture: "60-90%",
            optimal_ph: "5.5-7.0",
            key_nutrients: ["Nitrogen", "Phosphorus"],
            recommendations: [
                "Pastikan sistem irigasi berfungsi optimal",
                "Monitor pH tanah secara berkala",
                "Perhatikan kadar nitrogen untuk pertumbuhan",
                "Kontrol hama wereng dan tikus sawah",
            ],
            season_tips: SeasonTips {
                dry: "Pastikan irigasi optimal untuk sawah, tingkatkan frekuensi monitoring",
                wet: "Monitor drainase untuk mencegah genangan berlebih, waspadai penyakit jamur",
            },
            ideal_conditions: IdealConditions {
                temperature: "25-30°C",
                humidity: "70-85%",
                sunlight: "6-8 jam/hari",
            },
        },
    },
    PlantPreset {
        preference: PlantPreference::LahanKering,
        dry_season: SeasonalThresholds::new(30.0, 60.0, 6.0, 7.5),
        wet_season: SeasonalThresholds::new(50.0, 80.0, 5.8, 7.2),
        guide: PlantGuide {
            name: "Lahan Kering",
            optimal_moisture: "40-70%",
            optimal_ph: "6.0-7.5",
            key_nutrients: ["Potassium", "Phosphorus"],
            recommendations: [
                "Optimalisasi penyiraman saat musim kemarau",
                "Perhatikan drainase saat musim hujan",
                "Monitor kadar fosfor dan kalium",
                "Aplikasi mulsa untuk konservasi air",
            ],
            season_tips: SeasonTips {
                dry: "Tingkatkan frekuensi penyiraman, gunakan mulsa untuk konservasi air",
                wet: "Pastikan drainase baik untuk mencegah busuk akar, kurangi penyiraman",
            },
            ideal_conditions: IdealConditions {
                temperature: "22-28°C",
                humidity: "60-75%",
                sunlight: "5-7 jam/hari",
            },
        },
    },
    PlantPreset {
        preference: PlantPreference::Hidroponik,
        dry_season: SeasonalThresholds::new(70.0, 90.0, 5.5, 6.5),
        wet_season: SeasonalThresholds::new(70.0, 95.0, 5.5, 6.3),
        guide: PlantGuide {
            name: "Hidroponik",
            optimal_moisture: "70-95%",
            optimal_ph: "5.5-6.5",
            key_nutrients: ["NPK Balance", "Micronutrients"],
            recommendations: [
                "Monitor EC (electrical conductivity) larutan",
                "Jaga sirkulasi air dan oksigen",
                "Kontrol pH larutan nutrisi secara ketat",
                "Bersihkan sistem secara berkala",
            ],
            season_tips: SeasonTips {
                dry: "Monitor EC larutan nutrisi lebih ketat, pastikan cooling system berfungsi",
                wet: "Perhatikan sirkulasi udara dan oksigen, waspadai pertumbuhan alga",
            },
            ideal_conditions: IdealConditions {
                temperature: "18-25°C",
                humidity: "50-70%",
                sunlight: "12-16 jam/hari (LED)",
            },
        },
    },
];

/// Look up the immutable preset for a plant type
pub fn plant_preset(preference: PlantPreference) -> &'static PlantPreset {
    match preference {
        PlantPreference::Sawah => &PLANT_PRESETS[0],
        PlantPreference::LahanKering => &PLANT_PRESETS[1],
        PlantPreference::Hidroponik => &PLANT_PRESETS[2],
    }
}

pub fn all_presets() -> &'static [PlantPreset] {
    &PLANT_PRESETS
}

/// Settings row created the first time a user opens the dashboard
pub fn default_seasonal_settings(
    user_id: &str,
    preference: PlantPreference,
    current_season: Season,
    now_rfc3339: &str,
) -> SeasonalSettings {
    let preset = plant_preset(preference);

    SeasonalSettings {
        user_id: user_id.to_string(),
        season_mode: SeasonMode::Auto,
        current_season,
        dry_season_settings: preset.dry_season,
        wet_season_settings: preset.wet_season,
        monitoring_interval_dry: DEFAULT_MONITORING_INTERVAL_DRY,
        monitoring_interval_wet: DEFAULT_MONITORING_INTERVAL_WET,
        power_conservation_enabled: false,
        created_at: now_rfc3339.to_string(),
        updated_at: now_rfc3339.to_string(),
    }
}

/// Replace both bands with the preset of a new plant type
pub fn apply_plant_preset(settings: &mut SeasonalSettings, preference: PlantPreference) {
    let preset = plant_preset(preference);
    settings.dry_season_settings = preset.dry_season;
    settings.wet_season_settings = preset.wet_season;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table_is_keyed_by_preference() {
        for pref in PlantPreference::ALL {
            assert_eq!(plant_preset(pref).preference, pref);
            assert_eq!(plant_preset(pref).guide.name, pref.display_name());
        }
        assert_eq!(all_presets().len(), 3);
    }

    #[test]
    fn test_literal_bands() {
        let sawah = plant_preset(PlantPreference::Sawah);
        assert_eq!(sawah.dry_season, SeasonalThresholds::new(40.0, 70.0, 5.5, 7.0));
        assert_eq!(sawah.wet_season, SeasonalThresholds::new(60.0, 90.0, 5.5, 6.8));

        let kering = plant_preset(PlantPreference::LahanKering);
        assert_eq!(kering.dry_season, SeasonalThresholds::new(30.0, 60.0, 6.0, 7.5));
        assert_eq!(kering.wet_season, SeasonalThresholds::new(50.0, 80.0, 5.8, 7.2));

        let hidro = plant_preset(PlantPreference::Hidroponik);
        assert_eq!(hidro.dry_season, SeasonalThresholds::new(70.0, 90.0, 5.5, 6.5));
        assert_eq!(hidro.wet_season, SeasonalThresholds::new(70.0, 95.0, 5.5, 6.3));
    }

    #[test]
    fn test_default_settings_from_preset() {
        let settings = default_seasonal_settings(
            "user-1",
            PlantPreference::Hidroponik,
            Season::Wet,
            "2024-01-10T00:00:00+00:00",
        );

        assert_eq!(settings.season_mode, SeasonMode::Auto);
        assert_eq!(settings.current_season, Season::Wet);
        assert_eq!(settings.monitoring_interval_dry, 30);
        assert_eq!(settings.monitoring_interval_wet, 60);
        assert!(!settings.power_conservation_enabled);
        assert_eq!(settings.wet_season_settings.moisture_max, 95.0);
        assert_eq!(settings.created_at, settings.updated_at);
    }

    #[test]
    fn test_apply_plant_preset_resets_bands_only() {
        let mut settings = default_seasonal_settings(
            "user-1",
            PlantPreference::Sawah,
            Season::Dry,
            "2024-05-10T00:00:00+00:00",
        );
        settings.monitoring_interval_dry = 15;

        apply_plant_preset(&mut settings, PlantPreference::LahanKering);

        assert_eq!(settings.dry_season_settings.moisture_min, 30.0);
        assert_eq!(settings.wet_season_settings.ph_min, 5.8);
        assert_eq!(settings.monitoring_interval_dry, 15);
    }

    #[test]
    fn test_season_tips_lookup() {
        let tips = &plant_preset(PlantPreference::LahanKering).guide.season_tips;
        assert!(tips.for_season(Season::Dry).contains("mulsa"));
        assert!(tips.for_season(Season::Wet).contains("busuk akar"));
    }
}
