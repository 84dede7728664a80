//! Independent advisory rules over a single reading.
//!
//! Unlike chat classification every rule is evaluated, in the order NPK,
//! moisture, pH, season. Absent quantities never trigger a rule.

use crate::domain::{Recommendation, RecommendationKind, SensorReading, Season};
use crate::sensor_validation::sanitize_reading;

const NITROGEN_LOW: Recommendation = Recommendation {
    kind: RecommendationKind::Urgent,
    title: "Nitrogen Rendah",
    message: "Aplikasi pupuk nitrogen segera diperlukan",
    action: "Berikan pupuk Urea 2-3 sdm per tanaman",
};

const PHOSPHORUS_LOW: Recommendation = Recommendation {
    kind: RecommendationKind::Warning,
    title: "Fosfor Kurang",
    message: "Perkembangan akar dan bunga terhambat",
    action: "Aplikasi TSP atau pupuk tulang",
};

const POTASSIUM_LOW: Recommendation = Recommendation {
    kind: RecommendationKind::Info,
    title: "Kalium Perlu Ditingkatkan",
    message: "Kualitas buah bisa lebih optimal",
    action: "Tambahkan KCl atau abu kayu",
};

const MOISTURE_CRITICAL: Recommendation = Recommendation {
    kind: RecommendationKind::Critical,
    title: "Kelembaban Kritis",
    message: "Tanaman dalam kondisi stress air",
    action: "Penyiraman segera diperlukan",
};

const MOISTURE_HIGH: Recommendation = Recommendation {
    kind: RecommendationKind::Warning,
    title: "Kelembaban Tinggi",
    message: "Risiko busuk akar dan penyakit jamur",
    action: "Cek drainase dan kurangi penyiraman",
};

const PH_TOO_ACIDIC: Recommendation = Recommendation {
    kind: RecommendationKind::Urgent,
    title: "pH Terlalu Asam",
    message: "Nutrisi sulit diserap oleh tanaman",
    action: "Aplikasi kapur pertanian",
};

const PH_TOO_ALKALINE: Recommendation = Recommendation {
    kind: RecommendationKind::Warning,
    title: "pH Terlalu Basa",
    message: "Defisiensi mikronutrient mungkin terjadi",
    action: "Tambahkan belerang atau kompos asam",
};

const DRY_SEASON_TIP: Recommendation = Recommendation {
    kind: RecommendationKind::Info,
    title: "Tips Musim Kering",
    message: "Optimalkan penggunaan air",
    action: "Gunakan mulching dan penyiraman pagi/sore",
};

fn below(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v < limit)
}

fn above(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v > limit)
}

pub fn generate_recommendations(reading: &SensorReading, season: Season) -> Vec<Recommendation> {
    let (reading, _) = sanitize_reading(reading);
    let mut recommendations = Vec::new();

    if let Some(npk) = &reading.npk {
        if below(npk.nitrogen, 30.0) {
            recommendations.push(NITROGEN_LOW);
        }
        if below(npk.phosphorus, 20.0) {
            recommendations.push(PHOSPHORUS_LOW);
        }
        if below(npk.potassium, 40.0) {
            recommendations.push(POTASSIUM_LOW);
        }
    }

    if below(reading.moisture, 30.0) {
        recommendations.push(MOISTURE_CRITICAL);
    } else if above(reading.moisture, 85.0) {
        recommendations.push(MOISTURE_HIGH);
    }

    if below(reading.ph, 5.5) {
        recommendations.push(PH_TOO_ACIDIC);
    } else if above(reading.ph, 8.0) {
        recommendations.push(PH_TOO_ALKALINE);
    }

    if season == Season::Dry {
        recommendations.push(DRY_SEASON_TIP);
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NpkReading;

    #[test]
    fn test_all_low_reading_in_dry_season() {
        let reading = SensorReading {
            moisture: Some(20.0),
            ph: Some(4.5),
            npk: Some(NpkReading::new(20.0, 15.0, 30.0)),
            ..Default::default()
        };

        let recs = generate_recommendations(&reading, Season::Dry);
        let titles: Vec<_> = recs.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec![
                "Nitrogen Rendah",
                "Fosfor Kurang",
                "Kalium Perlu Ditingkatkan",
                "Kelembaban Kritis",
                "pH Terlalu Asam",
                "Tips Musim Kering",
            ]
        );
        assert_eq!(recs[3].kind, RecommendationKind::Critical);
    }

    #[test]
    fn test_healthy_reading_in_wet_season_is_empty() {
        let reading = SensorReading {
            moisture: Some(63.0),
            ph: Some(6.8),
            npk: Some(NpkReading::new(45.0, 32.0, 78.0)),
            ..Default::default()
        };
        assert!(generate_recommendations(&reading, Season::Wet).is_empty());
    }

    #[test]
    fn test_high_values() {
        let reading = SensorReading {
            moisture: Some(90.0),
            ph: Some(8.5),
            ..Default::default()
        };
        let recs = generate_recommendations(&reading, Season::Wet);
        assert_eq!(recs, vec![MOISTURE_HIGH, PH_TOO_ALKALINE]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let reading = SensorReading {
            moisture: Some(30.0),
            ph: Some(8.0),
            npk: Some(NpkReading::new(30.0, 20.0, 40.0)),
            ..Default::default()
        };
        assert!(generate_recommendations(&reading, Season::Wet).is_empty());

        let reading = SensorReading {
            moisture: Some(85.0),
            ph: Some(5.5),
            ..Default::default()
        };
        assert!(generate_recommendations(&reading, Season::Wet).is_empty());
    }

    #[test]
    fn test_missing_nutrient_skips_its_check() {
        let reading = SensorReading {
            npk: Some(NpkReading {
                nitrogen: Some(10.0),
                phosphorus: None,
                potassium: None,
            }),
            ..Default::default()
        };
        let recs = generate_recommendations(&reading, Season::Wet);
        assert_eq!(recs, vec![NITROGEN_LOW]);
    }

    #[test]
    fn test_empty_reading_only_gets_season_tip() {
        let recs = generate_recommendations(&SensorReading::default(), Season::Dry);
        assert_eq!(recs, vec![DRY_SEASON_TIP]);
        assert!(generate_recommendations(&SensorReading::default(), Season::Wet).is_empty());
    }

    #[test]
    fn test_serialized_record_shape() {
        let json = serde_json::to_value(NITROGEN_LOW).unwrap();
        assert_eq!(json["type"], "urgent");
        assert_eq!(json["action"], "Berikan pupuk Urea 2-3 sdm per tanaman");
    }
}
