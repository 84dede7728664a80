use crate::domain::{NpkReading, SensorReading};

pub const MOISTURE_MIN_PCT: f64 = 0.0;
pub const MOISTURE_MAX_PCT: f64 = 100.0;
pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;
pub const NUTRIENT_MIN_PCT: f64 = 0.0;
pub const NUTRIENT_MAX_PCT: f64 = 100.0;
pub const TEMP_MIN_C: f64 = -40.0;
pub const TEMP_MAX_C: f64 = 85.0;

/// Quality of a single sensor value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorStatus {
    Ok,
    Missing,
    OutOfRange,
}

impl SensorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Ok => "ok",
            SensorStatus::Missing => "missing",
            SensorStatus::OutOfRange => "out_of_range",
        }
    }
}

fn validate_range(value: Option<f64>, min: f64, max: f64) -> SensorStatus {
    match value {
        None => SensorStatus::Missing,
        Some(v) if !v.is_finite() || v < min || v > max => SensorStatus::OutOfRange,
        Some(_) => SensorStatus::Ok,
    }
}

pub fn validate_moisture(moisture_pct: Option<f64>) -> SensorStatus {
    validate_range(moisture_pct, MOISTURE_MIN_PCT, MOISTURE_MAX_PCT)
}

pub fn validate_ph(ph: Option<f64>) -> SensorStatus {
    validate_range(ph, PH_MIN, PH_MAX)
}

pub fn validate_nutrient(nutrient_pct: Option<f64>) -> SensorStatus {
    validate_range(nutrient_pct, NUTRIENT_MIN_PCT, NUTRIENT_MAX_PCT)
}

pub fn validate_temperature(temp_c: Option<f64>) -> SensorStatus {
    validate_range(temp_c, TEMP_MIN_C, TEMP_MAX_C)
}

fn keep_if_ok(
    value: Option<f64>,
    status: SensorStatus,
    field: &'static str,
    rejected: &mut Vec<&'static str>,
) -> Option<f64> {
    match status {
        SensorStatus::Ok => value,
        SensorStatus::Missing => None,
        SensorStatus::OutOfRange => {
            rejected.push(field);
            None
        }
    }
}

/// Reading with impossible values dropped, plus the names of dropped fields.
///
/// A dropped value behaves exactly like one the sensor never reported.
pub fn sanitize_reading(reading: &SensorReading) -> (SensorReading, Vec<&'static str>) {
    let mut rejected = Vec::new();

    let moisture = keep_if_ok(
        reading.moisture,
        validate_moisture(reading.moisture),
        "moisture",
        &mut rejected,
    );
    let ph = keep_if_ok(reading.ph, validate_ph(reading.ph), "ph", &mut rejected);
    let temperature = keep_if_ok(
        reading.temperature,
        validate_temperature(reading.temperature),
        "temperature",
        &mut rejected,
    );

    let npk = reading.npk.as_ref().map(|npk| NpkReading {
        nitrogen: keep_if_ok(
            npk.nitrogen,
            validate_nutrient(npk.nitrogen),
            "npk.nitrogen",
            &mut rejected,
        ),
        phosphorus: keep_if_ok(
            npk.phosphorus,
            validate_nutrient(npk.phosphorus),
            "npk.phosphorus",
            &mut rejected,
        ),
        potassium: keep_if_ok(
            npk.potassium,
            validate_nutrient(npk.potassium),
            "npk.potassium",
            &mut rejected,
        ),
    });

    let sanitized = SensorReading {
        moisture,
        ph,
        npk,
        temperature,
        last_update: reading.last_update.clone(),
    };

    (sanitized, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_moisture() {
        assert_eq!(validate_moisture(Some(0.0)), SensorStatus::Ok);
        assert_eq!(validate_moisture(Some(100.0)), SensorStatus::Ok);
        assert_eq!(validate_moisture(Some(100.1)), SensorStatus::OutOfRange);
        assert_eq!(validate_moisture(Some(-1.0)), SensorStatus::OutOfRange);
        assert_eq!(validate_moisture(None), SensorStatus::Missing);
    }

    #[test]
    fn test_validate_ph() {
        assert_eq!(validate_ph(Some(6.8)), SensorStatus::Ok);
        assert_eq!(validate_ph(Some(14.0)), SensorStatus::Ok);
        assert_eq!(validate_ph(Some(14.5)), SensorStatus::OutOfRange);
        assert_eq!(validate_ph(Some(f64::NAN)), SensorStatus::OutOfRange);
    }

    #[test]
    fn test_validate_temperature() {
        assert_eq!(validate_temperature(Some(28.5)), SensorStatus::Ok);
        assert_eq!(validate_temperature(Some(-41.0)), SensorStatus::OutOfRange);
        assert_eq!(validate_temperature(Some(f64::INFINITY)), SensorStatus::OutOfRange);
    }

    #[test]
    fn test_sanitize_keeps_valid_reading() {
        let reading = SensorReading {
            moisture: Some(63.0),
            ph: Some(6.8),
            npk: Some(NpkReading::new(45.0, 32.0, 78.0)),
            temperature: Some(28.5),
            last_update: Some("2024-05-01T08:00:00Z".to_string()),
        };

        let (sanitized, rejected) = sanitize_reading(&reading);
        assert_eq!(sanitized, reading);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_sanitize_drops_out_of_range_fields() {
        let reading = SensorReading {
            moisture: Some(150.0),
            ph: Some(6.8),
            npk: Some(NpkReading::new(45.0, -3.0, 78.0)),
            temperature: None,
            last_update: None,
        };

        let (sanitized, rejected) = sanitize_reading(&reading);
        assert_eq!(sanitized.moisture, None);
        assert_eq!(sanitized.ph, Some(6.8));
        let npk = sanitized.npk.unwrap();
        assert_eq!(npk.phosphorus, None);
        assert_eq!(npk.nitrogen, Some(45.0));
        assert_eq!(rejected, vec!["moisture", "npk.phosphorus"]);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(SensorStatus::Ok.as_str(), "ok");
        assert_eq!(SensorStatus::OutOfRange.as_str(), "out_of_range");
    }
}
