use regex::Regex;
use std::sync::OnceLock;

use crate::domain::{PlantPreference, SeasonalThresholds};
use crate::sensor_validation::{MOISTURE_MAX_PCT, MOISTURE_MIN_PCT, PH_MAX, PH_MIN};

pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1000;
pub const MAX_QUESTION_ID_LENGTH: usize = 64;
pub const MAX_MONITORING_INTERVAL_MINUTES: u32 = 1440;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Validation error for field '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Chat text: required, not blank, at most `max_chars` characters
pub fn validate_chat_message(message: Option<&str>, max_chars: usize) -> Result<&str, ValidationError> {
    let message = match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(ValidationError::new("message", "The message field is required")),
    };

    if message.chars().count() > max_chars {
        return Err(ValidationError::new(
            "message",
            format!("The message may not be greater than {} characters", max_chars),
        ));
    }

    Ok(message)
}

/// Conversation ids are opaque grouping keys: 1-128 chars of [A-Za-z0-9_.:-]
pub fn validate_conversation_id(conversation_id: &str) -> Result<(), ValidationError> {
    static CONVERSATION_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = CONVERSATION_ID_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_.:-]{1,128}$").expect("valid conversation id regex"));

    if regex.is_match(conversation_id) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "conversation_id",
            "Conversation ID must be 1-128 characters of letters, digits, '_', '.', ':' or '-'",
        ))
    }
}

/// User ids arrive as path segments
pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    static USER_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USER_ID_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid user id regex"));

    if regex.is_match(user_id) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "user_id",
            "User ID must be 1-64 characters of letters, digits, '_' or '-'",
        ))
    }
}

/// Question ids only need to be present; unknown ids get a placeholder answer
pub fn validate_question_id(question_id: Option<&str>) -> Result<&str, ValidationError> {
    match question_id {
        Some(id) if !id.trim().is_empty() && id.len() <= MAX_QUESTION_ID_LENGTH => Ok(id),
        Some(id) if !id.trim().is_empty() => Err(ValidationError::new(
            "question_id",
            format!(
                "Question ID may not be greater than {} characters",
                MAX_QUESTION_ID_LENGTH
            ),
        )),
        _ => Err(ValidationError::new(
            "question_id",
            "The question_id field is required",
        )),
    }
}

pub fn validate_plant_preference(value: Option<&str>) -> Result<PlantPreference, ValidationError> {
    let value = value.ok_or_else(|| {
        ValidationError::new("plant_preference", "The plant_preference field is required")
    })?;

    PlantPreference::parse(value).ok_or_else(|| {
        ValidationError::new(
            "plant_preference",
            "Plant preference must be one of: sawah, lahan-kering, hidroponik",
        )
    })
}

/// A band must sit inside the sensor domain with min <= max
pub fn validate_thresholds(field: &str, band: &SeasonalThresholds) -> Result<(), ValidationError> {
    let values = [band.moisture_min, band.moisture_max, band.ph_min, band.ph_max];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ValidationError::new(field, "Threshold values must be finite numbers"));
    }

    let moisture_ok = |v: f64| (MOISTURE_MIN_PCT..=MOISTURE_MAX_PCT).contains(&v);
    if !moisture_ok(band.moisture_min) || !moisture_ok(band.moisture_max) {
        return Err(ValidationError::new(field, "Moisture bounds must be between 0 and 100"));
    }

    let ph_ok = |v: f64| (PH_MIN..=PH_MAX).contains(&v);
    if !ph_ok(band.ph_min) || !ph_ok(band.ph_max) {
        return Err(ValidationError::new(field, "pH bounds must be between 0 and 14"));
    }

    if band.moisture_min > band.moisture_max {
        return Err(ValidationError::new(field, "moisture_min must not exceed moisture_max"));
    }

    if band.ph_min > band.ph_max {
        return Err(ValidationError::new(field, "ph_min must not exceed ph_max"));
    }

    Ok(())
}

pub fn validate_monitoring_interval(field: &str, minutes: u32) -> Result<(), ValidationError> {
    if (1..=MAX_MONITORING_INTERVAL_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!(
                "Monitoring interval must be between 1 and {} minutes",
                MAX_MONITORING_INTERVAL_MINUTES
            ),
        ))
    }
}
