//! SoilBot reply selection.
//!
//! `classify_and_respond` routes a free-text message to one response family
//! and renders it. Nutrition, irrigation and pH render a live analysis when
//! the reading carries the needed field and fall back to a static guide
//! otherwise. The other families always return their static text.
//!
//! The season is passed in by the caller so replies are a pure function of
//! their inputs.

use crate::analysis::{moisture_analysis, npk_analysis, ph_analysis};
use crate::classifier::{classify, ResponseFamily};
use crate::domain::{BotReply, MessageType, SensorReading, Season};
use crate::guides;
use crate::questions::find_question;
use crate::sensor_validation::sanitize_reading;

/// Top-level error string returned next to the failure reply
pub const CHAT_FAILURE_ERROR: &str = "Maaf, terjadi kesalahan. Silakan coba lagi.";

type FamilyHandler = fn(Option<&SensorReading>, Season) -> BotReply;

fn reply(text: impl Into<String>, message_type: MessageType, suggestions: &[&'static str]) -> BotReply {
    BotReply {
        text: text.into(),
        message_type,
        suggestions: suggestions.to_vec(),
    }
}

fn nutrition_reply(reading: Option<&SensorReading>, _season: Season) -> BotReply {
    match reading.and_then(SensorReading::npk_present) {
        Some(npk) => reply(
            npk_analysis(npk),
            MessageType::Analysis,
            guides::NPK_ANALYSIS_SUGGESTIONS,
        ),
        None => reply(guides::NPK_INFO, MessageType::Text, guides::NPK_INFO_SUGGESTIONS),
    }
}

fn irrigation_reply(reading: Option<&SensorReading>, _season: Season) -> BotReply {
    match reading.and_then(|r| r.moisture) {
        Some(moisture) => reply(
            moisture_analysis(moisture),
            MessageType::Analysis,
            guides::MOISTURE_ANALYSIS_SUGGESTIONS,
        ),
        None => reply(
            guides::WATERING_INFO,
            MessageType::Text,
            guides::WATERING_INFO_SUGGESTIONS,
        ),
    }
}

fn fertilizer_reply(_reading: Option<&SensorReading>, _season: Season) -> BotReply {
    reply(
        guides::FERTILIZER_INFO,
        MessageType::Text,
        guides::FERTILIZER_SUGGESTIONS,
    )
}

fn pest_reply(_reading: Option<&SensorReading>, _season: Season) -> BotReply {
    reply(guides::PEST_INFO, MessageType::Text, guides::PEST_SUGGESTIONS)
}

fn weather_reply(_reading: Option<&SensorReading>, season: Season) -> BotReply {
    reply(
        guides::seasonal_strategy(season),
        MessageType::Text,
        guides::WEATHER_SUGGESTIONS,
    )
}

fn ph_reply(reading: Option<&SensorReading>, _season: Season) -> BotReply {
    match reading.and_then(|r| r.ph) {
        Some(ph) => reply(ph_analysis(ph), MessageType::Analysis, guides::PH_SUGGESTIONS),
        None => reply(guides::PH_INFO, MessageType::Text, guides::PH_SUGGESTIONS),
    }
}

fn general_reply(_reading: Option<&SensorReading>, _season: Season) -> BotReply {
    reply(guides::WELCOME, MessageType::Text, guides::WELCOME_SUGGESTIONS)
}

fn handler_for(family: ResponseFamily) -> FamilyHandler {
    match family {
        ResponseFamily::Nutrition => nutrition_reply,
        ResponseFamily::Irrigation => irrigation_reply,
        ResponseFamily::Fertilizer => fertilizer_reply,
        ResponseFamily::PestDisease => pest_reply,
        ResponseFamily::Weather => weather_reply,
        ResponseFamily::Ph => ph_reply,
        ResponseFamily::General => general_reply,
    }
}

/// Classify `message` and render the reply for its family
pub fn classify_and_respond(
    message: &str,
    reading: Option<&SensorReading>,
    season: Season,
) -> BotReply {
    let sanitized = reading.map(|r| sanitize_reading(r).0);
    let family = classify(message);
    handler_for(family)(sanitized.as_ref(), season)
}

/// Answer one of the predefined menu questions
pub fn answer_question(
    question_id: &str,
    reading: Option<&SensorReading>,
    season: Season,
) -> BotReply {
    let sanitized = reading.map(|r| sanitize_reading(r).0);
    let reading = sanitized.as_ref();

    let text = match question_id {
        "npk-analysis" => reading
            .and_then(SensorReading::npk_present)
            .map(npk_analysis)
            .unwrap_or_else(|| guides::NPK_SENSOR_INACTIVE.to_string()),
        "moisture-level" => reading
            .and_then(|r| r.moisture)
            .map(moisture_analysis)
            .unwrap_or_else(|| guides::MOISTURE_SENSOR_UNAVAILABLE.to_string()),
        "nutrient-deficiency" => guides::DEFICIENCY_GUIDE.to_string(),
        "fertilizer-guide" => guides::FERTILIZER_GUIDE.to_string(),
        "pest-prevention" => guides::PEST_PREVENTION_GUIDE.to_string(),
        "seasonal-tips" => guides::seasonal_tips(season).to_string(),
        "irrigation-schedule" => guides::IRRIGATION_GUIDE.to_string(),
        _ => guides::ANSWER_IN_PROGRESS.to_string(),
    };

    let suggestions = find_question(question_id)
        .map(|q| q.follow_up_suggestions)
        .unwrap_or(&[]);

    reply(text, MessageType::Analysis, suggestions)
}

/// Friendly reply used when the chat pipeline fails internally
pub fn chat_failure_reply() -> BotReply {
    reply(guides::FAILURE_TEXT, MessageType::Error, guides::FAILURE_SUGGESTIONS)
}
