use lambda_http::{Body, Request, Response};
use serde::Deserialize;
use tracing::{error, info};

use super::{json_response, non_blank, parse_json_body};
use crate::config::Config;
use crate::conversation_log::ConversationLog;
use crate::error::{ApiError, ValidationError};
use soilsense::{
    chat_failure_reply, classify, classify_and_respond, detect_current_season,
    validate_chat_message, validate_conversation_id, Clock, IdGenerator, MessageType,
    SensorReading, Sender, CHAT_FAILURE_ERROR,
};

/// Request payload for POST /chat
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sensor_data: Option<SensorReading>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Handle a free-text chat message
///
/// Validation failures return 400. Anything that goes wrong after
/// validation is turned into the friendly failure reply with status 500.
pub async fn handle_chat(
    event: Request,
    request_id: &str,
    config: &Config,
    clock: &dyn Clock,
    id_generator: &dyn IdGenerator,
) -> Result<Response<Body>, ApiError> {
    let request: ChatRequest = parse_json_body(&event)?;

    let message = non_blank(request.message.as_deref())
        .ok_or_else(|| ValidationError::MissingField("message".to_string()))?;
    validate_chat_message(Some(message), config.max_message_length)?;

    let conversation_id = match request.conversation_id.as_deref() {
        Some(id) => {
            validate_conversation_id(id)?;
            id.to_string()
        }
        None => id_generator.anonymous_conversation_id(clock.now_epoch_seconds()),
    };

    info!(
        request_id = %request_id,
        conversation_id = %conversation_id,
        family = classify(message).as_str(),
        has_sensor_data = request.sensor_data.is_some(),
        "Processing chat message"
    );

    match respond(
        message,
        request.sensor_data.as_ref(),
        &conversation_id,
        config,
        clock,
        id_generator,
    )
    .await
    {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(
                request_id = %request_id,
                conversation_id = %conversation_id,
                error = %e,
                "SoilBot error"
            );
            chat_failure_response()
        }
    }
}

async fn respond(
    message: &str,
    sensor_data: Option<&SensorReading>,
    conversation_id: &str,
    config: &Config,
    clock: &dyn Clock,
    id_generator: &dyn IdGenerator,
) -> Result<Response<Body>, ApiError> {
    let log = ConversationLog::new(
        &config.dynamodb_client,
        config.conversations_table.as_deref(),
        clock,
        id_generator,
    );

    log.record(conversation_id, Sender::User, MessageType::Text, message, None)
        .await;

    let season = detect_current_season(clock.today());
    let reply = classify_and_respond(message, sensor_data, season);

    log.record(
        conversation_id,
        Sender::Bot,
        reply.message_type,
        &reply.text,
        None,
    )
    .await;

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "data": reply,
            "conversation_id": conversation_id
        }),
    )
}

/// 500 response carrying the friendly failure reply
pub fn chat_failure_response() -> Result<Response<Body>, ApiError> {
    json_response(
        500,
        &serde_json::json!({
            "success": false,
            "error": CHAT_FAILURE_ERROR,
            "data": chat_failure_reply()
        }),
    )
}
