use lambda_http::{Body, Request, Response};
use serde::Deserialize;
use tracing::info;

use super::{json_response, non_blank, parse_json_body};
use crate::error::{ApiError, ValidationError};
use soilsense::{answer_question, detect_current_season, validate_question_id, Clock, SensorReading};

/// Request payload for POST /answer
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub sensor_data: Option<SensorReading>,
}

/// Answer a question picked from the predefined menu
pub async fn handle_answer(
    event: Request,
    request_id: &str,
    clock: &dyn Clock,
) -> Result<Response<Body>, ApiError> {
    let request: AnswerRequest = parse_json_body(&event)?;

    let question_id = non_blank(request.question_id.as_deref())
        .ok_or_else(|| ValidationError::MissingField("question_id".to_string()))?;
    validate_question_id(Some(question_id))?;

    info!(
        request_id = %request_id,
        question_id = %question_id,
        has_sensor_data = request.sensor_data.is_some(),
        "Answering predefined question"
    );

    let season = detect_current_season(clock.today());
    let reply = answer_question(question_id, request.sensor_data.as_ref(), season);

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "data": reply
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{body_json, create_json_request};
    use lambda_http::http::Method;
    use soilsense::FixedClock;

    async fn run_answer(body: &str, date: &str) -> Response<Body> {
        let clock = FixedClock::from_rfc3339(date).unwrap();
        let request = create_json_request(Method::POST, "/answer", body);
        match handle_answer(request, "req-1", &clock).await {
            Ok(response) => response,
            Err(e) => e.to_http_response("req-1"),
        }
    }

    #[tokio::test]
    async fn test_answer_moisture_level_with_reading() {
        let response = run_answer(
            r#"{"question_id":"moisture-level","sensor_data":{"moisture":25}}"#,
            "2024-05-01T08:00:00Z",
        )
        .await;

        assert_eq!(response.status(), 200);
        let json = body_json(&response);
        assert_eq!(json["data"]["type"], "analysis");
        assert!(json["data"]["text"]
            .as_str()
            .unwrap()
            .contains("KRITIS - KERING"));
        assert_eq!(json["data"]["suggestions"][0], "Kapan waktu penyiraman");
    }

    #[tokio::test]
    async fn test_answer_seasonal_tips_in_wet_season() {
        let response = run_answer(r#"{"question_id":"seasonal-tips"}"#, "2024-12-01T08:00:00Z").await;

        let json = body_json(&response);
        assert!(json["data"]["text"]
            .as_str()
            .unwrap()
            .starts_with("🌧️ **Strategi Musim Hujan:**"));
    }

    #[tokio::test]
    async fn test_answer_unknown_question() {
        let response = run_answer(r#"{"question_id":"nope"}"#, "2024-05-01T08:00:00Z").await;

        assert_eq!(response.status(), 200);
        let json = body_json(&response);
        assert_eq!(
            json["data"]["text"],
            "Jawaban untuk pertanyaan ini sedang dikembangkan."
        );
    }

    #[tokio::test]
    async fn test_answer_requires_question_id() {
        let response = run_answer(r#"{"sensor_data":{"moisture":25}}"#, "2024-05-01T08:00:00Z").await;

        assert_eq!(response.status(), 400);
        assert_eq!(body_json(&response)["error"], "MISSING_FIELD");
    }
}
