use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::handlers::answer::handle_answer;
use crate::handlers::chat::handle_chat;
use crate::handlers::questions::handle_questions;
use crate::handlers::recommendations::handle_recommendations;
use soilsense::{Clock, IdGenerator};

const API_PREFIX: &str = "/api/soilbot";
const SERVICE_NAME: &str = "SoilBot";
const SERVICE_VERSION: &str = "1.0.0";

/// Route a health check request (no config needed)
pub fn route_request_health(request_id: &str, clock: &dyn Clock) -> Result<Response<Body>, ApiError> {
    handle_health(request_id, clock)
}

/// Whether a raw request path is the health endpoint
pub fn is_health_path(path: &str) -> bool {
    normalize_path(path) == "/health"
}

/// Route an incoming request to the appropriate handler
///
/// Paths are normalized (trailing slash and `/api/soilbot` prefix removed)
/// before matching on (method, path).
pub async fn route_request(
    event: Request,
    request_id: &str,
    config: &Config,
    clock: &dyn Clock,
    id_generator: &dyn IdGenerator,
) -> Result<Response<Body>, ApiError> {
    let method = event.method().clone();
    let path = normalize_path(event.uri().path());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Routing request"
    );

    match (&method, path.as_str()) {
        (&Method::GET, "/health") => handle_health(request_id, clock),

        (&Method::GET, "/questions") => handle_questions(request_id),

        (&Method::POST, "/chat") => {
            handle_chat(event, request_id, config, clock, id_generator).await
        }

        (&Method::POST, "/answer") => handle_answer(event, request_id, clock).await,

        (&Method::POST, "/recommendations") => {
            handle_recommendations(event, request_id, clock).await
        }

        _ => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                "Unknown route"
            );
            handle_not_found(request_id, &method, &path)
        }
    }
}

/// Normalize a path by removing trailing slashes and the API prefix
///
/// `/api/soilbot/chat/` and `/chat` are the same route. The root path is
/// preserved as-is.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    let stripped = trimmed.strip_prefix(API_PREFIX).unwrap_or(trimmed);

    if stripped.is_empty() {
        return "/".to_string();
    }
    stripped.to_string()
}

/// Handle health check requests
fn handle_health(request_id: &str, clock: &dyn Clock) -> Result<Response<Body>, ApiError> {
    let body = serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "timestamp": clock.now_rfc3339(),
        "request_id": request_id
    });

    Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// Handle 404 Not Found responses
fn handle_not_found(
    request_id: &str,
    method: &Method,
    path: &str,
) -> Result<Response<Body>, ApiError> {
    let body = serde_json::json!({
        "error": "NOT_FOUND",
        "message": format!("Route {} {} not found", method, path),
        "request_id": request_id
    });

    Response::builder()
        .status(404)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
