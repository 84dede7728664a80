use lambda_http::{http::Method, Body, Request, RequestExt, Response};
use tracing::{info, warn};

use super::auth::validate_bearer_token;
use super::config::DashboardConfig;
use super::cors;
use super::error::{ApiError, NotFoundError};
use super::handlers;
use soilsense::Clock;

pub async fn route_request(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
) -> Result<Response<Body>, lambda_http::Error> {
    let path = normalize_path(event.uri().path());
    let method = event.method().clone();

    let request_id = event.lambda_context().request_id.clone();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Routing dashboard request"
    );

    if method == Method::OPTIONS {
        info!(request_id = %request_id, "Handling CORS preflight request");
        return Ok(cors::preflight_response(&config.cors_allowed_origin));
    }

    let response = if method == Method::GET && path == "/health" {
        handle_health(&request_id, clock)
    } else {
        match validate_bearer_token(&event, &config.service_token) {
            Ok(()) => match dispatch(event, config, clock, &method, &path, &request_id).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(request_id = %request_id, error = %e, "Request failed");
                    e.to_http_response(&request_id)
                }
            },
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "Rejected unauthenticated request");
                ApiError::from(e).to_http_response(&request_id)
            }
        }
    };

    Ok(cors::add_cors_headers(response, &config.cors_allowed_origin))
}

async fn dispatch(
    event: Request,
    config: &DashboardConfig,
    clock: &dyn Clock,
    method: &Method,
    path: &str,
    request_id: &str,
) -> Result<Response<Body>, ApiError> {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        (&Method::GET, ["sensor-data"]) => handlers::sensors::get_sensor_data(clock),

        (&Method::GET, ["plants", plant_key]) => {
            handlers::plants::get_plant_recommendations(clock, plant_key)
        }

        (&Method::GET, ["users", user_id, "dashboard"]) => {
            handlers::dashboard::get_dashboard(event, config, clock, user_id).await
        }
        (&Method::GET, ["users", user_id, "seasonal-settings"]) => {
            handlers::settings::get_seasonal_settings(event, config, clock, user_id).await
        }
        (&Method::PUT, ["users", user_id, "seasonal-settings"]) => {
            handlers::settings::update_seasonal_settings(event, config, clock, user_id).await
        }
        (&Method::PUT, ["users", user_id, "plant-preference"]) => {
            handlers::plants::update_plant_preference(event, config, clock, user_id).await
        }
        (&Method::POST, ["users", user_id, "threshold-check"]) => {
            handlers::settings::check_thresholds(event, config, clock, user_id).await
        }
        (&Method::GET, ["users", user_id, "iot", "seasonal-config"]) => {
            handlers::iot::get_iot_seasonal_config(event, config, clock, user_id).await
        }

        _ => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                "Unknown route"
            );
            Err(ApiError::NotFound(NotFoundError::ResourceNotFound))
        }
    }
}

fn normalize_path(path: &str) -> String {
    // Strip CloudFront path prefix if present
    let path = path.strip_prefix("/api/dashboard").unwrap_or(path);
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }
    trimmed.to_string()
}

fn handle_health(request_id: &str, clock: &dyn Clock) -> Response<Body> {
    let body = serde_json::json!({
        "status": "healthy",
        "service": "dashboard-api",
        "timestamp": clock.now_rfc3339(),
        "request_id": request_id
    });

    Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|e| {
            ApiError::Internal(format!("Failed to build response: {}", e))
                .to_http_response(request_id)
        })
}
