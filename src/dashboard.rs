#[path = "dashboard/error.rs"]
mod error;

#[path = "dashboard/config.rs"]
mod config;

#[path = "dashboard/cors.rs"]
pub mod cors;

#[path = "dashboard/auth.rs"]
pub mod auth;

#[path = "dashboard/router.rs"]
mod router;

#[path = "dashboard/handlers/mod.rs"]
mod handlers;

// Repo module (dashboard specific)
#[path = "dashboard/repo/mod.rs"]
mod repo;

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use soilsense::SystemClock;

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let config = match config::DashboardConfig::from_env().await {
        Ok(config) => config,
        Err(e) => {
            let request_id = event.lambda_context().request_id.clone();
            tracing::error!(request_id = %request_id, "Failed to load configuration: {}", e);

            let response = error::ApiError::Internal(format!("Configuration error: {}", e))
                .to_http_response(&request_id);
            return Ok(cors::add_cors_headers(
                response,
                &cors::allowed_origin_from_env(),
            ));
        }
    };

    let clock = SystemClock::new();
    router::route_request(event, &config, &clock).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}
