// SoilBot chat API entry point

mod config;
mod conversation_log;
mod error;
mod repo;
mod router;

// Handlers module
#[path = "soilbot/handlers/mod.rs"]
mod handlers;

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tracing::{error, info};

use config::Config;
use router::route_request;
use soilsense::{RandomIdGenerator, SystemClock};

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    // Extract request ID from Lambda context
    let request_id = event.lambda_context().request_id.clone();
    let clock = SystemClock::new();

    info!(
        request_id = %request_id,
        method = %event.method(),
        path = %event.uri().path(),
        "SoilBot Lambda invoked"
    );

    // For health check, we don't need config
    if event.method() == lambda_http::http::Method::GET && router::is_health_path(event.uri().path())
    {
        return match router::route_request_health(&request_id, &clock) {
            Ok(response) => Ok(response),
            Err(api_error) => {
                error!(
                    request_id = %request_id,
                    error = %api_error,
                    "Health check failed"
                );
                Ok(api_error.to_http_response(&request_id))
            }
        };
    }

    let config = match Config::from_env().await {
        Ok(config) => config,
        Err(e) => {
            error!(
                request_id = %request_id,
                error = %e,
                "Failed to load configuration"
            );
            return Ok(
                error::ApiError::Internal(format!("Configuration error: {}", e))
                    .to_http_response(&request_id),
            );
        }
    };

    let id_generator = RandomIdGenerator::new();

    // Route the request and handle any errors
    match route_request(event, &request_id, &config, &clock, &id_generator).await {
        Ok(response) => {
            info!(
                request_id = %request_id,
                status = %response.status(),
                "Request completed successfully"
            );
            Ok(response)
        }
        Err(api_error) => {
            error!(
                request_id = %request_id,
                error = %api_error,
                "Request failed"
            );
            Ok(api_error.to_http_response(&request_id))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    info!("SoilBot Lambda starting");

    run(service_fn(function_handler)).await
}
