pub mod answer;
pub mod chat;
pub mod questions;
pub mod recommendations;

use lambda_http::{Body, Request, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ValidationError};

/// Parse a JSON request body; an empty body parses as `{}`
pub fn parse_json_body<T: DeserializeOwned>(event: &Request) -> Result<T, ApiError> {
    let body_bytes: &[u8] = match event.body() {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
        Body::Empty => b"{}",
    };

    serde_json::from_slice(body_bytes).map_err(|e| {
        ApiError::Validation(ValidationError::InvalidBody(format!("Invalid JSON: {}", e)))
    })
}

/// Build a JSON response with the given status
pub fn json_response(status: u16, body: &serde_json::Value) -> Result<Response<Body>, ApiError> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// Present and not blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use lambda_http::http::Method;
    use lambda_http::{Body, Context, Request, RequestExt, Response};

    /// Build a request with a JSON body and a default Lambda context
    pub fn create_json_request(method: Method, path: &str, body: &str) -> Request {
        let req = lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(if body.is_empty() {
                Body::Empty
            } else {
                Body::from(body.to_string())
            })
            .unwrap();

        Request::from(req).with_lambda_context(Context::default())
    }

    pub fn body_json(response: &Response<Body>) -> serde_json::Value {
        match response.body() {
            Body::Text(text) => serde_json::from_str(text).unwrap(),
            _ => panic!("Expected text body"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::create_json_request;
    use super::*;
    use lambda_http::http::Method;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    #[test]
    fn test_empty_body_parses_as_empty_object() {
        let request = create_json_request(Method::POST, "/chat", "");
        let payload: Payload = parse_json_body(&request).unwrap();
        assert!(payload.name.is_none());
    }

    #[test]
    fn test_invalid_json_is_validation_error() {
        let request = create_json_request(Method::POST, "/chat", "{not json");
        let result: Result<Payload, _> = parse_json_body(&request);
        assert!(matches!(
            result,
            Err(ApiError::Validation(ValidationError::InvalidBody(_)))
        ));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("x")), Some("x"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
