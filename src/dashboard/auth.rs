use super::error::AuthError;
use lambda_http::Request;

/// Validates the Bearer token from the Authorization header against the service token
///
/// # Returns
/// * `Ok(())` if token is valid
/// * `Err(AuthError)` if token is missing, malformed or wrong
///
/// # Security Note
/// Uses constant-time comparison to prevent timing attacks
pub fn validate_bearer_token(event: &Request, expected_token: &str) -> Result<(), AuthError> {
    let auth_header = event
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)?;

    // An empty configured token must never match an empty presented one
    if token.is_empty() || expected_token.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    if !constant_time_compare(token, expected_token) {
        return Err(AuthError::InvalidToken);
    }

    Ok(())
}

/// Compares every byte so the time taken does not depend on the mismatch position
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.len() != b_bytes.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a_bytes.iter().zip(b_bytes.iter()) {
        result |= a_byte ^ b_byte;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::{http::Method, Body};

    fn create_test_request(auth_header: Option<&str>) -> Request {
        let mut builder = lambda_http::http::Request::builder()
            .method(Method::GET)
            .uri("/users/farmer-1/dashboard");

        if let Some(auth) = auth_header {
            builder = builder.header("authorization", auth);
        }

        builder.body(Body::Empty).unwrap()
    }

    #[test]
    fn test_validate_bearer_token_success() {
        let request = create_test_request(Some("Bearer service-token-123"));
        assert!(validate_bearer_token(&request, "service-token-123").is_ok());
    }

    #[test]
    fn test_validate_bearer_token_invalid_token() {
        let request = create_test_request(Some("Bearer wrong-token"));
        assert!(matches!(
            validate_bearer_token(&request, "correct-token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_validate_bearer_token_missing_header() {
        let request = create_test_request(None);
        assert!(matches!(
            validate_bearer_token(&request, "token"),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_validate_bearer_token_wrong_scheme() {
        for header in ["service-token", "Basic dGVzdDp0b2tlbg=="] {
            let request = create_test_request(Some(header));
            assert!(matches!(
                validate_bearer_token(&request, "service-token"),
                Err(AuthError::InvalidFormat)
            ));
        }
    }

    #[test]
    fn test_validate_bearer_token_empty_tokens() {
        let request = create_test_request(Some("Bearer "));
        assert!(matches!(
            validate_bearer_token(&request, ""),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "abcd"));
        assert!(constant_time_compare("", ""));
    }
}
