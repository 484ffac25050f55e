use super::*;

// =============================================================
// Endpoint composition
// =============================================================

#[test]
fn endpoint_joins_base_url_and_path() {
    assert_eq!(endpoint("/auth/login"), format!("{}/auth/login", base_url()));
}

#[test]
fn base_url_defaults_to_local_backend() {
    // PORTAL_API_URL is not set in test builds.
    assert_eq!(base_url(), DEFAULT_BASE_URL);
}

// =============================================================
// Error-body extraction
// =============================================================

#[test]
fn error_message_prefers_server_message() {
    assert_eq!(
        error_message(401, Some(r#"{"message":"Invalid credentials"}"#)),
        "Invalid credentials"
    );
}

#[test]
fn error_message_falls_back_on_undecodable_body() {
    assert_eq!(
        error_message(502, Some("<html>bad gateway</html>")),
        "Request failed with status 502"
    );
}

#[test]
fn error_message_falls_back_on_missing_body() {
    assert_eq!(error_message(500, None), "Request failed with status 500");
}

#[test]
fn error_message_falls_back_on_empty_message_object() {
    assert_eq!(error_message(409, Some("{}")), "Request failed with status 409");
}

// =============================================================
// 401 redirect guard
// =============================================================

#[test]
fn session_expiry_redirects_from_app_routes() {
    assert!(should_redirect_to_login("/portal/dashboard"));
    assert!(should_redirect_to_login("/"));
}

#[test]
fn session_expiry_does_not_loop_on_login_route() {
    assert!(!should_redirect_to_login("/auth/login"));
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn http_error_displays_server_message() {
    let err = ApiError::Http {
        status: 401,
        message: "Invalid credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn network_error_displays_retryable_message() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn offline_stub_reports_network_error() {
    let result: Result<(), ApiError> = futures::executor::block_on(current_user()).map(|_| ());
    assert!(matches!(result, Err(ApiError::Network(_))));
}
