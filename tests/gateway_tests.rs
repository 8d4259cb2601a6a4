//! ApiGateway integration tests against the in-process mock service

mod common;

use common::{MockServer, unreachable_config};
use tinyurl_client::client::{ApiGateway, ShortUrlApi};
use tinyurl_client::errors::ClientError;
use tinyurl_client::session::SessionStore;

// =============================================================================
// Token exchange and session
// =============================================================================

#[test]
fn test_generate_token_stores_session() {
    let server = MockServer::start();
    let gateway = server.gateway();
    assert!(!gateway.is_authenticated());

    let token = gateway.generate_token("ABC123").unwrap();
    assert_eq!(token.user_id, "abc123");
    assert_eq!(token.token, "token-abc123");

    assert!(gateway.is_authenticated());
    assert_eq!(gateway.current_user_id().as_deref(), Some("abc123"));
    assert_eq!(gateway.session().token().as_deref(), Some("token-abc123"));
}

#[test]
fn test_generate_token_error_leaves_session_empty() {
    let server = MockServer::start();
    let gateway = server.gateway();

    let err = gateway.generate_token("abc").unwrap_err();
    assert_eq!(
        err,
        ClientError::api("INVALID_USER_ID", "User ID must be 6 characters")
    );
    assert!(!gateway.is_authenticated());
}

#[test]
fn test_session_is_shared_between_handles() {
    let server = MockServer::start();
    let session = SessionStore::new();
    let gateway = server.gateway_with(session.clone());

    gateway.generate_token("qwerty").unwrap();
    assert_eq!(session.user_id().as_deref(), Some("qwerty"));

    gateway.logout();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

// =============================================================================
// Authorization header
// =============================================================================

#[test]
fn test_no_authorization_header_without_token() {
    let server = MockServer::start();
    let gateway = server.gateway();

    let err = gateway.list_urls().unwrap_err();
    assert_eq!(err.api_code(), Some("UNAUTHORIZED"));
    assert_eq!(err.message(), "Authentication required");
    assert_eq!(server.last_authorization(), None);
}

#[test]
fn test_bearer_header_after_login() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();

    gateway.list_urls().unwrap();
    assert_eq!(
        server.last_authorization().as_deref(),
        Some("Bearer token-abc123")
    );
}

#[test]
fn test_logout_drops_bearer_header() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();
    gateway.logout();

    assert!(gateway.list_urls().is_err());
    assert_eq!(server.last_authorization(), None);
}

// =============================================================================
// Create / list / delete
// =============================================================================

#[test]
fn test_create_then_list() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();

    let created = gateway.create_url("https://example.com/a").unwrap();
    assert!(!created.existed);
    assert_eq!(created.record.original_url, "https://example.com/a");
    assert!(created.record.short_url.ends_with(&created.record.code));
    assert_eq!(created.record.created_display(), "2025-01-31 09:15:00");

    let records = gateway.list_urls().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], created.record);
}

#[test]
fn test_create_same_url_reports_existing() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();

    let first = gateway.create_url("https://example.com").unwrap();
    let second = gateway.create_url("https://example.com").unwrap();
    assert!(second.existed);
    assert_eq!(second.record.code, first.record.code);
    assert_eq!(gateway.list_urls().unwrap().len(), 1);
}

#[test]
fn test_create_rejected_by_service() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();

    let err = gateway.create_url("ftp://example.com").unwrap_err();
    assert_eq!(err, ClientError::api("INVALID_URL", "Invalid URL"));
}

#[test]
fn test_list_is_scoped_to_user() {
    let server = MockServer::start();
    server.seed("other1", "zzz999", "https://other.example");
    server.seed("abc123", "aaa111", "https://mine.example");

    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();

    let codes: Vec<String> = gateway
        .list_urls()
        .unwrap()
        .into_iter()
        .map(|r| r.code)
        .collect();
    assert_eq!(codes, vec!["aaa111".to_string()]);
}

#[test]
fn test_list_with_undecodable_body_is_parse_error() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();
    server.with_state(|s| s.garbled_list = true);

    let err = gateway.list_urls().unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
    assert!(err.message().starts_with("Unexpected response from server"));
}

#[test]
fn test_delete_removes_record() {
    let server = MockServer::start();
    server.seed("abc123", "aaa111", "https://one.example");
    server.seed("abc123", "bbb222", "https://two.example");

    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();
    gateway.delete_url("aaa111").unwrap();

    assert_eq!(server.stored_codes(), vec!["bbb222".to_string()]);
}

#[test]
fn test_delete_unknown_code_uses_delete_fallback() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();

    let err = gateway.delete_url("nope").unwrap_err();
    assert_eq!(err, ClientError::api("DELETE_ERROR", "Failed to delete URL"));
}

#[test]
fn test_html_error_body_becomes_network_error() {
    let server = MockServer::start();
    server.with_state(|s| s.html_errors = true);
    let gateway = server.gateway();

    let err = gateway.list_urls().unwrap_err();
    assert_eq!(err, ClientError::network_fallback());
    assert_eq!(err.message(), "Network error");
}

#[test]
fn test_error_body_without_code_surfaces_error_text() {
    let server = MockServer::start();
    let gateway = server.gateway();
    gateway.generate_token("abc123").unwrap();
    server.with_state(|s| s.framework_errors = true);

    let err = gateway.create_url("not a url").unwrap_err();
    assert_eq!(err.message(), "Bad Request");
    assert_eq!(err.api_code(), Some(""));
}

// =============================================================================
// Health and transport failures
// =============================================================================

#[test]
fn test_health_ok() {
    let server = MockServer::start();
    let report = server.gateway().health().unwrap();
    assert!(report.is_ok());
    assert_eq!(report.checks.get("database").map(String::as_str), Some("ok"));
}

#[test]
fn test_health_degraded_still_returns_report() {
    let server = MockServer::start();
    server.with_state(|s| s.unhealthy = true);

    let report = server.gateway().health().unwrap();
    assert!(!report.is_ok());
    assert_eq!(report.status, "degraded");
    assert_eq!(
        report.checks.get("database").map(String::as_str),
        Some("down")
    );
}

#[test]
fn test_connection_refused_is_network_error() {
    let gateway = ApiGateway::new(&unreachable_config(), SessionStore::new());

    let err = gateway.generate_token("abc123").unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.message().starts_with("Network error"));
    assert!(!gateway.is_authenticated());
}
