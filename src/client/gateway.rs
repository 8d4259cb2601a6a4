//! HTTP implementation of [`ShortUrlApi`] on top of a blocking `ureq` agent

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use ureq::http::{Response, StatusCode};
use ureq::{Agent, Body, RequestBuilder};

use super::ShortUrlApi;
use crate::config::ApiConfig;
use crate::errors::{ClientError, Result};
use crate::models::{
    ApiErrorBody, CreateUrlRequest, CreatedShortUrl, HealthReport, ShortUrlRecord, TokenRequest,
    TokenResponse,
};
use crate::session::SessionStore;

/// Fallback used when a failed delete carries no readable error body
const DELETE_ERROR_MESSAGE: &str = "Failed to delete URL";
const DELETE_ERROR_CODE: &str = "DELETE_ERROR";

/// The single chokepoint for calls to the link service.
///
/// Holds one `ureq::Agent` (connection pool) and a handle to the session.
pub struct ApiGateway {
    agent: Agent,
    base_url: String,
    session: SessionStore,
}

impl ApiGateway {
    pub fn new(config: &ApiConfig, session: SessionStore) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is present
    fn authorize<B>(&self, request: RequestBuilder<B>) -> RequestBuilder<B> {
        let request = request.header("Accept", "application/json");
        match self.session.token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Service health (`GET /api/healthz`).
    ///
    /// A 503 that still carries a health body is returned as a report, so
    /// callers can show which check failed.
    pub fn health(&self) -> Result<HealthReport> {
        let url = self.endpoint("/api/healthz");
        debug!("GET {}", url);
        let response = self.agent.get(&url).call().map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            let body = read_body(response)?;
            return match serde_json::from_str::<HealthReport>(&body) {
                Ok(report) => Ok(report),
                Err(_) => Err(error_from_body(status, &body, None)),
            };
        }
        decode_json(response, None)
    }
}

impl ShortUrlApi for ApiGateway {
    fn session(&self) -> &SessionStore {
        &self.session
    }

    fn generate_token(&self, user_id: &str) -> Result<TokenResponse> {
        let url = self.endpoint("/api/token");
        debug!("POST {}", url);
        let response = self
            .authorize(self.agent.post(&url))
            .send_json(&TokenRequest {
                user_id: user_id.to_string(),
            })
            .map_err(transport_error)?;

        let token: TokenResponse = decode_json(response, None)?;
        self.session.set(token.token.clone(), token.user_id.clone());
        info!("Authenticated as {}", token.user_id);
        Ok(token)
    }

    fn create_url(&self, url: &str) -> Result<CreatedShortUrl> {
        let endpoint = self.endpoint("/api/urls");
        debug!("POST {}", endpoint);
        let response = self
            .authorize(self.agent.post(&endpoint))
            .send_json(&CreateUrlRequest {
                url: url.to_string(),
            })
            .map_err(transport_error)?;

        let created: CreatedShortUrl = decode_json(response, None)?;
        info!(
            "Short URL {} for {} (existed: {})",
            created.record.code, created.record.original_url, created.existed
        );
        Ok(created)
    }

    fn list_urls(&self) -> Result<Vec<ShortUrlRecord>> {
        let url = self.endpoint("/api/urls");
        debug!("GET {}", url);
        let response = self
            .authorize(self.agent.get(&url))
            .call()
            .map_err(transport_error)?;

        let records: Vec<ShortUrlRecord> = decode_json(response, None)?;
        debug!("Fetched {} URLs", records.len());
        Ok(records)
    }

    fn delete_url(&self, code: &str) -> Result<()> {
        let url = self.endpoint(&format!("/api/urls/{}", urlencoding::encode(code)));
        debug!("DELETE {}", url);
        let response = self
            .authorize(self.agent.delete(&url))
            .call()
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            info!("Deleted {}", code);
            return Ok(());
        }

        let body = response_text(response);
        Err(error_from_body(
            status,
            &body,
            Some((DELETE_ERROR_CODE, DELETE_ERROR_MESSAGE)),
        ))
    }
}

// ============ Response helpers ============

fn transport_error(err: ureq::Error) -> ClientError {
    warn!("Request failed: {}", err);
    ClientError::network(format!("Network error: {}", err))
}

fn read_body(mut response: Response<Body>) -> Result<String> {
    response
        .body_mut()
        .read_to_string()
        .map_err(|e| ClientError::network(format!("Network error: {}", e)))
}

/// Body of an error response; an unreadable body counts as empty
fn response_text(mut response: Response<Body>) -> String {
    response.body_mut().read_to_string().unwrap_or_default()
}

/// Decode a 2xx JSON body, or normalize the error body of anything else
fn decode_json<T: DeserializeOwned>(
    response: Response<Body>,
    fallback: Option<(&str, &str)>,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response_text(response);
        return Err(error_from_body(status, &body, fallback));
    }

    let body = read_body(response)?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("Undecodable {} response: {}", status, e);
        ClientError::parse(format!("Unexpected response from server: {}", e))
    })
}

/// Turn a non-2xx body into `ClientError::Api`.
///
/// `{error, code}` bodies are used as-is. Anything else becomes `fallback`,
/// or the generic network-error shape when no fallback is given.
fn error_from_body(status: StatusCode, body: &str, fallback: Option<(&str, &str)>) -> ClientError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => {
            warn!("Service returned {} {}: {}", status, parsed.code, parsed.error);
            ClientError::api(parsed.code, parsed.error)
        }
        Err(_) => {
            warn!("Service returned {} without a readable error body", status);
            match fallback {
                Some((code, message)) => ClientError::api(code, message),
                None => ClientError::network_fallback(),
            }
        }
    }
}
