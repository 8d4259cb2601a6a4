//! In-process mock of the link service
//!
//! An actix-web server on an ephemeral port, driven from its own thread so
//! the blocking client under test can call it directly.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Mutex, mpsc};
use std::thread;

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use tinyurl_client::client::ApiGateway;
use tinyurl_client::config::{ApiConfig, ClientConfig};
use tinyurl_client::session::SessionStore;

pub const CREATED_AT: &str = "2025-01-31T09:15:00";

#[derive(Debug, Clone)]
pub struct StoredUrl {
    pub owner: String,
    pub code: String,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct MockState {
    /// token -> user id
    pub tokens: HashMap<String, String>,
    /// Newest last
    pub urls: Vec<StoredUrl>,
    pub next_code: u32,
    pub last_authorization: Option<String>,
    pub unhealthy: bool,
    pub garbled_list: bool,
    pub html_errors: bool,
    /// Error bodies shaped like a web framework default: no `code`
    pub framework_errors: bool,
}

type SharedState = web::Data<Mutex<MockState>>;

pub struct MockServer {
    addr: SocketAddr,
    state: SharedState,
}

impl MockServer {
    pub fn start() -> Self {
        let state: SharedState = web::Data::new(Mutex::new(MockState::default()));
        let (tx, rx) = mpsc::channel();

        let server_state = state.clone();
        thread::spawn(move || {
            actix_rt::System::new().block_on(async move {
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(server_state.clone())
                        .route("/api/token", web::post().to(generate_token))
                        .route("/api/urls", web::post().to(create_url))
                        .route("/api/urls", web::get().to(list_urls))
                        .route("/api/urls/{code}", web::delete().to(delete_url))
                        .route("/api/healthz", web::get().to(health))
                })
                .workers(1)
                .disable_signals()
                .bind(("127.0.0.1", 0))
                .expect("bind mock server");

                tx.send(server.addrs()[0]).expect("report mock address");
                server.run().await.expect("run mock server");
            });
        });

        let addr = rx.recv().expect("mock server address");
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            timeout_secs: 5,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.api = self.api_config();
        config
    }

    pub fn gateway(&self) -> ApiGateway {
        ApiGateway::new(&self.api_config(), SessionStore::new())
    }

    pub fn gateway_with(&self, session: SessionStore) -> ApiGateway {
        ApiGateway::new(&self.api_config(), session)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut state = self.state.lock().expect("mock state");
        f(&mut state)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.with_state(|s| s.last_authorization.clone())
    }

    /// Store a link for `owner` without going through the API
    pub fn seed(&self, owner: &str, code: &str, url: &str) {
        self.with_state(|s| {
            s.urls.push(StoredUrl {
                owner: owner.to_string(),
                code: code.to_string(),
                url: url.to_string(),
            })
        });
    }

    pub fn stored_codes(&self) -> Vec<String> {
        self.with_state(|s| s.urls.iter().map(|u| u.code.clone()).collect())
    }
}

/// A base URL nothing listens on
pub fn unreachable_config() -> ApiConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    ApiConfig {
        base_url: format!("http://{}", addr),
        timeout_secs: 2,
    }
}

// ============ Handlers ============

fn error_response(
    state: &MockState,
    status: StatusCode,
    error: &str,
    code: &str,
) -> HttpResponse {
    if state.html_errors {
        return HttpResponse::build(status)
            .content_type("text/html")
            .body("<html><body>oops</body></html>");
    }
    if state.framework_errors {
        return HttpResponse::build(status).json(json!({
            "timestamp": CREATED_AT,
            "status": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "path": "/api",
        }));
    }
    HttpResponse::build(status).json(json!({ "error": error, "code": code }))
}

fn record_json(base: &str, stored: &StoredUrl) -> Value {
    json!({
        "code": stored.code,
        "shortUrl": format!("{}/{}", base, stored.code),
        "url": stored.url,
        "createdAt": CREATED_AT,
    })
}

fn base_of(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// Records the Authorization header and resolves it to a user id
fn authenticate(req: &HttpRequest, state: &mut MockState) -> Option<String> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.last_authorization = header.clone();

    let token = header?.strip_prefix("Bearer ")?.to_string();
    state.tokens.get(&token).cloned()
}

async fn generate_token(state: SharedState, body: web::Json<Value>) -> HttpResponse {
    let mut state = state.lock().expect("mock state");
    let user_id = body
        .get("userId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();

    if user_id.chars().count() != 6 {
        return error_response(
            &state,
            StatusCode::BAD_REQUEST,
            "User ID must be 6 characters",
            "INVALID_USER_ID",
        );
    }

    let token = format!("token-{}", user_id);
    state.tokens.insert(token.clone(), user_id.clone());
    HttpResponse::Ok().json(json!({ "token": token, "userId": user_id }))
}

async fn create_url(req: HttpRequest, state: SharedState, body: web::Json<Value>) -> HttpResponse {
    let mut state = state.lock().expect("mock state");
    let Some(owner) = authenticate(&req, &mut state) else {
        return error_response(
            &state,
            StatusCode::UNAUTHORIZED,
            "Authentication required",
            "UNAUTHORIZED",
        );
    };

    let url = body
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return error_response(
            &state,
            StatusCode::BAD_REQUEST,
            "Invalid URL",
            "INVALID_URL",
        );
    }

    let base = base_of(&req);
    if let Some(existing) = state
        .urls
        .iter()
        .find(|u| u.owner == owner && u.url == url)
    {
        let mut body = record_json(&base, existing);
        body["existed"] = json!(true);
        return HttpResponse::Ok().json(body);
    }

    state.next_code += 1;
    let stored = StoredUrl {
        owner,
        code: format!("c{:05}", state.next_code),
        url,
    };
    let body = record_json(&base, &stored);
    state.urls.push(stored);
    HttpResponse::Created().json(body)
}

async fn list_urls(req: HttpRequest, state: SharedState) -> HttpResponse {
    let mut state = state.lock().expect("mock state");
    let Some(owner) = authenticate(&req, &mut state) else {
        return error_response(
            &state,
            StatusCode::UNAUTHORIZED,
            "Authentication required",
            "UNAUTHORIZED",
        );
    };
    if state.garbled_list {
        return HttpResponse::Ok()
            .content_type("application/json")
            .body("{not json");
    }

    let base = base_of(&req);
    let records: Vec<Value> = state
        .urls
        .iter()
        .rev()
        .filter(|u| u.owner == owner)
        .map(|u| record_json(&base, u))
        .collect();
    HttpResponse::Ok().json(records)
}

async fn delete_url(req: HttpRequest, state: SharedState, path: web::Path<String>) -> HttpResponse {
    let mut state = state.lock().expect("mock state");
    let Some(owner) = authenticate(&req, &mut state) else {
        return error_response(
            &state,
            StatusCode::UNAUTHORIZED,
            "Authentication required",
            "UNAUTHORIZED",
        );
    };

    let code = path.into_inner();
    let before = state.urls.len();
    state.urls.retain(|u| !(u.owner == owner && u.code == code));
    if state.urls.len() < before {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

async fn health(state: SharedState) -> HttpResponse {
    let state = state.lock().expect("mock state");
    if state.unhealthy {
        HttpResponse::ServiceUnavailable()
            .json(json!({ "status": "degraded", "checks": { "database": "down" } }))
    } else {
        HttpResponse::Ok().json(json!({ "status": "ok", "checks": { "database": "ok" } }))
    }
}
