//! In-memory gateway and clipboard for TUI tests

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use super::App;
use crate::client::ShortUrlApi;
use crate::clipboard::ClipboardProvider;
use crate::errors::{ClientError, Result};
use crate::models::{CreatedShortUrl, ShortUrlRecord, TokenResponse};
use crate::session::SessionStore;

#[derive(Default)]
pub struct FakeApi {
    pub session: SessionStore,
    pub records: RefCell<Vec<ShortUrlRecord>>,
    pub fail_delete: bool,
}

impl FakeApi {
    pub fn logged_in() -> Self {
        Self {
            session: SessionStore::with_session("tok", "abc123"),
            ..Default::default()
        }
    }

    pub fn with_records(self, codes: &[&str]) -> Self {
        self.records
            .borrow_mut()
            .extend(codes.iter().map(|c| record(c)));
        self
    }
}

pub fn record(code: &str) -> ShortUrlRecord {
    ShortUrlRecord {
        code: code.to_string(),
        short_url: format!("http://sho.rt/{}", code),
        original_url: format!("https://example.com/{}", code),
        created_at: NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    }
}

impl ShortUrlApi for FakeApi {
    fn session(&self) -> &SessionStore {
        &self.session
    }

    fn generate_token(&self, user_id: &str) -> Result<TokenResponse> {
        let user_id = user_id.to_lowercase();
        self.session.set("tok", user_id.clone());
        Ok(TokenResponse {
            token: "tok".into(),
            user_id,
        })
    }

    fn create_url(&self, url: &str) -> Result<CreatedShortUrl> {
        let mut rec = record("new001");
        rec.original_url = url.to_string();
        Ok(CreatedShortUrl {
            record: rec,
            existed: false,
        })
    }

    fn list_urls(&self) -> Result<Vec<ShortUrlRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn delete_url(&self, _code: &str) -> Result<()> {
        if self.fail_delete {
            Err(ClientError::api("NOT_FOUND", "Short URL not found"))
        } else {
            Ok(())
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryClipboard(pub Rc<RefCell<Option<String>>>);

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        *self.0.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

pub fn app_with(api: FakeApi) -> (App, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let app = App::new(Box::new(api), Box::new(clipboard.clone()), 50);
    (app, clipboard)
}

/// Run queued actions the way the event loop would
pub fn drain(app: &mut App) {
    while let Some(action) = app.take_pending() {
        app.run_pending(action);
    }
}
