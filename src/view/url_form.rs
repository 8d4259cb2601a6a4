//! 短链接创建表单
//!
//! The result stays on screen until `clear` or the next submission.

use crate::client::ShortUrlApi;
use crate::models::CreatedShortUrl;
use crate::utils::normalize_url;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UrlFormState {
    #[default]
    Idle,
    Submitting,
    Success(CreatedShortUrl),
    Error(String),
}

#[derive(Debug, Default)]
pub struct UrlForm {
    pub input: String,
    pub state: UrlFormState,
}

impl UrlForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Reset input, result and error
    pub fn clear(&mut self) {
        self.input.clear();
        self.state = UrlFormState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        self.state == UrlFormState::Submitting
    }

    pub fn result(&self) -> Option<&CreatedShortUrl> {
        match &self.state {
            UrlFormState::Success(created) => Some(created),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            UrlFormState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Headline of the result panel
    pub fn headline(&self) -> Option<&'static str> {
        self.result().map(|created| {
            if created.existed {
                "URL Retrieved"
            } else {
                "URL Created Successfully!"
            }
        })
    }

    /// Drop the previous outcome, normalize the input and enter `Submitting`
    pub fn begin_submit(&mut self) -> Option<String> {
        match normalize_url(&self.input) {
            Ok(url) => {
                self.state = UrlFormState::Submitting;
                Some(url)
            }
            Err(e) => {
                self.state = UrlFormState::Error(e.to_string());
                None
            }
        }
    }

    pub fn finish_submit<A: ShortUrlApi + ?Sized>(
        &mut self,
        api: &A,
        url: &str,
    ) -> Option<CreatedShortUrl> {
        match api.create_url(url) {
            Ok(created) => {
                self.state = UrlFormState::Success(created.clone());
                Some(created)
            }
            Err(e) => {
                self.state = UrlFormState::Error(e.message().to_string());
                None
            }
        }
    }

    pub fn submit<A: ShortUrlApi + ?Sized>(&mut self, api: &A) -> Option<CreatedShortUrl> {
        let url = self.begin_submit()?;
        self.finish_submit(api, &url)
    }
}
