//! 登录表单状态
//!
//! idle → submitting → authenticated | error. Validation runs before the
//! submitting state and never reaches the network.

use tracing::debug;

use crate::client::ShortUrlApi;
use crate::utils::{USER_ID_LENGTH, validate_user_id};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    /// Holds the user id returned by the service
    Authenticated(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub input: String,
    pub state: LoginState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character; input stops at six characters
    pub fn push_char(&mut self, c: char) {
        if c.is_control() || self.input.chars().count() >= USER_ID_LENGTH {
            return;
        }
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.state = LoginState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        self.state == LoginState::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoginState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Validate the input and enter `Submitting`.
    ///
    /// Returns the id to send, or `None` after recording the
    /// validation message.
    pub fn begin_submit(&mut self) -> Option<String> {
        match validate_user_id(&self.input) {
            Ok(user_id) => {
                let user_id = user_id.to_string();
                self.state = LoginState::Submitting;
                Some(user_id)
            }
            Err(e) => {
                debug!("Login rejected locally: {}", e);
                self.state = LoginState::Error(e.to_string());
                None
            }
        }
    }

    /// Exchange `user_id` for a token; true on success
    pub fn finish_submit<A: ShortUrlApi + ?Sized>(&mut self, api: &A, user_id: &str) -> bool {
        match api.generate_token(user_id) {
            Ok(resp) => {
                self.state = LoginState::Authenticated(resp.user_id);
                true
            }
            Err(e) => {
                self.state = LoginState::Error(e.message().to_string());
                false
            }
        }
    }

    pub fn submit<A: ShortUrlApi + ?Sized>(&mut self, api: &A) -> bool {
        match self.begin_submit() {
            Some(user_id) => self.finish_submit(api, &user_id),
            None => false,
        }
    }
}
