//! App state for the terminal UI
//!
//! `App` owns the view components and the gateway. Key handlers only call
//! the `begin_*` half of an operation and queue a [`PendingAction`]; the run
//! loop draws the busy state and then executes it.

use tracing::debug;

use crate::client::ShortUrlApi;
use crate::clipboard::ClipboardProvider;
use crate::view::{CopyTarget, Dashboard, LoginForm, LoginState};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Login,
    Dashboard,
    DeleteConfirm,
    Help,
    Exiting,
}

/// Which dashboard panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    List,
}

/// Blocking gateway call queued for the next loop iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Login(String),
    CreateUrl(String),
    LoadUrls,
    Delete,
}

pub struct App {
    pub current_screen: CurrentScreen,
    /// Screen to return to when Help or Exiting is closed
    pub previous_screen: CurrentScreen,
    pub focus: Focus,
    pub login: LoginForm,
    pub dashboard: Option<Dashboard>,
    pub status_message: String,
    pub error_message: String,
    pub url_truncate_length: usize,
    api: Box<dyn ShortUrlApi>,
    clipboard: Box<dyn ClipboardProvider>,
    pending: Option<PendingAction>,
}

impl App {
    /// Start on the login screen, or go straight to the dashboard when the
    /// session is already authenticated
    pub fn new(
        api: Box<dyn ShortUrlApi>,
        clipboard: Box<dyn ClipboardProvider>,
        url_truncate_length: usize,
    ) -> Self {
        let mut app = Self {
            current_screen: CurrentScreen::Login,
            previous_screen: CurrentScreen::Login,
            focus: Focus::default(),
            login: LoginForm::new(),
            dashboard: None,
            status_message: String::new(),
            error_message: String::new(),
            url_truncate_length,
            api,
            clipboard,
            pending: None,
        };
        if let Some(user_id) = app.api.current_user_id()
            && app.api.is_authenticated()
        {
            app.enter_dashboard(user_id);
        }
        app
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    /// True while any request is queued or the visible form is submitting
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
            || self.login.is_submitting()
            || self
                .dashboard
                .as_ref()
                .is_some_and(|d| d.form.is_submitting() || d.list.is_loading())
    }

    fn enter_dashboard(&mut self, user_id: String) {
        let mut dashboard = Dashboard::new(user_id);
        dashboard.begin_refresh();
        self.dashboard = Some(dashboard);
        self.focus = Focus::Form;
        self.current_screen = CurrentScreen::Dashboard;
        self.pending = Some(PendingAction::LoadUrls);
    }

    // ============ Login ============

    pub fn submit_login(&mut self) {
        if self.is_busy() {
            return;
        }
        self.clear_messages();
        if let Some(user_id) = self.login.begin_submit() {
            self.pending = Some(PendingAction::Login(user_id));
        }
    }

    // ============ Dashboard ============

    pub fn submit_url(&mut self) {
        if self.is_busy() {
            return;
        }
        let Some(dashboard) = self.dashboard.as_mut() else {
            return;
        };
        if let Some(url) = dashboard.begin_create() {
            self.pending = Some(PendingAction::CreateUrl(url));
        }
    }

    pub fn clear_form(&mut self) {
        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.form.clear();
        }
    }

    pub fn refresh(&mut self) {
        if self.is_busy() {
            return;
        }
        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.begin_refresh();
            self.pending = Some(PendingAction::LoadUrls);
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(dashboard) = self.dashboard.as_mut()
            && dashboard.request_delete().is_some()
        {
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        if self.is_busy() {
            return;
        }
        self.pending = Some(PendingAction::Delete);
    }

    pub fn cancel_delete(&mut self) {
        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.cancel_delete();
        }
        self.current_screen = CurrentScreen::Dashboard;
    }

    pub fn copy_selected(&mut self, target: CopyTarget) {
        let Some(dashboard) = self.dashboard.as_ref() else {
            return;
        };
        match dashboard.copy_selected(target, self.clipboard.as_mut()) {
            Ok(text) => self.set_status(format!("Copied: {}", text)),
            Err(e) => self.set_error(e.message().to_string()),
        }
    }

    pub fn copy_result(&mut self) {
        let Some(dashboard) = self.dashboard.as_ref() else {
            return;
        };
        match dashboard.copy_result(self.clipboard.as_mut()) {
            Ok(text) => self.set_status(format!("Copied: {}", text)),
            Err(e) => self.set_error(e.message().to_string()),
        }
    }

    pub fn logout(&mut self) {
        if let Some(mut dashboard) = self.dashboard.take() {
            dashboard.logout(self.api.as_ref());
        }
        self.pending = None;
        self.login.clear();
        self.focus = Focus::default();
        self.current_screen = CurrentScreen::Login;
        self.set_status("Logged out".to_string());
    }

    // ============ Overlays ============

    pub fn open_overlay(&mut self, screen: CurrentScreen) {
        if self.current_screen != screen {
            self.previous_screen = self.current_screen;
            self.current_screen = screen;
        }
    }

    pub fn close_overlay(&mut self) {
        self.current_screen = self.previous_screen;
    }

    // ============ Pending execution ============

    /// Execute a queued gateway call and apply its outcome
    pub fn run_pending(&mut self, action: PendingAction) {
        debug!("Running {:?}", action);
        match action {
            PendingAction::Login(user_id) => {
                if self.login.finish_submit(self.api.as_ref(), &user_id)
                    && let LoginState::Authenticated(user_id) = &self.login.state
                {
                    let user_id = user_id.clone();
                    self.set_status(format!("Logged in as {}", user_id));
                    self.login.clear();
                    self.enter_dashboard(user_id);
                }
            }
            PendingAction::CreateUrl(url) => {
                let Some(dashboard) = self.dashboard.as_mut() else {
                    return;
                };
                if let Some(created) = dashboard.finish_create(self.api.as_ref(), &url) {
                    let message = if created.existed {
                        format!("Existing short URL: {}", created.record.short_url)
                    } else {
                        format!("Created: {}", created.record.short_url)
                    };
                    self.set_status(message);
                }
            }
            PendingAction::LoadUrls => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.finish_refresh(self.api.as_ref());
                }
            }
            PendingAction::Delete => {
                self.current_screen = CurrentScreen::Dashboard;
                let Some(dashboard) = self.dashboard.as_mut() else {
                    return;
                };
                let code = dashboard.pending_delete().map(str::to_string);
                if dashboard.confirm_delete(self.api.as_ref())
                    && let Some(code) = code
                {
                    self.set_status(format!("Deleted: {}", code));
                }
            }
        }
    }
}
