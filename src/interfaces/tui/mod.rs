//! Terminal User Interface (TUI) module
//!
//! Interactive client: sign in, shorten URLs, browse, copy and delete them.

use std::io;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

mod app;
mod constants;
mod event_handler;
#[cfg(test)]
mod test_support;
mod ui;

pub use app::{App, CurrentScreen, Focus, PendingAction};

use crate::client::ApiGateway;
use crate::clipboard::default_clipboard;
use crate::config::ClientConfig;
use crate::session::SessionStore;
use ui::ui;

type TuiTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// Run the TUI application
pub fn run_tui(config: &ClientConfig, session: SessionStore) -> io::Result<()> {
    let gateway = ApiGateway::new(&config.api, session);
    info!("Starting TUI against {}", gateway.base_url());
    let mut app = App::new(
        Box::new(gateway),
        default_clipboard(),
        config.ui.url_truncate_length,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
///
/// A queued gateway call runs only after the frame showing its busy state
/// has been drawn.
fn run_app(terminal: &mut TuiTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Some(action) = app.take_pending() {
            app.run_pending(action);
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            info!("TUI exiting");
            return Ok(());
        }
    }
}
