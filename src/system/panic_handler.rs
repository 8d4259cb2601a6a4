//! Panic handler module
//!
//! Every mode appends a report to `crash.log`. TUI mode first hands the
//! terminal back (raw mode off, main screen) so the message is readable.

use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::{self, PanicHookInfo};

use chrono::Utc;

const CRASH_LOG: &str = "crash.log";

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let report = CrashReport::from_panic(info, mode);
        if let Err(e) = report.append_to(CRASH_LOG) {
            eprintln!("Failed to write {}: {}", CRASH_LOG, e);
        }

        use colored::Colorize;
        eprintln!();
        eprintln!("{} {}", "tinyurl crashed:".red().bold(), report.message);
        eprintln!("Details saved to {}", CRASH_LOG);
        eprintln!();
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use ratatui::crossterm::{cursor, execute, terminal};

    let _ = terminal::disable_raw_mode();
    let _ = execute!(std::io::stderr(), terminal::LeaveAlternateScreen, cursor::Show);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

struct CrashReport {
    timestamp: String,
    mode: RunMode,
    message: String,
    location: String,
    backtrace: String,
}

impl CrashReport {
    fn from_panic(info: &PanicHookInfo<'_>, mode: RunMode) -> Self {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());

        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            mode,
            message,
            location,
            backtrace: format!("{:?}", Backtrace::force_capture()),
        }
    }

    fn render(&self) -> String {
        let rule = "=".repeat(42);
        format!(
            "{rule}\ntinyurl {} crash ({:?} mode) - {}\n{rule}\nMessage: {}\nLocation: {}\n\nBacktrace:\n{}\n{rule}\n\n",
            env!("CARGO_PKG_VERSION"),
            self.mode,
            self.timestamp,
            self.message,
            self.location,
            self.backtrace,
        )
    }

    fn append_to(&self, path: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(self.render().as_bytes())
    }
}
