//! Clipboard capability
//!
//! All copy actions go through [`ClipboardProvider`]. The system clipboard
//! (arboard) is tried first; terminals without one (SSH sessions, headless
//! boxes) get the text through an OSC 52 escape sequence instead.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::errors::{ClientError, Result};

pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Short name used in status and log lines
    fn name(&self) -> &'static str;
}

/// The desktop clipboard via arboard
#[cfg(feature = "tui")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "tui")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "tui")]
impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        // 首次使用时再连接剪贴板，避免无桌面环境启动即报错
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClientError::clipboard(format!("clipboard unavailable: {}", e)))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| ClientError::clipboard(format!("copy failed: {}", e))),
            None => Err(ClientError::clipboard("clipboard unavailable")),
        }
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// Writes `ESC ] 52 ; c ; <base64> BEL` so the terminal sets its clipboard
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> ClipboardProvider for Osc52Clipboard<W> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| ClientError::clipboard(format!("terminal copy failed: {}", e)))
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}

/// Try `primary`, fall back to `fallback` when it fails
pub struct FallbackClipboard {
    primary: Box<dyn ClipboardProvider>,
    fallback: Box<dyn ClipboardProvider>,
}

impl FallbackClipboard {
    pub fn new(primary: Box<dyn ClipboardProvider>, fallback: Box<dyn ClipboardProvider>) -> Self {
        Self { primary, fallback }
    }
}

impl ClipboardProvider for FallbackClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        match self.primary.set_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(
                    "{} clipboard failed ({}), using {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.set_text(text)
            }
        }
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

/// The clipboard used by the interactive client
pub fn default_clipboard() -> Box<dyn ClipboardProvider> {
    #[cfg(feature = "tui")]
    {
        Box::new(FallbackClipboard::new(
            Box::new(SystemClipboard::new()),
            Box::new(Osc52Clipboard::stdout()),
        ))
    }
    #[cfg(not(feature = "tui"))]
    {
        Box::new(Osc52Clipboard::stdout())
    }
}
