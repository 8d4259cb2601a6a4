//! Process-level setup: logging and panic handling

pub mod logging;
pub mod panic_handler;

pub use logging::init_logging;
pub use panic_handler::{RunMode, install_panic_hook};
