//! User-facing front ends

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
