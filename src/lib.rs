//! tinyurl-client - terminal client for the TinyURL link service
//!
//! Sign in with a six-character user ID, shorten URLs, list and delete the
//! short links you own. The interactive TUI and the one-shot CLI share one
//! API gateway and one in-memory session.
//!
//! # Features
//! - **tui**: Terminal user interface and system clipboard (default)
//!
//! # Architecture
//! - `session`: process-scoped bearer token and user ID
//! - `client`: `ShortUrlApi` trait and the HTTP `ApiGateway`
//! - `view`: login, creation form, list and dashboard state machines
//! - `interfaces`: front ends (CLI, TUI)
//! - `clipboard`: clipboard capability with an OSC 52 fallback
//! - `config`, `errors`, `system`, `utils`: ambient plumbing

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod session;
pub mod system;
pub mod utils;
pub mod view;
