//! Client configuration
//!
//! Layered loading: defaults, optional TOML file, `TINYURL__*` environment
//! variables, then command line overrides.

mod structs;

pub use structs::*;
