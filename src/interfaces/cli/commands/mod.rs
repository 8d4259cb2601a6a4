mod config_gen;
mod health;
mod links;

pub use config_gen::config_generate;
pub use health::service_health;
pub use links::{delete_url, list_urls, shorten_url};
