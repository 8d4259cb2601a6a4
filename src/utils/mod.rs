pub mod url_validator;
pub mod user_id;

pub use url_validator::{UrlValidationError, normalize_url, validate_base_url};
pub use user_id::{USER_ID_LENGTH, UserIdError, validate_user_id};

/// Cut a string to at most `max` characters, appending `...` when shortened
pub fn truncate_display(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut)
}
