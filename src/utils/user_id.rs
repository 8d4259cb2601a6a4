//! 用户 ID 校验
//!
//! 登录前在本地检查，不合法的 ID 不会发往服务端

/// User ids are exactly this many ASCII letters or digits
pub const USER_ID_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIdError {
    Empty,
    WrongLength,
    InvalidCharacters,
}

impl std::fmt::Display for UserIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "User ID is required"),
            Self::WrongLength => write!(
                f,
                "User ID must be exactly {} characters",
                USER_ID_LENGTH
            ),
            Self::InvalidCharacters => {
                write!(f, "User ID must contain only alphanumeric characters")
            }
        }
    }
}

impl std::error::Error for UserIdError {}

/// Check a user id as typed.
///
/// Only the emptiness check ignores surrounding whitespace; length and
/// characters are checked on the raw input.
pub fn validate_user_id(input: &str) -> Result<&str, UserIdError> {
    if input.trim().is_empty() {
        return Err(UserIdError::Empty);
    }
    if input.chars().count() != USER_ID_LENGTH {
        return Err(UserIdError::WrongLength);
    }
    if !input.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(UserIdError::InvalidCharacters);
    }
    Ok(input)
}
