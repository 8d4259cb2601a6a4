//! Client layer for the TUI and CLI front ends
//!
//! Every network call goes through here.
//!
//! # Architecture
//!
//! ```text
//! TUI / CLI → view state → ShortUrlApi ──→ HTTP link service
//!                               │
//!                               └─ SessionStore (bearer token, user id)
//! ```
//!
//! # Error policy
//!
//! - Transport failure → `ClientError::Network`
//! - Non-2xx with `{error, code}` body → `ClientError::Api`
//! - Non-2xx with unreadable body → generic `NETWORK_ERROR` shape
//! - 2xx with undecodable body → `ClientError::Parse`
//!
//! No retry and no backoff: the first failure is the result.

mod gateway;

pub use gateway::ApiGateway;

use crate::errors::Result;
use crate::models::{CreatedShortUrl, ShortUrlRecord, TokenResponse};
use crate::session::SessionStore;

/// Operations the view layer needs from the link service.
///
/// `ApiGateway` is the real implementation; tests drive the views with
/// in-memory fakes.
pub trait ShortUrlApi {
    /// The session this client reads its token from
    fn session(&self) -> &SessionStore;

    /// Exchange a user id for a bearer token.
    ///
    /// Implementations store the returned token and user id in the session
    /// before returning.
    fn generate_token(&self, user_id: &str) -> Result<TokenResponse>;

    /// Shorten `url` (sent as given; callers normalize it first)
    fn create_url(&self, url: &str) -> Result<CreatedShortUrl>;

    /// All links owned by the current user
    fn list_urls(&self) -> Result<Vec<ShortUrlRecord>>;

    /// Remove one link from the current user's list
    fn delete_url(&self, code: &str) -> Result<()>;

    fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    fn current_user_id(&self) -> Option<String> {
        self.session().user_id()
    }

    fn logout(&self) {
        self.session().clear();
    }
}
