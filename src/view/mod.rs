//! Presentation state shared by the front ends
//!
//! Each component keeps the result of its last gateway call and exposes the
//! transitions the TUI drives. Long-running operations are split into
//! `begin_*` (local validation, enter the busy state) and `finish_*` (the
//! blocking call) so the UI can redraw in between.

mod dashboard;
mod login;
mod url_form;
mod url_list;

pub use dashboard::{CopyTarget, Dashboard};
pub use login::{LoginForm, LoginState};
pub use url_form::{UrlForm, UrlFormState};
pub use url_list::{ListStatus, UrlList};
