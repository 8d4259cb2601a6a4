//! Dashboard shell: creation form, link list, error banner and logout

use tracing::{info, warn};

use super::{UrlForm, UrlList};
use crate::client::ShortUrlApi;
use crate::clipboard::ClipboardProvider;
use crate::errors::{ClientError, Result};
use crate::models::CreatedShortUrl;

/// Which copy action was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    ShortUrl,
    OriginalUrl,
}

#[derive(Debug)]
pub struct Dashboard {
    user_id: String,
    pub form: UrlForm,
    pub list: UrlList,
    error: Option<String>,
    pending_delete: Option<String>,
}

impl Dashboard {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            form: UrlForm::new(),
            list: UrlList::new(),
            error: None,
            pending_delete: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Dashboard-level error banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ============ List loading ============

    pub fn begin_refresh(&mut self) {
        self.error = None;
        self.list.begin_load();
    }

    pub fn finish_refresh<A: ShortUrlApi + ?Sized>(&mut self, api: &A) {
        let result = api.list_urls();
        if let Err(e) = &result {
            warn!("Failed to load URLs: {}", e);
            self.error = Some(e.message().to_string());
        }
        self.list.finish_load(result);
    }

    /// Load (or reload) the list
    pub fn refresh<A: ShortUrlApi + ?Sized>(&mut self, api: &A) {
        self.begin_refresh();
        self.finish_refresh(api);
    }

    // ============ Creation ============

    pub fn begin_create(&mut self) -> Option<String> {
        self.form.begin_submit()
    }

    /// Submit `url` and prepend the new record unless it already existed
    pub fn finish_create<A: ShortUrlApi + ?Sized>(
        &mut self,
        api: &A,
        url: &str,
    ) -> Option<CreatedShortUrl> {
        let created = self.form.finish_submit(api, url)?;
        self.list.apply_created(&created);
        Some(created)
    }

    pub fn create<A: ShortUrlApi + ?Sized>(&mut self, api: &A) -> Option<CreatedShortUrl> {
        let url = self.begin_create()?;
        self.finish_create(api, &url)
    }

    // ============ Deletion ============

    /// Mark the selected record for deletion; returns its code
    pub fn request_delete(&mut self) -> Option<String> {
        let code = self.list.selected()?.code.clone();
        self.pending_delete = Some(code.clone());
        Some(code)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the record marked by `request_delete`
    pub fn confirm_delete<A: ShortUrlApi + ?Sized>(&mut self, api: &A) -> bool {
        match self.pending_delete.take() {
            Some(code) => self.delete(api, &code),
            None => false,
        }
    }

    /// Delete `code` on the service, then drop it from the list.
    ///
    /// On failure the list is left alone and the banner shows the message.
    pub fn delete<A: ShortUrlApi + ?Sized>(&mut self, api: &A, code: &str) -> bool {
        match api.delete_url(code) {
            Ok(()) => {
                self.list.remove(code);
                true
            }
            Err(e) => {
                warn!("Failed to delete {}: {}", code, e);
                self.error = Some(e.message().to_string());
                false
            }
        }
    }

    // ============ Clipboard ============

    /// Copy from the selected list entry; returns the copied text
    pub fn copy_selected(
        &self,
        target: CopyTarget,
        clipboard: &mut dyn ClipboardProvider,
    ) -> Result<String> {
        let record = self
            .list
            .selected()
            .ok_or_else(|| ClientError::validation("No URL selected"))?;
        let text = match target {
            CopyTarget::ShortUrl => &record.short_url,
            CopyTarget::OriginalUrl => &record.original_url,
        };
        clipboard.set_text(text)?;
        Ok(text.clone())
    }

    /// Copy the short URL shown in the creation result panel
    pub fn copy_result(&self, clipboard: &mut dyn ClipboardProvider) -> Result<String> {
        let created = self
            .form
            .result()
            .ok_or_else(|| ClientError::validation("Nothing to copy"))?;
        clipboard.set_text(&created.record.short_url)?;
        Ok(created.record.short_url.clone())
    }

    /// Clear the session; the caller switches back to the login screen
    pub fn logout<A: ShortUrlApi + ?Sized>(&mut self, api: &A) {
        info!("Logging out {}", self.user_id);
        api.logout();
        self.pending_delete = None;
    }
}
