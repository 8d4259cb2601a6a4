//! The user's link list with a cursor
//!
//! Records are keyed by `code`: inserts never duplicate a code, removals take
//! out exactly one.

use crate::errors::Result;
use crate::models::{CreatedShortUrl, ShortUrlRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Loading,
    Populated,
    Empty,
    Error(String),
}

#[derive(Debug, Default)]
pub struct UrlList {
    records: Vec<ShortUrlRecord>,
    status: ListStatus,
    selected: Option<usize>,
}

impl UrlList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ShortUrlRecord] {
        &self.records
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn contains(&self, code: &str) -> bool {
        self.records.iter().any(|r| r.code == code)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&ShortUrlRecord> {
        self.selected.and_then(|i| self.records.get(i))
    }

    /// Enter `Loading`; the current records stay visible until replaced
    pub fn begin_load(&mut self) {
        self.status = ListStatus::Loading;
    }

    /// Apply a list fetch. On failure the previous records are kept.
    pub fn finish_load(&mut self, result: Result<Vec<ShortUrlRecord>>) {
        match result {
            Ok(records) => self.replace(records),
            Err(e) => self.status = ListStatus::Error(e.message().to_string()),
        }
    }

    fn replace(&mut self, records: Vec<ShortUrlRecord>) {
        self.records = records;
        self.refresh_status();
        self.selected = if self.records.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.records.len() - 1))
        };
    }

    fn refresh_status(&mut self) {
        self.status = if self.records.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Populated
        };
    }

    /// Prepend a freshly created record.
    ///
    /// Skipped when the service reports `existed` or the code is already
    /// listed. Returns whether the list changed.
    pub fn apply_created(&mut self, created: &CreatedShortUrl) -> bool {
        if created.existed || self.contains(&created.record.code) {
            return false;
        }
        self.records.insert(0, created.record.clone());
        // 保持光标停在原来那条记录上
        self.selected = Some(self.selected.map_or(0, |i| i + 1));
        self.refresh_status();
        true
    }

    /// Remove the record with `code`; returns whether one was removed
    pub fn remove(&mut self, code: &str) -> bool {
        let Some(pos) = self.records.iter().position(|r| r.code == code) else {
            return false;
        };
        self.records.remove(pos);

        self.selected = match self.selected {
            _ if self.records.is_empty() => None,
            Some(i) if i > pos => Some(i - 1),
            Some(i) => Some(i.min(self.records.len() - 1)),
            None => None,
        };
        self.refresh_status();
        true
    }

    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.records.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(self.records.len() - 1);
        }
    }
}
