//! In-memory ledger filtering and pagination. Filters compose
//! conjunctively and never touch the database: only a period change
//! requires a re-fetch, everything here re-runs on the held snapshot.

use crate::models::ledger::{EntryType, LedgerEntry};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LedgerFilter {
    /// None = both income and expense.
    pub entry_type: Option<EntryType>,
    /// Exact site match; None = any site (including site-less entries).
    pub site_id: Option<i64>,
    /// Exact category match; None/empty = any.
    pub category: Option<String>,
    /// Case-insensitive substring on the description.
    pub search: Option<String>,
}

impl LedgerFilter {
    pub fn matches(&self, e: &LedgerEntry) -> bool {
        if let Some(t) = self.entry_type
            && e.entry_type != t
        {
            return false;
        }

        if let Some(site) = self.site_id
            && e.site_id != Some(site)
        {
            return false;
        }

        if let Some(cat) = &self.category
            && !cat.is_empty()
            && e.category != *cat
        {
            return false;
        }

        if let Some(q) = &self.search
            && !q.is_empty()
            && !e.description.to_lowercase().contains(&q.to_lowercase())
        {
            return false;
        }

        true
    }

    pub fn apply(&self, entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
        entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Monotonically growing visibility window over the filtered list. Grows by
/// a fixed increment on explicit user action and resets to one page when the
/// filter criteria change.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    visible: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn advance(&mut self) {
        self.visible += self.page_size;
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    pub fn has_more<T>(&self, items: &[T]) -> bool {
        items.len() > self.visible
    }
}
