//! Per-view list state with explicit transitions.
//!
//! Changing the search text or any filter moves the view back to page 1.
//! Page changes leave search and filters untouched.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::{FilterValue, ListQuery};

static NO_CONSTRAINT: FilterValue = FilterValue::All;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    search_text: String,
    filters: BTreeMap<String, FilterValue>,
    page: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filter_value(&self, field: &str) -> &FilterValue {
        self.filters.get(field).unwrap_or(&NO_CONSTRAINT)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search_text {
            self.search_text = text;
            self.page = 1;
        }
    }

    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<FilterValue>) {
        let field = field.into();
        let value = value.into();
        if self.filter_value(&field) == &value {
            return;
        }
        if value.is_all() {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, value);
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear();
            self.page = 1;
        }
    }

    /// Moves to `page`, treating 0 as the first page.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn to_query(&self, page_size: usize) -> ListQuery {
        ListQuery {
            search_text: self.search_text.clone(),
            filters: self.filters.clone(),
            page: self.page,
            page_size,
        }
    }
}
