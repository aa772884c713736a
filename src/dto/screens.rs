//! DTOs returned by the screen endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::record::Record;
use crate::domain::screen::Screen;
use crate::pagination::Paginated;

/// Everything a table screen renders for one interaction.
#[derive(Debug, Serialize)]
pub struct ScreenPageData {
    pub screen: Screen,
    pub title: &'static str,
    /// Current page of matching records plus pager links.
    pub records: Paginated<Record>,
    /// Search term echoed back when present.
    pub search_query: Option<String>,
    /// Filters that constrained the result.
    pub filters: BTreeMap<String, String>,
    /// Stats cards, computed over the whole collection.
    pub stats: BTreeMap<String, usize>,
}

/// Counts behind a screen's stats cards.
#[derive(Debug, Serialize)]
pub struct ScreenStatsData {
    pub screen: Screen,
    pub field: &'static str,
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
}

/// A rendered CSV download.
#[derive(Debug)]
pub struct ScreenExport {
    pub filename: String,
    pub body: String,
    pub rows: usize,
}
