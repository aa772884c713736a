use serde::Serialize;

use crate::query::QueryResult;

/// First and last pages always linked.
const EDGE_LINKS: usize = 2;
/// Pages linked before and after the current one.
const LINKS_BEFORE: usize = 2;
const LINKS_AFTER: usize = 4;

/// Pager links for `current_page` out of `total_pages`; `None` marks a gap
/// rendered as an ellipsis.
///
/// A page past the end centres the window on the last page, so the pager
/// always leads back to real pages.
fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let centre = current_page.clamp(1, total_pages);
    let blocks = [
        (1, EDGE_LINKS.min(total_pages)),
        (
            centre.saturating_sub(LINKS_BEFORE).max(1),
            centre.saturating_add(LINKS_AFTER).min(total_pages),
        ),
        (total_pages.saturating_sub(EDGE_LINKS) + 1, total_pages),
    ];

    let mut links = Vec::new();
    let mut last_shown = 0;
    for (first, last) in blocks {
        let first = first.max(last_shown + 1);
        if first > last {
            continue;
        }
        if first > last_shown + 1 {
            links.push(None);
        }
        links.extend((first..=last).map(Some));
        last_shown = last;
    }

    links
}

/// A page of records ready for a table with a pager underneath.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(result: QueryResult<T>, current_page: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = page_links(result.total_pages, current_page);

        Self {
            items: result.items,
            pages,
            page: current_page,
            total_count: result.total_count,
            total_pages: result.total_pages,
        }
    }
}
