use serde::Serialize;

use crate::domain::types::{PageNumber, PageSize};

/// One page of a match result together with the totals needed to render a
/// pager.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    /// Number of matches across all pages.
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Cuts page `page` out of the full, ordered match list.
    pub fn from_matches(matches: Vec<T>, page: PageNumber, per_page: PageSize) -> Self {
        let total = matches.len();
        let per_page = per_page.get();
        let total_pages = total.div_ceil(per_page);
        let offset = (page.get() - 1).saturating_mul(per_page);

        let items = matches.into_iter().skip(offset).take(per_page).collect();

        Self {
            items,
            page: page.get(),
            per_page,
            total,
            total_pages,
        }
    }
}
