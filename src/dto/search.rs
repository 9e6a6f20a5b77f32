use serde::Serialize;

use crate::domain::types::{PageNumber, PageSize};
use crate::pagination::Paginated;
use crate::services::tickets::TicketViewFilter;

/// Resolved parameters of a list search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Trimmed search text; `None` lists everything.
    pub search: Option<String>,
    pub page: PageNumber,
    pub per_page: PageSize,
    /// Board filters; ignored for customers.
    pub view: TicketViewFilter,
}

impl SearchQuery {
    pub fn new(per_page: PageSize) -> Self {
        Self {
            search: None,
            page: PageNumber::default(),
            per_page,
            view: TicketViewFilter::default(),
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }

    pub fn view(mut self, view: TicketViewFilter) -> Self {
        self.view = view;
        self
    }
}

/// Data required to render a searchable list.
#[derive(Debug, Serialize)]
pub struct SearchPageData<T> {
    pub results: Paginated<T>,
    /// Search text echoed back when present.
    pub search_query: Option<String>,
}
