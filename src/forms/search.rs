use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{PageNumber, PageSize};
use crate::dto::search::SearchQuery;
use crate::forms::FormError;
use crate::services::tickets::TicketViewFilter;

/// Raw search input as typed by the user.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(max = 200))]
    pub search: Option<String>,
    /// Zero or missing means the first page.
    pub page: Option<usize>,
    /// Zero is rejected by [`PageSize`].
    #[validate(range(max = 200))]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub show_completed: bool,
    #[serde(default)]
    pub show_deleted: bool,
}

impl SearchForm {
    /// Validates the form and resolves defaults into a [`SearchQuery`].
    pub fn into_query(self, default_per_page: PageSize) -> Result<SearchQuery, FormError> {
        self.validate()?;

        let page = self
            .page
            .and_then(|p| PageNumber::new(p).ok())
            .unwrap_or_default();
        let per_page = match self.per_page {
            Some(n) => PageSize::new(n)?,
            None => default_per_page,
        };
        let search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let tags = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(SearchQuery {
            search,
            page,
            per_page,
            view: TicketViewFilter {
                tags,
                show_completed: self.show_completed,
                show_deleted: self.show_deleted,
            },
        })
    }
}
