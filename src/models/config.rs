//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::types::{PageSize, TypeConstraintError};
use crate::search::Locale;
use crate::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_LOCALE};

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the `crm-search` binary.
pub struct SearchConfig {
    /// JSON snapshot exported from the data source.
    pub data_path: String,
    /// Language tag used for month names in date matching.
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl SearchConfig {
    pub fn locale(&self) -> Result<Locale, TypeConstraintError> {
        self.locale.parse()
    }

    pub fn page_size(&self) -> Result<PageSize, TypeConstraintError> {
        PageSize::new(self.items_per_page)
    }
}
