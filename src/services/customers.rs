use crate::domain::customer::Customer;
use crate::dto::search::{SearchPageData, SearchQuery};
use crate::pagination::Paginated;
use crate::repository::CustomerReader;
use crate::search::{MonthNames, SearchMatcher};
use crate::services::{ServiceError, ServiceResult};

/// Loads all customers and returns the requested page of matches.
pub fn search_customers<R, M>(
    repo: &R,
    matcher: &SearchMatcher<M>,
    query: SearchQuery,
) -> ServiceResult<SearchPageData<Customer>>
where
    R: CustomerReader + ?Sized,
    M: MonthNames,
{
    let customers = repo.list_customers().map_err(|err| {
        log::error!("Failed to load customers: {err}");
        ServiceError::from(err)
    })?;

    let matched = matcher.filter_owned(customers, query.search.as_deref().unwrap_or_default());

    Ok(SearchPageData {
        results: Paginated::from_matches(matched, query.page, query.per_page),
        search_query: query.search,
    })
}
