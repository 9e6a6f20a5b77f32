//! In-memory free-text matching over tickets and customers.
//!
//! A query is trimmed, lowercased and stripped of diacritics once; every
//! candidate field goes through the same [`normalize`] before comparison.
//! Most fields match by prefix; a few (last names, the rendered date forms)
//! match anywhere in the text. Which rule applies to which field is decided
//! per record type in the [`Searchable`] implementations.

use crate::domain::types::RecordDate;

pub mod customer;
pub mod dates;
pub mod locale;
pub mod normalize;
pub mod ticket;

pub use dates::DateForms;
pub use locale::{Locale, MonthNames};
pub use normalize::normalize;

/// Trimmed and normalized query text. Never blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` for empty or whitespace-only queries.
    pub fn parse(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(normalize(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `field` starts with the term.
    pub fn prefix_of(&self, field: &str) -> bool {
        normalize(field).starts_with(self.as_str())
    }

    /// `field` contains the term anywhere.
    pub fn within(&self, field: &str) -> bool {
        normalize(field).contains(self.as_str())
    }

    /// One of the rendered forms of `date` contains the term. Unparsable
    /// dates never match.
    pub fn within_date(&self, date: &RecordDate, months: &dyn MonthNames) -> bool {
        date.calendar_date()
            .is_some_and(|d| DateForms::render(d, months).contains(self.as_str()))
    }
}

/// Records the matcher knows how to compare against a query.
pub trait Searchable {
    fn matches_term(&self, term: &SearchTerm, months: &dyn MonthNames) -> bool;
}

/// Stateless matcher bound to a month-name capability.
#[derive(Clone, Debug, Default)]
pub struct SearchMatcher<M = Locale> {
    months: M,
}

impl<M: MonthNames> SearchMatcher<M> {
    pub fn new(months: M) -> Self {
        Self { months }
    }

    pub fn months(&self) -> &M {
        &self.months
    }

    /// Whether a single record matches `query`. Blank queries match
    /// everything.
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T, query: &str) -> bool {
        match SearchTerm::parse(query) {
            Some(term) => record.matches_term(&term, &self.months),
            None => true,
        }
    }

    /// Records matching `query`, in input order.
    pub fn filter<'a, T: Searchable>(&self, records: &'a [T], query: &str) -> Vec<&'a T> {
        let Some(term) = SearchTerm::parse(query) else {
            return records.iter().collect();
        };

        let matched: Vec<&T> = records
            .iter()
            .filter(|record| record.matches_term(&term, &self.months))
            .collect();

        log::debug!(
            "Search {:?} matched {} of {} records",
            term.as_str(),
            matched.len(),
            records.len()
        );

        matched
    }

    /// Consuming variant of [`SearchMatcher::filter`].
    pub fn filter_owned<T: Searchable>(&self, mut records: Vec<T>, query: &str) -> Vec<T> {
        let Some(term) = SearchTerm::parse(query) else {
            return records;
        };

        let total = records.len();
        records.retain(|record| record.matches_term(&term, &self.months));

        log::debug!(
            "Search {:?} matched {} of {} records",
            term.as_str(),
            records.len(),
            total
        );

        records
    }
}

/// Filters with Spanish month names.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    SearchMatcher::new(Locale::Spanish).filter(records, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_have_no_term() {
        assert_eq!(SearchTerm::parse(""), None);
        assert_eq!(SearchTerm::parse(" \t\n "), None);
    }

    #[test]
    fn term_is_trimmed_and_normalized() {
        let term = SearchTerm::parse("  JOSÉ ").unwrap();
        assert_eq!(term.as_str(), "jose");
    }

    #[test]
    fn prefix_and_substring_rules() {
        let term = SearchTerm::parse("lop").unwrap();
        assert!(term.prefix_of("López"));
        assert!(!term.prefix_of("García López"));
        assert!(term.within("García López"));
        assert!(!term.within(""));
    }

    #[test]
    fn unparsable_dates_do_not_match() {
        let term = SearchTerm::parse("2024").unwrap();
        assert!(!term.within_date(&RecordDate::new("sin fecha"), &Locale::Spanish));
        assert!(term.within_date(&RecordDate::new("2024-03-05"), &Locale::Spanish));
    }
}
