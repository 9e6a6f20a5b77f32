use chrono::{Datelike, NaiveDate};

use crate::search::locale::MonthNames;
use crate::search::normalize::normalize;

/// Normalized human-readable renderings of a calendar date.
///
/// Day is not zero-padded, month number always is, year has four digits:
/// `5/03/2024`, `marzo 5, 2024`, `5 marzo 2024`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateForms {
    pub numeric: String,
    pub month_first: String,
    pub day_first: String,
}

impl DateForms {
    pub fn render<M>(date: NaiveDate, months: &M) -> Self
    where
        M: MonthNames + ?Sized,
    {
        let day = date.day();
        let year = date.year();
        let month = normalize(&months.month_name(date));

        Self {
            numeric: format!("{day}/{:02}/{year:04}", date.month()),
            month_first: format!("{month} {day}, {year:04}"),
            day_first: format!("{day} {month} {year:04}"),
        }
    }

    /// Whether any rendering contains the already-normalized `term`.
    pub fn contains(&self, term: &str) -> bool {
        self.numeric.contains(term)
            || self.month_first.contains(term)
            || self.day_first.contains(term)
    }
}
