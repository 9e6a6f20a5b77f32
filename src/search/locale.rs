//! Month names used when rendering dates in their human-readable forms.
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Capability returning the long month name of a date.
///
/// The matcher only ever needs this one piece of locale data, so tests can
/// plug in their own tables without a full i18n runtime.
pub trait MonthNames {
    fn month_name(&self, date: NaiveDate) -> Cow<'_, str>;
}

impl<T: MonthNames + ?Sized> MonthNames for &T {
    fn month_name(&self, date: NaiveDate) -> Cow<'_, str> {
        (**self).month_name(date)
    }
}

impl<T: MonthNames + ?Sized> MonthNames for Box<T> {
    fn month_name(&self, date: NaiveDate) -> Cow<'_, str> {
        (**self).month_name(date)
    }
}

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Locales with built-in month tables.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Spanish,
    English,
}

impl Locale {
    /// BCP 47 tag of the locale.
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::Spanish => "es-ES",
            Locale::English => "en-US",
        }
    }

    fn months(self) -> &'static [&'static str; 12] {
        match self {
            Locale::Spanish => &SPANISH_MONTHS,
            Locale::English => &ENGLISH_MONTHS,
        }
    }
}

impl MonthNames for Locale {
    fn month_name(&self, date: NaiveDate) -> Cow<'_, str> {
        Cow::Borrowed(self.months()[date.month0() as usize])
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = TypeConstraintError;

    /// Accepts `es`, `es-ES`, `es_MX`, `EN-us` and the like; only the
    /// language subtag is significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "es" => Ok(Locale::Spanish),
            "en" => Ok(Locale::English),
            _ => Err(TypeConstraintError::UnsupportedLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn spanish_month_names_are_lowercase() {
        assert_eq!(Locale::Spanish.month_name(ymd(2024, 3, 5)), "marzo");
        assert_eq!(Locale::Spanish.month_name(ymd(2024, 12, 31)), "diciembre");
    }

    #[test]
    fn english_month_names() {
        assert_eq!(Locale::English.month_name(ymd(2024, 1, 1)), "January");
    }

    #[test]
    fn parses_language_tags() {
        assert_eq!("es-ES".parse::<Locale>(), Ok(Locale::Spanish));
        assert_eq!("es_MX".parse::<Locale>(), Ok(Locale::Spanish));
        assert_eq!(" EN-us ".parse::<Locale>(), Ok(Locale::English));
        assert_eq!(
            "fr-FR".parse::<Locale>(),
            Err(TypeConstraintError::UnsupportedLocale("fr-FR".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn boxed_and_borrowed_capabilities_delegate() {
        let boxed: Box<dyn MonthNames> = Box::new(Locale::English);
        assert_eq!(boxed.month_name(ymd(2024, 5, 1)), "May");
        let borrowed = &Locale::Spanish;
        assert_eq!(borrowed.month_name(ymd(2024, 5, 1)), "mayo");
    }
}
