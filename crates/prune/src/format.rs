//! Date formatting for list and detail screens.

use chrono::{Locale, NaiveDateTime};

/// Placeholder for an absent date.
pub const MISSING_DATE: &str = "N/A";

/// Long date-time pattern, localised through the configured locale.
pub const LONG_FORMAT: &str = "%-d %B %Y %H:%M:%S";

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: Locale = Locale::fr_FR;

/// Renders optional timestamps in a locale-specific long format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    locale: Locale,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl DateFormatter {
    /// Creates a formatter for `locale`.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Creates a formatter from a POSIX locale name such as `fr_FR`.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Locale::try_from(name.trim()).ok().map(Self::new)
    }

    /// The configured locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `date`, or returns `N/A` when it is absent.
    #[must_use]
    pub fn format(&self, date: Option<&NaiveDateTime>) -> String {
        date.map_or_else(
            || MISSING_DATE.to_string(),
            |date| {
                // Wall-clock time from the server; UTC is only a carrier here.
                date.and_utc()
                    .format_localized(LONG_FORMAT, self.locale)
                    .to_string()
            },
        )
    }
}
