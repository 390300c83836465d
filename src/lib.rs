//! Solar Hijri (Shamsi) ⇄ Gregorian calendar conversion.
//!
//! Converts Gregorian dates to the Solar Hijri calendar used in Afghanistan and
//! Iran, resolves Solar Hijri months to the Gregorian date ranges they cover,
//! and answers month-length and month-name questions. Month names use the
//! Afghan (zodiacal) scheme: Hamal, Saur, Jawza, ... Hoot.
//!
//! ```
//! use shamsi_date::{gregorian_to_solar_hijri, shamsi_month_range_to_gregorian};
//!
//! let nowruz = gregorian_to_solar_hijri(2025, 3, 21).unwrap();
//! assert_eq!(nowruz.to_string(), "1404-01-01");
//!
//! let hamal = shamsi_month_range_to_gregorian(1404, 1).unwrap();
//! assert_eq!(hamal.start_iso(), "2025-03-21");
//! assert_eq!(hamal.end_iso(), "2025-04-20");
//! ```

mod cache;
mod calendar;
mod config;
mod consts;
mod convert;
mod day_number;
mod lookup;
mod month_name;
mod prelude;
mod progress;
mod range;
mod resolver;
mod types;

#[cfg(test)]
mod test_utils;

pub use cache::MonthRangeCache;
pub use calendar::ShamsiCalendar;
pub use config::CalendarConfig;
pub use consts::*;
pub use convert::{is_leap_year, month_length, year_length};
pub use lookup::{MonthStartTable, current_hijri_month};
pub use month_name::HijriMonthName;
pub use progress::{days_elapsed, is_month_in_future, last_completed_month};
pub use range::MonthRange;
pub use resolver::{MonthSelection, month_range, resolve_selection, resolve_year, year_range};
pub use types::{GregorianDate, HijriMonth, SolarHijriDate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 1-{max})", max = MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("Year {0} is outside the supported range")]
    UnsupportedYearRange(i64),
    #[error("Could not resolve Gregorian range for Solar Hijri month {year}-{month:02}")]
    UnresolvedRange { year: i32, month: u8 },
    #[error("Range start {start} is after end {end}")]
    InvalidRange { start: GregorianDate, end: GregorianDate },
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Converts a Gregorian date to its Solar Hijri equivalent.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth`, `CalendarError::InvalidDay` or
/// `CalendarError::UnsupportedYearRange` if the Gregorian date is invalid.
pub fn gregorian_to_solar_hijri(year: i32, month: u8, day: u8) -> Result<SolarHijriDate, CalendarError> {
    GregorianDate::new(year, month, day).map(|date| date.to_solar_hijri())
}

/// Gregorian date range, both ends inclusive, covered by a Solar Hijri month.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12 and
/// `CalendarError::UnresolvedRange` if the month cannot be resolved.
pub fn shamsi_month_range_to_gregorian(year: i32, month: u8) -> Result<MonthRange, CalendarError> {
    month_range(year, HijriMonth::new(month)?)
}

/// Number of days in a Solar Hijri month (29 to 31).
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn days_in_shamsi_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    month_length(year, month)
}

/// Lower-case display key of a Solar Hijri month, e.g. `"hamal"` or `"jadi"`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn shamsi_month_name(month: u8) -> Result<&'static str, CalendarError> {
    HijriMonthName::from_number(month).map(HijriMonthName::key)
}
