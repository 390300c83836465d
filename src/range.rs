use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, GregorianDate, RANGE_SEPARATOR, prelude::*};

/// An inclusive range of Gregorian dates, `start <= end`.
///
/// Serializes as `{"startISO": .., "endISO": ..}`, the shape report filters
/// consume. `Display` and `FromStr` use the ISO 8601 interval form `start/end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "RangeBounds")]
pub struct MonthRange {
    #[serde(rename = "startISO")]
    start: GregorianDate,
    #[serde(rename = "endISO")]
    end:   GregorianDate,
}

/// Unvalidated wire form of [`MonthRange`].
#[derive(Deserialize)]
struct RangeBounds {
    #[serde(rename = "startISO")]
    start: GregorianDate,
    #[serde(rename = "endISO")]
    end:   GregorianDate,
}

impl TryFrom<RangeBounds> for MonthRange {
    type Error = CalendarError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.start, bounds.end)
    }
}

impl MonthRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub const fn single_day(date: GregorianDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    /// The `days` days ending at `anchor`, inclusive. Zero is treated as one.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the start would precede
    /// the first representable year.
    pub fn trailing_days(anchor: GregorianDate, days: u32) -> Result<Self, CalendarError> {
        let start = anchor.add_days(-i64::from(days.saturating_sub(1)))?;
        Self::new(start, anchor)
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (GregorianDate, GregorianDate) {
        (self.start, self.end)
    }

    /// Start date as `YYYY-MM-DD`
    pub fn start_iso(&self) -> String {
        self.start.to_string()
    }

    /// End date as `YYYY-MM-DD`
    pub fn end_iso(&self) -> String {
        self.end.to_string()
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = GregorianDate> {
        (self.start.day_number()..=self.end.day_number())
            .filter_map(|number| GregorianDate::from_day_number(number).ok())
    }
}

impl FromStr for MonthRange {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD/YYYY-MM-DD`; whitespace around either date is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
            CalendarError::InvalidFormat(format!("expected START{RANGE_SEPARATOR}END, found {trimmed}"))
        })?;
        Self::new(start.parse()?, end.parse()?)
    }
}
