use crate::consts::{DATE_SEPARATOR, MAX_GREGORIAN_YEAR, MIN_DAY, MIN_GREGORIAN_YEAR, MONTHS_PER_YEAR};
use crate::convert::month_length_of;
use crate::day_number;
use crate::month_name::HijriMonthName;
use crate::prelude::*;
use crate::CalendarError;
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A valid proleptic Gregorian calendar date.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the year is outside
    /// `MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR`, `CalendarError::InvalidMonth`
    /// or `CalendarError::InvalidDay` for an impossible month or day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(CalendarError::UnsupportedYearRange(i64::from(year)));
        }
        if month == 0 || month > MONTHS_PER_YEAR {
            return Err(CalendarError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).is_none() {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Position of this date in the linear Gregorian day count.
    pub fn day_number(&self) -> i64 {
        day_number::day_number(self.year, self.month, self.day)
    }

    /// Builds the date at a position of the linear Gregorian day count.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the position lies outside
    /// the representable years.
    pub fn from_day_number(number: i64) -> Result<Self, CalendarError> {
        let date = day_number::from_day_number(number).ok_or_else(|| {
            // Beyond chrono's calendar; report the bound that was crossed
            let bound = if number < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
            CalendarError::UnsupportedYearRange(i64::from(bound.year()))
        })?;
        Self::try_from(date)
    }

    /// Returns the date `days` days after this one (before it when negative).
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the result leaves the
    /// representable years.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        let shifted = TimeDelta::try_days(days)
            .and_then(|delta| NaiveDate::try_from(self).ok()?.checked_add_signed(delta))
            .ok_or(CalendarError::UnsupportedYearRange(i64::from(self.year)))?;
        Self::try_from(shifted)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// The local calendar date according to the system clock.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the clock reports a year
    /// outside the representable range.
    pub fn today() -> Result<Self, CalendarError> {
        Self::try_from(chrono::Local::now().date_naive())
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso_parts(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        // chrono months and days always fit in u8
        let month = u8::try_from(value.month()).map_err(|_| CalendarError::InvalidMonth(u8::MAX))?;
        let day = u8::try_from(value.day()).map_err(|_| CalendarError::InvalidDay {
            year: value.year(),
            month,
            day: u8::MAX,
        })?;
        Self::new(value.year(), month, day)
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(value: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_ymd_opt(value.year, u32::from(value.month), u32::from(value.day)).ok_or(
            CalendarError::InvalidDay {
                year:  value.year,
                month: value.month,
                day:   value.day,
            },
        )
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A Solar Hijri month number guaranteed to be in the range `1..=12`
/// (Hamal through Hoot). Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HijriMonth(NonZeroU8);

impl HijriMonth {
    /// Creates a new month, validating that it's non-zero and <= `MONTHS_PER_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > 12.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MONTHS_PER_YEAR {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Clamps `value` into `1..=12`; only for values already known to be valid.
    pub(crate) fn saturating(value: u8) -> Self {
        Self(NonZeroU8::new(value.clamp(1, MONTHS_PER_YEAR)).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Stable display key for this month.
    pub const fn name(self) -> HijriMonthName {
        HijriMonthName::from_month(self)
    }

    /// The month after this one and whether the year rolled over.
    pub fn succ(self) -> (Self, bool) {
        if self.get() == MONTHS_PER_YEAR {
            (Self::saturating(1), true)
        } else {
            (Self::saturating(self.get() + 1), false)
        }
    }

    /// The month before this one and whether the year rolled back.
    pub fn pred(self) -> (Self, bool) {
        if self.get() == 1 {
            (Self::saturating(MONTHS_PER_YEAR), true)
        } else {
            (Self::saturating(self.get() - 1), false)
        }
    }

    /// All twelve months in calendar order.
    pub fn iter() -> impl Iterator<Item = Self> {
        (1..=MONTHS_PER_YEAR).map(Self::saturating)
    }
}

impl TryFrom<u8> for HijriMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HijriMonth> for u8 {
    fn from(month: HijriMonth) -> Self {
        month.0.get()
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Solar Hijri calendar date.
///
/// Invariant: `1 <= day <= month_length(year, month)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", day)]
pub struct SolarHijriDate {
    year:  i32,
    month: HijriMonth,
    day:   u8,
}

impl SolarHijriDate {
    /// Creates a new Solar Hijri date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12, or
    /// `CalendarError::InvalidDay` if `day` does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let hijri_month = HijriMonth::new(month)?;
        if day < MIN_DAY || day > month_length_of(year, hijri_month) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month: hijri_month,
            day,
        })
    }

    /// Day 1 of the given month.
    pub const fn first_of_month(year: i32, month: HijriMonth) -> Self {
        Self {
            year,
            month,
            day: MIN_DAY,
        }
    }

    /// Last day of the given month.
    pub const fn last_of_month(year: i32, month: HijriMonth) -> Self {
        Self {
            year,
            month,
            day: month_length_of(year, month),
        }
    }

    /// Built by the conversion arithmetic, which only yields valid components.
    pub(crate) const fn from_parts(year: i32, month: HijriMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the `HijriMonth` type
    pub const fn month_typed(&self) -> HijriMonth {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month_name(&self) -> HijriMonthName {
        self.month.name()
    }
}

impl FromStr for SolarHijriDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso_parts(s)?;
        Self::new(year, month, day)
    }
}

impl Serialize for SolarHijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SolarHijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Splits `YYYY-MM-DD` into numeric components without validating their ranges.
fn parse_iso_parts(s: &str) -> Result<(i32, u8, u8), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CalendarError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
            parts.len() - 1
        )));
    }

    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| CalendarError::InvalidFormat(parts[0].to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(parts[1].to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(parts[2].to_owned()))?;
    Ok((year, month, day))
}
