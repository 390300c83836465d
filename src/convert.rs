//! Gregorian ⇄ Solar Hijri arithmetic.
//!
//! The Solar Hijri year is laid out on a 33-year cycle of 12 053 days made of
//! eight 4-year sub-cycles (1 461 days, the first year of each being leap) and
//! one trailing common year. Both conversion directions and the leap rule below
//! are derived from that single layout, so they cannot disagree.

use crate::consts::{
    COMMON_YEAR_DAYS, FIRST_HALF_DAYS, HIJRI_EPOCH_OFFSET, HIJRI_GRAND_CYCLE_DAYS,
    HIJRI_GRAND_CYCLE_YEARS, HIJRI_LEAP_CYCLE_DAYS, HIJRI_LEAP_CYCLE_YEARS,
    HIJRI_SKIPPED_LEAP_POSITION, HIJRI_YEAR_BASE, HOOT, HOOT_DAYS, HOOT_DAYS_LEAP,
    LAST_LONG_MONTH, LONG_MONTH_DAYS, SHORT_MONTH_DAYS,
};
use crate::types::{GregorianDate, HijriMonth, SolarHijriDate};
use crate::CalendarError;

/// Solar Hijri leap rule: Hoot has 30 days in leap years, 29 otherwise.
///
/// A year is leap when its position in the 33-year cycle is a multiple of 4,
/// except position 32 (… 1395, 1399, 1403, 1408 …).
#[allow(clippy::cast_lossless)]
pub const fn is_leap_year(hijri_year: i32) -> bool {
    let position = cycle_year(hijri_year).rem_euclid(HIJRI_GRAND_CYCLE_YEARS);
    position % HIJRI_LEAP_CYCLE_YEARS == 0 && position != HIJRI_SKIPPED_LEAP_POSITION
}

/// Number of days in a Solar Hijri year.
pub const fn year_length(hijri_year: i32) -> u16 {
    if is_leap_year(hijri_year) { 366 } else { 365 }
}

/// Number of days in a Solar Hijri month.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn month_length(hijri_year: i32, month: u8) -> Result<u8, CalendarError> {
    HijriMonth::new(month).map(|month| month_length_of(hijri_year, month))
}

pub(crate) const fn month_length_of(hijri_year: i32, month: HijriMonth) -> u8 {
    let month = month.get();
    if month <= LAST_LONG_MONTH {
        LONG_MONTH_DAYS
    } else if month < HOOT {
        SHORT_MONTH_DAYS
    } else if is_leap_year(hijri_year) {
        HOOT_DAYS_LEAP
    } else {
        HOOT_DAYS
    }
}

#[allow(clippy::cast_lossless)]
const fn cycle_year(hijri_year: i32) -> i64 {
    hijri_year as i64 - HIJRI_YEAR_BASE as i64
}

/// Zero-based day of the Hijri year on which `month`/`day` falls.
fn day_of_year(month: HijriMonth, day: u8) -> i64 {
    let month = i64::from(month.get());
    let month_start = if month <= i64::from(LAST_LONG_MONTH) {
        (month - 1) * i64::from(LONG_MONTH_DAYS)
    } else {
        FIRST_HALF_DAYS + (month - 1 - i64::from(LAST_LONG_MONTH)) * i64::from(SHORT_MONTH_DAYS)
    };
    month_start + i64::from(day) - 1
}

/// Converts a position of the Gregorian day count into a Solar Hijri date.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn hijri_from_day_number(number: i64) -> SolarHijriDate {
    let mut days = number + HIJRI_EPOCH_OFFSET;

    let mut year = i64::from(HIJRI_YEAR_BASE)
        + HIJRI_GRAND_CYCLE_YEARS * days.div_euclid(HIJRI_GRAND_CYCLE_DAYS);
    days = days.rem_euclid(HIJRI_GRAND_CYCLE_DAYS);

    year += HIJRI_LEAP_CYCLE_YEARS * (days / HIJRI_LEAP_CYCLE_DAYS);
    days %= HIJRI_LEAP_CYCLE_DAYS;

    // The first year of a sub-cycle owns days 0..=365
    if days > COMMON_YEAR_DAYS {
        year += (days - 1) / COMMON_YEAR_DAYS;
        days = (days - 1) % COMMON_YEAR_DAYS;
    }

    let (month, day) = if days < FIRST_HALF_DAYS {
        let long = i64::from(LONG_MONTH_DAYS);
        (1 + days / long, 1 + days % long)
    } else {
        let short = i64::from(SHORT_MONTH_DAYS);
        let rest = days - FIRST_HALF_DAYS;
        (i64::from(LAST_LONG_MONTH) + 1 + rest / short, 1 + rest % short)
    };

    SolarHijriDate::from_parts(year as i32, HijriMonth::saturating(month as u8), day as u8)
}

/// Position of a Solar Hijri date in the Gregorian day count.
pub(crate) fn hijri_day_number(year: i32, month: HijriMonth, day: u8) -> i64 {
    let cycle_year = cycle_year(year);
    let position = cycle_year.rem_euclid(HIJRI_GRAND_CYCLE_YEARS);
    let sub_position = position % HIJRI_LEAP_CYCLE_YEARS;

    // A leap year opens every sub-cycle, so later years start one day further on
    let year_in_sub_cycle = if sub_position == 0 {
        0
    } else {
        1 + COMMON_YEAR_DAYS * sub_position
    };

    let year_start = HIJRI_GRAND_CYCLE_DAYS * cycle_year.div_euclid(HIJRI_GRAND_CYCLE_YEARS)
        + HIJRI_LEAP_CYCLE_DAYS * (position / HIJRI_LEAP_CYCLE_YEARS)
        + year_in_sub_cycle;

    year_start + day_of_year(month, day) - HIJRI_EPOCH_OFFSET
}

impl GregorianDate {
    /// Converts this date into the Solar Hijri calendar.
    ///
    /// Exact for the calibrated years (1900-2100); outside them the arithmetic
    /// still yields a date but it is not guaranteed to match the official calendar.
    pub fn to_solar_hijri(&self) -> SolarHijriDate {
        hijri_from_day_number(self.day_number())
    }
}

impl SolarHijriDate {
    /// Converts a Gregorian date into the Solar Hijri calendar.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        date.to_solar_hijri()
    }

    /// Position of this date in the Gregorian day count.
    pub fn day_number(&self) -> i64 {
        hijri_day_number(self.year(), self.month_typed(), self.day())
    }

    /// Converts this date into the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the Gregorian year falls
    /// outside the representable range.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        GregorianDate::from_day_number(self.day_number())
    }

    /// Whether this date's year has a 30-day Hoot.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }
}
