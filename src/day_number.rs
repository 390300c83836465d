//! Linear Gregorian day count.
//!
//! `day_number` is the arithmetic base shared by both directions of the
//! Solar Hijri conversion. Consecutive calendar dates map to consecutive
//! integers; 1970-01-01 is day 719 529. The count is chrono's days-from-CE
//! shifted by [`CE_DAY_NUMBER_OFFSET`], so the inverse is left to chrono.

use chrono::NaiveDate;

use crate::consts::{
    CE_DAY_NUMBER_OFFSET, CENTURY_CYCLE, CUMULATIVE_DAYS, DECEMBER, FEBRUARY, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE,
};

/// Position of a Gregorian date in the linear day count.
///
/// Leap days are counted through `year + 1` once March is reached, so the
/// cumulative month offsets can stay those of a common year.
pub fn day_number(year: i32, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= DECEMBER);

    let year = i64::from(year);
    let leap_year = if month > FEBRUARY { year + 1 } else { year };

    365 * year + (leap_year + 3).div_euclid(i64::from(LEAP_YEAR_CYCLE))
        - (leap_year + 99).div_euclid(i64::from(CENTURY_CYCLE))
        + (leap_year + 399).div_euclid(i64::from(GREGORIAN_CYCLE))
        + i64::from(day)
        + CUMULATIVE_DAYS[usize::from(month - 1)]
}

/// Inverse of [`day_number`], or `None` outside chrono's date range.
pub fn from_day_number(number: i64) -> Option<NaiveDate> {
    let days_from_ce = i32::try_from(number.checked_sub(CE_DAY_NUMBER_OFFSET)?).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}
