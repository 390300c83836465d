//! Fast Gregorian (month, day) → Solar Hijri month lookup.
//!
//! Each Hijri month begins between the 19th and the 24th of a Gregorian month,
//! drifting by a day or two from year to year. The breakpoints are never
//! hard-coded: they are read off [`month_range`] for a given Hijri year.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::consts::{HAMAL, MONTHS_PER_YEAR, REFERENCE_HIJRI_YEAR};
use crate::resolver::month_range;
use crate::{CalendarError, HijriMonth};

/// Leap year used to validate (month, day) pairs so that February 29 is accepted.
const ANY_LEAP_YEAR: i32 = 2000;

static REFERENCE_TABLE: Lazy<Result<MonthStartTable, CalendarError>> =
    Lazy::new(|| MonthStartTable::for_hijri_year(REFERENCE_HIJRI_YEAR));

/// Gregorian (month, day) on which each month of one Hijri year begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthStartTable {
    hijri_year: i32,
    starts:     [(u8, u8); MONTHS_PER_YEAR as usize],
}

impl MonthStartTable {
    /// Derives the breakpoints of `hijri_year` from the full conversion.
    ///
    /// # Errors
    /// Returns `CalendarError::UnresolvedRange` if any month of the year cannot be resolved.
    pub fn for_hijri_year(hijri_year: i32) -> Result<Self, CalendarError> {
        let mut starts = [(0, 0); MONTHS_PER_YEAR as usize];
        for (slot, month) in starts.iter_mut().zip(HijriMonth::iter()) {
            let start = month_range(hijri_year, month)?.start();
            *slot = (start.month(), start.day());
        }
        Ok(Self { hijri_year, starts })
    }

    /// The table used by [`current_hijri_month`], derived from a common year.
    ///
    /// # Errors
    /// Returns the error the derivation produced; it cannot fail for the reference year.
    pub fn reference() -> Result<&'static Self, CalendarError> {
        REFERENCE_TABLE.as_ref().map_err(Clone::clone)
    }

    pub const fn hijri_year(&self) -> i32 {
        self.hijri_year
    }

    /// Gregorian (month, day) on which `month` begins.
    pub const fn start_of(&self, month: HijriMonth) -> (u8, u8) {
        self.starts[(month.get() - 1) as usize]
    }

    /// The Hijri month in progress on Gregorian `month`/`day`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` if the
    /// pair is not a calendar date in any year.
    pub fn lookup(&self, month: u8, day: u8) -> Result<HijriMonth, CalendarError> {
        if month == 0 || month > MONTHS_PER_YEAR {
            return Err(CalendarError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(ANY_LEAP_YEAR, u32::from(month), u32::from(day)).is_none() {
            return Err(CalendarError::InvalidDay {
                year: ANY_LEAP_YEAR,
                month,
                day,
            });
        }

        let key = self.year_order_key(month, day);
        let found = HijriMonth::iter()
            .zip(self.starts)
            .take_while(|&(_, (start_month, start_day))| self.year_order_key(start_month, start_day) <= key)
            .last()
            .map(|(hijri_month, _)| hijri_month);

        // Days before Nowruz in the Gregorian month that holds it are still Hoot
        Ok(found.unwrap_or_else(|| HijriMonth::saturating(MONTHS_PER_YEAR)))
    }

    /// Orders Gregorian (month, day) pairs as they occur through this Hijri year,
    /// starting from the Gregorian month in which Hamal begins.
    fn year_order_key(&self, month: u8, day: u8) -> (u8, u8) {
        let (hamal_month, _) = self.starts[usize::from(HAMAL - 1)];
        ((month + MONTHS_PER_YEAR - hamal_month) % MONTHS_PER_YEAR, day)
    }
}

/// Fast approximate Hijri month for a Gregorian `month`/`day`, ignoring the year.
///
/// Exact for years whose breakpoints match the reference table (1400-1402,
/// 1404-1406); in years next to a leap year each boundary date may be off by
/// one day. Use
/// [`GregorianDate::to_solar_hijri`](crate::GregorianDate::to_solar_hijri) when the
/// year is known.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` for an
/// impossible date.
pub fn current_hijri_month(month: u8, day: u8) -> Result<HijriMonth, CalendarError> {
    MonthStartTable::reference()?.lookup(month, day)
}
