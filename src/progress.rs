//! Where an anchor date stands relative to a Hijri month.

use crate::resolver::month_range;
use crate::{CalendarError, GregorianDate, HijriMonth};

/// Days of the month that have begun by `anchor`, counting the anchor itself.
///
/// Zero for a month that starts after the anchor, the full month length for a
/// month that ended before it.
///
/// # Errors
/// Returns `CalendarError::UnresolvedRange` if the month cannot be resolved.
pub fn days_elapsed(year: i32, month: HijriMonth, anchor: GregorianDate) -> Result<u8, CalendarError> {
    let range = month_range(year, month)?;
    if anchor < range.start() {
        return Ok(0);
    }
    let elapsed = (range.start().days_until(anchor) + 1).min(range.len_days());
    u8::try_from(elapsed).map_err(|_| CalendarError::UnresolvedRange {
        year,
        month: month.get(),
    })
}

/// Whether the month has not finished by `anchor`.
///
/// # Errors
/// Returns `CalendarError::UnresolvedRange` if the month cannot be resolved.
pub fn is_month_in_future(year: i32, month: HijriMonth, anchor: GregorianDate) -> Result<bool, CalendarError> {
    Ok(month_range(year, month)?.end() > anchor)
}

/// The most recent Hijri month that ended before `anchor`, as `(year, month)`.
pub fn last_completed_month(anchor: GregorianDate) -> (i32, HijriMonth) {
    let current = anchor.to_solar_hijri();
    let (month, rolled_back) = current.month_typed().pred();
    let year = if rolled_back { current.year() - 1 } else { current.year() };
    (year, month)
}
