//! Configured entry point that never fails on a bad month selection.

use tracing::{debug, warn};

use crate::cache::MonthRangeCache;
use crate::config::CalendarConfig;
use crate::resolver::{self, MonthSelection};
use crate::{CalendarError, GregorianDate, HijriMonth, MonthRange, SolarHijriDate};

/// Conversion engine with configuration, optional memoization and a local
/// recovery policy: every failure to resolve a range is logged and replaced by
/// the trailing `fallback_days` ending at the anchor date.
#[derive(Debug, Default)]
pub struct ShamsiCalendar {
    config: CalendarConfig,
    cache:  MonthRangeCache,
}

impl ShamsiCalendar {
    /// # Errors
    /// Returns `CalendarError::Config` if the configuration is invalid.
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: MonthRangeCache::new(),
        })
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn cache(&self) -> &MonthRangeCache {
        &self.cache
    }

    /// Converts `date`, warning when its year is outside the calibrated range.
    /// The arithmetic result is returned either way.
    pub fn to_solar_hijri(&self, date: GregorianDate) -> SolarHijriDate {
        if let Err(e) = self.config.check_year(date.year()) {
            warn!(%date, "{e}; Solar Hijri conversion may be inexact");
        }
        date.to_solar_hijri()
    }

    /// # Errors
    /// Returns `CalendarError::UnresolvedRange` if the month cannot be resolved.
    pub fn month_range(&self, year: i32, month: HijriMonth) -> Result<MonthRange, CalendarError> {
        if self.config.cache_ranges {
            self.cache.get_or_resolve(year, month)
        } else {
            resolver::month_range(year, month)
        }
    }

    /// Range of `month` in `year`, or the fallback range ending at `anchor`.
    pub fn month_range_or_fallback(&self, year: i32, month: u8, anchor: GregorianDate) -> MonthRange {
        HijriMonth::new(month)
            .and_then(|month| self.month_range(year, month))
            .unwrap_or_else(|e| self.recover(&e, anchor))
    }

    /// Resolves `selection` relative to `anchor` through the cache.
    ///
    /// # Errors
    /// Returns `CalendarError::UnresolvedRange` if the chosen month cannot be resolved.
    pub fn resolve_selection(&self, selection: MonthSelection, anchor: GregorianDate) -> Result<MonthRange, CalendarError> {
        let year = selection.year_for(anchor);
        debug!(month = selection.month.get(), year, %anchor, "resolved Hijri month selection");
        self.month_range(year, selection.month)
    }

    /// Resolves `selection` relative to `anchor`, falling back like
    /// [`month_range_or_fallback`](Self::month_range_or_fallback).
    pub fn resolve_selection_or_fallback(&self, selection: MonthSelection, anchor: GregorianDate) -> MonthRange {
        self.resolve_selection(selection, anchor)
            .unwrap_or_else(|e| self.recover(&e, anchor))
    }

    /// Gregorian range of a whole Hijri year, or the fallback range ending at `anchor`.
    pub fn year_range_or_fallback(&self, year: i32, anchor: GregorianDate) -> MonthRange {
        resolver::year_range(year).unwrap_or_else(|e| self.recover(&e, anchor))
    }

    /// The trailing `fallback_days` ending at `anchor`, or the anchor alone when
    /// that would start before the first representable date.
    pub fn fallback_range(&self, anchor: GregorianDate) -> MonthRange {
        MonthRange::trailing_days(anchor, self.config.fallback_days).unwrap_or(MonthRange::single_day(anchor))
    }

    /// Today's Gregorian date from the local clock, the usual anchor.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the clock is outside the
    /// representable range.
    pub fn today(&self) -> Result<GregorianDate, CalendarError> {
        GregorianDate::today()
    }

    /// Today's Solar Hijri date from the local clock.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the clock is outside the
    /// representable range.
    pub fn today_hijri(&self) -> Result<SolarHijriDate, CalendarError> {
        self.today().map(|today| self.to_solar_hijri(today))
    }

    fn recover(&self, error: &CalendarError, anchor: GregorianDate) -> MonthRange {
        let fallback = self.fallback_range(anchor);
        warn!(%anchor, %fallback, "{error}; using fallback range");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, month, range};

    fn uncached() -> ShamsiCalendar {
        ShamsiCalendar::new(CalendarConfig {
            cache_ranges: false,
            ..CalendarConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CalendarConfig {
            fallback_days: 0,
            ..CalendarConfig::default()
        };
        assert!(matches!(ShamsiCalendar::new(config), Err(CalendarError::Config(_))));
    }

    #[test]
    fn test_month_range_uses_cache() {
        let calendar = ShamsiCalendar::default();
        let hamal = calendar.month_range(1404, month(1)).unwrap();
        assert_eq!(hamal, range((2025, 3, 21), (2025, 4, 20)));
        assert_eq!(calendar.cache().len(), 1);

        let calendar = uncached();
        assert_eq!(calendar.month_range(1404, month(1)).unwrap(), hamal);
        assert!(calendar.cache().is_empty());
    }

    #[test]
    fn test_invalid_month_falls_back() {
        let calendar = ShamsiCalendar::default();
        let anchor = gregorian(2025, 6, 10);
        assert_eq!(
            calendar.month_range_or_fallback(1404, 13, anchor),
            range((2025, 6, 4), (2025, 6, 10))
        );
    }

    #[test]
    fn test_unresolvable_month_falls_back() {
        let calendar = ShamsiCalendar::default();
        let anchor = gregorian(2025, 6, 10);
        assert_eq!(
            calendar.month_range_or_fallback(-700, 1, anchor),
            calendar.fallback_range(anchor)
        );
        assert_eq!(
            calendar.year_range_or_fallback(9500, anchor),
            calendar.fallback_range(anchor)
        );
    }

    #[test]
    fn test_valid_month_does_not_fall_back() {
        let calendar = ShamsiCalendar::default();
        let anchor = gregorian(2025, 6, 10);
        assert_eq!(
            calendar.month_range_or_fallback(1404, 10, anchor),
            range((2025, 12, 22), (2026, 1, 20))
        );
        assert_eq!(
            calendar.year_range_or_fallback(1404, anchor),
            range((2025, 3, 21), (2026, 3, 20))
        );
    }

    #[test]
    fn test_fallback_window_from_config() {
        let calendar = ShamsiCalendar::new(CalendarConfig {
            fallback_days: 30,
            ..CalendarConfig::default()
        })
        .unwrap();
        assert_eq!(calendar.fallback_range(gregorian(2025, 6, 30)).len_days(), 30);

        let near_start = calendar.fallback_range(gregorian(1, 1, 2));
        assert_eq!(near_start, MonthRange::single_day(gregorian(1, 1, 2)));
    }

    #[test]
    fn test_resolve_selection_or_fallback() {
        let calendar = uncached();
        let anchor = gregorian(2026, 1, 10);

        let jadi = calendar.resolve_selection_or_fallback(MonthSelection::new(month(10), None), anchor);
        assert_eq!(jadi, range((2025, 12, 22), (2026, 1, 20)));
        assert!(jadi.contains(&anchor));

        let explicit = calendar.resolve_selection_or_fallback(MonthSelection::new(month(10), Some(1403)), anchor);
        assert_eq!(explicit, range((2024, 12, 21), (2025, 1, 19)));

        let far = calendar.resolve_selection_or_fallback(MonthSelection::new(month(1), Some(-700)), anchor);
        assert_eq!(far, calendar.fallback_range(anchor));
    }

    #[test]
    fn test_resolve_selection() {
        let calendar = ShamsiCalendar::default();
        let anchor = gregorian(2026, 3, 1);

        let hoot = calendar.resolve_selection(MonthSelection::new(month(12), None), anchor);
        assert_eq!(hoot, Ok(range((2026, 2, 20), (2026, 3, 20))));

        let unresolved = calendar.resolve_selection(MonthSelection::new(month(1), Some(-700)), anchor);
        assert!(matches!(unresolved, Err(CalendarError::UnresolvedRange { year: -700, month: 1 })));
    }

    #[test]
    fn test_to_solar_hijri_outside_supported_range() {
        let calendar = ShamsiCalendar::default();
        let date = gregorian(1800, 3, 21);
        assert_eq!(calendar.to_solar_hijri(date), date.to_solar_hijri());
    }

    #[test]
    fn test_today_hijri() {
        let calendar = ShamsiCalendar::default();
        let today = calendar.today_hijri().unwrap();
        assert!((1..=12).contains(&today.month()));
        assert!(calendar.today().is_ok());
    }
}
