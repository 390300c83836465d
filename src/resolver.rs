//! Solar Hijri month → Gregorian date range resolution.

use serde::{Deserialize, Serialize};

use crate::consts::{HAMAL, HOOT};
use crate::convert::month_length_of;
use crate::{CalendarError, GregorianDate, HijriMonth, MonthRange, SolarHijriDate};

/// Gregorian date range of a Solar Hijri month, both ends inclusive.
///
/// The bounds are checked against the forward conversion, so a range returned
/// here always maps back onto exactly `year`/`month`.
///
/// # Errors
/// Returns `CalendarError::UnresolvedRange` if the month cannot be placed on the
/// representable Gregorian calendar.
pub fn month_range(year: i32, month: HijriMonth) -> Result<MonthRange, CalendarError> {
    let unresolved = CalendarError::UnresolvedRange {
        year,
        month: month.get(),
    };

    let first = SolarHijriDate::first_of_month(year, month);
    let start = first.to_gregorian().map_err(|_| unresolved.clone())?;
    let length = month_length_of(year, month);
    let end = start
        .add_days(i64::from(length) - 1)
        .map_err(|_| unresolved.clone())?;

    if start.to_solar_hijri() != first || end.to_solar_hijri() != SolarHijriDate::last_of_month(year, month) {
        return Err(unresolved);
    }

    MonthRange::new(start, end).map_err(|_| unresolved)
}

/// Gregorian date range of a whole Solar Hijri year, Hamal 1 through the last day of Hoot.
///
/// # Errors
/// Returns `CalendarError::UnresolvedRange` if either boundary month cannot be resolved.
pub fn year_range(year: i32) -> Result<MonthRange, CalendarError> {
    let hamal = month_range(year, HijriMonth::saturating(HAMAL))?;
    let hoot = month_range(year, HijriMonth::saturating(HOOT))?;
    MonthRange::new(hamal.start(), hoot.end())
}

/// Picks the Hijri year a bare month selection refers to, relative to `anchor`.
///
/// The two candidates are the Hijri year the anchor falls in and the one before
/// it. The candidate whose range contains the anchor wins; when neither does,
/// the anchor's own year is used.
pub fn resolve_year(month: HijriMonth, anchor: GregorianDate) -> i32 {
    let later = anchor.to_solar_hijri().year();
    let earlier = later - 1;

    [later, earlier]
        .into_iter()
        .find(|&year| month_range(year, month).is_ok_and(|range| range.contains(&anchor)))
        .unwrap_or(later)
}

/// Resolves a month selection to a range: an explicit year is used as given,
/// otherwise it is chosen by [`resolve_year`].
///
/// # Errors
/// Returns `CalendarError::UnresolvedRange` if the chosen month cannot be resolved.
pub fn resolve_selection(
    month: HijriMonth,
    year: Option<i32>,
    anchor: GregorianDate,
) -> Result<MonthRange, CalendarError> {
    let year = year.unwrap_or_else(|| resolve_year(month, anchor));
    month_range(year, month)
}

/// A Hijri month picked by a caller, optionally with its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthSelection {
    pub month: HijriMonth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year:  Option<i32>,
}

impl MonthSelection {
    pub const fn new(month: HijriMonth, year: Option<i32>) -> Self {
        Self { month, year }
    }

    /// The selection's year, filling in a missing one relative to `anchor`.
    pub fn year_for(&self, anchor: GregorianDate) -> i32 {
        self.year.unwrap_or_else(|| resolve_year(self.month, anchor))
    }

    /// # Errors
    /// Returns `CalendarError::UnresolvedRange` if the month cannot be resolved.
    pub fn resolve(&self, anchor: GregorianDate) -> Result<MonthRange, CalendarError> {
        resolve_selection(self.month, self.year, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, month, range};

    #[test]
    fn test_hamal_1404() {
        assert_eq!(month_range(1404, month(1)), Ok(range((2025, 3, 21), (2025, 4, 20))));
    }

    #[test]
    fn test_known_ranges() {
        struct TestCase {
            year:        i32,
            month:       u8,
            start:       (i32, u8, u8),
            end:         (i32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1404,
                month:       6,
                start:       (2025, 8, 23),
                end:         (2025, 9, 22),
                description: "Sunbula, last 31-day month",
            },
            TestCase {
                year:        1404,
                month:       10,
                start:       (2025, 12, 22),
                end:         (2026, 1, 20),
                description: "Jadi straddles the Gregorian year boundary",
            },
            TestCase {
                year:        1404,
                month:       12,
                start:       (2026, 2, 20),
                end:         (2026, 3, 20),
                description: "common-year Hoot",
            },
            TestCase {
                year:        1403,
                month:       12,
                start:       (2025, 2, 19),
                end:         (2025, 3, 20),
                description: "leap-year Hoot",
            },
            TestCase {
                year:        1402,
                month:       12,
                start:       (2024, 2, 20),
                end:         (2024, 3, 19),
                description: "Hoot containing February 29",
            },
        ];

        for case in &cases {
            assert_eq!(
                month_range(case.year, month(case.month)),
                Ok(range(case.start, case.end)),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_month_range_unresolvable() {
        // Hamal of this year starts before Gregorian year 1
        assert_eq!(
            month_range(-700, month(1)),
            Err(CalendarError::UnresolvedRange {
                year:  -700,
                month: 1,
            })
        );
        assert!(matches!(
            month_range(9500, month(12)),
            Err(CalendarError::UnresolvedRange { .. })
        ));
    }

    #[test]
    fn test_year_range() {
        assert_eq!(year_range(1404), Ok(range((2025, 3, 21), (2026, 3, 20))));
        assert_eq!(year_range(1403).map(|r| r.len_days()), Ok(366));
        assert_eq!(year_range(1404).map(|r| r.len_days()), Ok(365));
    }

    #[test]
    fn test_adjacent_months_touch() {
        for year in [1278, 1399, 1403, 1404, 1478] {
            let mut previous = month_range(year, month(1)).unwrap();
            for m in 2..=12 {
                let current = month_range(year, month(m)).unwrap();
                assert_eq!(
                    previous.end().add_days(1).unwrap(),
                    current.start(),
                    "gap or overlap before {year}-{m:02}"
                );
                previous = current;
            }
            let next_hamal = month_range(year + 1, month(1)).unwrap();
            assert_eq!(previous.end().add_days(1).unwrap(), next_hamal.start());
        }
    }

    #[test]
    fn test_resolve_year_cases() {
        struct TestCase {
            month:       u8,
            anchor:      (i32, u8, u8),
            expected:    i32,
            description: &'static str,
        }

        let cases = [
            TestCase {
                month:       10,
                anchor:      (2026, 1, 10),
                expected:    1404,
                description: "Jadi in early January belongs to the earlier year",
            },
            TestCase {
                month:       10,
                anchor:      (2025, 12, 25),
                expected:    1404,
                description: "Jadi in late December belongs to the later year",
            },
            TestCase {
                month:       12,
                anchor:      (2026, 3, 1),
                expected:    1404,
                description: "Hoot before Nowruz",
            },
            TestCase {
                month:       1,
                anchor:      (2026, 3, 1),
                expected:    1404,
                description: "Hamal before Nowruz falls back to the anchor's own year",
            },
            TestCase {
                month:       1,
                anchor:      (2025, 3, 20),
                expected:    1403,
                description: "last day before Nowruz stays in the outgoing year",
            },
            TestCase {
                month:       1,
                anchor:      (2025, 3, 21),
                expected:    1404,
                description: "Hamal on Nowruz",
            },
            TestCase {
                month:       10,
                anchor:      (2025, 6, 1),
                expected:    1404,
                description: "upcoming month falls back to the later year",
            },
            TestCase {
                month:       7,
                anchor:      (2025, 10, 1),
                expected:    1404,
                description: "month without a year boundary",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.anchor;
            assert_eq!(
                resolve_year(month(case.month), gregorian(y, m, d)),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_resolved_range_contains_anchor_in_that_month() {
        let anchor = gregorian(2026, 1, 10);
        let hijri = anchor.to_solar_hijri();
        let range = resolve_selection(hijri.month_typed(), None, anchor).unwrap();
        assert!(range.contains(&anchor));
    }

    #[test]
    fn test_explicit_year_skips_disambiguation() {
        let anchor = gregorian(2026, 1, 10);
        let range = resolve_selection(month(10), Some(1400), anchor).unwrap();
        assert_eq!(range, month_range(1400, month(10)).unwrap());
        assert!(!range.contains(&anchor));
    }

    #[test]
    fn test_month_selection() {
        let anchor = gregorian(2026, 1, 10);

        let selection: MonthSelection = serde_json::from_str(r#"{"month": 10}"#).unwrap();
        assert_eq!(selection, MonthSelection::new(month(10), None));
        assert_eq!(selection.year_for(anchor), 1404);
        assert_eq!(selection.resolve(anchor), month_range(1404, month(10)));

        let selection: MonthSelection = serde_json::from_str(r#"{"month": 10, "year": 1403}"#).unwrap();
        assert_eq!(selection.year_for(anchor), 1403);

        let json = serde_json::to_string(&MonthSelection::new(month(2), None)).unwrap();
        assert_eq!(json, r#"{"month":2}"#);

        let invalid: Result<MonthSelection, _> = serde_json::from_str(r#"{"month": 13}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_resolve_year_before_nowruz() {
        // January to mid-March belongs to the Hijri year that began the previous spring
        for anchor in [gregorian(2026, 1, 10), gregorian(2026, 3, 20)] {
            for m in 1..=anchor.to_solar_hijri().month() {
                let year = resolve_year(month(m), anchor);
                assert_eq!(year, 1404, "month {m} anchored at {anchor}");

                let range = month_range(year, month(m)).unwrap();
                assert!(range.start() <= anchor, "month {m} anchored at {anchor} is in the future");
            }
        }
    }

    #[test]
    fn test_resolve_year_after_nowruz() {
        let anchor = gregorian(2026, 3, 21);
        for m in 1..=12 {
            assert_eq!(resolve_year(month(m), anchor), 1405, "month {m}");
        }
    }
}
