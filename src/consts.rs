use std::ops::RangeInclusive;

/// Minimum representable Gregorian year (inclusive)
pub const MIN_GREGORIAN_YEAR: i32 = 1;
/// Maximum representable Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Gregorian years for which the Solar Hijri arithmetic is calibrated
pub const SUPPORTED_GREGORIAN_YEARS: RangeInclusive<i32> = 1900..=2100;

/// Months per year, in both calendars
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days elapsed before the first of each Gregorian month in a common year
pub(crate) const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Linear day number of 0000-12-31, the day before chrono's day 1 of the common era
pub(crate) const CE_DAY_NUMBER_OFFSET: i64 = 366;

/// Month number for Hamal, the first Solar Hijri month
pub const HAMAL: u8 = 1;
/// Month number for Hoot, the last Solar Hijri month
pub const HOOT: u8 = 12;

/// Days in Hamal through Sunbula
pub const LONG_MONTH_DAYS: u8 = 31;
/// Days in Mizan through Dalw
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Days in Hoot in a common year
pub const HOOT_DAYS: u8 = 29;
/// Days in Hoot in a leap year
pub const HOOT_DAYS_LEAP: u8 = 30;

/// Last month of the 31-day half of the year (Sunbula)
pub(crate) const LAST_LONG_MONTH: u8 = 6;
/// Days in the first six months (6 * 31)
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Shift from the Gregorian day number into the Solar Hijri cycle count
pub(crate) const HIJRI_EPOCH_OFFSET: i64 = 355_666;
/// Hijri year at the start of cycle zero
pub(crate) const HIJRI_YEAR_BASE: i32 = -1595;
/// Years in the long leap cycle
pub(crate) const HIJRI_GRAND_CYCLE_YEARS: i64 = 33;
/// Days in the long leap cycle (33 * 365 + 8)
pub(crate) const HIJRI_GRAND_CYCLE_DAYS: i64 = 12_053;
/// Years in a leap sub-cycle
pub(crate) const HIJRI_LEAP_CYCLE_YEARS: i64 = 4;
/// Days in a leap sub-cycle (4 * 365 + 1)
pub(crate) const HIJRI_LEAP_CYCLE_DAYS: i64 = 1_461;
/// Position within the 33-year cycle that would be leap by the 4-year rule but is not
pub(crate) const HIJRI_SKIPPED_LEAP_POSITION: i64 = 32;
/// Days in a common year
pub(crate) const COMMON_YEAR_DAYS: i64 = 365;

/// Common Hijri year whose month starts seed the fast lookup table
pub const REFERENCE_HIJRI_YEAR: i32 = 1404;

/// Days covered by the range returned when a month cannot be resolved
pub const DEFAULT_FALLBACK_DAYS: u32 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
