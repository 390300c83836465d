//! Shorthand constructors for tests.

#![allow(clippy::unwrap_used)]

use crate::{GregorianDate, HijriMonth, MonthRange, SolarHijriDate};

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

pub fn hijri(year: i32, month: u8, day: u8) -> SolarHijriDate {
    SolarHijriDate::new(year, month, day).unwrap()
}

pub fn month(value: u8) -> HijriMonth {
    HijriMonth::new(value).unwrap()
}

pub fn range(start: (i32, u8, u8), end: (i32, u8, u8)) -> MonthRange {
    MonthRange::new(gregorian(start.0, start.1, start.2), gregorian(end.0, end.1, end.2)).unwrap()
}
