use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::resolver::month_range;
use crate::{CalendarError, HijriMonth, MonthRange};

/// Memoized [`month_range`] results keyed by `(hijri_year, month)`.
///
/// Entries are inserted whole and never modified, so concurrent readers see
/// either no entry or a complete one. A poisoned lock only disables caching;
/// the range is then computed directly.
#[derive(Debug, Default)]
pub struct MonthRangeCache {
    entries: RwLock<HashMap<(i32, u8), MonthRange>>,
}

impl MonthRangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached range, resolving and storing it on a miss.
    /// Failures are not cached.
    ///
    /// # Errors
    /// Returns `CalendarError::UnresolvedRange` if the month cannot be resolved.
    pub fn get_or_resolve(&self, year: i32, month: HijriMonth) -> Result<MonthRange, CalendarError> {
        let key = (year, month.get());

        if let Some(range) = self.get(key) {
            return Ok(range);
        }

        let range = month_range(year, month)?;
        match self.entries.write() {
            Ok(mut entries) => {
                entries.entry(key).or_insert(range);
            },
            Err(_) => debug!(year, month = month.get(), "month range cache lock poisoned, not storing"),
        }
        Ok(range)
    }

    fn get(&self, key: (i32, u8)) -> Option<MonthRange> {
        match self.entries.read() {
            Ok(entries) => entries.get(&key).copied(),
            Err(_) => {
                debug!(year = key.0, month = key.1, "month range cache lock poisoned, bypassing");
                None
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
