//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FALLBACK_DAYS, MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR, SUPPORTED_GREGORIAN_YEARS};
use crate::CalendarError;

/// Settings for [`ShamsiCalendar`](crate::ShamsiCalendar).
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// First Gregorian year treated as calibrated.
    pub min_supported_year: i32,
    /// Last Gregorian year treated as calibrated.
    pub max_supported_year: i32,
    /// Length of the trailing range returned when a month cannot be resolved.
    pub fallback_days: u32,
    /// Memoize resolved month ranges.
    pub cache_ranges: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_supported_year: *SUPPORTED_GREGORIAN_YEARS.start(),
            max_supported_year: *SUPPORTED_GREGORIAN_YEARS.end(),
            fallback_days:      DEFAULT_FALLBACK_DAYS,
            cache_ranges:       true,
        }
    }
}

impl CalendarConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// Returns `CalendarError::Config` if the document does not parse or fails validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, CalendarError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| CalendarError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    /// Returns `CalendarError::Config` if the file cannot be read, does not parse,
    /// or fails validation.
    pub fn from_file(path: &Path) -> Result<Self, CalendarError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CalendarError::Config(format!("failed to read config file '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Serializes the config as TOML.
    ///
    /// # Errors
    /// Returns `CalendarError::Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, CalendarError> {
        toml::to_string_pretty(self).map_err(|e| CalendarError::Config(format!("failed to serialize config: {e}")))
    }

    /// # Errors
    /// Returns `CalendarError::Config` describing the first invalid setting.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let representable = MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR;
        if !representable.contains(&self.min_supported_year) || !representable.contains(&self.max_supported_year) {
            return Err(CalendarError::Config(format!(
                "supported years must lie within {MIN_GREGORIAN_YEAR}-{MAX_GREGORIAN_YEAR}, got {}-{}",
                self.min_supported_year, self.max_supported_year
            )));
        }
        if self.min_supported_year > self.max_supported_year {
            return Err(CalendarError::Config(format!(
                "min_supported_year ({}) is after max_supported_year ({})",
                self.min_supported_year, self.max_supported_year
            )));
        }
        if self.fallback_days == 0 {
            return Err(CalendarError::Config("fallback_days must be at least 1".to_owned()));
        }
        Ok(())
    }

    pub const fn is_supported(&self, gregorian_year: i32) -> bool {
        self.min_supported_year <= gregorian_year && gregorian_year <= self.max_supported_year
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedYearRange` if the year is outside the calibrated range.
    pub fn check_year(&self, gregorian_year: i32) -> Result<(), CalendarError> {
        if self.is_supported(gregorian_year) {
            Ok(())
        } else {
            Err(CalendarError::UnsupportedYearRange(i64::from(gregorian_year)))
        }
    }
}
