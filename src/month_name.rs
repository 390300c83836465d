use crate::prelude::*;
use crate::types::HijriMonth;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The twelve Solar Hijri months, in calendar order.
///
/// `Display` and serde both use the stable lowercase key (`hamal` … `hoot`)
/// that localization layers look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HijriMonthName {
    #[display(fmt = "hamal")]
    Hamal,
    #[display(fmt = "saur")]
    Saur,
    #[display(fmt = "jawza")]
    Jawza,
    #[display(fmt = "saratan")]
    Saratan,
    #[display(fmt = "asad")]
    Asad,
    #[display(fmt = "sunbula")]
    Sunbula,
    #[display(fmt = "mizan")]
    Mizan,
    #[display(fmt = "aqrab")]
    Aqrab,
    #[display(fmt = "qaws")]
    Qaws,
    #[display(fmt = "jadi")]
    Jadi,
    #[display(fmt = "dalw")]
    Dalw,
    #[display(fmt = "hoot")]
    Hoot,
}

impl HijriMonthName {
    pub const ALL: [Self; 12] = [
        Self::Hamal,
        Self::Saur,
        Self::Jawza,
        Self::Saratan,
        Self::Asad,
        Self::Sunbula,
        Self::Mizan,
        Self::Aqrab,
        Self::Qaws,
        Self::Jadi,
        Self::Dalw,
        Self::Hoot,
    ];

    pub(crate) const fn from_month(month: HijriMonth) -> Self {
        Self::ALL[(month.get() - 1) as usize]
    }

    /// Looks up the name of month `number`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `number` is outside 1-12.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        HijriMonth::new(number).map(Self::from_month)
    }

    /// Month number, 1 for Hamal through 12 for Hoot.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn month(self) -> HijriMonth {
        HijriMonth::saturating(self.number())
    }

    /// Stable lowercase key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hamal => "hamal",
            Self::Saur => "saur",
            Self::Jawza => "jawza",
            Self::Saratan => "saratan",
            Self::Asad => "asad",
            Self::Sunbula => "sunbula",
            Self::Mizan => "mizan",
            Self::Aqrab => "aqrab",
            Self::Qaws => "qaws",
            Self::Jadi => "jadi",
            Self::Dalw => "dalw",
            Self::Hoot => "hoot",
        }
    }

    /// English transliteration used in report labels.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hamal => "Hamal",
            Self::Saur => "Saur",
            Self::Jawza => "Jawza",
            Self::Saratan => "Saratan",
            Self::Asad => "Asad",
            Self::Sunbula => "Sunbula",
            Self::Mizan => "Mizan",
            Self::Aqrab => "Aqrab",
            Self::Qaws => "Qaws",
            Self::Jadi => "Jadi",
            Self::Dalw => "Dalw",
            Self::Hoot => "Hoot",
        }
    }
}

impl From<HijriMonth> for HijriMonthName {
    fn from(month: HijriMonth) -> Self {
        Self::from_month(month)
    }
}

impl From<HijriMonthName> for HijriMonth {
    fn from(name: HijriMonthName) -> Self {
        name.month()
    }
}

impl FromStr for HijriMonthName {
    type Err = CalendarError;

    /// Accepts keys and labels in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|name| name.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalendarError::InvalidFormat(format!("Unknown Hijri month name: {trimmed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_in_order() {
        let keys: Vec<&str> = HijriMonthName::ALL.iter().map(|n| n.key()).collect();
        assert_eq!(
            keys,
            [
                "hamal", "saur", "jawza", "saratan", "asad", "sunbula", "mizan", "aqrab", "qaws",
                "jadi", "dalw", "hoot"
            ]
        );
    }

    #[test]
    fn test_number_round_trip() {
        for number in 1..=12 {
            let name = HijriMonthName::from_number(number).unwrap();
            assert_eq!(name.number(), number);
            assert_eq!(name.month().get(), number);
            assert_eq!(HijriMonthName::from(name.month()), name);
        }
    }

    #[test]
    fn test_from_number_invalid() {
        assert_eq!(HijriMonthName::from_number(0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(HijriMonthName::from_number(13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn test_display_matches_key() {
        for name in HijriMonthName::ALL {
            assert_eq!(name.to_string(), name.key());
            assert!(name.label().eq_ignore_ascii_case(name.key()));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("jadi".parse::<HijriMonthName>(), Ok(HijriMonthName::Jadi));
        assert_eq!("Hoot".parse::<HijriMonthName>(), Ok(HijriMonthName::Hoot));
        assert_eq!(" HAMAL ".parse::<HijriMonthName>(), Ok(HijriMonthName::Hamal));
        assert_eq!("".parse::<HijriMonthName>(), Err(CalendarError::EmptyInput));
        assert!(matches!(
            "january".parse::<HijriMonthName>(),
            Err(CalendarError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&HijriMonthName::Sunbula).unwrap();
        assert_eq!(json, r#""sunbula""#);

        let parsed: HijriMonthName = serde_json::from_str(r#""dalw""#).unwrap();
        assert_eq!(parsed, HijriMonthName::Dalw);
    }
}
