use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ORDER_SEPARATOR, ParseError, prelude::*};

/// One selectable part of a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Section {
    #[display(fmt = "d")]
    Day,
    #[display(fmt = "m")]
    Month,
    #[display(fmt = "y")]
    Year,
}

impl Section {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "d" => Some(Self::Day),
            "m" => Some(Self::Month),
            "y" => Some(Self::Year),
            _ => None,
        }
    }
}

/// The sequence the three sections are displayed (and tabbed through) in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum SectionOrder {
    #[display(fmt = "d-m-y")]
    DayMonthYear,
    #[display(fmt = "d-y-m")]
    DayYearMonth,
    #[default]
    #[display(fmt = "m-d-y")]
    MonthDayYear,
    #[display(fmt = "m-y-d")]
    MonthYearDay,
    #[display(fmt = "y-m-d")]
    YearMonthDay,
    #[display(fmt = "y-d-m")]
    YearDayMonth,
}

impl SectionOrder {
    pub const ALL: [Self; 6] = [
        Self::DayMonthYear,
        Self::DayYearMonth,
        Self::MonthDayYear,
        Self::MonthYearDay,
        Self::YearMonthDay,
        Self::YearDayMonth,
    ];

    /// The sections in display order
    pub const fn sections(self) -> [Section; 3] {
        use Section::{Day, Month, Year};
        match self {
            Self::DayMonthYear => [Day, Month, Year],
            Self::DayYearMonth => [Day, Year, Month],
            Self::MonthDayYear => [Month, Day, Year],
            Self::MonthYearDay => [Month, Year, Day],
            Self::YearMonthDay => [Year, Month, Day],
            Self::YearDayMonth => [Year, Day, Month],
        }
    }

    /// Position of `section` in the display order
    pub fn position(self, section: Section) -> usize {
        self.sections()
            .iter()
            .position(|s| *s == section)
            .unwrap_or_default()
    }
}

impl FromStr for SectionOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .trim()
            .split(ORDER_SEPARATOR)
            .map(|p| Section::from_code(p.trim()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ParseError::InvalidFormat(format!("Unknown section in order: {s}")))?;

        Self::ALL
            .into_iter()
            .find(|order| order.sections().as_slice() == parts.as_slice())
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "Order must name d, m and y once each (e.g. m{ORDER_SEPARATOR}d{ORDER_SEPARATOR}y): {s}"
                ))
            })
    }
}

impl Serialize for SectionOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SectionOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(SectionOrder::default(), SectionOrder::MonthDayYear);
        assert_eq!(
            SectionOrder::default().sections(),
            [Section::Month, Section::Day, Section::Year]
        );
    }

    #[test]
    fn test_display_parse_every_order() {
        for order in SectionOrder::ALL {
            let text = order.to_string();
            assert_eq!(text.parse::<SectionOrder>().unwrap(), order);

            let codes: Vec<String> = order.sections().iter().map(ToString::to_string).collect();
            assert_eq!(codes.join("-"), text);
        }
    }

    #[test]
    fn test_parse_invalid_orders() {
        for input in ["", "d-m", "d-d-y", "d-m-y-d", "a-b-c", "dmy"] {
            assert!(
                matches!(input.parse::<SectionOrder>(), Err(ParseError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_position() {
        let order = SectionOrder::YearDayMonth;
        assert_eq!(order.position(Section::Year), 0);
        assert_eq!(order.position(Section::Day), 1);
        assert_eq!(order.position(Section::Month), 2);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&SectionOrder::YearMonthDay).unwrap();
        assert_eq!(json, "\"y-m-d\"");
        let parsed: SectionOrder = serde_json::from_str("\"d-y-m\"").unwrap();
        assert_eq!(parsed, SectionOrder::DayYearMonth);
        assert!(serde_json::from_str::<SectionOrder>("\"m-m-m\"").is_err());
    }
}
