use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Year from the signed values the picker sections carry
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `1..=MAX_YEAR`.
    pub fn from_i64(value: i64) -> Result<Self, ParseError> {
        u16::try_from(value)
            .map_err(|_| ParseError::InvalidYear(value))
            .and_then(Self::new)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0.get())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
///
/// The picker sections address months by zero-based index (0 = January);
/// use [`Month::from_index`] and [`Month::index`] to cross over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month from a zero-based index (0 = January)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > 11.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        index
            .checked_add(1)
            .ok_or(ParseError::InvalidMonth(index))
            .and_then(Self::new)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the zero-based month index (0 = January)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(i32::from(year), month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        let non_zero = NonZeroU8::new(value)
            .filter(|d| d.get() >= MIN_DAY)
            .ok_or(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap year rule, valid for any proleptic year
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a one-based month
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1960).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_from_i64() {
        assert_eq!(Year::from_i64(2000).unwrap().get(), 2000);
        assert!(matches!(Year::from_i64(-4), Err(ParseError::InvalidYear(-4))));
        assert!(matches!(
            Year::from_i64(70_000),
            Err(ParseError::InvalidYear(70_000))
        ));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_index_round_trip() {
        for index in 0..12 {
            let month = Month::from_index(index).unwrap();
            assert_eq!(month.index(), index);
            assert_eq!(month.get(), index + 1);
        }
        assert!(matches!(
            Month::from_index(12),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(Month::from_index(u8::MAX).is_err());
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(ParseError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(Day::new(10, 2024, 13).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: -400,
                is_leap: true,
                description: "proleptic year divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }
}
