use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    DATE_SEPARATOR, DAYS_IN_WEEK, MONTHS_IN_YEAR, ParseError,
    consts::{DAYS_PER_ERA, GREGORIAN_CYCLE},
    geometry::Weekday,
    prelude::*,
    types::{Day, Month, Year},
};

/// Days between 0000-03-01 and 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// 1970-01-01 was a Thursday.
const UNIX_EPOCH_WEEKDAY: i64 = 4;

/// A complete, calendar-legal date.
///
/// This is what the picker reports once day, month and year are all
/// selected and form a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date from a year, a one-based month and a day.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year, month)?;
        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    /// Creates a date from a year, a zero-based month index and a day,
    /// rejecting anything that is not already a real date.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn from_index(year: i32, month_index: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = Year::from_i64(i64::from(year))?;
        let month_nz = Month::from_index(month_index)?;
        let day_nz = Day::new(day, year_nz.get(), month_nz.get())?;
        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    /// Builds a date the lenient way: excess months roll into following
    /// years and excess days roll into following months (and deficient
    /// ones roll backwards), so `(2000, 1, 31)` becomes 2000-03-02.
    ///
    /// The picker relies on this to detect day overflow: the result's
    /// month differs from the requested one exactly when the day did not
    /// fit.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the normalized date falls
    /// outside the supported year range.
    pub fn from_overflowing(year: i64, month_index: i64, day: i64) -> Result<Self, ParseError> {
        let months_in_year = i64::from(MONTHS_IN_YEAR);
        let total_months = year * months_in_year + month_index;
        let first_of_month = days_from_civil(
            total_months.div_euclid(months_in_year),
            total_months.rem_euclid(months_in_year) + 1,
            1,
        );
        let (y, m, d) = civil_from_days(first_of_month + day - 1);

        let year_nz = Year::from_i64(y)?;
        // civil_from_days always yields month 1..=12 and day 1..=31
        let month_u8 = u8::try_from(m).map_err(|_| ParseError::InvalidFormat(m.to_string()))?;
        let day_u8 = u8::try_from(d).map_err(|_| ParseError::InvalidFormat(d.to_string()))?;
        let month_nz = Month::new(month_u8)?;
        let day_nz = Day::new(day_u8, year_nz.get(), month_u8)?;
        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the one-based month
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the zero-based month index (0 = January)
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Day of the week this date falls on
    pub fn weekday(&self) -> Weekday {
        weekday_from_days(days_from_civil(
            i64::from(self.year()),
            i64::from(self.month()),
            i64::from(self.day()),
        ))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} parts: {s}",
                parts.len()
            )));
        };

        let year_u16 = year
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month_u8 = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day_u8 = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

        Self::new(year_u16, month_u8, day_u8)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- proleptic Gregorian day counting ---

/// Days since 1970-01-01 for a one-based month. Month must be 1..=12;
/// the day may be any value and is counted linearly.
pub(crate) fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let cycle = i64::from(GREGORIAN_CYCLE);
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(cycle);
    let year_of_era = y.rem_euclid(cycle);
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]: (year, one-based month, day)
pub(crate) fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * i64::from(GREGORIAN_CYCLE);
    (if month <= 2 { year + 1 } else { year }, month, day)
}

pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    Weekday::from_index((days + UNIX_EPOCH_WEEKDAY).rem_euclid(i64::from(DAYS_IN_WEEK)))
}
