//! Calendar arithmetic for laying out the day grid.
//!
//! Months here are zero-based indices (0 = January), matching the values
//! the month section emits.

use serde::{Deserialize, Serialize};

use crate::{
    DAYS_IN_WEEK, MAX_DAYS_IN_MONTH, MONTHS_IN_YEAR,
    consts::{FEBRUARY_DAYS_LEAP, FEBRUARY_INDEX},
    date::{days_from_civil, weekday_from_days},
    prelude::*,
    types,
};

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[derive(Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Weekday {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for any index, wrapping modulo 7 (so -1 is Saturday)
    pub fn from_index(index: i64) -> Self {
        // rem_euclid keeps the value in 0..7
        Self::ALL[usize::try_from(index.rem_euclid(i64::from(DAYS_IN_WEEK))).unwrap_or_default()]
    }

    /// Sunday = 0 .. Saturday = 6
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The weekday `offset` days after this one
    pub fn rotated(self, offset: u8) -> Self {
        Self::from_index(i64::from(self.index()) + i64::from(offset))
    }
}

impl From<u8> for Weekday {
    fn from(index: u8) -> Self {
        Self::from_index(i64::from(index))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Zero-based placement of a day inside the weekday grid.
///
/// `row` does not count the weekday header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub column: u8,
    pub row:    u8,
}

/// Number of days in a zero-based month.
///
/// Indices past December wrap into following years the same way
/// [`CalendarDate::from_overflowing`](crate::CalendarDate::from_overflowing)
/// does.
pub fn days_in_month(year: i32, month_index: u8) -> u8 {
    let year = year + i32::from(month_index / MONTHS_IN_YEAR);
    types::days_in_month(year, month_index % MONTHS_IN_YEAR + 1)
}

/// Upper bound on the days of a month when year or month is unknown.
pub fn max_days_in_month(year: Option<i32>, month_index: Option<u8>) -> u8 {
    match (year, month_index) {
        (Some(y), Some(m)) => days_in_month(y, m),
        (None, Some(FEBRUARY_INDEX)) => FEBRUARY_DAYS_LEAP,
        // the month's length does not depend on the year
        (None, Some(m)) => days_in_month(1, m),
        (_, None) => MAX_DAYS_IN_MONTH,
    }
}

/// Weekday of the given day in a zero-based month
pub fn weekday_of(year: i32, month_index: u8, day: u8) -> Weekday {
    let months = i64::from(year) * i64::from(MONTHS_IN_YEAR) + i64::from(month_index);
    let months_in_year = i64::from(MONTHS_IN_YEAR);
    weekday_from_days(days_from_civil(
        months.div_euclid(months_in_year),
        months.rem_euclid(months_in_year) + 1,
        i64::from(day),
    ))
}

/// Weekday of the first day of a zero-based month
pub fn first_weekday(year: i32, month_index: u8) -> Weekday {
    weekday_of(year, month_index, 1)
}

/// Zero-based grid row for `day` when columns begin at `start`.
pub fn week_of_month(day: u8, start: Weekday, first: Weekday) -> u8 {
    let leading = (first.index() + DAYS_IN_WEEK - start.index()) % DAYS_IN_WEEK;
    let row = (u16::from(day) + u16::from(leading)).saturating_sub(1) / u16::from(DAYS_IN_WEEK);
    u8::try_from(row).unwrap_or(u8::MAX)
}

/// Column and row of `day` in a grid starting at `start`, for a month
/// whose first day falls on `first`.
pub fn grid_cell(day: u8, start: Weekday, first: Weekday) -> GridCell {
    // weekday of `day` follows from the weekday of day 1
    let weekday = first.rotated(day.saturating_sub(1) % DAYS_IN_WEEK);
    GridCell {
        column: (weekday.index() + DAYS_IN_WEEK - start.index()) % DAYS_IN_WEEK,
        row:    week_of_month(day, start, first),
    }
}

/// Rows the day grid needs, counting the weekday header row.
pub fn max_rows(days: u8, start: Weekday, first: Weekday) -> u8 {
    week_of_month(days, start, first).saturating_add(2)
}
