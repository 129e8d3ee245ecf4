//! A day/month/year date picker as a rendering-agnostic view-model.
//!
//! [`DatePicker`] keeps a possibly partial [`LocalDate`] in sync with an
//! externally supplied [`CalendarDate`], applies user selections, clears
//! days that overflow their month and values that become disabled, and
//! reports a date to the caller only once it is complete and real.
//! [`PickerView`] describes what to draw: three sections in the configured
//! order plus a footer.
//!
//! ```
//! use simple_datepicker::{CalendarDate, DatePicker, PickerConfig};
//!
//! let start: CalendarDate = "2000-05-03".parse()?;
//! let mut picker = DatePicker::new(PickerConfig::default(), Some(start))?;
//! picker.on_change(|date| println!("picked {date}"));
//!
//! picker.select_day(31); // 2000-05-31, reported
//! picker.select_month(1); // February has no 31st: day cleared, not reported
//! assert_eq!(picker.local_date().day, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod consts;
mod date;
mod geometry;
mod local;
mod locale;
mod picker;
mod prelude;
mod section;
mod types;
mod view;

pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use date::CalendarDate;
pub use geometry::{
    GridCell, Weekday, days_in_month, first_weekday, grid_cell, max_days_in_month, max_rows,
    week_of_month, weekday_of,
};
pub use local::{DisabledSet, LocalDate, LocalDatePatch, PatchOutcome, PatchStatus};
pub use locale::{Locale, LocaleOverrides};
pub use picker::{DatePicker, Selection, SubscriptionId};
pub use section::{Section, SectionOrder};
pub use types::{Day, Month, Year, is_leap_year};
pub use view::{
    ContainerView, DayCell, DayView, FooterView, ListItem, MonthView, PickerView, SectionView,
    YearView, scroll_offset,
};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{CalendarDate, LocalDate};

    /// A valid date from a one-based month; panics on bad input
    pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    /// A local date from a zero-based month
    pub const fn local(day: Option<u8>, month: Option<u8>, year: Option<i32>) -> LocalDate {
        LocalDate { day, month, year }
    }
}
