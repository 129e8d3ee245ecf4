//! The partially selected date a picker is editing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{CalendarDate, section::Section};

/// A date under construction: any of day, month and year may be missing.
///
/// `month` is a zero-based index (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LocalDate {
    pub day:   Option<u8>,
    pub month: Option<u8>,
    pub year:  Option<i32>,
}

/// New values for some sections of a [`LocalDate`]; `None` leaves a
/// section untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocalDatePatch {
    pub day:   Option<u8>,
    pub month: Option<u8>,
    pub year:  Option<i32>,
}

/// Values the caller does not allow to be selected, per section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabledSet {
    /// Days of month, 1..=31
    #[serde(rename = "disabledDays")]
    pub days:   BTreeSet<u8>,
    /// Zero-based month indices, 0..=11
    #[serde(rename = "disabledMonths")]
    pub months: BTreeSet<u8>,
    #[serde(rename = "disabledYears")]
    pub years:  BTreeSet<i32>,
}

/// How far a patch got towards a complete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    /// At least one section is still unset.
    Partial,
    /// The day did not fit the month and was cleared.
    Overflowed,
    /// All sections are set and cannot be represented as a date.
    OutOfRange,
    /// All sections are set and form this date.
    Complete(CalendarDate),
}

/// State after a patch plus what the patch achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOutcome {
    pub state:  LocalDate,
    pub status: PatchStatus,
}

impl PatchOutcome {
    /// The date to report to the caller, if the patch completed one
    pub const fn changed(&self) -> Option<CalendarDate> {
        match self.status {
            PatchStatus::Complete(date) => Some(date),
            PatchStatus::Partial | PatchStatus::Overflowed | PatchStatus::OutOfRange => None,
        }
    }
}

impl LocalDate {
    /// A date with no section selected
    pub const fn empty() -> Self {
        Self {
            day:   None,
            month: None,
            year:  None,
        }
    }

    /// All sections taken from `date`
    pub fn from_date(date: CalendarDate) -> Self {
        Self {
            day:   Some(date.day()),
            month: Some(date.month_index()),
            year:  Some(i32::from(date.year())),
        }
    }

    /// Replaces every section from the external date, or clears them all.
    /// Whatever was being edited locally is discarded.
    pub fn sync(external: Option<CalendarDate>) -> Self {
        let state = external.map_or_else(Self::empty, Self::from_date);
        debug!(?external, ?state, "synced local date");
        state
    }

    /// True when no section is missing. Says nothing about legality.
    pub const fn is_filled(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }

    /// The complete date, if all sections are set and form a real date
    pub fn to_date(self) -> Option<CalendarDate> {
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => CalendarDate::from_index(y, m, d).ok(),
            _ => None,
        }
    }

    /// Current value of a section, widened so all three fit one type
    pub fn value(&self, section: Section) -> Option<i32> {
        match section {
            Section::Day => self.day.map(i32::from),
            Section::Month => self.month.map(i32::from),
            Section::Year => self.year,
        }
    }

    /// Merges `patch` into this state.
    ///
    /// A filled result is checked by building the date leniently and
    /// comparing its month with the requested one: a mismatch means the
    /// day ran past the end of the month, and the day is cleared.
    pub fn apply_patch(self, patch: LocalDatePatch) -> PatchOutcome {
        let merged = Self {
            day:   patch.day.or(self.day),
            month: patch.month.or(self.month),
            year:  patch.year.or(self.year),
        };

        let (Some(year), Some(month), Some(day)) = (merged.year, merged.month, merged.day) else {
            return PatchOutcome {
                state:  merged,
                status: PatchStatus::Partial,
            };
        };

        let built =
            match CalendarDate::from_overflowing(i64::from(year), i64::from(month), i64::from(day)) {
                Ok(date) => date,
                Err(err) => {
                    warn!(year, month, day, %err, "selection cannot be represented as a date");
                    return PatchOutcome {
                        state:  merged,
                        status: PatchStatus::OutOfRange,
                    };
                },
            };

        if built.month_index() != month {
            debug!(year, month, day, normalized = %built, "day overflowed month, clearing day");
            return PatchOutcome {
                state:  Self { day: None, ..merged },
                status: PatchStatus::Overflowed,
            };
        }

        PatchOutcome {
            state:  merged,
            status: PatchStatus::Complete(built),
        }
    }

    /// Clears every section whose value is disabled. Idempotent.
    pub fn clear_if_disabled(self, disabled: &DisabledSet) -> Self {
        let cleared = Self {
            day:   self.day.filter(|d| !disabled.days.contains(d)),
            month: self.month.filter(|m| !disabled.months.contains(m)),
            year:  self.year.filter(|y| !disabled.years.contains(y)),
        };
        if cleared != self {
            debug!(before = ?self, after = ?cleared, "cleared disabled selection");
        }
        cleared
    }
}

impl From<CalendarDate> for LocalDate {
    fn from(date: CalendarDate) -> Self {
        Self::from_date(date)
    }
}

impl LocalDatePatch {
    pub const fn day(day: u8) -> Self {
        Self {
            day:   Some(day),
            month: None,
            year:  None,
        }
    }

    pub const fn month(month: u8) -> Self {
        Self {
            day:   None,
            month: Some(month),
            year:  None,
        }
    }

    pub const fn year(year: i32) -> Self {
        Self {
            day:   None,
            month: None,
            year:  Some(year),
        }
    }
}

impl DisabledSet {
    pub fn new(
        days: impl IntoIterator<Item = u8>,
        months: impl IntoIterator<Item = u8>,
        years: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            days:   days.into_iter().collect(),
            months: months.into_iter().collect(),
            years:  years.into_iter().collect(),
        }
    }

    /// Whether `value` is disabled in `section`
    pub fn contains(&self, section: Section, value: i32) -> bool {
        match section {
            Section::Day => u8::try_from(value).is_ok_and(|d| self.days.contains(&d)),
            Section::Month => u8::try_from(value).is_ok_and(|m| self.months.contains(&m)),
            Section::Year => self.years.contains(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, local};

    #[test]
    fn test_sync_sets_every_section() {
        let state = LocalDate::sync(Some(date(2000, 5, 3)));
        assert_eq!(state, local(Some(3), Some(4), Some(2000)));
    }

    #[test]
    fn test_sync_none_clears_every_section() {
        assert_eq!(LocalDate::sync(None), LocalDate::empty());
        assert_eq!(LocalDate::sync(None), LocalDate::default());
    }

    #[test]
    fn test_sync_discards_partial_edit() {
        let edited = LocalDate::sync(Some(date(2000, 5, 3)))
            .apply_patch(LocalDatePatch::month(1))
            .state;
        assert_eq!(edited.month, Some(1));

        let state = LocalDate::sync(Some(date(2010, 10, 20)));
        assert_eq!(state, local(Some(20), Some(9), Some(2010)));
    }

    #[test]
    fn test_patch_partial_does_not_complete() {
        let outcome = LocalDate::empty().apply_patch(LocalDatePatch::day(12));
        assert_eq!(outcome.state, local(Some(12), None, None));
        assert_eq!(outcome.status, PatchStatus::Partial);
        assert_eq!(outcome.changed(), None);

        let outcome = outcome.state.apply_patch(LocalDatePatch::year(1999));
        assert_eq!(outcome.status, PatchStatus::Partial);

        let outcome = outcome.state.apply_patch(LocalDatePatch::month(6));
        assert_eq!(outcome.changed(), Some(date(1999, 7, 12)));
    }

    #[test]
    fn test_patch_scenario_may_then_february() {
        let start = LocalDate::sync(Some(date(2000, 5, 3)));

        let outcome = start.apply_patch(LocalDatePatch::day(31));
        assert_eq!(outcome.changed(), Some(date(2000, 5, 31)));
        assert_eq!(outcome.state, local(Some(31), Some(4), Some(2000)));

        let outcome = outcome.state.apply_patch(LocalDatePatch::month(1));
        assert_eq!(outcome.status, PatchStatus::Overflowed);
        assert_eq!(outcome.changed(), None);
        assert_eq!(outcome.state, local(None, Some(1), Some(2000)));
    }

    #[test]
    fn test_patch_every_legal_day_completes() {
        for year in [1900, 1999, 2000, 2023, 2024] {
            for month in 0..12 {
                let days = crate::geometry::days_in_month(year, month);
                for day in 1..=days {
                    let outcome = local(None, Some(month), Some(year))
                        .apply_patch(LocalDatePatch::day(day));
                    let expected = CalendarDate::from_index(year, month, day).unwrap();
                    assert_eq!(outcome.changed(), Some(expected));
                }
            }
        }
    }

    #[test]
    fn test_patch_every_overflowing_day_clears() {
        for year in [1900, 1999, 2000, 2023, 2024] {
            for month in 0..12 {
                let days = crate::geometry::days_in_month(year, month);
                for day in days + 1..=31 {
                    let outcome = local(None, Some(month), Some(year))
                        .apply_patch(LocalDatePatch::day(day));
                    assert_eq!(outcome.status, PatchStatus::Overflowed, "{year}-{month}-{day}");
                    assert_eq!(outcome.state, local(None, Some(month), Some(year)));
                }
            }
        }
    }

    #[test]
    fn test_patch_year_into_non_leap_february() {
        let outcome = local(Some(29), Some(1), Some(2024)).apply_patch(LocalDatePatch::year(2023));
        assert_eq!(outcome.status, PatchStatus::Overflowed);
        assert_eq!(outcome.state, local(None, Some(1), Some(2023)));
    }

    #[test]
    fn test_patch_out_of_range_year() {
        let outcome = local(Some(1), Some(0), None).apply_patch(LocalDatePatch::year(0));
        assert_eq!(outcome.status, PatchStatus::OutOfRange);
        assert_eq!(outcome.state, local(Some(1), Some(0), Some(0)));
        assert_eq!(outcome.changed(), None);
    }

    #[test]
    fn test_clear_if_disabled_day() {
        let disabled = DisabledSet::new([16], [], []);
        let state = local(Some(16), Some(4), Some(2000)).clear_if_disabled(&disabled);
        assert_eq!(state, local(None, Some(4), Some(2000)));
    }

    #[test]
    fn test_clear_if_disabled_every_section() {
        let disabled = DisabledSet::new([1], [4], [2000]);
        let state = local(Some(1), Some(4), Some(2000)).clear_if_disabled(&disabled);
        assert_eq!(state, LocalDate::empty());

        let untouched = local(Some(2), Some(5), Some(2001));
        assert_eq!(untouched.clear_if_disabled(&disabled), untouched);
    }

    #[test]
    fn test_clear_if_disabled_idempotent() {
        let disabled = DisabledSet::new([3, 16], [1], [1999]);
        let states = [
            local(Some(16), Some(4), Some(2000)),
            local(Some(3), Some(1), Some(1999)),
            local(None, None, None),
            local(Some(20), None, Some(1999)),
        ];
        for state in states {
            let once = state.clear_if_disabled(&disabled);
            assert_eq!(once.clear_if_disabled(&disabled), once);
        }
    }

    #[test]
    fn test_disabled_contains() {
        let disabled = DisabledSet::new([16], [11], [1970]);
        assert!(disabled.contains(Section::Day, 16));
        assert!(!disabled.contains(Section::Day, -16));
        assert!(disabled.contains(Section::Month, 11));
        assert!(disabled.contains(Section::Year, 1970));
        assert!(!disabled.contains(Section::Year, 1971));
    }

    #[test]
    fn test_to_date() {
        assert_eq!(local(Some(3), Some(4), Some(2000)).to_date(), Some(date(2000, 5, 3)));
        assert_eq!(local(Some(31), Some(1), Some(2000)).to_date(), None);
        assert_eq!(local(None, Some(1), Some(2000)).to_date(), None);
        assert!(!local(None, Some(1), Some(2000)).is_filled());
    }
}
