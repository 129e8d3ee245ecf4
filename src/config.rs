//! Picker options and their defaults.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{
    DAYS_IN_WEEK, DEFAULT_END_YEAR, DEFAULT_START_YEAR, DEFAULT_TAG, ParseError,
    local::DisabledSet, locale::LocaleOverrides, section::SectionOrder,
};

/// Errors raised while validating a [`PickerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Start of week must be a weekday index.
    #[error("Invalid start weekday: {0} (must be 0-{max})", max = DAYS_IN_WEEK - 1)]
    InvalidStartWeekDay(u8),

    /// Error parsing a configured value.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Everything a caller can configure on a picker. Every option has a
/// default, so an empty JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// First year of the year list
    pub start_year:       i32,
    /// Exclusive end of the year list
    pub end_year:         i32,
    pub order:            SectionOrder,
    /// Weekday index (0 = Sunday) of the first day grid column
    pub start_week_day:   u8,
    /// Whether a footer is rendered at all
    pub footer:           bool,
    /// Name of a caller component replacing the default footer
    pub footer_component: Option<String>,
    #[serde(flatten)]
    pub disabled:         DisabledSet,
    pub locale:           LocaleOverrides,
    /// Container element name
    pub tag:              String,
    pub class:            Option<String>,
    pub style:            Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            start_year:       DEFAULT_START_YEAR,
            end_year:         DEFAULT_END_YEAR,
            order:            SectionOrder::default(),
            start_week_day:   0,
            footer:           true,
            footer_component: None,
            disabled:         DisabledSet::default(),
            locale:           LocaleOverrides::default(),
            tag:              DEFAULT_TAG.to_owned(),
            class:            None,
            style:            None,
        }
    }
}

impl PickerConfig {
    /// Checks the options that have no sensible fallback.
    ///
    /// Reversed year bounds are accepted and produce an empty year list.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidStartWeekDay` if `start_week_day` > 6.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_week_day >= DAYS_IN_WEEK {
            return Err(ConfigError::InvalidStartWeekDay(self.start_week_day));
        }
        Ok(())
    }

    /// Years offered by the year list; empty when `end_year <= start_year`
    pub const fn years(&self) -> Range<i32> {
        self.start_year..self.end_year
    }

    pub fn with_order(mut self, order: SectionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn with_disabled(mut self, disabled: DisabledSet) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_start_week_day(mut self, start_week_day: u8) -> Self {
        self.start_week_day = start_week_day;
        self
    }

    pub fn with_locale(mut self, locale: LocaleOverrides) -> Self {
        self.locale = locale;
        self
    }

    /// Parses the order from its `d-m-y` style text form
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` if the order is not one of the six permutations.
    pub fn with_order_str(self, order: &str) -> Result<Self, ConfigError> {
        Ok(self.with_order(order.parse()?))
    }
}
