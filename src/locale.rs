//! Display strings for the picker, with per-key caller overrides.

use serde::{Deserialize, Serialize};

use crate::{MONTHS_IN_YEAR, geometry::Weekday, section::Section};

/// Declares the full label record and its all-optional override twin.
macro_rules! locale_record {
    ($($key:ident => $default:literal),+ $(,)?) => {
        /// Every label the picker displays. Built once from the defaults
        /// merged with [`LocaleOverrides`] and never mutated afterwards.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct Locale {
            $(pub $key: String,)+
        }

        /// Caller supplied labels; missing keys keep their default.
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(default)]
        pub struct LocaleOverrides {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $key: Option<String>,
            )+
        }

        impl Default for Locale {
            fn default() -> Self {
                Self {
                    $($key: $default.to_owned(),)+
                }
            }
        }

        impl Locale {
            /// Defaults with every key present in `overrides` replaced
            pub fn with_overrides(overrides: &LocaleOverrides) -> Self {
                let defaults = Self::default();
                Self {
                    $($key: overrides.$key.clone().unwrap_or(defaults.$key),)+
                }
            }
        }
    };
}

locale_record! {
    jan => "Jan",
    feb => "Feb",
    mar => "Mar",
    apr => "Apr",
    may => "May",
    jun => "Jun",
    jul => "Jul",
    aug => "Aug",
    sep => "Sep",
    oct => "Oct",
    nov => "Nov",
    dec => "Dec",
    year => "Year",
    month => "Month",
    day => "Day",
    done => "Done",
    sun => "S",
    mon => "M",
    tue => "T",
    wed => "W",
    thu => "T",
    fri => "F",
    sat => "S",
}

impl Locale {
    /// Abbreviation for a zero-based month index; indices wrap past December
    pub fn month_label(&self, month_index: u8) -> &str {
        match month_index % MONTHS_IN_YEAR {
            0 => &self.jan,
            1 => &self.feb,
            2 => &self.mar,
            3 => &self.apr,
            4 => &self.may,
            5 => &self.jun,
            6 => &self.jul,
            7 => &self.aug,
            8 => &self.sep,
            9 => &self.oct,
            10 => &self.nov,
            _ => &self.dec,
        }
    }

    pub fn weekday_label(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Sunday => &self.sun,
            Weekday::Monday => &self.mon,
            Weekday::Tuesday => &self.tue,
            Weekday::Wednesday => &self.wed,
            Weekday::Thursday => &self.thu,
            Weekday::Friday => &self.fri,
            Weekday::Saturday => &self.sat,
        }
    }

    /// Caption shown above a section
    pub fn section_label(&self, section: Section) -> &str {
        match section {
            Section::Day => &self.day,
            Section::Month => &self.month,
            Section::Year => &self.year,
        }
    }

    /// Label of the default footer action
    pub fn footer_label(&self) -> &str {
        &self.done
    }
}
