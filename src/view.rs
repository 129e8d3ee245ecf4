//! Render-ready description of the picker.
//!
//! Nothing here knows about pixels or markup; a rendering layer walks a
//! [`PickerView`] and draws whatever it likes for each item.

use serde::Serialize;
use tracing::trace;

use crate::{
    CONTAINER_CLASS, MONTHS_IN_YEAR, VISIBLE_LIST_ITEMS,
    config::PickerConfig,
    geometry::{self, GridCell, Weekday},
    local::LocalDate,
    locale::Locale,
    section::Section,
};

/// One entry of the month or year list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub value:    i32,
    pub label:    String,
    pub selected: bool,
    pub disabled: bool,
    /// Machine readable date for the entry, when enough of it is known
    pub datetime: Option<String>,
}

/// One day of the day grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub value:    u8,
    pub label:    String,
    pub selected: bool,
    pub disabled: bool,
    pub datetime: Option<String>,
    pub cell:     GridCell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub caption:  String,
    /// Weekday header labels, starting at the configured start of week
    pub weekdays: Vec<String>,
    pub days:     Vec<DayCell>,
    /// Grid rows including the weekday header
    pub max_rows: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub caption: String,
    pub items:   Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearView {
    pub caption: String,
    pub items:   Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionView {
    Day(DayView),
    Month(MonthView),
    Year(YearView),
}

impl SectionView {
    pub const fn section(&self) -> Section {
        match self {
            Self::Day(_) => Section::Day,
            Self::Month(_) => Section::Month,
            Self::Year(_) => Section::Year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FooterView {
    Hidden,
    /// The built-in action bar with a single "done" action
    Default { label: String },
    /// A caller component rendered in place of the default
    Custom { component: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerView {
    pub tag:      String,
    pub classes:  Vec<String>,
    pub style:    Option<String>,
    /// Rows of the tallest section, for sizing the section container
    pub max_rows: u8,
}

/// The whole picker, sections in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub container: ContainerView,
    pub sections:  Vec<SectionView>,
    pub footer:    FooterView,
}

impl PickerView {
    pub fn build(state: &LocalDate, config: &PickerConfig, locale: &Locale) -> Self {
        let day = day_view(state, config, locale);
        let max_rows = day.max_rows;
        let mut day = Some(day);

        let sections = config
            .order
            .sections()
            .into_iter()
            .filter_map(|section| match section {
                Section::Day => day.take().map(SectionView::Day),
                Section::Month => Some(SectionView::Month(month_view(state, config, locale))),
                Section::Year => Some(SectionView::Year(year_view(state, config, locale))),
            })
            .collect();

        trace!(?state, order = %config.order, "built picker view");
        Self {
            container: container_view(config, max_rows),
            sections,
            footer: footer_view(config, locale),
        }
    }

    pub fn section(&self, section: Section) -> Option<&SectionView> {
        self.sections.iter().find(|view| view.section() == section)
    }
}

/// The day grid for the selected month.
///
/// Without a month all 31 days are offered; without a year February
/// offers 29. Until both are known the grid starts on the first column.
pub fn day_view(state: &LocalDate, config: &PickerConfig, locale: &Locale) -> DayView {
    let start = Weekday::from(config.start_week_day);
    let days_count = geometry::max_days_in_month(state.year, state.month);
    let first = match (state.year, state.month) {
        (Some(year), Some(month)) => geometry::first_weekday(year, month),
        _ => start,
    };

    let weekdays = (0..Weekday::ALL.len())
        .filter_map(|offset| u8::try_from(offset).ok())
        .map(|offset| locale.weekday_label(start.rotated(offset)).to_owned())
        .collect();

    let days = (1..=days_count)
        .map(|day| DayCell {
            value:    day,
            label:    day.to_string(),
            selected: state.day == Some(day),
            disabled: config.disabled.days.contains(&day),
            datetime: state
                .year
                .zip(state.month)
                .map(|(year, month)| format!("{year:04}-{:02}-{day:02}", month + 1)),
            cell:     geometry::grid_cell(day, start, first),
        })
        .collect();

    DayView {
        caption: locale.section_label(Section::Day).to_owned(),
        weekdays,
        days,
        max_rows: geometry::max_rows(days_count, start, first),
    }
}

pub fn month_view(state: &LocalDate, config: &PickerConfig, locale: &Locale) -> MonthView {
    let items = (0..MONTHS_IN_YEAR)
        .map(|month| ListItem {
            value:    i32::from(month),
            label:    locale.month_label(month).to_owned(),
            selected: state.month == Some(month),
            disabled: config.disabled.months.contains(&month),
            datetime: state.year.map(|year| format!("{year:04}-{:02}", month + 1)),
        })
        .collect();

    MonthView {
        caption: locale.section_label(Section::Month).to_owned(),
        items,
    }
}

/// Years from `start_year` up to, not including, `end_year`
pub fn year_view(state: &LocalDate, config: &PickerConfig, locale: &Locale) -> YearView {
    let items = config
        .years()
        .map(|year| ListItem {
            value:    year,
            label:    year.to_string(),
            selected: state.year == Some(year),
            disabled: config.disabled.years.contains(&year),
            datetime: Some(format!("{year:04}")),
        })
        .collect();

    YearView {
        caption: locale.section_label(Section::Year).to_owned(),
        items,
    }
}

pub fn footer_view(config: &PickerConfig, locale: &Locale) -> FooterView {
    if !config.footer {
        return FooterView::Hidden;
    }
    config.footer_component.as_ref().map_or_else(
        || FooterView::Default {
            label: locale.footer_label().to_owned(),
        },
        |component| FooterView::Custom {
            component: component.clone(),
        },
    )
}

pub fn container_view(config: &PickerConfig, max_rows: u8) -> ContainerView {
    let classes = std::iter::once(CONTAINER_CLASS.to_owned())
        .chain(config.class.iter().filter(|c| !c.is_empty()).cloned())
        .collect();
    ContainerView {
        tag: config.tag.clone(),
        classes,
        style: config.style.clone(),
        max_rows,
    }
}

/// Where to scroll a list so the selected item is visible.
///
/// Returns `None` while the item already lies within the visible window.
/// Otherwise the item is placed in the middle of a five-item window.
pub fn scroll_offset(list_height: f32, item_offset: f32, scroll_position: f32) -> Option<f32> {
    let hidden_below = scroll_position + list_height < item_offset;
    let hidden_above = scroll_position > item_offset;
    (hidden_below || hidden_above)
        .then(|| item_offset - (list_height / VISIBLE_LIST_ITEMS) * 2.0)
}
