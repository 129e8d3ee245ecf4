//! The stateful picker: owns the local date, routes selections and
//! notifies the caller.

use std::fmt;

use tracing::debug;

use crate::{
    CalendarDate, MAX_DAYS_IN_MONTH, MONTHS_IN_YEAR,
    config::{ConfigError, PickerConfig},
    local::{DisabledSet, LocalDate, LocalDatePatch, PatchOutcome, PatchStatus},
    locale::Locale,
    section::Section,
    view::PickerView,
};

type ChangeCallback = Box<dyn FnMut(CalendarDate)>;
type DoneCallback = Box<dyn FnMut()>;
type Observer = Box<dyn FnMut(&LocalDate)>;

/// Handle returned by [`DatePicker::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a selection event led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The value is disabled or not offered by the section.
    Ignored,
    /// The value was applied; see the patch status for the result.
    Applied(PatchStatus),
}

/// A date picker instance.
///
/// External date changes ([`set_date`](Self::set_date)) always overwrite
/// whatever the user was editing; `on_change` fires only for selections
/// that complete a real date.
pub struct DatePicker {
    config:        PickerConfig,
    locale:        Locale,
    state:         LocalDate,
    on_change:     Option<ChangeCallback>,
    on_footer:     Option<DoneCallback>,
    observers:     Vec<(SubscriptionId, Observer)>,
    next_observer: u64,
}

impl DatePicker {
    /// Builds a picker showing `date`, or nothing selected for `None`.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn new(config: PickerConfig, date: Option<CalendarDate>) -> Result<Self, ConfigError> {
        config.validate()?;
        let locale = Locale::with_overrides(&config.locale);
        let state = LocalDate::sync(date).clear_if_disabled(&config.disabled);
        debug!(?state, order = %config.order, "created date picker");
        Ok(Self {
            config,
            locale,
            state,
            on_change: None,
            on_footer: None,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    /// Registers the callback for completed dates, replacing any previous one
    pub fn on_change(&mut self, callback: impl FnMut(CalendarDate) + 'static) -> &mut Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Registers the callback for the footer action, replacing any previous one
    pub fn on_footer_done(&mut self, callback: impl FnMut() + 'static) -> &mut Self {
        self.on_footer = Some(Box::new(callback));
        self
    }

    /// Calls `observer` with the new local date after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&LocalDate) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// The externally controlled date changed. Local edits are discarded
    /// and `on_change` is not called.
    pub fn set_date(&mut self, date: Option<CalendarDate>) {
        let state = LocalDate::sync(date).clear_if_disabled(&self.config.disabled);
        self.replace_state(state);
    }

    /// Replaces the disabled values, clearing any selection they now cover
    pub fn set_disabled(&mut self, disabled: DisabledSet) {
        self.config.disabled = disabled;
        let state = self.state.clear_if_disabled(&self.config.disabled);
        self.replace_state(state);
    }

    /// A user picked `value` in `section`.
    pub fn select(&mut self, section: Section, value: i32) -> Selection {
        let Some(patch) = self.patch_for(section, value) else {
            debug!(%section, value, "ignored selection");
            return Selection::Ignored;
        };

        let PatchOutcome { state, status } = self.state.apply_patch(patch);
        self.replace_state(state);

        if let PatchStatus::Complete(date) = status {
            debug!(%date, "selection completed a date");
            if let Some(callback) = self.on_change.as_mut() {
                callback(date);
            }
        }
        Selection::Applied(status)
    }

    pub fn select_day(&mut self, day: u8) -> Selection {
        self.select(Section::Day, i32::from(day))
    }

    /// Selects a zero-based month index
    pub fn select_month(&mut self, month: u8) -> Selection {
        self.select(Section::Month, i32::from(month))
    }

    pub fn select_year(&mut self, year: i32) -> Selection {
        self.select(Section::Year, year)
    }

    /// The footer action was triggered. Fires whether or not a full date
    /// is selected.
    pub fn footer_done(&mut self) {
        debug!(state = ?self.state, "footer action");
        if let Some(callback) = self.on_footer.as_mut() {
            callback();
        }
    }

    pub const fn local_date(&self) -> &LocalDate {
        &self.state
    }

    /// The selected date, if day, month and year form one
    pub fn date(&self) -> Option<CalendarDate> {
        self.state.to_date()
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Sections in display order
    pub const fn sections(&self) -> [Section; 3] {
        self.config.order.sections()
    }

    pub fn is_disabled(&self, section: Section, value: i32) -> bool {
        self.config.disabled.contains(section, value)
    }

    pub fn is_selected(&self, section: Section, value: i32) -> bool {
        self.state.value(section) == Some(value)
    }

    pub fn view(&self) -> PickerView {
        PickerView::build(&self.state, &self.config, &self.locale)
    }

    /// A patch for an offered, enabled value; `None` otherwise.
    fn patch_for(&self, section: Section, value: i32) -> Option<LocalDatePatch> {
        if self.is_disabled(section, value) {
            return None;
        }
        match section {
            Section::Day => u8::try_from(value)
                .ok()
                .filter(|day| (1..=MAX_DAYS_IN_MONTH).contains(day))
                .map(LocalDatePatch::day),
            Section::Month => u8::try_from(value)
                .ok()
                .filter(|month| *month < MONTHS_IN_YEAR)
                .map(LocalDatePatch::month),
            Section::Year => self
                .config
                .years()
                .contains(&value)
                .then_some(LocalDatePatch::year(value)),
        }
    }

    fn replace_state(&mut self, state: LocalDate) {
        if state == self.state {
            return;
        }
        self.state = state;
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
