use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarGrid, TodayHighlight};
use crate::date::{DateKey, ViewMonth};
use crate::error::BookingError;
use crate::submission::{BookingForm, BookingSubmission};

/// The three wizard stages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum WizardStep {
    #[default]
    Date,
    Time,
    Details,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Date, WizardStep::Time, WizardStep::Details];

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Date => 1,
            WizardStep::Time => 2,
            WizardStep::Details => 3,
        }
    }

    /// Clamps any integer into 1..=3.
    pub fn from_number(number: i32) -> Self {
        match number {
            i32::MIN..=1 => WizardStep::Date,
            2 => WizardStep::Time,
            _ => WizardStep::Details,
        }
    }

    pub fn next(self) -> Self {
        Self::from_number(i32::from(self.number()) + 1)
    }

    pub fn previous(self) -> Self {
        Self::from_number(i32::from(self.number()) - 1)
    }
}

/// Everything the widget remembers between events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingState {
    pub view_month: ViewMonth,
    pub selected_date: Option<DateKey>,
    pub selected_time_slot: Option<String>,
    pub step: WizardStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingAction {
    SelectDate(DateKey),
    Navigate(i32),
    SelectTimeSlot(String),
    Advance,
    Retreat,
    Submit(BookingForm),
}

/// A fact about what a transition did, for the renderer to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    ViewMonthChanged(ViewMonth),
    DateSelected(DateKey),
    TimeSlotSelected(String),
    TimeSlotCleared,
    StepChanged(WizardStep),
    Rejected(BookingError),
    Confirmed(BookingSubmission),
    MessageCleared,
    FormReset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: BookingState,
    pub changes: Vec<Change>,
}

impl Transition {
    fn unchanged(state: BookingState) -> Self {
        Self {
            state,
            changes: Vec::new(),
        }
    }

    fn rejected(state: BookingState, error: BookingError) -> Self {
        Self {
            state,
            changes: vec![Change::Rejected(error)],
        }
    }

    pub fn rejection(&self) -> Option<BookingError> {
        self.changes.iter().find_map(|change| match change {
            Change::Rejected(error) => Some(*error),
            _ => None,
        })
    }

    pub fn confirmation(&self) -> Option<&BookingSubmission> {
        self.changes.iter().find_map(|change| match change {
            Change::Confirmed(submission) => Some(submission),
            _ => None,
        })
    }

    pub fn has(&self, change: &Change) -> bool {
        self.changes.contains(change)
    }
}

impl BookingState {
    /// Fresh widget showing today's month with nothing selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view_month: ViewMonth::containing(today),
            selected_date: None,
            selected_time_slot: None,
            step: WizardStep::Date,
        }
    }

    /// Fresh widget with today already picked.
    pub fn with_today_selected(today: NaiveDate) -> Self {
        Self {
            selected_date: Some(DateKey::from_date(today)),
            ..Self::new(today)
        }
    }

    pub fn grid(&self, today: NaiveDate, highlight: TodayHighlight) -> CalendarGrid {
        CalendarGrid::build(self.view_month, today, self.selected_date.as_ref(), highlight)
    }

    pub fn is_panel_visible(&self, step: WizardStep) -> bool {
        self.step == step
    }

    pub fn is_indicator_active(&self, step: WizardStep) -> bool {
        self.step == step
    }

    pub fn is_slot_selected(&self, slot: &str) -> bool {
        self.selected_time_slot.as_deref() == Some(slot)
    }

    pub fn select_date(mut self, key: DateKey) -> Transition {
        let mut changes = vec![Change::DateSelected(key)];
        self.selected_date = Some(key);

        if !self.view_month.contains(key.date()) {
            self.view_month = ViewMonth::containing(key.date());
            changes.push(Change::ViewMonthChanged(self.view_month));
        }
        changes.push(Change::MessageCleared);

        Transition {
            state: self,
            changes,
        }
    }

    pub fn navigate(mut self, delta: i32) -> Transition {
        // Keep one month of headroom on both sides so the grid can always
        // render its lead-in and trailing days.
        let target = self
            .view_month
            .shift(delta)
            .filter(|month| month.previous().is_some() && month.next().is_some());

        match target {
            Some(month) if month == self.view_month => Transition::unchanged(self),
            Some(month) => {
                self.view_month = month;
                Transition {
                    state: self,
                    changes: vec![Change::ViewMonthChanged(month)],
                }
            }
            None => {
                tracing::warn!(
                    delta,
                    view = ?self.view_month,
                    "Month navigation leaves the supported date range"
                );
                Transition::unchanged(self)
            }
        }
    }

    /// An empty identifier clears the selection.
    pub fn select_time_slot(mut self, slot: String) -> Transition {
        let change = if slot.is_empty() {
            self.selected_time_slot = None;
            Change::TimeSlotCleared
        } else {
            self.selected_time_slot = Some(slot.clone());
            Change::TimeSlotSelected(slot)
        };

        Transition {
            state: self,
            changes: vec![change, Change::MessageCleared],
        }
    }

    pub fn advance(mut self) -> Transition {
        let step = self.step;
        match step {
            WizardStep::Date if self.selected_date.is_none() => {
                return Transition::rejected(self, BookingError::DateNotSelected)
            }
            WizardStep::Time if self.selected_time_slot.is_none() => {
                return Transition::rejected(self, BookingError::TimeSlotNotSelected)
            }
            _ => {}
        }

        let mut changes = Vec::new();
        let next = self.step.next();
        if next != self.step {
            self.step = next;
            changes.push(Change::StepChanged(next));
        }
        changes.push(Change::MessageCleared);

        Transition {
            state: self,
            changes,
        }
    }

    pub fn retreat(mut self) -> Transition {
        let mut changes = Vec::new();
        let previous = self.step.previous();
        if previous != self.step {
            self.step = previous;
            changes.push(Change::StepChanged(previous));
        }
        changes.push(Change::MessageCleared);

        Transition {
            state: self,
            changes,
        }
    }

    /// Validates and confirms the booking. The selected date survives the
    /// reset so the calendar keeps showing it.
    pub fn submit(mut self, form: &BookingForm) -> Transition {
        if self.step != WizardStep::Details {
            tracing::warn!(step = self.step.number(), "Ignoring submit outside the details step");
            return Transition::unchanged(self);
        }

        let validated = BookingSubmission::validate(
            self.selected_date.as_ref(),
            self.selected_time_slot.as_deref(),
            form,
        );
        let submission = match validated {
            Ok(submission) => submission,
            Err(error) => return Transition::rejected(self, error),
        };

        self.selected_time_slot = None;
        self.step = WizardStep::Date;

        Transition {
            state: self,
            changes: vec![
                Change::Confirmed(submission),
                Change::FormReset,
                Change::TimeSlotCleared,
                Change::StepChanged(WizardStep::Date),
            ],
        }
    }
}

/// Applies one user action to `state`.
pub fn update(state: BookingState, action: BookingAction) -> Transition {
    tracing::debug!(?action, step = state.step.number(), "Applying booking action");

    let transition = match action {
        BookingAction::SelectDate(key) => state.select_date(key),
        BookingAction::Navigate(delta) => state.navigate(delta),
        BookingAction::SelectTimeSlot(slot) => state.select_time_slot(slot),
        BookingAction::Advance => state.advance(),
        BookingAction::Retreat => state.retreat(),
        BookingAction::Submit(form) => state.submit(&form),
    };

    if let Some(error) = transition.rejection() {
        tracing::debug!(%error, "Booking action rejected");
    }

    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn at_details() -> BookingState {
        BookingState {
            view_month: ViewMonth::containing(today()),
            selected_date: Some(key("2024-05-10")),
            selected_time_slot: Some("14:00".to_string()),
            step: WizardStep::Details,
        }
    }

    #[test]
    fn step_numbers_clamp() {
        assert_eq!(WizardStep::from_number(-7), WizardStep::Date);
        assert_eq!(WizardStep::from_number(0), WizardStep::Date);
        assert_eq!(WizardStep::from_number(2), WizardStep::Time);
        assert_eq!(WizardStep::from_number(4), WizardStep::Details);
        assert_eq!(WizardStep::Details.next(), WizardStep::Details);
        assert_eq!(WizardStep::Date.previous(), WizardStep::Date);
    }

    #[test]
    fn new_state_shows_todays_month_with_nothing_selected() {
        let state = BookingState::new(today());
        assert_eq!(state.view_month, ViewMonth::from_ym(2024, 5).unwrap());
        assert_eq!(state.selected_date, None);
        assert_eq!(state.selected_time_slot, None);
        assert_eq!(state.step, WizardStep::Date);

        let preselected = BookingState::with_today_selected(today());
        assert_eq!(preselected.selected_date, Some(key("2024-05-10")));
    }

    #[test]
    fn advance_without_date_is_rejected() {
        let state = BookingState::new(today());
        let transition = state.clone().advance();

        assert_eq!(transition.state, state);
        assert_eq!(transition.rejection(), Some(BookingError::DateNotSelected));
    }

    #[test]
    fn advance_with_date_moves_to_time_step() {
        let transition = BookingState::new(today())
            .select_date(key("2024-05-12"))
            .state
            .advance();

        assert_eq!(transition.state.step, WizardStep::Time);
        assert!(transition.has(&Change::StepChanged(WizardStep::Time)));
        assert!(transition.has(&Change::MessageCleared));
        assert_eq!(transition.rejection(), None);
    }

    #[test]
    fn advance_without_slot_stays_on_time_step() {
        let mut state = BookingState::with_today_selected(today());
        state.step = WizardStep::Time;

        let transition = state.advance();
        assert_eq!(transition.state.step, WizardStep::Time);
        assert_eq!(transition.rejection(), Some(BookingError::TimeSlotNotSelected));
    }

    #[test]
    fn advance_with_slot_moves_to_details() {
        let mut state = BookingState::with_today_selected(today());
        state.step = WizardStep::Time;

        let transition = state.select_time_slot("11:00".to_string()).state.advance();
        assert_eq!(transition.state.step, WizardStep::Details);
    }

    #[test]
    fn advance_never_passes_details() {
        let transition = at_details().advance();
        assert_eq!(transition.state.step, WizardStep::Details);
        assert_eq!(transition.changes, vec![Change::MessageCleared]);
    }

    #[test]
    fn retreat_never_drops_below_date_step() {
        let transition = BookingState::new(today()).retreat();
        assert_eq!(transition.state.step, WizardStep::Date);
        assert!(!transition
            .changes
            .iter()
            .any(|c| matches!(c, Change::StepChanged(_))));

        let transition = at_details().retreat();
        assert_eq!(transition.state.step, WizardStep::Time);
    }

    #[test]
    fn exactly_one_panel_and_indicator_after_every_transition() {
        let actions = [
            BookingAction::Advance,
            BookingAction::SelectDate(key("2024-05-20")),
            BookingAction::Advance,
            BookingAction::Advance,
            BookingAction::SelectTimeSlot("10:00".to_string()),
            BookingAction::Advance,
            BookingAction::Advance,
            BookingAction::Retreat,
            BookingAction::Retreat,
            BookingAction::Retreat,
        ];

        let mut state = BookingState::new(today());
        for action in actions {
            state = update(state, action).state;
            let visible = WizardStep::ALL
                .iter()
                .filter(|s| state.is_panel_visible(**s))
                .count();
            let active = WizardStep::ALL
                .iter()
                .filter(|s| state.is_indicator_active(**s))
                .count();
            assert_eq!((visible, active), (1, 1));
        }
    }

    #[test]
    fn selecting_a_day_in_another_month_moves_the_view() {
        let transition = BookingState::new(today()).select_date(key("2024-06-02"));

        assert_eq!(transition.state.view_month, ViewMonth::from_ym(2024, 6).unwrap());
        assert_eq!(
            transition.changes,
            vec![
                Change::DateSelected(key("2024-06-02")),
                Change::ViewMonthChanged(ViewMonth::from_ym(2024, 6).unwrap()),
                Change::MessageCleared,
            ]
        );
    }

    #[test]
    fn selecting_a_day_in_the_view_month_keeps_the_view() {
        let transition = BookingState::new(today()).select_date(key("2024-05-31"));
        assert_eq!(transition.state.view_month, ViewMonth::from_ym(2024, 5).unwrap());
        assert!(!transition
            .changes
            .iter()
            .any(|c| matches!(c, Change::ViewMonthChanged(_))));
    }

    #[test]
    fn navigation_is_unbounded_in_practice() {
        let state = BookingState::new(today());
        let back = state.clone().navigate(-1200).state;
        assert_eq!(back.view_month, ViewMonth::from_ym(1924, 5).unwrap());

        let forward = state.navigate(13).state;
        assert_eq!(forward.view_month, ViewMonth::from_ym(2025, 6).unwrap());
    }

    #[test]
    fn navigation_past_chrono_range_is_a_no_op() {
        let state = BookingState::new(today());
        let transition = state.clone().navigate(i32::MAX);
        assert_eq!(transition.state, state);
        assert!(transition.changes.is_empty());
    }

    #[test]
    fn navigation_does_not_touch_selection() {
        let state = BookingState::with_today_selected(today());
        let transition = state.navigate(1);
        assert_eq!(transition.state.selected_date, Some(key("2024-05-10")));
        assert_eq!(
            transition.changes,
            vec![Change::ViewMonthChanged(ViewMonth::from_ym(2024, 6).unwrap())]
        );
    }

    #[test]
    fn new_time_slot_replaces_the_previous_one() {
        let state = BookingState::new(today())
            .select_time_slot("10:00".to_string())
            .state
            .select_time_slot("15:00".to_string())
            .state;

        assert!(state.is_slot_selected("15:00"));
        assert!(!state.is_slot_selected("10:00"));
    }

    #[test]
    fn empty_slot_clears_the_selection() {
        let transition = BookingState::new(today())
            .select_time_slot("10:00".to_string())
            .state
            .select_time_slot(String::new());

        assert_eq!(transition.state.selected_time_slot, None);
        assert!(transition.has(&Change::TimeSlotCleared));
    }

    #[test]
    fn successful_submit_resets_everything_but_the_date() {
        let form = BookingForm::new("consult", " Jane ", " j@x.com ");
        let transition = at_details().submit(&form);

        assert_eq!(transition.state.step, WizardStep::Date);
        assert_eq!(transition.state.selected_time_slot, None);
        assert_eq!(transition.state.selected_date, Some(key("2024-05-10")));
        assert!(transition.has(&Change::FormReset));
        assert!(transition.has(&Change::TimeSlotCleared));

        let submission = transition.confirmation().unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email, "j@x.com");
    }

    #[test]
    fn submit_with_missing_field_keeps_the_form() {
        let form = BookingForm::new("consult", "Jane", "");
        let state = at_details();
        let transition = state.clone().submit(&form);

        assert_eq!(transition.state, state);
        assert_eq!(transition.changes, vec![Change::Rejected(BookingError::MissingFields)]);
    }

    #[test]
    fn submit_without_slot_reports_incomplete_selection() {
        let mut state = at_details();
        state.selected_time_slot = None;

        let transition = state.submit(&BookingForm::new("consult", "Jane", "j@x.com"));
        assert_eq!(transition.rejection(), Some(BookingError::SelectionIncomplete));
        assert_eq!(transition.state.step, WizardStep::Details);
    }

    #[test]
    fn submit_outside_details_step_is_ignored() {
        let mut state = at_details();
        state.step = WizardStep::Time;

        let transition = state.clone().submit(&BookingForm::new("consult", "Jane", "j@x.com"));
        assert_eq!(transition.state, state);
        assert!(transition.changes.is_empty());
    }
}
