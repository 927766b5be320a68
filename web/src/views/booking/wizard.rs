use booking_core::{
    update, BookingAction, BookingForm, BookingMessage, BookingOptions, BookingState, Change,
    Locale, MessageUpdate, Transition, UiText, WizardStep,
};
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::components::{BookingCalendar, BookingResult, StepIndicators, TimeSlotPicker};

/// The reactive pieces a transition can touch.
#[derive(Clone, Copy)]
struct WizardSignals {
    state: RwSignal<BookingState>,
    message: RwSignal<Option<BookingMessage>>,
    booking_type: RwSignal<String>,
    name: RwSignal<String>,
    email: RwSignal<String>,
}

impl WizardSignals {
    fn dispatch(&self, action: BookingAction, locale: Locale) {
        let transition = update(self.state.get_untracked(), action);
        self.apply(transition, locale);
    }

    /// Render step: pushes a transition's facts into the view.
    fn apply(&self, transition: Transition, locale: Locale) {
        match transition.message_update(locale) {
            Some(MessageUpdate::Show(message)) => self.message.set(Some(message)),
            Some(MessageUpdate::Hide) => self.message.set(None),
            None => {}
        }

        if transition.has(&Change::FormReset) {
            self.booking_type.set(String::new());
            self.name.set(String::new());
            self.email.set(String::new());
        }

        if let Some(submission) = transition.confirmation() {
            leptos::logging::log!(
                "Booking confirmed for {} at {}",
                submission.date,
                submission.time
            );
        }

        self.state.set(transition.state);
    }

    fn form(&self) -> BookingForm {
        BookingForm::new(
            self.booking_type.get_untracked(),
            self.name.get_untracked(),
            self.email.get_untracked(),
        )
    }
}

/// Buttons at the foot of a step panel. The panels share one `<form>`, so
/// every control except `Submit` must be a plain button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelControl {
    Back,
    Next,
    Submit,
}

impl PanelControl {
    fn button_type(self) -> ButtonType {
        match self {
            PanelControl::Submit => ButtonType::Submit,
            PanelControl::Back | PanelControl::Next => ButtonType::Button,
        }
    }

    fn appearance(self) -> ButtonAppearance {
        match self {
            PanelControl::Back => ButtonAppearance::Secondary,
            PanelControl::Next | PanelControl::Submit => ButtonAppearance::Primary,
        }
    }

    fn label(self) -> UiText {
        match self {
            PanelControl::Back => UiText::Back,
            PanelControl::Next => UiText::Next,
            PanelControl::Submit => UiText::Submit,
        }
    }

    /// Submit has no click action; the form's submit event dispatches it.
    fn action(self) -> Option<BookingAction> {
        match self {
            PanelControl::Back => Some(BookingAction::Retreat),
            PanelControl::Next => Some(BookingAction::Advance),
            PanelControl::Submit => None,
        }
    }
}

#[component]
fn PanelButton(
    control: PanelControl,
    locale: Locale,
    on_action: impl Fn(BookingAction) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <Button
            button_type=control.button_type()
            appearance=control.appearance()
            on_click=move |_| {
                if let Some(action) = control.action() {
                    on_action(action);
                }
            }
        >
            {locale.text(control.label())}
        </Button>
    }
}

#[component]
pub fn BookingWizard(options: BookingOptions, today: NaiveDate) -> impl IntoView {
    let locale = options.locale;
    let highlight = options.today_highlight;

    let signals = WizardSignals {
        state: RwSignal::new(options.initial_state(today)),
        message: RwSignal::new(None),
        booking_type: RwSignal::new(String::new()),
        name: RwSignal::new(String::new()),
        email: RwSignal::new(String::new()),
    };
    let state = signals.state;
    let booking_type = signals.booking_type;

    let on_action = move |action: BookingAction| signals.dispatch(action, locale);

    let step = Signal::derive(move || state.with(|s| s.step));
    let selected_slot = Signal::derive(move || state.with(|s| s.selected_time_slot.clone()));
    let panel_hidden = move |panel: WizardStep| move || !state.with(|s| s.is_panel_visible(panel));

    let booking_types = options.booking_types.clone();
    let time_slots = options.time_slots.clone();

    view! {
        <div class="booking-wizard">
            <StepIndicators step=step locale=locale />

            <p class="booking-date-preview" id="bookingDatePreview">
                {move || locale.date_preview(state.with(|s| s.selected_date).as_ref())}
            </p>

            <form
                class="booking-form"
                id="bookingForm"
                on:submit=move |ev| {
                    ev.prevent_default();
                    signals.dispatch(BookingAction::Submit(signals.form()), locale);
                }
            >
                <section
                    class="booking-panel"
                    class:is-hidden=panel_hidden(WizardStep::Date)
                    data-step-panel="1"
                >
                    <BookingCalendar
                        state=state
                        today=today
                        locale=locale
                        highlight=highlight
                        on_action=on_action
                    />
                    <div class="booking-panel-actions">
                        <PanelButton control=PanelControl::Next locale=locale on_action=on_action />
                    </div>
                </section>

                <section
                    class="booking-panel"
                    class:is-hidden=panel_hidden(WizardStep::Time)
                    data-step-panel="2"
                >
                    <TimeSlotPicker
                        slots=time_slots
                        selected=selected_slot
                        locale=locale
                        on_action=on_action
                    />
                    <div class="booking-panel-actions">
                        <PanelButton control=PanelControl::Back locale=locale on_action=on_action />
                        <PanelButton control=PanelControl::Next locale=locale on_action=on_action />
                    </div>
                </section>

                <section
                    class="booking-panel"
                    class:is-hidden=panel_hidden(WizardStep::Details)
                    data-step-panel="3"
                >
                    <div class="form-group">
                        <label for="bookingType">{locale.text(UiText::BookingTypeLabel)}</label>
                        <select
                            id="bookingType"
                            prop:value=move || booking_type.get()
                            on:change=move |ev| booking_type.set(event_target_value(&ev))
                        >
                            <option value="">{locale.text(UiText::BookingTypePlaceholder)}</option>
                            {booking_types
                                .into_iter()
                                .map(|kind| view! { <option value=kind.value>{kind.label}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="bookingName">{locale.text(UiText::NameLabel)}</label>
                        <Input id="bookingName" value=signals.name />
                    </div>
                    <div class="form-group">
                        <label for="bookingEmail">{locale.text(UiText::EmailLabel)}</label>
                        <Input
                            id="bookingEmail"
                            input_type=InputType::Email
                            placeholder="your@email.com"
                            value=signals.email
                        />
                    </div>
                    <div class="booking-panel-actions">
                        <PanelButton control=PanelControl::Back locale=locale on_action=on_action />
                        <PanelButton control=PanelControl::Submit locale=locale on_action=on_action />
                    </div>
                </section>
            </form>

            <BookingResult message=signals.message />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_submit_control_submits_the_form() {
        assert!(matches!(PanelControl::Submit.button_type(), ButtonType::Submit));
        assert!(matches!(PanelControl::Next.button_type(), ButtonType::Button));
        assert!(matches!(PanelControl::Back.button_type(), ButtonType::Button));
    }

    #[test]
    fn step_controls_dispatch_their_own_action() {
        assert_eq!(PanelControl::Next.action(), Some(BookingAction::Advance));
        assert_eq!(PanelControl::Back.action(), Some(BookingAction::Retreat));
        assert_eq!(PanelControl::Submit.action(), None);
    }
}
