use booking_core::{BookingAction, Locale, UiText};
use leptos::prelude::*;

/// Single-selection group over the configured slots.
#[component]
pub fn TimeSlotPicker(
    slots: Vec<String>,
    selected: Signal<Option<String>>,
    locale: Locale,
    on_action: impl Fn(BookingAction) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="time-slot-picker">
            <div class="time-slot-picker-header">
                <h4>{locale.text(UiText::TimeSlotsHeading)}</h4>
            </div>

            <div class="time-slot-picker-grid">
                {slots
                    .into_iter()
                    .map(|slot| {
                        let label = locale.time_slot_label(&slot);
                        let slot_for_class = slot.clone();
                        let slot_for_click = slot.clone();

                        view! {
                            <button
                                type="button"
                                class="time-slot-button"
                                class:is-selected=move || {
                                    selected.with(|s| s.as_deref() == Some(slot_for_class.as_str()))
                                }
                                data-time-slot=slot
                                on:click=move |_| {
                                    on_action(BookingAction::SelectTimeSlot(slot_for_click.clone()))
                                }
                            >
                                <span class="time-slot-time">{label}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
