use booking_core::{Locale, UiText};
use leptos::prelude::*;
use thaw::*;

/// Overlay hosting the wizard. Visibility comes straight from `open`, so
/// whoever owns that signal decides when the dialog shows.
#[component]
pub fn BookingDialog(
    open: RwSignal<bool>,
    locale: Locale,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="booking-modal-overlay"
            class:is-open=move || open.get()
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="booking-modal" role="dialog">
                <div class="modal-header">
                    <h2>{locale.text(UiText::OpenBooking)}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open.set(false)
                        class="close-button"
                    >
                        {locale.text(UiText::Close)}
                    </Button>
                </div>

                <div class="modal-content">{children()}</div>
            </div>
        </div>
    }
}
