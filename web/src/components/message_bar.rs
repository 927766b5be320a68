use booking_core::BookingMessage;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn BookingMessageBar(message: BookingMessage) -> impl IntoView {
    let intent = if message.is_error {
        MessageBarIntent::Error
    } else {
        MessageBarIntent::Success
    };
    let class = message.css_class();

    view! {
        <div class=class>
            <MessageBar intent=intent>{message.text}</MessageBar>
        </div>
    }
}

/// The wizard's result region. Hidden while there is nothing to say.
#[component]
pub fn BookingResult(message: RwSignal<Option<BookingMessage>>) -> impl IntoView {
    view! {
        <div
            class="booking-result-region"
            class:is-hidden=move || message.with(Option::is_none)
            id="bookingResult"
            aria-live="polite"
        >
            {move || message.get().map(|message| view! { <BookingMessageBar message=message/> })}
        </div>
    }
}
