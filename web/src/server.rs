use booking_core::BookingOptions;
use leptos::prelude::*;
use leptos::server;

#[server]
pub async fn get_booking_options() -> Result<BookingOptions, ServerFnError> {
    let options = crate::config::get_options().clone();
    tracing::debug!(
        locale = ?options.locale,
        time_slots = options.time_slots.len(),
        "Serving booking options"
    );
    Ok(options)
}
