#[cfg(feature = "ssr")]
use booking_core::{BookingOptions, ConfigError};
#[cfg(feature = "ssr")]
use std::sync::OnceLock;

#[cfg(feature = "ssr")]
static BOOKING_OPTIONS: OnceLock<BookingOptions> = OnceLock::new();

/// Reads the `BOOKING_*` variables once at start-up.
#[cfg(feature = "ssr")]
pub fn init_options() -> Result<&'static BookingOptions, ConfigError> {
    let options = BookingOptions::from_lookup(|key| std::env::var(key).ok())?;
    Ok(BOOKING_OPTIONS.get_or_init(|| options))
}

#[cfg(feature = "ssr")]
pub fn get_options() -> &'static BookingOptions {
    BOOKING_OPTIONS.get_or_init(|| {
        tracing::warn!("Booking options requested before init_options(); using defaults");
        BookingOptions::default()
    })
}
