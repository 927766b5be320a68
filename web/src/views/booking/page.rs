use booking_core::{BookingMessage, Locale, UiText};
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use super::{BookingDialog, BookingWizard};
use crate::components::{BookingMessageBar, OptionsLoading};
use crate::server::get_booking_options;
use crate::utils::clock::local_today;

#[component]
pub fn BookingPage() -> impl IntoView {
    let dialog_open = RwSignal::new(false);

    // The grid is keyed on the visitor's calendar date, which the server
    // cannot know. Effects only run in the browser, after hydration.
    let today = RwSignal::new(None::<NaiveDate>);
    Effect::new(move |_| today.set(Some(local_today())));

    let options_resource = Resource::new(|| (), |_| async move { get_booking_options().await });

    view! {
        <div class="booking-page">
            <Suspense fallback=move || view! { <OptionsLoading /> }>
                {move || {
                    options_resource.get().map(|result| match result {
                        Ok(options) => {
                            let locale = options.locale;
                            view! {
                                <div class="booking-cta">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| dialog_open.set(true)
                                    >
                                        {locale.text(UiText::OpenBooking)}
                                    </Button>
                                </div>
                                <BookingDialog open=dialog_open locale=locale>
                                    {move || match today.get() {
                                        Some(today) => {
                                            view! { <BookingWizard options=options.clone() today=today /> }
                                                .into_any()
                                        }
                                        None => view! { <OptionsLoading locale=locale /> }.into_any(),
                                    }}
                                </BookingDialog>
                            }
                                .into_any()
                        }
                        Err(e) => {
                            leptos::logging::error!("Failed to load booking options: {}", e);
                            let locale = Locale::default();
                            let message = BookingMessage {
                                text: locale.text(UiText::OptionsUnavailable).to_string(),
                                is_error: true,
                            };
                            view! { <BookingMessageBar message=message /> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
