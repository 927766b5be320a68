use booking_core::{Locale, UiText};
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn OptionsLoading(#[prop(optional)] locale: Locale) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">{locale.text(UiText::Loading)}</p>
        </div>
    }
}
