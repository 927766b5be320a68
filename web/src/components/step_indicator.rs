use booking_core::{Locale, WizardStep};
use leptos::prelude::*;

#[component]
pub fn StepIndicators(step: Signal<WizardStep>, locale: Locale) -> impl IntoView {
    view! {
        <ol class="step-indicators">
            {WizardStep::ALL
                .into_iter()
                .map(|indicator| {
                    view! {
                        <li
                            class="step-indicator"
                            class:is-active=move || step.get() == indicator
                            data-step-indicator=indicator.number().to_string()
                        >
                            <span class="step-number">{indicator.number().to_string()}</span>
                            <span class="step-title">{locale.step_title(indicator)}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
