use booking_core::{BookingAction, BookingState, Locale, TodayHighlight, UiText};
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BookingCalendar(
    state: RwSignal<BookingState>,
    today: NaiveDate,
    locale: Locale,
    highlight: TodayHighlight,
    on_action: impl Fn(BookingAction) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let grid = Memo::new(move |_| state.with(|s| s.grid(today, highlight)));

    view! {
        <div class="calendar-grid">
            <div class="calendar-navigation">
                <Button
                    button_type=ButtonType::Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_action(BookingAction::Navigate(-1))
                >
                    {format!("← {}", locale.text(UiText::PreviousMonth))}
                </Button>

                <h2 class="current-month" id="calendarTitle">
                    {move || locale.month_title(state.with(|s| s.view_month))}
                </h2>

                <Button
                    button_type=ButtonType::Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_action(BookingAction::Navigate(1))
                >
                    {format!("{} →", locale.text(UiText::NextMonth))}
                </Button>
            </div>

            <div class="calendar-weekdays">
                {locale
                    .weekday_headers()
                    .into_iter()
                    .map(|name| view! { <div class="weekday">{name}</div> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="calendar-days" id="calendarGrid">
                {move || {
                    grid.get()
                        .cells
                        .into_iter()
                        .map(|cell| {
                            let key = cell.key;
                            view! {
                                <button
                                    type="button"
                                    class=cell.css_class()
                                    data-date=key.to_string()
                                    on:click=move |_| on_action(BookingAction::SelectDate(key))
                                >
                                    <span class="num">{cell.day}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
