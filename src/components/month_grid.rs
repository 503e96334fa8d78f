use chrono::NaiveDate;
use leptos::prelude::*;

use crate::data::availability::DateSelection;
use crate::utils::calendar::{build_month_grid, month_label, CalendarCell, WEEKDAY_LABELS};

#[component]
pub fn WeekdayRow() -> impl IntoView {
    view! {
        <div class="grid grid-cols-7 text-center text-xs font-medium text-gray-500 mb-1">
            {WEEKDAY_LABELS.iter().map(|d| view! { <div>{*d}</div> }).collect_view()}
        </div>
    }
}

#[component]
pub fn MonthTitle(#[prop(into)] month: Signal<NaiveDate>) -> impl IntoView {
    view! { <div class="font-semibold text-gray-900">{move || month_label(month.get())}</div> }
}

#[component]
pub fn MonthGrid(
    #[prop(into)] month: Signal<NaiveDate>,
    selection: RwSignal<DateSelection>,
) -> impl IntoView {
    let cells = Memo::new(move |_| build_month_grid(month.get()));

    view! {
        <div>
            <WeekdayRow/>
            <div class="grid grid-cols-7 gap-1">
                <For
                    each=move || cells.get()
                    key=CalendarCell::key
                    children=move |cell| match cell {
                        CalendarCell::Blank { .. } => view! { <div class="h-10"></div> }.into_any(),
                        CalendarCell::Day { date, number, .. } => {
                            let blocked = selection.with_untracked(|s| s.is_blocked(date));
                            let is_selected = move || selection.with(|s| s.contains(date));
                            let is_favourite = move || selection.with(|s| s.favourite() == Some(date));
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        let state = if blocked {
                                            "text-gray-300 line-through cursor-not-allowed"
                                        } else if is_selected() {
                                            "bg-teal-600 text-white font-semibold"
                                        } else {
                                            "text-gray-800 hover:bg-teal-50"
                                        };
                                        format!("h-10 rounded-full text-sm transition-colors {}", state)
                                    }
                                    aria-pressed=move || is_selected().to_string()
                                    aria-disabled=blocked.to_string()
                                    disabled=blocked
                                    on:click=move |_| {
                                        selection.update(|s| {
                                            s.toggle(date);
                                        });
                                    }
                                >
                                    {number}
                                    {move || is_favourite().then_some("★")}
                                </button>
                            }.into_any()
                        }
                    }
                />
            </div>
        </div>
    }
}
