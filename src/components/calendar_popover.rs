use leptos::prelude::*;

use super::month_grid::{MonthGrid, MonthTitle};
use super::overlay::Overlay;
use crate::data::availability::DateSelection;
use crate::data::product::MAX_SELECTED_DATES;
use crate::utils::calendar::{add_months, first_of_month};
use crate::utils::date::today;

#[component]
pub fn SelectionWarning(selection: RwSignal<DateSelection>) -> impl IntoView {
    view! {
        <Show when=move || selection.with(|s| s.show_limit_warning())>
            <div class="mt-2 text-sm text-red-600" role="alert" aria-live="assertive">
                {move || format!("Please select a maximum of {} dates", selection.with(|s| s.max()))}
            </div>
        </Show>
    }
}

/// Date chooser opened from the "Check availability" buttons. Shows two
/// months side by side on wide screens and one on mobile.
#[component]
pub fn CalendarPopover(
    selection: RwSignal<DateSelection>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    let (current_month, set_current_month) = signal(first_of_month(today()));
    let next_month = Signal::derive(move || add_months(current_month.get(), 1));

    let previous = move |_| set_current_month.update(|m| *m = add_months(*m, -1));
    let next = move |_| set_current_month.update(|m| *m = add_months(*m, 1));

    view! {
        <Overlay title="Choose Dates" on_close=on_close>
            <div class="text-sm text-gray-600 mb-3">
                {format!("Select up to {} dates", MAX_SELECTED_DATES)}
            </div>
            <div class="flex gap-6">
                <div class="flex-1">
                    <div class="flex items-center justify-between mb-2">
                        <button type="button" class="px-2 text-xl" aria-label="Previous month" on:click=previous>"‹"</button>
                        <MonthTitle month=current_month/>
                        <button type="button" class="px-2 text-xl lg:invisible" aria-label="Next month" on:click=next>"›"</button>
                    </div>
                    <MonthGrid month=current_month selection=selection/>
                </div>
                <div class="flex-1 hidden lg:block">
                    <div class="flex items-center justify-between mb-2">
                        <span class="px-2"></span>
                        <MonthTitle month=next_month/>
                        <button type="button" class="px-2 text-xl" aria-label="Next month" on:click=next>"›"</button>
                    </div>
                    <MonthGrid month=next_month selection=selection/>
                </div>
            </div>
            <div class="mt-3 text-xs text-gray-500">"Note: This voucher cannot be booked on Saturdays"</div>
            <SelectionWarning selection=selection/>
            <div class="mt-4 flex items-center justify-between gap-3">
                <span class="text-sm text-gray-600">{move || selection.with(|s| s.summary_label())}</span>
                <button
                    type="button"
                    class="px-5 py-2.5 rounded-full bg-teal-600 text-white font-semibold disabled:opacity-50"
                    disabled=move || selection.with(|s| s.is_empty())
                    on:click=move |_| on_continue.run(())
                >
                    "Continue"
                </button>
            </div>
        </Overlay>
    }
}
