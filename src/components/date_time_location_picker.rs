use leptos::prelude::*;

use super::calendar_popover::SelectionWarning;
use super::location_sheet::LocationOptions;
use super::month_grid::{MonthGrid, MonthTitle};
use super::timeslot_modal::TimeslotModal;
use crate::data::availability::{AvailabilityDraft, DateSelection};
use crate::data::product::{DEFAULT_LOCATION, MAX_SELECTED_DATES};
use crate::data::storage::DraftStore;
use crate::utils::calendar::{add_months, first_of_month};
use crate::utils::date::today;

#[component]
fn SelectedDatesSummary(selection: RwSignal<DateSelection>) -> impl IntoView {
    view! {
        <Show when=move || selection.with(|s| !s.is_empty())>
            <div class="mt-3 flex flex-col gap-2" aria-live="polite">
                {move || selection.with(|s| s.to_requested_dates()).into_iter().map(|d| {
                    let iso = d.iso;
                    view! {
                        <div class="flex items-center justify-between px-3 py-2 rounded-lg border border-gray-200">
                            <div class="text-sm text-gray-800">{d.formatted}</div>
                            <div class="flex items-center gap-2">
                                <button
                                    type="button"
                                    class=if d.is_favourite {
                                        "text-xs px-2 py-1 rounded-full bg-amber-100 text-amber-800 font-semibold"
                                    } else {
                                        "text-xs px-2 py-1 rounded-full border border-gray-300 text-gray-600"
                                    }
                                    aria-pressed=d.is_favourite.to_string()
                                    on:click=move |_| selection.update(|s| {
                                        s.toggle_favourite(iso);
                                    })
                                >
                                    "⭐ Favourite"
                                </button>
                                <button
                                    type="button"
                                    class="text-sm px-2 py-1 text-gray-500 hover:text-red-600"
                                    aria-label="Remove date"
                                    on:click=move |_| selection.update(|s| {
                                        s.remove(iso);
                                    })
                                >
                                    <span aria-hidden="true">"🗑"</span>
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
                <button
                    type="button"
                    class="self-end text-xs text-gray-500 underline"
                    on:click=move |_| selection.update(|s| s.clear())
                >
                    "Clear dates"
                </button>
            </div>
        </Show>
    }
}

/// Location dropdown, month calendar and favourite picker used on the
/// request-to-book page.
#[component]
pub fn DateTimeLocationPicker() -> impl IntoView {
    let location = RwSignal::new(DEFAULT_LOCATION.to_string());
    let (location_menu_open, set_location_menu_open) = signal(false);
    let (calendar_open, set_calendar_open) = signal(true);
    let (current_month, set_current_month) = signal(first_of_month(today()));
    let selection = RwSignal::new(DateSelection::new(MAX_SELECTED_DATES));
    let (timeslots_open, set_timeslots_open) = signal(false);
    let (save_error, set_save_error) = signal::<Option<String>>(None);

    let request_availability = move |_| {
        let draft = AvailabilityDraft::new(location.get_untracked(), &selection.get_untracked());
        match DraftStore::browser().save(&draft) {
            Ok(()) => {
                set_save_error.set(None);
                set_timeslots_open.set(true);
            }
            Err(e) => {
                leptos::logging::warn!("Could not save availability draft: {}", e);
                set_save_error.set(Some("Your dates could not be saved, please try again.".into()));
            }
        }
    };

    view! {
        <div class="flex flex-col lg:flex-row gap-6">
            <div class="lg:w-1/3">
                <div class="font-semibold text-gray-900 mb-2"><span aria-hidden="true">"📍"</span>" Choose Location"</div>
                <label for="location-button" class="block text-sm text-gray-600 mb-1">"Location"</label>
                <div class="relative">
                    <button
                        id="location-button"
                        type="button"
                        class="w-full flex justify-between items-center px-3 py-2 border border-gray-300 rounded-md"
                        aria-haspopup="listbox"
                        aria-expanded=move || location_menu_open.get().to_string()
                        on:click=move |_| set_location_menu_open.update(|o| *o = !*o)
                    >
                        {move || location.get()}
                        <span aria-hidden="true">{move || if location_menu_open.get() { "▲" } else { "▼" }}</span>
                    </button>
                    <Show when=move || location_menu_open.get()>
                        <div class="absolute z-10 mt-1 w-full bg-white border border-gray-200 rounded-md shadow-lg">
                            <LocationOptions
                                selected=location
                                on_select=Callback::new(move |loc: String| {
                                    location.set(loc);
                                    set_location_menu_open.set(false);
                                })
                            />
                        </div>
                    </Show>
                </div>
            </div>

            <div class="lg:flex-1">
                <label class="block text-sm text-gray-600 mb-1" for="date-toggle">"Dates"</label>
                <button
                    id="date-toggle"
                    type="button"
                    class="w-full flex justify-between items-center px-3 py-2 border border-gray-300 rounded-md"
                    aria-expanded=move || calendar_open.get().to_string()
                    on:click=move |_| set_calendar_open.update(|o| *o = !*o)
                >
                    <span>{move || selection.with(|s| s.summary_label())}</span>
                    <span aria-hidden="true">{move || if calendar_open.get() { "▲" } else { "▼" }}</span>
                </button>

                <Show when=move || calendar_open.get()>
                    <div class="mt-3 p-3 border border-gray-200 rounded-lg">
                        <div class="text-sm text-gray-600 mb-2">
                            {format!("Select up to {} dates", MAX_SELECTED_DATES)}
                        </div>
                        <div class="flex items-center justify-between mb-2">
                            <button type="button" class="px-2 text-xl" aria-label="Previous month"
                                on:click=move |_| set_current_month.update(|m| *m = add_months(*m, -1))>"‹"</button>
                            <MonthTitle month=current_month/>
                            <button type="button" class="px-2 text-xl" aria-label="Next month"
                                on:click=move |_| set_current_month.update(|m| *m = add_months(*m, 1))>"›"</button>
                        </div>
                        <MonthGrid month=current_month selection=selection/>
                        <div class="mt-2 text-xs text-gray-500">"Note: This voucher cannot be booked on Saturdays"</div>
                        <SelectionWarning selection=selection/>
                    </div>
                </Show>

                <SelectedDatesSummary selection=selection/>

                <button
                    type="button"
                    class="mt-4 w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold disabled:opacity-50"
                    disabled=move || selection.with(|s| s.is_empty())
                    on:click=request_availability
                >
                    "Request Availability"
                </button>
                {move || save_error.get().map(|e| view! { <p class="mt-2 text-sm text-red-600">{e}</p> })}
            </div>

            <Show when=move || timeslots_open.get()>
                <TimeslotModal on_close=Callback::new(move |_| set_timeslots_open.set(false))/>
            </Show>
        </div>
    }
}
