use chrono::NaiveDate;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::overlay::Overlay;
use crate::data::availability::{AvailabilityDraft, DateSelection};
use crate::data::product::{DEFAULT_LOCATION, MAX_SELECTED_DATES, TIMESLOTS};
use crate::data::storage::{pending_dates, DraftStore, RequestLog};

fn save_draft(location: String, selection: &DateSelection) {
    let draft = AvailabilityDraft::new(location, selection);
    if let Err(e) = DraftStore::browser().save(&draft) {
        leptos::logging::warn!("Could not save availability draft: {}", e);
    }
}

#[component]
fn TimeSelect(date: NaiveDate, selection: RwSignal<DateSelection>, location: RwSignal<String>) -> impl IntoView {
    let current = move || {
        selection.with(|s| {
            s.dates()
                .iter()
                .find(|d| d.iso == date)
                .and_then(|d| d.time.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <select
            class="px-3 py-2 border border-gray-300 rounded-md text-sm"
            aria-label="Choose a time"
            prop:value=current
            on:change=move |ev| {
                let value = event_target_value(&ev);
                selection.update(|s| {
                    s.set_time(date, Some(value));
                });
                selection.with_untracked(|s| save_draft(location.get_untracked(), s));
            }
        >
            <option value="">"Choose a time"</option>
            {TIMESLOTS.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
        </select>
    }
}

/// Second step of a request: shows the chosen dates and lets the user pick
/// an entry time for each before checkout.
#[component]
pub fn TimeslotModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();
    let selection = RwSignal::new(DateSelection::default());
    let location = RwSignal::new(DEFAULT_LOCATION.to_string());

    Effect::new(move |_| {
        let drafts = DraftStore::browser();
        let dates = pending_dates(&drafts, &RequestLog::browser());
        if let Some(draft) = drafts.load().filter(|d| !d.location.is_empty()) {
            location.set(draft.location);
        }
        selection.set(DateSelection::from_requested_dates(dates, MAX_SELECTED_DATES));
    });

    view! {
        <Overlay title="Select timeslots" on_close=on_close>
            <div class="font-semibold text-gray-900 mb-2">"Dates selected"</div>
            {move || {
                let dates = selection.with(|s| s.to_requested_dates());
                if dates.is_empty() {
                    return view! { <p class="text-sm text-gray-600">"No dates selected yet."</p> }.into_any();
                }
                view! {
                    <ul class="flex flex-col gap-3">
                        {dates.into_iter().map(|d| view! {
                            <li class="flex items-center justify-between gap-3">
                                <span class="text-sm text-gray-800">
                                    {d.formatted.clone()}
                                    {d.is_favourite.then_some(" ⭐")}
                                </span>
                                <TimeSelect date=d.iso selection=selection location=location/>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
            <Show when=move || selection.with(|s| !s.is_empty() && !s.all_timed())>
                <p class="mt-3 text-xs text-gray-500">"Times are optional. The supplier will suggest one if left blank."</p>
            </Show>
            <div class="mt-5">
                <button
                    type="button"
                    class="w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold"
                    on:click=move |_| {
                        selection.with_untracked(|s| save_draft(location.get_untracked(), s));
                        on_close.run(());
                        navigate("/checkout", Default::default());
                    }
                >
                    "Continue to checkout"
                </button>
            </div>
        </Overlay>
    }
}
