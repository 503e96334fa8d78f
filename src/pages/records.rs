use leptos::prelude::*;

use crate::components::header::PageHeader;
use crate::data::api::{fetch_record, fetch_records, FetchError};
use crate::data::records::{RecordLookup, RecordsTable, SCHEDULE_HEADERS, STATUS_HEADERS};

#[component]
fn RecordTable(
    caption: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-gray-200">
            <table class="min-w-full text-sm">
                <caption class="text-left px-3 py-2 font-semibold text-gray-900">{caption}</caption>
                <thead class="bg-gray-100">
                    <tr>
                        {headers.iter().map(|h| view! {
                            <th class="px-3 py-2 text-left font-medium text-gray-700">{*h}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {if rows.is_empty() {
                        view! {
                            <tr><td class="px-3 py-2 text-gray-500" colspan=headers.len().to_string()>"No records"</td></tr>
                        }.into_any()
                    } else {
                        rows.into_iter().map(|row| view! {
                            <tr class="border-t border-gray-100">
                                {row.into_iter().map(|cell| view! {
                                    <td class="px-3 py-2 text-gray-800 whitespace-nowrap">{cell}</td>
                                }).collect_view()}
                            </tr>
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn RecordSearch() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (result, set_result) = signal::<Option<Result<RecordLookup, FetchError>>>(None);
    let (searching, set_searching) = signal(false);

    let search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = query.get_untracked();
        if id.trim().is_empty() {
            return;
        }
        set_searching.set(true);
        leptos::task::spawn_local(async move {
            let found = fetch_record(&id).await;
            if let Err(e) = &found {
                leptos::logging::warn!("Lookup of {} failed: {}", id, e);
            }
            set_result.set(Some(found));
            set_searching.set(false);
        });
    };

    view! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold text-gray-900">"Find a request"</h2>
            <form class="flex gap-2" on:submit=search>
                <input
                    type="text"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md"
                    placeholder="Request ID, e.g. abc123"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded-full bg-teal-600 text-white text-sm font-medium disabled:opacity-40"
                    disabled=move || searching.get()
                >
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
            </form>
            {move || result.get().map(|found| match found {
                Ok(lookup) => {
                    let status = lookup.request_status.map(|r| vec![r.cells()]).unwrap_or_default();
                    let schedule = lookup.request_schedule.map(|r| vec![r.cells()]).unwrap_or_default();
                    view! {
                        <div class="flex flex-col gap-3">
                            <RecordTable caption="Status" headers=&STATUS_HEADERS rows=status/>
                            <RecordTable caption="Schedule" headers=&SCHEDULE_HEADERS rows=schedule/>
                        </div>
                    }.into_any()
                }
                Err(FetchError::Status { detail, .. }) => view! {
                    <p class="text-sm text-red-600">{detail}</p>
                }.into_any(),
                Err(e) => view! { <p class="text-sm text-red-600">{e.to_string()}</p> }.into_any(),
            })}
        </section>
    }
}

/// Read-only view of the request records served by `/api/records`.
#[component]
pub fn RecordsPage() -> impl IntoView {
    let (table, set_table) = signal::<Option<RecordsTable>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            match fetch_records().await {
                Ok(records) => {
                    set_error.set(None);
                    set_table.set(Some(records));
                }
                Err(e) => {
                    leptos::logging::error!("Failed to load records: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <PageHeader/>
            <div class="max-w-6xl w-full mx-auto px-4 py-6 flex flex-col gap-6">
                <h1 class="text-2xl font-bold text-gray-900">"Request records"</h1>
                {move || error.get().map(|msg| view! {
                    <p class="text-sm text-red-600" role="alert">{msg}</p>
                })}
                {move || match table.get() {
                    None if error.get().is_none() => view! {
                        <p class="text-sm text-gray-500">"Loading records..."</p>
                    }.into_any(),
                    None => ().into_any(),
                    Some(records) => {
                        let status: Vec<Vec<String>> = records.request_status_table.iter().map(|r| r.cells()).collect();
                        let schedule: Vec<Vec<String>> = records.request_schedule_table.iter().map(|r| r.cells()).collect();
                        view! {
                            <RecordTable caption="Request status" headers=&STATUS_HEADERS rows=status/>
                            <RecordTable caption="Request schedule" headers=&SCHEDULE_HEADERS rows=schedule/>
                        }.into_any()
                    }
                }}
                <RecordSearch/>
            </div>
        </div>
    }
}
