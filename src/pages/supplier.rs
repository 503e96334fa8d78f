use leptos::prelude::*;

use crate::components::header::PageHeader;
use crate::data::availability::{AvailabilityRequest, RequestStatus};
use crate::data::product::{SUPPLIER_NAME, SUPPLIER_REGION};
use crate::data::storage::RequestLog;
use crate::utils::date::TimeDisplay;

fn status_badge(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "bg-amber-100 text-amber-800",
        RequestStatus::Accepted => "bg-emerald-100 text-emerald-800",
        RequestStatus::Rejected => "bg-red-100 text-red-800",
    }
}

#[component]
fn RequestCard(
    request: AvailabilityRequest,
    on_status: Callback<(u32, RequestStatus)>,
) -> impl IntoView {
    let id = request.id;
    let status = request.status;
    let location = request.location.clone();
    let display_name = request.display_name();
    let submitted = request.timestamp.to_rfc3339();
    let email = request.contact.as_ref().map(|c| c.email.clone()).filter(|e| !e.is_empty());

    view! {
        <li class="p-4 rounded-xl border border-gray-200 shadow-sm flex flex-col gap-3">
            <div class="flex items-start justify-between gap-3">
                <div>
                    <div class="font-semibold text-gray-900">{display_name}</div>
                    {email.map(|e| view! { <div class="text-sm text-gray-600">{e}</div> })}
                    <div class="text-xs text-gray-500">
                        {format!("Request #{} · ", id)}<TimeDisplay iso_time=submitted/>
                    </div>
                </div>
                <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", status_badge(status))>
                    {status.label()}
                </span>
            </div>
            <div class="text-sm text-gray-800">
                "📍 "{if location.is_empty() { "No location".to_string() } else { location }}
            </div>
            <ul class="flex flex-col gap-1 text-sm text-gray-800">
                {request.dates.into_iter().map(|date| view! {
                    <li class="flex items-center gap-2">
                        <span>{date.describe()}</span>
                        {date.is_favourite.then(|| view! {
                            <span class="text-amber-700 font-medium">"⭐ Top preference"</span>
                        })}
                    </li>
                }).collect_view()}
            </ul>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded-full bg-emerald-600 text-white text-sm font-medium disabled:opacity-40"
                    disabled=status == RequestStatus::Accepted
                    on:click=move |_| on_status.run((id, RequestStatus::Accepted))
                >
                    "Accept"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-full bg-red-600 text-white text-sm font-medium disabled:opacity-40"
                    disabled=status == RequestStatus::Rejected
                    on:click=move |_| on_status.run((id, RequestStatus::Rejected))
                >
                    "Reject"
                </button>
                <Show when=move || status != RequestStatus::Pending>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-full border border-gray-300 text-sm"
                        on:click=move |_| on_status.run((id, RequestStatus::Pending))
                    >
                        "Reset"
                    </button>
                </Show>
            </div>
        </li>
    }
}

/// Supplier dashboard listing every stored availability request.
#[component]
pub fn SupplierPage() -> impl IntoView {
    let (requests, set_requests) = signal(Vec::<AvailabilityRequest>::new());

    let reload = move || set_requests.set(RequestLog::browser().load());
    Effect::new(move |_| reload());

    let on_status = Callback::new(move |(id, status): (u32, RequestStatus)| {
        match RequestLog::browser().set_status(id, status) {
            Ok(true) => leptos::logging::log!("Request {} marked {}", id, status.label()),
            Ok(false) => leptos::logging::warn!("Request {} no longer exists", id),
            Err(e) => leptos::logging::error!("Could not update request {}: {}", id, e),
        }
        reload();
    });

    let clear_all = move |_| {
        RequestLog::browser().clear();
        reload();
    };

    let pending = move || {
        requests.with(|r| r.iter().filter(|r| r.status == RequestStatus::Pending).count())
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <PageHeader/>
            <div class="max-w-4xl w-full mx-auto px-4 py-6 flex-1">
                <div class="flex items-end justify-between gap-4 mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">{SUPPLIER_NAME}</h1>
                        <div class="text-sm text-gray-600">{SUPPLIER_REGION}</div>
                        <div class="mt-1 text-sm text-gray-700">
                            {move || format!("{} pending of {} requests", pending(), requests.with(Vec::len))}
                        </div>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-full border border-gray-300 text-sm disabled:opacity-40"
                        disabled=move || requests.with(Vec::is_empty)
                        on:click=clear_all
                    >
                        "Clear all"
                    </button>
                </div>
                <Show
                    when=move || !requests.with(Vec::is_empty)
                    fallback=|| view! { <p class="text-gray-600">"No availability requests yet."</p> }
                >
                    <ul class="flex flex-col gap-4">
                        <For
                            each=move || requests.get().into_iter().rev()
                            key=|r| (r.id, r.status)
                            children=move |request| view! { <RequestCard request=request on_status=on_status/> }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
