use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::header::PageHeader;
use crate::data::availability::AvailabilityRequest;
use crate::data::product::{FALLBACK_LOCATION, SUPPLIER_NAME};
use crate::data::storage::RequestLog;

#[component]
fn RequestedDates(request: Option<AvailabilityRequest>) -> impl IntoView {
    let dates = request.map(|r| r.dates).unwrap_or_default();
    if dates.is_empty() {
        return view! { <div class="text-sm text-gray-600">"No dates found"</div> }.into_any();
    }

    view! {
        <ul class="flex flex-col gap-1">
            {dates.into_iter().map(|date| view! {
                <li class="flex items-center gap-2 text-sm text-gray-800">
                    <span>{date.describe()}</span>
                    {date.is_favourite.then(|| view! {
                        <span class="text-amber-700 font-medium" aria-label="Top preference date">"⭐ Top preference"</span>
                    })}
                </li>
            }).collect_view()}
        </ul>
    }.into_any()
}

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let (last_request, set_last_request) = signal::<Option<AvailabilityRequest>>(None);

    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        set_last_request.set(RequestLog::browser().last());
    });

    let location = move || {
        last_request
            .get()
            .map(|r| r.location)
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| FALLBACK_LOCATION.to_string())
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <PageHeader/>
            <div class="max-w-4xl w-full mx-auto px-4 pt-4">
                <Breadcrumbs/>
            </div>
            <div class="max-w-4xl w-full mx-auto px-4 py-8 text-center" role="status" aria-live="polite">
                <div class="text-5xl" aria-hidden="true">"🎉"</div>
                <h1 class="mt-3 text-2xl font-bold text-gray-900">"Request sent"</h1>
                <p class="mt-2 text-gray-700">
                    {format!(
                        "Your booking request has been sent to {}. Expect a response confirming or rejecting the dates in the next 24 hours.",
                        SUPPLIER_NAME
                    )}
                </p>
                <div class="mt-3 text-sm text-gray-500">
                    {move || match last_request.get() {
                        Some(request) => format!("Request ID: {}", request.id),
                        None => "Request ID: unknown".to_string(),
                    }}
                </div>
            </div>
            <div class="max-w-4xl w-full mx-auto px-4 pb-10 flex flex-col lg:flex-row gap-6">
                <div class="flex-1 flex flex-col gap-4">
                    <div>
                        <div class="text-sm font-semibold text-gray-900">"📍 Location:"</div>
                        <div class="text-sm text-gray-800">{location}</div>
                    </div>
                    <div>
                        <div class="text-sm font-semibold text-gray-900 mb-1">"📅 Requested dates:"</div>
                        {move || view! { <RequestedDates request=last_request.get()/> }}
                    </div>
                </div>
                <div class="flex-1">
                    <div class="relative h-56 rounded-xl bg-sky-100 flex items-center justify-center" aria-label="Map of the UK with a pin in the south east">
                        <span class="text-sm text-sky-700">"UK Map"</span>
                        <span class="absolute right-1/4 bottom-1/4 w-3 h-3 rounded-full bg-red-500" title="South East"></span>
                    </div>
                </div>
            </div>
        </div>
    }
}
