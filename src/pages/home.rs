use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::{Breadcrumbs, REQUEST_PATH};
use crate::components::header::{HeroImage, PageHeader};
use crate::components::overlay::Overlay;
use crate::components::product::{AboutExperience, ProductSummary};
use crate::data::product::{SUPPLIER_EMAIL, SUPPLIER_NAME, SUPPLIER_REGION};

#[component]
fn ContactSupplier(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <Overlay title="Book now" on_close=on_close>
            <div class="font-semibold text-gray-900">"Booking details"</div>
            <p class="mt-1 text-sm text-gray-600">
                "Use these booking details to check availability and secure your spot. "
                "Have your voucher number and pin code ready to complete your booking!"
            </p>
            <div class="mt-4 flex flex-col gap-2 text-sm text-gray-800">
                <div class="flex items-center gap-2"><span aria-hidden="true">"📍"</span>{SUPPLIER_REGION}</div>
                <div class="flex items-center gap-2"><span aria-hidden="true">"✉️"</span>{SUPPLIER_EMAIL}</div>
            </div>
            <button
                type="button"
                class="mt-5 w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold"
                on:click=move |_| {
                    on_close.run(());
                    navigate(REQUEST_PATH, Default::default());
                }
            >
                "Request Availability"
            </button>
        </Overlay>
    }
}

#[component]
fn AvailabilityActions(on_contact: WriteSignal<bool>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="flex flex-col gap-2">
            <button
                type="button"
                class="w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold"
                on:click=move |_| navigate(REQUEST_PATH, Default::default())
            >
                "Check Availability"
            </button>
            <button
                type="button"
                class="w-full px-5 py-3 rounded-full border border-teal-600 text-teal-700 font-semibold"
                on:click=move |_| on_contact.set(true)
            >
                {format!("Contact {}", SUPPLIER_NAME)}
            </button>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (booking_open, set_booking_open) = signal(false);

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <PageHeader/>
            <HeroImage/>
            <div class="max-w-5xl w-full mx-auto px-4 pt-4">
                <Breadcrumbs/>
            </div>
            <div class="max-w-5xl w-full mx-auto px-4 py-4 flex-1">
                <div class="flex flex-col lg:flex-row gap-8">
                    <div class="flex-1">
                        <ProductSummary/>
                        <AboutExperience full=true/>
                    </div>
                    <aside class="hidden lg:block w-80 self-start p-5 rounded-2xl border border-gray-200 shadow-sm" aria-label="Availability actions">
                        <div class="font-semibold text-gray-900">"Limited Availability."</div>
                        <div class="text-sm text-gray-600 mb-4">"Select your dates to check"</div>
                        <AvailabilityActions on_contact=set_booking_open/>
                    </aside>
                </div>
            </div>

            <div class="lg:hidden sticky bottom-0 bg-white/95 border-t border-gray-200 p-4">
                <div class="text-center mb-3">
                    <div class="font-semibold text-teal-700">"Limited Availability!"</div>
                    <div class="text-sm text-gray-600">"Book Your Experience Today"</div>
                </div>
                <AvailabilityActions on_contact=set_booking_open/>
            </div>

            <Show when=move || booking_open.get()>
                <ContactSupplier on_close=Callback::new(move |_| set_booking_open.set(false))/>
            </Show>
        </div>
    }
}
