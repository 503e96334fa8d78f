use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::date_time_location_picker::DateTimeLocationPicker;
use crate::components::header::{HeroImage, PageHeader};
use crate::components::product::{AboutExperience, ProductSummary};

#[component]
pub fn RequestToBookPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <PageHeader/>
            <HeroImage/>
            <div class="max-w-5xl w-full mx-auto px-4 pt-4">
                <Breadcrumbs/>
            </div>
            <div class="max-w-5xl w-full mx-auto px-4 py-4">
                <ProductSummary/>
                <AboutExperience/>
            </div>
            <div class="max-w-5xl w-full mx-auto px-4 pb-8">
                <div class="p-4 rounded-2xl border border-gray-200 shadow-sm">
                    <div class="text-center mb-4">
                        <div class="font-semibold text-teal-700">"Limited Availability!"</div>
                        <div class="text-sm text-gray-600">"Choose Location to Request"</div>
                    </div>
                    <DateTimeLocationPicker/>
                </div>
            </div>
        </div>
    }
}
