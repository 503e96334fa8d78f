use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::calendar_popover::CalendarPopover;
use crate::components::header::{HeroImage, PageHeader};
use crate::components::location_sheet::LocationActionSheet;
use crate::components::product::{AboutExperience, ProductSummary};
use crate::components::timeslot_modal::TimeslotModal;
use crate::data::availability::{AvailabilityDraft, DateSelection};
use crate::data::product::DEFAULT_LOCATION;
use crate::data::storage::DraftStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Closed,
    Location,
    Calendar,
    Timeslots,
}

#[component]
fn LocationChip(location: RwSignal<String>, panel: RwSignal<Panel>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-gray-300 text-sm"
            aria-haspopup="listbox"
            aria-expanded=move || (panel.get() == Panel::Location).to_string()
            on:click=move |_| panel.set(Panel::Location)
        >
            <span aria-hidden="true">"📍"</span>
            {move || {
                let loc = location.get();
                if loc.is_empty() { "Add location".to_string() } else { loc }
            }}
        </button>
    }
}

/// Product page variant where location, dates and times are picked through
/// a chip, a calendar popover and a timeslot modal in turn.
#[component]
pub fn FutureVersionPage() -> impl IntoView {
    let location = RwSignal::new(DEFAULT_LOCATION.to_string());
    let panel = RwSignal::new(Panel::Closed);
    let selection = RwSignal::new(DateSelection::default());

    let close = Callback::new(move |_: ()| panel.set(Panel::Closed));
    let to_timeslots = Callback::new(move |_: ()| {
        let draft = AvailabilityDraft::new(location.get_untracked(), &selection.get_untracked());
        if let Err(e) = DraftStore::browser().save(&draft) {
            leptos::logging::warn!("Could not save availability draft: {}", e);
        }
        panel.set(Panel::Timeslots);
    });
    let open_calendar = move |_| panel.set(Panel::Calendar);

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
                        <div class="lg:hidden">
                            <div class="my-4 border-t border-gray-200"></div>
                            <LocationChip location=location panel=panel/>
                        </div>
                        <AboutExperience/>
                    </div>
                    <aside class="hidden lg:flex flex-col gap-4 w-80 self-start p-5 rounded-2xl border border-gray-200 shadow-sm" aria-label="Availability actions">
                        <div>
                            <div class="font-semibold text-gray-900">"Limited Availability."</div>
                            <div class="text-sm text-gray-600">"Select your dates to check"</div>
                        </div>
                        <LocationChip location=location panel=panel/>
                        <button
                            type="button"
                            class="w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold"
                            aria-haspopup="dialog"
                            on:click=open_calendar
                        >
                            "Check Availability"
                        </button>
                    </aside>
                </div>
            </div>

            <div class="lg:hidden sticky bottom-0 bg-white/95 border-t border-gray-200 p-4">
                <button
                    type="button"
                    class="w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold"
                    aria-haspopup="dialog"
                    on:click=open_calendar
                >
                    "Check availability"
                </button>
            </div>

            {move || match panel.get() {
                Panel::Closed => ().into_any(),
                Panel::Location => view! {
                    <LocationActionSheet
                        selected=location
                        on_select=Callback::new(move |loc: String| location.set(loc))
                        on_close=close
                    />
                }.into_any(),
                Panel::Calendar => view! {
                    <CalendarPopover selection=selection on_close=close on_continue=to_timeslots/>
                }.into_any(),
                Panel::Timeslots => view! { <TimeslotModal on_close=close/> }.into_any(),
            }}
        </div>
    }
}
