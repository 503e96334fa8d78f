use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::{Breadcrumbs, REQUEST_PATH};
use crate::components::header::PageHeader;
use crate::data::availability::ContactDetails;
use crate::data::product::PRODUCT_TITLE;
use crate::data::storage::{CheckoutStore, DraftStore, RequestLog};
use crate::utils::validation::{validate_contact, ContactField, FieldErrors};

#[component]
fn ContactInput(
    field: ContactField,
    form: RwSignal<ContactDetails>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field));

    view! {
        <div class="flex flex-col">
            <label for=field.name() class="text-sm font-medium text-gray-700 mb-1">
                {field.label()}" *"
            </label>
            <input
                type=field.input_type()
                id=field.name()
                name=field.name()
                placeholder=field.placeholder()
                class=move || format!(
                    "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-teal-500 {}",
                    if error().is_some() { "border-red-500" } else { "border-gray-300" }
                )
                prop:value=move || form.with(|f| field.value(f).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| field.set(f, value));
                    if error().is_some() {
                        errors.update(|e| e.clear(field));
                    }
                }
            />
            {move || error().map(|msg| view! { <span class="mt-1 text-sm text-red-600">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(ContactDetails::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (show_toast, set_show_toast) = signal(false);

    Effect::new(move |_| {
        if let Some(saved) = CheckoutStore::browser().load() {
            form.set(saved);
        }
    });

    let send_request = move |_| {
        let contact = form.get_untracked();
        let found = validate_contact(&contact);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        if let Err(e) = CheckoutStore::browser().save(&contact) {
            leptos::logging::warn!("Could not save checkout details: {}", e);
        }

        let drafts = DraftStore::browser();
        let Some(draft) = drafts.load().filter(|d| !d.dates.is_empty()) else {
            set_submit_error.set(Some("No dates selected yet.".into()));
            return;
        };

        match RequestLog::browser().add(draft, Some(contact)) {
            Ok(request) => {
                leptos::logging::log!("Availability request {} sent", request.id);
                drafts.clear();
                set_submit_error.set(None);
                set_show_toast.set(true);
                navigate("/confirmation", Default::default());
            }
            Err(e) => {
                leptos::logging::warn!("Could not store availability request: {}", e);
                set_submit_error.set(Some("Your request could not be sent, please try again.".into()));
            }
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white">
            <PageHeader/>
            <div class="max-w-3xl w-full mx-auto px-4 pt-4">
                <Breadcrumbs/>
            </div>
            <div class="max-w-3xl w-full mx-auto px-4 py-4">
                <h1 class="text-2xl font-bold text-gray-900">"Complete Your Request"</h1>
                <p class="mt-2 text-gray-700">
                    {format!("Please provide your contact details to send the availability request for {}.", PRODUCT_TITLE)}
                </p>
            </div>
            <div class="max-w-3xl w-full mx-auto px-4 flex-1">
                <form class="flex flex-col gap-4" on:submit=|ev| ev.prevent_default()>
                    {ContactField::ALL.into_iter().map(|field| view! {
                        <ContactInput field=field form=form errors=errors/>
                    }).collect_view()}
                </form>
                {move || submit_error.get().map(|msg| view! {
                    <p class="mt-4 text-sm text-red-600">
                        {msg}" "<A href=REQUEST_PATH>"Choose dates"</A>
                    </p>
                })}
            </div>
            <div class="sticky bottom-0 bg-white/95 border-t border-gray-200 p-4 mt-6">
                <div class="max-w-3xl mx-auto">
                    <p class="text-xs text-gray-600 mb-3">
                        "This will send a request to check these dates' availability with the experience provider. "
                        "Expect an email with the response within 24h of requesting."
                    </p>
                    <button
                        type="button"
                        class="w-full px-5 py-3 rounded-full bg-teal-600 text-white font-semibold"
                        on:click=send_request
                    >
                        "Send Request"
                    </button>
                </div>
            </div>
            <Show when=move || show_toast.get()>
                <div class="fixed top-4 inset-x-4 lg:inset-x-auto lg:right-4 lg:w-96 p-4 rounded-lg bg-emerald-600 text-white shadow-lg flex gap-3" role="status" aria-live="polite">
                    <div class="text-sm">
                        "Your request has been sent successfully! We will email you with the availability response within 24 hours."
                    </div>
                    <button class="text-xl leading-none" aria-label="Close notification" on:click=move |_| set_show_toast.set(false)>"×"</button>
                </div>
            </Show>
        </div>
    }
}
