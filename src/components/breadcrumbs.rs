use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::data::product::PRODUCT_TITLE;

pub const REQUEST_PATH: &str = "/request-to-book";

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let is_request_page = move || location.pathname.get() == REQUEST_PATH;

    view! {
        <nav class="text-sm text-gray-500 flex flex-wrap gap-1" aria-label="Breadcrumb">
            <span><A href="/">"My Voucher"</A></span>
            <span>" -> "</span>
            {move || if is_request_page() {
                view! {
                    <span><A href="/">{PRODUCT_TITLE}</A></span>
                    <span>" -> "</span>
                    <span class="text-gray-900" aria-current="page">"Request Availability"</span>
                }.into_any()
            } else {
                view! {
                    <span class="text-gray-900" aria-current="page">{PRODUCT_TITLE}</span>
                }.into_any()
            }}
        </nav>
    }
}
