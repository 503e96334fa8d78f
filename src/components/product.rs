use leptos::prelude::*;

use crate::data::product::{
    DESCRIPTION, GOOD_TO_KNOW, INCLUDED, PRODUCT_ADDRESS, PRODUCT_ID, PRODUCT_TITLE, USE_BY,
};

#[component]
pub fn ProductSummary() -> impl IntoView {
    view! {
        <div>
            <div class="text-xs text-gray-500">{PRODUCT_ID}</div>
            <h1 class="mt-1 text-2xl lg:text-3xl font-bold text-gray-900 leading-tight">{PRODUCT_TITLE}</h1>
            <div class="mt-2 text-sm text-gray-600">
                <span aria-hidden="true">"📍 "</span>{PRODUCT_ADDRESS}
            </div>
            <div class="mt-2 flex items-center gap-3 text-sm">
                <span class="text-gray-700">{USE_BY}</span>
                <span class="text-teal-700 underline cursor-pointer" role="button" tabindex="0">"Extend"</span>
            </div>
            <div class="mt-1 text-sm text-gray-700">"🔁 "<span class="font-medium">"Fully Flexible"</span></div>
        </div>
    }
}

#[component]
fn BulletSection(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="my-5 border-t border-gray-200"></div>
        <h2 class="text-lg font-semibold text-gray-900 mb-2">{title}</h2>
        <ul class="list-disc pl-5 text-gray-700 space-y-1">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn AboutExperience(#[prop(optional)] full: bool) -> impl IntoView {
    view! {
        <div class="my-5 border-t border-gray-200"></div>
        <h2 class="text-lg font-semibold text-gray-900 mb-2">"About the experience"</h2>
        <p class="text-gray-700 leading-relaxed">{DESCRIPTION}</p>
        {full.then(|| view! {
            <BulletSection title="What's included?" items=&INCLUDED/>
            <BulletSection title="What do I need to know?" items=&GOOD_TO_KNOW/>
        })}
    }
}
