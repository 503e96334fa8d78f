use leptos::prelude::*;

use super::brand_logo::BrandLogo;
use crate::data::product::{HERO_ALT, HERO_IMAGE};

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <div class="flex items-center justify-between px-4 py-3 border-b border-gray-100" role="banner">
            <button class="w-9 h-9 rounded-full hover:bg-gray-100" aria-label="Go back"
                on:click=|_| {
                    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                        let _ = history.back();
                    }
                }
            >
                "←"
            </button>
            <BrandLogo/>
            <div class="flex items-center gap-2">
                <button class="w-9 h-9 rounded-full hover:bg-gray-100" aria-label="Share">"↗"</button>
                <button class="px-3 py-1.5 text-sm rounded-full border border-gray-300">"Help"</button>
            </div>
        </div>
    }
}

#[component]
pub fn HeroImage() -> impl IntoView {
    view! {
        <div class="relative w-full h-64 lg:h-80 overflow-hidden bg-gray-200">
            <img src=HERO_IMAGE alt=HERO_ALT class="w-full h-full object-cover"/>
            <div class="absolute bottom-3 inset-x-0 flex justify-center gap-1.5" aria-hidden="true">
                <span class="w-2 h-2 rounded-full bg-white"></span>
                {(0..4).map(|_| view! { <span class="w-2 h-2 rounded-full bg-white/50"></span> }).collect_view()}
            </div>
        </div>
    }
}
