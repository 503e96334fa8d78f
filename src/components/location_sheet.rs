use leptos::prelude::*;

use super::overlay::Overlay;
use crate::data::product::LOCATIONS;

#[component]
pub fn LocationOptions(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div role="listbox" aria-label="Choose location" class="flex flex-col">
            {LOCATIONS.iter().map(|loc| {
                let loc = loc.to_string();
                let is_selected = {
                    let loc = loc.clone();
                    move || selected.get() == loc
                };
                let is_selected_class = is_selected.clone();
                let choice = loc.clone();
                view! {
                    <button
                        type="button"
                        role="option"
                        aria-selected=move || is_selected().to_string()
                        class=move || format!(
                            "text-left px-4 py-3 rounded-lg {}",
                            if is_selected_class() { "bg-teal-50 text-teal-800 font-semibold" } else { "hover:bg-gray-50" }
                        )
                        on:click=move |_| on_select.run(choice.clone())
                    >
                        {loc}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Location chooser opened from a location chip.
#[component]
pub fn LocationActionSheet(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let choose = Callback::new(move |loc: String| {
        on_select.run(loc);
        on_close.run(());
    });

    view! {
        <Overlay title="Choose Location" on_close=on_close>
            <LocationOptions selected=selected on_select=choose/>
        </Overlay>
    }
}
