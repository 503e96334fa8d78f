use leptos::prelude::*;

/// Runs `on_close` when Escape is pressed while the calling component lives.
pub fn use_escape_to_close(on_close: Callback<()>) {
    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    let _ = on_close;
}

/// Bottom sheet on mobile, centred dialog on wide screens. Clicking the
/// backdrop closes it.
#[component]
pub fn Overlay(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    use_escape_to_close(on_close);

    view! {
        <div
            class="fixed inset-0 z-40 flex items-end lg:items-center justify-center"
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
        >
            <div class="absolute inset-0 bg-black/40"></div>
            <div
                class="relative w-full lg:max-w-lg bg-white rounded-t-2xl lg:rounded-2xl shadow-xl max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between px-5 py-4 border-b border-gray-200">
                    <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                    <button
                        class="text-2xl leading-none text-gray-500 hover:text-gray-800"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="px-5 py-4">{children()}</div>
            </div>
        </div>
    }
}
