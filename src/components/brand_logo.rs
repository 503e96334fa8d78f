use leptos::prelude::*;

pub const LOGO_SRC: &str = "/assets/buyagift-by-moonpig.svg";

/// Falls back to a text wordmark if the logo fails to load.
#[component]
pub fn BrandLogo() -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <div aria-label="Brand" role="img" class="inline-block">
            <Show
                when=move || !failed.get()
                fallback=|| view! { <span class="font-bold text-teal-700">"buyagift"</span> }
            >
                <img
                    src=LOGO_SRC
                    alt="buyagift by moonpig"
                    class="h-7"
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::LOGO_SRC;
    use crate::data::product::HERO_IMAGE;

    #[test]
    fn image_paths_are_shipped_assets() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for src in [LOGO_SRC, HERO_IMAGE] {
            let file = public.join(src.trim_start_matches('/'));
            assert!(file.is_file(), "{} is not under public/", src);
        }
    }
}
