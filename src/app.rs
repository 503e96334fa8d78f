use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{FlatRoutes, Route, Router},
    StaticSegment,
};

use crate::pages::checkout::CheckoutPage;
use crate::pages::confirmation::ConfirmationPage;
use crate::pages::future_version::FutureVersionPage;
use crate::pages::home::HomePage;
use crate::pages::records::RecordsPage;
use crate::pages::request_to_book::RequestToBookPage;
use crate::pages::supplier::SupplierPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Stylesheet id="leptos" href="/pkg/experience-availability.css"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico"/>
                <Link rel="preconnect" href="https://fonts.googleapis.com"/>
                <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <Link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet"/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Experience availability"/>
        <Router>
            <FlatRoutes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("request-to-book") view=RequestToBookPage/>
                <Route path=StaticSegment("future") view=FutureVersionPage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
                <Route path=StaticSegment("confirmation") view=ConfirmationPage/>
                <Route path=StaticSegment("supplier") view=SupplierPage/>
                <Route path=StaticSegment("records") view=RecordsPage/>
            </FlatRoutes>
        </Router>
    }
}
