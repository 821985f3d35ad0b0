//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{
    blog_item_details::BlogItemDetails, cart::CartPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, products::ProductsPage,
};
use crate::state::auth::CredentialProvider;
use crate::util::auth::NOT_FOUND_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Uses the `CredentialProvider` supplied by the host (the server injects one
/// per request), or the browser cookie store when none was provided.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<CredentialProvider>().is_none() {
        provide_context(CredentialProvider::browser());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=NOT_FOUND_PATH/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Protected><HomePage/></Protected> }/>
                <Route path=StaticSegment("products") view=|| view! { <Protected><ProductsPage/></Protected> }/>
                <Route path=StaticSegment("cart") view=|| view! { <Protected><CartPage/></Protected> }/>
                <Route path=StaticSegment("not-found") view=NotFoundPage/>
                <Route path=(StaticSegment("blogs"), ParamSegment("id")) view=BlogItemDetails/>
            </Routes>
        </Router>
    }
}
