use super::*;
use std::sync::{Arc, Mutex};

use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes, provide_server_redirect};
use leptos_router::location::RequestUrl;

use crate::state::auth::StaticCredentials;

/// Server-render `/products` behind `Protected`; returns the HTML and any
/// redirect targets the guard issued.
fn render_products(credentials: StaticCredentials) -> (String, Vec<String>) {
    let redirects = Arc::new(Mutex::new(Vec::new()));
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(RequestUrl::new("/products"));
        provide_context(CredentialProvider::new(credentials));
        let sink = Arc::clone(&redirects);
        provide_server_redirect(move |path| sink.lock().unwrap().push(path.to_owned()));
        view! {
            <Router>
                <Routes fallback=|| "unmatched">
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <Protected><p class="deals">"Prime deals"</p></Protected> }
                    />
                </Routes>
            </Router>
        }
        .to_html()
    });
    let redirects = redirects.lock().unwrap().clone();
    (html, redirects)
}

#[test]
fn absent_token_redirects_to_login_without_rendering_children() {
    let (html, redirects) = render_products(StaticCredentials::absent());
    assert_eq!(redirects, vec!["/login".to_owned()]);
    assert!(!html.contains("Prime deals"), "{html}");
}

#[test]
fn present_token_renders_children() {
    let (html, redirects) = render_products(StaticCredentials::present("abc123"));
    assert!(redirects.is_empty(), "{redirects:?}");
    assert!(html.contains(r#"<p class="deals">Prime deals</p>"#), "{html}");
}

#[test]
fn empty_token_renders_children() {
    let (html, redirects) = render_products(StaticCredentials::present(""));
    assert!(redirects.is_empty(), "{redirects:?}");
    assert!(html.contains("Prime deals"), "{html}");
}
