//! Top navigation bar shown on guarded pages.

use leptos::prelude::*;

const LOGO_URL: &str = "https://assets.ccbp.in/frontend/react-js/logo-img.png";

/// Navigation links rendered in the header, in display order.
pub(crate) const NAV_LINKS: [(&str, &str); 3] = [("Home", "/"), ("Products", "/products"), ("Cart", "/cart")];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="nav-header">
            <div class="nav-content">
                <a href="/">
                    <img class="website-logo" src=LOGO_URL alt="website logo"/>
                </a>
                <ul class="nav-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <a class="nav-link" href=href>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
