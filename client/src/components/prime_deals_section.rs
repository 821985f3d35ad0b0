//! Static "Prime Deals" banner on the products page.

use leptos::prelude::*;

const PRIME_DEALS_BANNER_URL: &str = "https://assets.ccbp.in/frontend/react-js/exclusive-deals-banner-img.png";

#[component]
pub fn PrimeDealsSection() -> impl IntoView {
    view! {
        <div class="prime-deals-container">
            <h1 class="primedeals-list-heading">"Exclusive Prime Deals"</h1>
            <img src=PRIME_DEALS_BANNER_URL alt="Register Prime" class="register-prime-image"/>
        </div>
    }
}
