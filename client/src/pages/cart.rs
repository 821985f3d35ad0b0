//! Cart page behind the route guard.

use leptos::prelude::*;

use crate::components::header::Header;

const CART_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/nxt-trendz-cart-img.png";

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <Header/>
        <div class="cart-container">
            <img src=CART_IMAGE_URL alt="cart" class="cart-img"/>
        </div>
    }
}
