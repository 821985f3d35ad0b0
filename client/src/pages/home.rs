//! Landing page behind the route guard.

use leptos::prelude::*;

use crate::components::header::Header;

const HOME_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/nxt-trendz-home-img.png";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <div class="home-container">
            <div class="home-content">
                <h1 class="home-heading">"Clothes That Get YOU Noticed"</h1>
                <img src=HOME_IMAGE_URL alt="clothes that get you noticed" class="home-mobile-img"/>
                <p class="home-description">
                    "Fashion is part of the daily air and it does not quite help that it changes all the time."
                </p>
                <a href="/products" class="shop-now-button">
                    "Shop Now"
                </a>
            </div>
            <img src=HOME_IMAGE_URL alt="clothes that get you noticed" class="home-desktop-img"/>
        </div>
    }
}
