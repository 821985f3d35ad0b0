//! Target of the router's unconditional fallback redirect.

use leptos::prelude::*;

const NOT_FOUND_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/not-found-blog-img.png";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-container">
            <img src=NOT_FOUND_IMAGE_URL alt="not found" class="not-found-img"/>
            <h1>"Page Not Found"</h1>
        </div>
    }
}
