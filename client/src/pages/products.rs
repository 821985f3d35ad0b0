//! Products page composed from the static deal and catalog sections.

use leptos::prelude::*;

use crate::components::all_products_section::AllProductsSection;
use crate::components::header::Header;
use crate::components::prime_deals_section::PrimeDealsSection;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <Header/>
        <div class="product-sections">
            <PrimeDealsSection/>
            <AllProductsSection/>
        </div>
    }
}
