//! Static product grid on the products page.

use leptos::prelude::*;

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ProductCard {
    pub title: &'static str,
    pub brand: &'static str,
    pub price: u32,
    pub rating: f32,
    pub image_url: &'static str,
}

pub(crate) const PRODUCTS: [ProductCard; 4] = [
    ProductCard {
        title: "Wide Bowknot Hat",
        brand: "MAJIK",
        price: 288,
        rating: 3.6,
        image_url: "https://assets.ccbp.in/frontend/react-js/ecommerce/clothes-cap.png",
    },
    ProductCard {
        title: "Fit Washed Jeans",
        brand: "LEVI'S",
        price: 1299,
        rating: 4.1,
        image_url: "https://assets.ccbp.in/frontend/react-js/ecommerce/clothes-jeans.png",
    },
    ProductCard {
        title: "Slim Fit Shirt",
        brand: "ROADSTER",
        price: 899,
        rating: 4.3,
        image_url: "https://assets.ccbp.in/frontend/react-js/ecommerce/clothes-shirt.png",
    },
    ProductCard {
        title: "Running Shoes",
        brand: "PUMA",
        price: 2499,
        rating: 4.5,
        image_url: "https://assets.ccbp.in/frontend/react-js/ecommerce/shoes.png",
    },
];

#[component]
fn ProductItem(product: ProductCard) -> impl IntoView {
    view! {
        <li class="product-item">
            <img src=product.image_url alt=product.title class="thumbnail"/>
            <h1 class="title">{product.title}</h1>
            <p class="brand">{format!("by {}", product.brand)}</p>
            <div class="product-details">
                <p class="price">{format!("Rs {}/-", product.price)}</p>
                <div class="rating-container">
                    <p class="rating">{format!("{:.1}", product.rating)}</p>
                </div>
            </div>
        </li>
    }
}

#[component]
pub fn AllProductsSection() -> impl IntoView {
    view! {
        <div class="all-products-container">
            <h1 class="products-list-heading">"All Products"</h1>
            <ul class="products-list">
                {PRODUCTS.into_iter().map(|product| view! { <ProductItem product=product/> }).collect_view()}
            </ul>
        </div>
    }
}
