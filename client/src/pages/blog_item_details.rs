//! Blog detail page: loads one blog by route id and renders it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns a `DetailState` signal. On mount (browser only) it starts
//! the single load under a `TaskHandle` registered with `on_cleanup`, so
//! leaving the page cancels an in-flight request. The server render always
//! shows the loading placeholder.

#[cfg(test)]
#[path = "blog_item_details_test.rs"]
mod blog_item_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::blog::{BlogDetail, DetailState};

pub(crate) const LOADING_TEXT: &str = "Loading...";

/// What the page renders for a given load state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DetailView {
    Placeholder,
    Article(BlogDetail),
    Failure(String),
}

pub(crate) fn detail_view(state: &DetailState) -> DetailView {
    match state {
        DetailState::Idle | DetailState::Loading => DetailView::Placeholder,
        DetailState::Loaded(detail) => DetailView::Article(detail.clone()),
        DetailState::Failed(reason) => DetailView::Failure(failure_message(reason)),
    }
}

pub(crate) fn failure_message(reason: &str) -> String {
    format!("Could not load this blog: {reason}")
}

#[component]
pub fn BlogItemDetails() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(DetailState::Idle);

    #[cfg(feature = "hydrate")]
    {
        let id = params.read_untracked().get("id").unwrap_or_default();
        let load = crate::net::loader::detail_load(state, async move { crate::net::api::fetch_blog(&id).await });
        let handle = crate::util::task::spawn_abortable(load);
        on_cleanup(move || handle.abort());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        state.update(|s| {
            s.begin();
        });
    }

    view! {
        <div class="blog-item-details-container">
            {move || detail_markup(state.with(detail_view))}
        </div>
    }
}

/// Markup for one [`DetailView`].
pub(crate) fn detail_markup(view: DetailView) -> AnyView {
    match view {
        DetailView::Placeholder => view! { <p>{LOADING_TEXT}</p> }.into_any(),
        DetailView::Article(blog) => view! {
            <div class="blog-item-details">
                <h1 class="blog-title">{blog.title.clone()}</h1>
                <div class="author-container">
                    <img src=blog.avatar_url alt=blog.author.clone() class="avatar"/>
                    <p class="author-name">{blog.author}</p>
                </div>
                <img src=blog.image_url alt=blog.title class="blog-image"/>
                <p class="blog-content">{blog.content}</p>
            </div>
        }
        .into_any(),
        DetailView::Failure(message) => view! { <p class="blog-error">{message}</p> }.into_any(),
    }
}
