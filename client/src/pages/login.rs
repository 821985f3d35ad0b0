//! Login page.
//!
//! Visitors that already hold a credential are sent home. The form checks its
//! inputs but does not issue credentials: the `jwt_token` cookie is written by
//! the identity service in front of this app.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::CredentialProvider;
use crate::util::auth::login_redirect;

const SIGN_IN_UNAVAILABLE: &str = "Sign-in is handled by the identity service.";

/// Require a non-blank username and a non-empty password.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let credentials = use_context::<CredentialProvider>().unwrap_or_else(CredentialProvider::browser);
    if let Some(path) = login_redirect(&credentials) {
        return view! { <Redirect path=path/> }.into_any();
    }

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&username.get(), &password.get()) {
            Ok(()) => info.set(SIGN_IN_UNAVAILABLE.to_owned()),
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="login-form-container">
            <form class="form-container" on:submit=on_submit>
                <h1 class="login-heading">"Login"</h1>
                <div class="input-container">
                    <label class="input-label" for="username">
                        "USERNAME"
                    </label>
                    <input
                        id="username"
                        class="username-input-field"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-container">
                    <label class="input-label" for="password">
                        "PASSWORD"
                    </label>
                    <input
                        id="password"
                        class="password-input-field"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="login-button">
                    "Login"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="error-message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
    .into_any()
}
