//! Login page: email + password form that establishes a session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::util::auth::use_session_store;

/// Landing route after a successful sign-in.
pub const HOME_PATH: &str = "/app/cockpit";

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Status line once the post-login session check settles.
fn establish_message(established: bool) -> String {
    if established {
        String::new()
    } else {
        "Signed in, but the session could not be confirmed. Try again.".to_owned()
    }
}

fn login_failed_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid email or password.".to_owned()
    } else {
        format!("Sign-in failed: {err}")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let store = use_session_store();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = ApiClient::new(config.api_base_url.clone());
        let store = store.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.login(&credentials).await {
                Ok(()) => {
                    // The server's view of the user is canonical; reload it.
                    let established = store.establish().await;
                    info.set(establish_message(established));
                    if established {
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                }
                Err(e) => info.set(login_failed_message(&e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, store, navigate, credentials);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ClubDesk"</h1>
                <p class="login-card__subtitle">"Sign in to your clubs"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href="/register" class="login-link">"Create an account"</a>
            </div>
        </div>
    }
}
