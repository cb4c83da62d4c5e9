//! Public routes: landing, registration notice, and error pages.

#[cfg(test)]
#[path = "public_test.rs"]
mod public_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

fn error_message(code: Option<&str>) -> &'static str {
    match code {
        Some("401" | "403") => "You do not have access to this page.",
        Some("500" | "502" | "503") => "Something went wrong on our side. Please try again later.",
        _ => "Page not found.",
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"ClubDesk"</h1>
            <p>"Clubs, tasks, contracts and payslips in one place."</p>
            <a href="/app/cockpit" class="landing-page__cta">"Open the app"</a>
            <a href="/login" class="landing-page__link">"Sign in"</a>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="register-page">
            <h1>"Create an account"</h1>
            <p>"Ask your club administrator for an invitation, then sign in."</p>
            <a href="/login">"Back to sign in"</a>
        </div>
    }
}

/// `/error/:code?`.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let params = use_params_map();
    let code = move || params.read().get("code");
    view! {
        <div class="error-page">
            <h1>{move || code().unwrap_or_else(|| "404".to_owned())}</h1>
            <p>{move || error_message(code().as_deref())}</p>
            <a href="/">"Go home"</a>
        </div>
    }
}

/// Fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"404"</h1>
            <p>{error_message(None)}</p>
            <a href="/">"Go home"</a>
        </div>
    }
}
