//! Authenticated home: greeting plus the user's open tasks.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::state::session::Session;
#[cfg(feature = "csr")]
use crate::{
    services::tasks::{DEFAULT_TASK_PAGE_SIZE, user_tasks},
    util::format::list_titles,
};

#[component]
pub fn CockpitPage() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let config = expect_context::<AppConfig>();
    let tasks = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    let api = ApiClient::new(config.api_base_url.clone());
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match user_tasks(&api, 1, DEFAULT_TASK_PAGE_SIZE).await {
            Ok(payload) => tasks.set(list_titles(&payload)),
            Err(e) => error.set(Some(format!("Could not load tasks: {e}"))),
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <section class="cockpit">
            <h1>{move || format!("Welcome, {}", session.with(Session::display_name))}</h1>
            <h2>"My tasks"</h2>
            <Show when=move || error.get().is_some()>
                <p class="cockpit__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="cockpit__tasks">
                <For
                    each={move || tasks.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key={|(i, _)| *i}
                    children={|(_, title)| view! { <li>{title}</li> }}
                />
            </ul>
        </section>
    }
}
