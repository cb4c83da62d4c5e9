//! Club routes: my join requests, club creation, club details.

#[cfg(test)]
#[path = "clubs_test.rs"]
mod clubs_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::state::join_requests::JoinRequestsState;
use crate::util::avatar::avatar_for_name;
use crate::util::format::format_date;
#[cfg(feature = "csr")]
use crate::{
    services::clubs::{cancel_join_request, create_club, my_join_requests},
    services::tasks::{DEFAULT_TASK_PAGE_SIZE, club_tasks},
    util::format::list_titles,
};

fn created_club_path(created: &serde_json::Value) -> String {
    match created.get("id") {
        Some(serde_json::Value::String(id)) if !id.is_empty() => format!("/app/club/{id}"),
        Some(serde_json::Value::Number(id)) => format!("/app/club/{id}"),
        _ => "/app/clubs".to_owned(),
    }
}

fn create_club_payload(name: &str, description: &str) -> Result<serde_json::Value, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Give the club a name.");
    }
    Ok(serde_json::json!({ "name": name, "description": description.trim() }))
}

#[cfg(feature = "csr")]
fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
}

#[component]
pub fn ClubsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let requests = RwSignal::new(JoinRequestsState::default());
    let api = ApiClient::new(config.api_base_url.clone());

    requests.update(JoinRequestsState::begin_fetch);
    let load_api = api.clone();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = my_join_requests(&load_api).await;
        requests.update(|s| s.finish_fetch(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = load_api;

    let on_cancel = Callback::new(move |request_id: String| {
        let api = api.clone();
        #[cfg(feature = "csr")]
        {
            if !confirm("Cancel this request?") {
                return;
            }
            leptos::task::spawn_local(async move {
                match cancel_join_request(&api, &request_id).await {
                    Ok(()) => requests.update(|s| s.remove(&request_id)),
                    Err(e) => log::error!("cancel join request failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (api, request_id);
    });

    view! {
        <section class="clubs">
            <header class="clubs__header">
                <h1>"Clubs"</h1>
                <a href="/app/clubs/create" class="clubs__create">"Create a club"</a>
            </header>
            <h2>"My join requests"</h2>
            <Show when=move || requests.with(|s| s.loading)>
                <p>"Loading..."</p>
            </Show>
            <Show when=move || requests.with(|s| s.error.is_some())>
                <p class="clubs__error">{move || requests.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <ul class="clubs__requests">
                <For
                    each=move || requests.get().items
                    key=|r| r.id.clone()
                    children=move |r| {
                        let id = r.id.clone();
                        view! {
                            <li>
                                <img class="clubs__avatar" src=avatar_for_name(Some(&r.club_name)) alt="" />
                                <a href=format!("/app/club/{}", r.club_id)>{r.club_name.clone()}</a>
                                <span class="clubs__status">{r.status.clone()}</span>
                                <span class="clubs__date">{format_date(r.created_at.as_deref().unwrap_or_default())}</span>
                                <button on:click=move |_| on_cancel.run(id.clone())>"Cancel"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[component]
pub fn CreateClubPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match create_club_payload(&name.get(), &description.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = ApiClient::new(config.api_base_url.clone());
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match create_club(&api, &payload).await {
                Ok(created) => navigate(&created_club_path(&created), NavigateOptions::default()),
                Err(e) => info.set(format!("Could not create club: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, navigate, payload);
    };

    view! {
        <section class="create-club">
            <h1>"Create a club"</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Club name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="What is this club about?"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || busy.get()>"Create"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="create-club__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

#[component]
pub fn ClubDetailsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let params = use_params_map();
    let tasks = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);
    let club_id = move || params.read().get("id").unwrap_or_default();

    Effect::new(move || {
        let id = club_id();
        if id.is_empty() {
            return;
        }
        let api = ApiClient::new(config.api_base_url.clone());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match club_tasks(&api, &id, 1, DEFAULT_TASK_PAGE_SIZE).await {
                Ok(payload) => {
                    error.set(None);
                    tasks.set(list_titles(&payload));
                }
                Err(e) => error.set(Some(format!("Could not load club tasks: {e}"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, id);
    });

    view! {
        <section class="club-details">
            <h1>{move || format!("Club {}", club_id())}</h1>
            <Show when=move || error.get().is_some()>
                <p class="club-details__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <h2>"Tasks"</h2>
            <ul>
                <For
                    each={move || tasks.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key={|(i, _)| *i}
                    children={|(_, title)| view! { <li>{title}</li> }}
                />
            </ul>
        </section>
    }
}
