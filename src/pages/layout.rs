//! Shell for the authenticated `/app` area.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard decides whether the user may be here; this layout
//! renders nothing of the shell until the session says `authenticated`, so a
//! held navigation shows a placeholder instead of protected content.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::services::notifications::fetch_unread_count;
use crate::state::notifications::NotificationState;
use crate::state::session::Session;
use crate::util::auth::SessionHandle;

/// Header, nav and outlet all wait for an established session.
fn shows_shell(session: &Session) -> bool {
    session.authenticated
}

#[component]
pub fn AppLayout() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let config = expect_context::<AppConfig>();
    let handle = expect_context::<SessionHandle>();
    let notifications = RwSignal::new(NotificationState::default());
    provide_context(notifications);

    // Whenever the session becomes established: refresh identity quietly
    // (the store skips this right after a confirming check) and the badge.
    Effect::new(move |was_authenticated: Option<bool>| {
        let authenticated = session.with(|s| s.authenticated);
        if authenticated && was_authenticated != Some(true) {
            let store = handle.get_value();
            let api = ApiClient::new(config.api_base_url.clone());
            let page_size = config.notifications_page_size;
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                store.refresh().await;
                let result = fetch_unread_count(&api, page_size).await;
                notifications.update(|n| n.apply_fetch(result));
            });
            #[cfg(not(feature = "csr"))]
            let _ = (store, api, page_size);
        }
        authenticated
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let store = handle.get_value();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            store.teardown().await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = store;
    };

    view! {
        <Show
            when=move || session.with(shows_shell)
            fallback=|| view! { <p class="app-main__pending">"Checking session..."</p> }
        >
            <div class="app-shell">
                <header class="app-header">
                    <a href="/app/cockpit" class="app-header__brand">"ClubDesk"</a>
                    <nav class="app-header__nav">
                        <a href="/app/cockpit">"Cockpit"</a>
                        <a href="/app/clubs">"Clubs"</a>
                        <a href="/app/profile">"Profile"</a>
                    </nav>
                    <span class="app-header__badge" title="Unread notifications">
                        {move || notifications.get().unread_count}
                    </span>
                    <img class="app-header__avatar" alt="" src=move || session.with(Session::avatar_url)/>
                    <span class="app-header__name">{move || session.with(Session::display_name)}</span>
                    <button class="app-header__logout" on:click=on_logout>"Log out"</button>
                </header>
                <main class="app-main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
