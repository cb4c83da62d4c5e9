//! Session wiring between the router and the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_session` builds the one `SessionStore` for the app and exposes it
//! through context: views get a `ReadSignal<Session>` for reactive reads and
//! the store handle for actions. `install_navigation_guard` evaluates every
//! location change with `RouteGuard`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::state::session::SignalSession;
use crate::state::session_store::SessionStore;
use crate::util::guard::{GuardDecision, RouteGuard};
use crate::util::redirect::{RedirectPolicy, RouterNavigator};

/// The store as wired in the browser.
pub type ClientSessionStore = SessionStore<ApiClient, SignalSession, RouterNavigator>;

/// Context handle for the store; the store itself is `!Send`.
pub type SessionHandle = StoredValue<ClientSessionStore, LocalStorage>;

/// Build the session store and provide it (and the read-only session
/// signal) to descendants. Must run under `<Router>`.
pub fn provide_session(config: &AppConfig) -> ClientSessionStore {
    let navigate = use_navigate();
    let navigator = RouterNavigator::new(move |path: &str| {
        navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
    let cell = SignalSession::new();
    let store = SessionStore::new(
        ApiClient::new(config.api_base_url.clone()),
        cell,
        RedirectPolicy::new(config.login_path.clone(), navigator),
    );

    provide_context(cell.reader());
    provide_context(SessionHandle::new_local(store.clone()));
    store
}

/// The app's session store from context.
pub fn use_session_store() -> ClientSessionStore {
    expect_context::<SessionHandle>().get_value()
}

/// Run the guard on every location change that needs a session check.
pub fn install_navigation_guard(store: ClientSessionStore, guard: RouteGuard) {
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        if guard.decide(&store.session(), &path) != GuardDecision::AwaitCheck {
            return;
        }
        let store = store.clone();
        let guard = guard.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let decision = guard.resolve(&store, &path).await;
            log::debug!("navigation to {path}: {decision:?}");
        });
        #[cfg(not(feature = "csr"))]
        let _ = (store, guard, path);
    });
}
