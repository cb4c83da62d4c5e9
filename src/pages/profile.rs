//! `/app/profile` and `/app/profile/:username`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::types::UserProfile;
#[cfg(feature = "csr")]
use crate::services::profile::profile_by_username;
use crate::state::external_profile::ExternalProfileState;
use crate::state::session::Session;
use crate::util::avatar::session_avatar_url;

/// No username, `me`, or the signed-in user's own name all show the session user.
fn is_own_profile(session: &Session, username: Option<&str>) -> bool {
    match username.filter(|u| !u.is_empty()) {
        None | Some("me") => true,
        Some(name) => session
            .user
            .as_ref()
            .and_then(|u| u.user_name.as_deref())
            .is_some_and(|own| own == name),
    }
}

fn profile_rows(user: &UserProfile) -> Vec<(&'static str, String)> {
    [("Name", Some(user.full_name())), ("Username", user.user_name.clone()), ("Email", user.email.clone())]
        .into_iter()
        .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
        .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<ReadSignal<Session>>();
    let config = expect_context::<AppConfig>();
    let params = use_params_map();
    let external = RwSignal::new(ExternalProfileState::default());

    let username = move || params.read().get("username");
    let own = move || session.with(|s| is_own_profile(s, username().as_deref()));

    Effect::new(move || {
        let is_mine = own();
        let target = username();
        let Some(target) = external.try_update(|s| s.begin(is_mine, target.as_deref())).flatten() else {
            return;
        };
        let api = ApiClient::new(config.api_base_url.clone());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = profile_by_username(&api, &target).await;
            external.update(|s| s.finish(result));
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, target);
    });

    let shown = move || {
        if own() {
            session.with(|s| s.user.clone())
        } else {
            external.with(|s| s.user.clone())
        }
    };

    view! {
        <section class="profile">
            <Show when=move || external.with(|s| s.loading) && !own()>
                <p>"Loading profile..."</p>
            </Show>
            <Show when=move || !own() && external.with(|s| s.error.is_some())>
                <p class="profile__error">{move || external.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            {move || {
                shown()
                    .map(|user| {
                        let avatar = session_avatar_url(Some(&user));
                        let rows = profile_rows(&user);
                        view! {
                            <div class="profile__card">
                                <img class="profile__avatar" src=avatar alt="avatar" />
                                <dl>
                                    {rows
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
