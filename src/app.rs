//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{
    clubs::{ClubDetailsPage, ClubsPage, CreateClubPage},
    cockpit::CockpitPage,
    layout::AppLayout,
    login::LoginPage,
    profile::ProfilePage,
    public::{ErrorPage, LandingPage, NotFoundPage, RegisterPage},
};
use crate::util::auth::{install_navigation_guard, provide_session};
use crate::util::guard::RouteGuard;

/// Session context and the navigation guard; needs the router above it.
#[component]
fn SessionScope(children: Children) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = provide_session(&config);
    install_navigation_guard(store, RouteGuard::from_config(&config));
    children()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::from_build_env());

    view! {
        <Title text="ClubDesk"/>

        <Router>
            <SessionScope>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("error"), OptionalParamSegment("code")) view=ErrorPage/>
                    <ParentRoute path=StaticSegment("app") view=AppLayout>
                        <Route path=StaticSegment("cockpit") view=CockpitPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=(StaticSegment("profile"), ParamSegment("username")) view=ProfilePage/>
                        <Route path=StaticSegment("clubs") view=ClubsPage/>
                        <Route path=(StaticSegment("clubs"), StaticSegment("create")) view=CreateClubPage/>
                        <Route path=(StaticSegment("club"), ParamSegment("id")) view=ClubDetailsPage/>
                        <Route path=StaticSegment("") view=CockpitPage/>
                    </ParentRoute>
                </Routes>
            </SessionScope>
        </Router>
    }
}
