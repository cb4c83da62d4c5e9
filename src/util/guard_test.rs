use std::pin::pin;
use std::task::Poll;

use super::*;
use crate::net::error::ApiError;
use crate::state::test_helpers::{Reply, ana, fixture};

fn app_guard() -> RouteGuard {
    RouteGuard::new(["/app"])
}

fn signed_in() -> Session {
    Session { authenticated: true, user: Some(ana()), check_in_flight: false }
}

// =============================================================
// is_protected
// =============================================================

#[test]
fn protected_prefix_matches_itself_and_children() {
    let guard = app_guard();
    assert!(guard.is_protected("/app"));
    assert!(guard.is_protected("/app/"));
    assert!(guard.is_protected("/app/profile/me"));
    assert!(guard.is_protected("/app/clubs?page=2"));
}

#[test]
fn public_paths_are_not_protected() {
    let guard = app_guard();
    assert!(!guard.is_protected("/"));
    assert!(!guard.is_protected("/login"));
    assert!(!guard.is_protected("/apple"));
    assert!(!guard.is_protected("/error/404"));
}

#[test]
fn trailing_slash_on_prefix_is_ignored() {
    let guard = RouteGuard::new(["/app/", "/admin"]);
    assert!(guard.is_protected("/app/cockpit"));
    assert!(guard.is_protected("/admin"));
    assert!(!guard.is_protected("/administrator"));
}

#[test]
fn root_prefix_protects_every_path() {
    let guard = RouteGuard::new(["/"]);
    assert!(guard.is_protected("/"));
    assert!(guard.is_protected("/app/cockpit"));
    assert!(guard.is_protected("/login"));
}

#[test]
fn blank_prefixes_are_dropped() {
    let guard = RouteGuard::new([""]);
    assert!(!guard.is_protected("/app"));
}

#[test]
fn root_prefix_holds_navigation_without_session() {
    let guard = RouteGuard::new(["/"]);
    assert_eq!(guard.decide(&Session::default(), "/app/cockpit"), GuardDecision::AwaitCheck);
}

// =============================================================
// decide / settle
// =============================================================

#[test]
fn decide_public_always_proceeds() {
    let request = NavigationRequest { path: "/login", protected: false };
    assert_eq!(decide(&Session::default(), &request), GuardDecision::Proceed);
    assert_eq!(settle(&Session::default(), &request), GuardDecision::Proceed);
}

#[test]
fn decide_protected_without_session_awaits_check() {
    let request = NavigationRequest { path: "/app/clubs", protected: true };
    assert_eq!(decide(&Session::default(), &request), GuardDecision::AwaitCheck);
}

#[test]
fn decide_protected_with_session_proceeds() {
    let request = NavigationRequest { path: "/app/clubs", protected: true };
    assert_eq!(decide(&signed_in(), &request), GuardDecision::Proceed);
}

#[test]
fn settle_protected_without_session_redirects() {
    let request = NavigationRequest { path: "/app/clubs", protected: true };
    assert_eq!(settle(&Session::default(), &request), GuardDecision::RedirectToLogin);
    assert_eq!(settle(&signed_in(), &request), GuardDecision::Proceed);
}

// =============================================================
// resolve
// =============================================================

#[tokio::test]
async fn public_navigation_makes_no_calls() {
    let fx = fixture();
    assert_eq!(app_guard().resolve(&fx.store, "/login").await, GuardDecision::Proceed);
    assert_eq!(fx.api.checks(), 0);
    assert!(fx.navigations.borrow().is_empty());
}

#[tokio::test]
async fn signed_in_navigation_skips_network() {
    let fx = fixture();
    fx.cell.borrow_mut().sign_in(ana());

    assert_eq!(app_guard().resolve(&fx.store, "/app/cockpit").await, GuardDecision::Proceed);
    assert_eq!(app_guard().resolve(&fx.store, "/app/clubs").await, GuardDecision::Proceed);
    assert_eq!(fx.api.checks(), 0);
}

#[tokio::test]
async fn unauthenticated_navigation_checks_once_then_proceeds() {
    let fx = fixture();
    fx.api.push(Reply::Now(Ok(ana())));

    assert_eq!(app_guard().resolve(&fx.store, "/app/cockpit").await, GuardDecision::Proceed);
    assert_eq!(fx.api.checks(), 1);
    assert!(fx.store.is_authenticated());
}

#[tokio::test]
async fn navigation_is_held_until_check_settles() {
    let fx = fixture();
    let gate = fx.api.push_gated();
    let guard = app_guard();

    let mut nav = pin!(guard.resolve(&fx.store, "/app/cockpit"));
    assert!(matches!(futures::poll!(nav.as_mut()), Poll::Pending));
    assert_eq!(fx.api.checks(), 1);

    gate.send(Ok(ana())).unwrap();
    assert_eq!(nav.await, GuardDecision::Proceed);
}

#[tokio::test]
async fn unauthorized_profile_visit_redirects_to_login() {
    let fx = fixture();
    fx.api.push(Reply::Now(Err(ApiError::Unauthorized)));

    let decision = app_guard().resolve(&fx.store, "/app/profile/me").await;

    assert_eq!(decision, GuardDecision::RedirectToLogin);
    assert_eq!(fx.api.checks(), 1);
    let session = fx.store.session();
    assert!(!session.authenticated);
    assert!(session.user.is_none());
    let navigations = fx.navigations.borrow();
    assert!(!navigations.is_empty());
    assert!(navigations.iter().all(|p| p == "/login"));
}

#[tokio::test]
async fn concurrent_navigations_share_one_check() {
    let fx = fixture();
    let gate = fx.api.push_gated();
    let guard = app_guard();

    let mut first = pin!(guard.resolve(&fx.store, "/app/clubs"));
    let mut second = pin!(guard.resolve(&fx.store, "/app/cockpit"));
    assert!(matches!(futures::poll!(first.as_mut()), Poll::Pending));
    assert!(matches!(futures::poll!(second.as_mut()), Poll::Pending));

    gate.send(Ok(ana())).unwrap();
    assert_eq!(first.await, GuardDecision::Proceed);
    assert_eq!(second.await, GuardDecision::Proceed);
    assert_eq!(fx.api.checks(), 1);
}

#[tokio::test]
async fn concurrent_navigations_both_denied_on_failure() {
    let fx = fixture();
    let gate = fx.api.push_gated();
    let guard = app_guard();

    let mut first = pin!(guard.resolve(&fx.store, "/app/clubs"));
    let mut second = pin!(guard.resolve(&fx.store, "/app/profile"));
    assert!(matches!(futures::poll!(first.as_mut()), Poll::Pending));
    assert!(matches!(futures::poll!(second.as_mut()), Poll::Pending));

    gate.send(Err(ApiError::Unauthorized)).unwrap();
    assert_eq!(first.await, GuardDecision::RedirectToLogin);
    assert_eq!(second.await, GuardDecision::RedirectToLogin);
    assert_eq!(fx.api.checks(), 1);
}
