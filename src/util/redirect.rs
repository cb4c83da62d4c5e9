//! Where to send a user who has no valid session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard denials, failed session checks, and logout all route through
//! `RedirectPolicy::to_login`, so the destination is decided in one place.
//! The originally requested path is not carried across the redirect.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::rc::Rc;

/// Something that can move the app to another path.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Type-erased navigator wrapping the router's navigate function.
#[derive(Clone)]
pub struct RouterNavigator(Rc<dyn Fn(&str)>);

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(navigate))
    }
}

impl Navigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        (self.0)(path);
    }
}

/// Why the user is being sent to login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    GuardDenied,
    CheckFailed,
    LoggedOut,
}

/// Sends users to the login entry point.
#[derive(Clone)]
pub struct RedirectPolicy<N> {
    login_path: String,
    navigator: N,
}

impl<N: Navigator> RedirectPolicy<N> {
    pub fn new(login_path: impl Into<String>, navigator: N) -> Self {
        Self { login_path: login_path.into(), navigator }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn to_login(&self, reason: RedirectReason) {
        log::debug!("redirecting to {} ({reason:?})", self.login_path);
        self.navigator.navigate_to(&self.login_path);
    }
}
