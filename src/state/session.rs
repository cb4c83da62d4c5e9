//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation guard and identity-aware components; written only
//! by `SessionStore` actions through a `SessionCell`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::util::avatar::session_avatar_url;

/// Authentication status, identity, and whether a foreground check is running.
///
/// `authenticated` implies `user.is_some()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
    pub check_in_flight: bool,
}

impl Session {
    /// Avatar for the current user, derived fresh on every call.
    pub fn avatar_url(&self) -> String {
        session_avatar_url(self.user.as_ref())
    }

    /// Name shown in the header; empty when signed out.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| {
                let name = u.full_name();
                if name.is_empty() { u.user_name.clone().unwrap_or_default() } else { name }
            })
            .unwrap_or_default()
    }

    pub(crate) fn sign_in(&mut self, user: UserProfile) {
        self.authenticated = true;
        self.user = Some(user);
    }

    pub(crate) fn sign_out(&mut self) {
        self.authenticated = false;
        self.user = None;
    }
}

/// Storage the session store writes through.
///
/// The browser build backs this with a signal pair so views re-render;
/// tests use a plain `Rc<RefCell<Session>>`.
pub trait SessionCell {
    fn snapshot(&self) -> Session;
    fn update(&self, f: impl FnOnce(&mut Session));
}

impl SessionCell for Rc<RefCell<Session>> {
    fn snapshot(&self) -> Session {
        self.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        f(&mut self.borrow_mut());
    }
}

/// Reactive session cell. Views only ever receive the `ReadSignal` half.
#[derive(Clone, Copy, Debug)]
pub struct SignalSession {
    read: ReadSignal<Session>,
    write: WriteSignal<Session>,
}

impl SignalSession {
    pub fn new() -> Self {
        let (read, write) = signal(Session::default());
        Self { read, write }
    }

    pub fn reader(&self) -> ReadSignal<Session> {
        self.read
    }
}

impl Default for SignalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for SignalSession {
    fn snapshot(&self) -> Session {
        self.read.get_untracked()
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        self.write.update(f);
    }
}
