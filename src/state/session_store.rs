//! Session actions: check, establish, tear down.
//!
//! DESIGN
//! ======
//! `SessionStore` is a cheap-clone handle around one shared owner. It is the
//! only writer of `Session`; everything else reads through the cell.
//!
//! A foreground check is stored as a shared future. Any foreground caller
//! that arrives while it runs awaits that same future instead of issuing a
//! second request, so rapid navigations collapse onto one round-trip.
//! Background checks bypass the shared future and never touch
//! `check_in_flight`.
//!
//! ERROR HANDLING
//! ==============
//! Every failed check (401, transport, decode) is treated as "signed out":
//! state is cleared and the redirect policy runs. Nothing is returned to the
//! caller except the resulting authentication flag.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use super::session::{Session, SessionCell};
use crate::net::api::SessionApi;
use crate::util::redirect::{Navigator, RedirectPolicy, RedirectReason};

type PendingCheck = Shared<LocalBoxFuture<'static, bool>>;

struct Inner<A, S, N> {
    api: A,
    cell: S,
    redirect: RedirectPolicy<N>,
    pending: RefCell<Option<PendingCheck>>,
    /// Set when a foreground check succeeds; consumed by `refresh`.
    verified: Cell<bool>,
}

/// Single source of truth for the browser session.
pub struct SessionStore<A, S, N> {
    inner: Rc<Inner<A, S, N>>,
}

impl<A, S, N> Clone for SessionStore<A, S, N> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A, S, N> SessionStore<A, S, N>
where
    A: SessionApi + 'static,
    S: SessionCell + 'static,
    N: Navigator + 'static,
{
    pub fn new(api: A, cell: S, redirect: RedirectPolicy<N>) -> Self {
        Self { inner: Rc::new(Inner { api, cell, redirect, pending: RefCell::new(None), verified: Cell::new(false) }) }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.inner.cell.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().authenticated
    }

    pub fn redirect(&self) -> &RedirectPolicy<N> {
        &self.inner.redirect
    }

    /// Ask the server who we are and record the answer.
    ///
    /// Foreground calls share one outstanding request; a call made while one
    /// is pending starts nothing and resolves with that request's outcome.
    /// Background calls always issue their own request and leave the
    /// foreground in-flight flag alone.
    ///
    /// Returns whether the session is authenticated once the check settles.
    pub async fn check_session(&self, background: bool) -> bool {
        if background {
            return self.run_check(true).await;
        }

        let joined = self.inner.pending.borrow().clone();
        if let Some(pending) = joined {
            log::debug!("session check already in flight; waiting on it");
            return pending.await;
        }

        let store = self.clone();
        let check = async move { store.run_check(false).await }.boxed_local().shared();
        *self.inner.pending.borrow_mut() = Some(check.clone());
        self.inner.cell.update(|s| s.check_in_flight = true);
        check.await
    }

    /// Passive refresh for views that appear while already signed in.
    ///
    /// Skipped once right after a foreground check has confirmed the
    /// session, so entering the app straight after login costs no extra
    /// request.
    pub async fn refresh(&self) {
        if self.inner.verified.replace(false) {
            log::debug!("session confirmed by the last check; skipping refresh");
            return;
        }
        self.check_session(true).await;
    }

    /// Re-read the session after a successful login submission.
    pub async fn establish(&self) -> bool {
        self.check_session(false).await
    }

    /// Log out remotely (best effort), clear local state, go to login.
    pub async fn teardown(&self) {
        if let Err(err) = self.inner.api.logout().await {
            log::error!("logout request failed: {err}");
        }
        self.inner.cell.update(Session::sign_out);
        self.inner.verified.set(false);
        self.inner.redirect.to_login(RedirectReason::LoggedOut);
    }

    async fn run_check(&self, background: bool) -> bool {
        let result = self.inner.api.current_user().await;
        let authenticated = result.is_ok();

        self.inner.cell.update(|s| {
            match result {
                Ok(user) => s.sign_in(user),
                Err(err) => {
                    log::info!("session check failed: {err}");
                    s.sign_out();
                }
            }
            if !background {
                s.check_in_flight = false;
            }
        });
        if !background {
            self.inner.pending.borrow_mut().take();
        }
        self.inner.verified.set(authenticated && !background);
        log::debug!("session check settled (background: {background}, authenticated: {authenticated})");

        if !authenticated {
            self.inner.redirect.to_login(RedirectReason::CheckFailed);
        }
        authenticated
    }
}
