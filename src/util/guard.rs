//! Navigation guard for the authenticated application area.
//!
//! DESIGN
//! ======
//! The decision is split in two pure steps so it can be tested without a
//! router: `decide` runs before any network call, `settle` runs after the
//! session check resolves. `RouteGuard::resolve` strings them together
//! around `SessionStore::check_session`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::AppConfig;
use crate::net::api::SessionApi;
use crate::state::session::{Session, SessionCell};
use crate::state::session_store::SessionStore;
use crate::util::redirect::{Navigator, RedirectReason};

/// Outcome of evaluating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
    /// Hold the navigation until a session check settles.
    AwaitCheck,
}

/// One attempted transition, alive for a single guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest<'a> {
    pub path: &'a str,
    pub protected: bool,
}

/// Pre-check decision: public paths and signed-in users proceed.
pub fn decide(session: &Session, request: &NavigationRequest<'_>) -> GuardDecision {
    if !request.protected || session.authenticated {
        GuardDecision::Proceed
    } else {
        GuardDecision::AwaitCheck
    }
}

/// Post-check decision, from the re-read session.
pub fn settle(session: &Session, request: &NavigationRequest<'_>) -> GuardDecision {
    if !request.protected || session.authenticated {
        GuardDecision::Proceed
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Knows which path prefixes require an established session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    protected_prefixes: Vec<String>,
}

impl RouteGuard {
    pub fn new<I, P>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        // `/` trims to the empty prefix, which matches every path.
        let protected_prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .map(|p| p.trim_end_matches('/').to_owned())
            .collect();
        Self { protected_prefixes }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.protected_prefixes.iter().cloned())
    }

    /// Whether `path` is a protected prefix or lies beneath one.
    ///
    /// Matching is per segment: `/app` guards `/app` and `/app/clubs`, not
    /// `/apple`. Query and fragment are ignored. A `/` prefix guards
    /// everything.
    pub fn is_protected(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.protected_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    pub fn request<'a>(&self, path: &'a str) -> NavigationRequest<'a> {
        NavigationRequest { path, protected: self.is_protected(path) }
    }

    /// Pre-check decision for `path` against the current session.
    pub fn decide(&self, session: &Session, path: &str) -> GuardDecision {
        decide(session, &self.request(path))
    }

    /// Evaluate a navigation end to end.
    ///
    /// Suspends on the session check when one is needed. Concurrent calls
    /// share the store's single in-flight check. Denials go through the
    /// store's redirect policy.
    pub async fn resolve<A, S, N>(&self, store: &SessionStore<A, S, N>, path: &str) -> GuardDecision
    where
        A: SessionApi + 'static,
        S: SessionCell + 'static,
        N: Navigator + 'static,
    {
        let request = self.request(path);
        match decide(&store.session(), &request) {
            GuardDecision::AwaitCheck => {}
            decision => return decision,
        }

        log::debug!("holding navigation to {path} for session check");
        store.check_session(false).await;

        let decision = settle(&store.session(), &request);
        if decision == GuardDecision::RedirectToLogin {
            store.redirect().to_login(RedirectReason::GuardDenied);
        }
        decision
    }
}
