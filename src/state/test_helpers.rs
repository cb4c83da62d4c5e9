//! Fakes for exercising the session gate without a browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use super::session::Session;
use super::session_store::SessionStore;
use crate::net::api::SessionApi;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::util::redirect::RedirectPolicy;

pub type Navigations = Rc<RefCell<Vec<String>>>;
pub type Recorder = Box<dyn Fn(&str)>;
pub type TestStore = SessionStore<Rc<FakeApi>, Rc<RefCell<Session>>, Recorder>;

/// Scripted reply for one `current_user` call.
pub enum Reply {
    Now(Result<UserProfile, ApiError>),
    Gated(oneshot::Receiver<Result<UserProfile, ApiError>>),
}

/// `SessionApi` that replays queued replies and counts calls.
///
/// An empty queue answers `Unauthorized`.
#[derive(Default)]
pub struct FakeApi {
    replies: RefCell<VecDeque<Reply>>,
    checks: Cell<usize>,
    logouts: Cell<usize>,
    logout_fails: Cell<bool>,
}

impl FakeApi {
    pub fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Queue a reply that stays pending until the returned sender fires.
    pub fn push_gated(&self) -> oneshot::Sender<Result<UserProfile, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.push(Reply::Gated(rx));
        tx
    }

    pub fn checks(&self) -> usize {
        self.checks.get()
    }

    pub fn logouts(&self) -> usize {
        self.logouts.get()
    }

    pub fn fail_logout(&self) {
        self.logout_fails.set(true);
    }
}

impl SessionApi for FakeApi {
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, ApiError>> {
        self.checks.set(self.checks.get() + 1);
        let next = self.replies.borrow_mut().pop_front();
        async move {
            match next {
                Some(Reply::Now(result)) => result,
                Some(Reply::Gated(rx)) => rx.await.unwrap_or(Err(ApiError::Transport("gate dropped".into()))),
                None => Err(ApiError::Unauthorized),
            }
        }
    }

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.logouts.set(self.logouts.get() + 1);
        let fails = self.logout_fails.get();
        async move { if fails { Err(ApiError::Transport("offline".into())) } else { Ok(()) } }
    }
}

pub struct Fixture {
    pub api: Rc<FakeApi>,
    pub cell: Rc<RefCell<Session>>,
    pub navigations: Navigations,
    pub store: TestStore,
}

pub fn fixture() -> Fixture {
    let api = Rc::new(FakeApi::default());
    let cell = Rc::new(RefCell::new(Session::default()));
    let navigations: Navigations = Rc::default();
    let sink = navigations.clone();
    let recorder: Recorder = Box::new(move |path: &str| sink.borrow_mut().push(path.to_owned()));
    let store = SessionStore::new(api.clone(), cell.clone(), RedirectPolicy::new("/login", recorder));
    Fixture { api, cell, navigations, store }
}

pub fn ana() -> UserProfile {
    UserProfile { id: Some("u1".into()), first_name: Some("Ana".into()), ..UserProfile::default() }
}
