use std::cell::RefCell;

use super::*;

#[test]
fn every_reason_targets_login_path() {
    let visited = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = visited.clone();
    let policy = RedirectPolicy::new("/login", move |path: &str| sink.borrow_mut().push(path.to_owned()));

    policy.to_login(RedirectReason::GuardDenied);
    policy.to_login(RedirectReason::CheckFailed);
    policy.to_login(RedirectReason::LoggedOut);

    assert_eq!(*visited.borrow(), vec!["/login", "/login", "/login"]);
}

#[test]
fn router_navigator_forwards_path() {
    let visited = Rc::new(RefCell::new(None::<String>));
    let sink = visited.clone();
    let policy = RedirectPolicy::new(
        "/sign-in",
        RouterNavigator::new(move |path| *sink.borrow_mut() = Some(path.to_owned())),
    );
    assert_eq!(policy.login_path(), "/sign-in");

    policy.to_login(RedirectReason::LoggedOut);
    assert_eq!(visited.borrow().as_deref(), Some("/sign-in"));
}
