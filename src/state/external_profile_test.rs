use super::*;

#[test]
fn own_profile_clears_external_user() {
    let mut state = ExternalProfileState { user: Some(UserProfile::default()), ..ExternalProfileState::default() };
    assert_eq!(state.begin(true, Some("ana")), None);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn missing_username_does_nothing() {
    let mut state = ExternalProfileState::default();
    assert_eq!(state.begin(false, None), None);
    assert_eq!(state.begin(false, Some("")), None);
    assert!(!state.loading);
}

#[test]
fn begin_marks_loading_and_returns_username() {
    let mut state = ExternalProfileState { error: Some("old".into()), ..ExternalProfileState::default() };
    assert_eq!(state.begin(false, Some("ana.k")), Some("ana.k".to_owned()));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_failure_reports_not_found() {
    let mut state = ExternalProfileState::default();
    state.begin(false, Some("ghost"));
    state.finish(Err(ApiError::Status { status: 404 }));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(NOT_FOUND_MESSAGE));
}

#[test]
fn finish_success_stores_user() {
    let mut state = ExternalProfileState::default();
    state.begin(false, Some("ana.k"));
    let user = UserProfile { user_name: Some("ana.k".into()), ..UserProfile::default() };
    state.finish(Ok(user.clone()));
    assert_eq!(state.user, Some(user));
}
