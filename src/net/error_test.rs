use super::*;

#[test]
fn from_status_success_range_is_none() {
    assert_eq!(ApiError::from_status(200), None);
    assert_eq!(ApiError::from_status(204), None);
    assert_eq!(ApiError::from_status(299), None);
}

#[test]
fn from_status_401_is_unauthorized() {
    let err = ApiError::from_status(401).unwrap();
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_other_failures_keep_code() {
    assert_eq!(ApiError::from_status(403), Some(ApiError::Status { status: 403 }));
    assert_eq!(ApiError::from_status(500), Some(ApiError::Status { status: 500 }));
    assert!(!ApiError::from_status(500).unwrap().is_unauthorized());
}

#[test]
fn display_messages() {
    assert_eq!(ApiError::Status { status: 502 }.to_string(), "request failed with status 502");
    assert_eq!(ApiError::Transport("offline".into()).to_string(), "request transport failed: offline");
}
