use super::*;

#[test]
fn new_trims_trailing_slash() {
    let api = ApiClient::new("https://api.example.test/");
    assert_eq!(api.base_url(), "https://api.example.test");
}

#[test]
fn url_joins_with_single_slash() {
    let api = ApiClient::new("https://api.example.test");
    assert_eq!(api.url("/api/user/me"), "https://api.example.test/api/user/me");
    assert_eq!(api.url("api/joinClubRequests/my"), "https://api.example.test/api/joinClubRequests/my");
}

#[test]
fn empty_base_url_yields_same_origin_paths() {
    let api = ApiClient::new("");
    assert_eq!(api.url("/api/auth/logout"), "/api/auth/logout");
    assert_eq!(api.url("api/user/me"), "/api/user/me");
}

#[test]
fn multipart_form_keeps_field_order() {
    let form = MultipartForm::new().text("Text", "done").text("Note", "x");
    assert_eq!(
        form.text_fields(),
        &[("Text".to_owned(), "done".to_owned()), ("Note".to_owned(), "x".to_owned())]
    );
}

#[tokio::test]
async fn native_build_reports_unavailable() {
    let api = ApiClient::new("");
    assert_eq!(api.current_user().await, Err(ApiError::Unavailable));
    assert_eq!(api.logout().await, Err(ApiError::Unavailable));
}
