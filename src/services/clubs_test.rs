use super::*;

#[test]
fn join_request_endpoint_formats_expected_path() {
    assert_eq!(join_request_endpoint("r42"), "/api/joinClubRequests/r42");
}

#[tokio::test]
async fn cancel_join_request_succeeds_without_server_route() {
    let api = ApiClient::new("");
    assert_eq!(cancel_join_request(&api, "r1").await, Ok(()));
}

#[tokio::test]
async fn my_join_requests_surfaces_api_errors() {
    let api = ApiClient::new("");
    assert_eq!(my_join_requests(&api).await, Err(ApiError::Unavailable));
}
