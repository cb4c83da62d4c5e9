//! Club creation and join-request calls.

#[cfg(test)]
#[path = "clubs_test.rs"]
mod clubs_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::JoinClubRequest;

pub const CREATE_CLUB_ENDPOINT: &str = "/api/club";
pub const MY_JOIN_REQUESTS_ENDPOINT: &str = "/api/joinClubRequests/my";

fn join_request_endpoint(request_id: &str) -> String {
    format!("/api/joinClubRequests/{request_id}")
}

/// Create a club from the wizard payload and return the created resource.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn create_club(api: &ApiClient, payload: &serde_json::Value) -> Result<serde_json::Value, ApiError> {
    api.post_json(CREATE_CLUB_ENDPOINT, payload).await
}

/// Join requests submitted by the signed-in user.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn my_join_requests(api: &ApiClient) -> Result<Vec<JoinClubRequest>, ApiError> {
    api.get_json(MY_JOIN_REQUESTS_ENDPOINT, &[]).await
}

/// Withdraw a join request.
///
/// The server does not expose cancellation yet, so this only logs the
/// intent and reports success; callers remove the row locally.
///
/// # Errors
///
/// Currently never fails.
pub async fn cancel_join_request(api: &ApiClient, request_id: &str) -> Result<(), ApiError> {
    // TODO: call `api.delete(&join_request_endpoint(request_id))` once the
    // DELETE /api/joinClubRequests/{id} route ships server-side.
    let _ = api;
    log::debug!("cancelling join request locally: {}", join_request_endpoint(request_id));
    Ok(())
}
