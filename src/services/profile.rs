//! Public profile lookups.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;

fn profile_endpoint(username: &str) -> String {
    format!("/api/user/{}", urlencoding::encode(username))
}

/// Another user's profile by username.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn profile_by_username(api: &ApiClient, username: &str) -> Result<UserProfile, ApiError> {
    api.get_json(&profile_endpoint(username), &[]).await
}
