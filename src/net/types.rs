//! Wire DTOs for the remote API.
//!
//! DESIGN
//! ======
//! Only the shapes the client actually inspects are typed. Everything else
//! (task bodies, contracts, payslips) travels as `serde_json::Value` because
//! the remote API owns those schemas.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user's profile as returned by `/api/user/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Explicit avatar image URL, when the user uploaded one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// `"first last"` with surrounding whitespace removed; empty when neither is set.
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_owned()
    }
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// A user notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub is_checked: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A pending or resolved request to join a club.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClubRequest {
    pub id: String,
    pub club_id: String,
    #[serde(default)]
    pub club_name: String,
    #[serde(rename = "joinClubRequestStatus", default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Credentials submitted by the login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
