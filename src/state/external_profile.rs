//! Profile of another user, viewed at `/app/profile/:username`.

#[cfg(test)]
#[path = "external_profile_test.rs"]
mod external_profile_test;

use crate::net::error::ApiError;
use crate::net::types::UserProfile;

pub const NOT_FOUND_MESSAGE: &str = "User not found or access denied.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExternalProfileState {
    pub user: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ExternalProfileState {
    /// Prepare a load and return the username to fetch, if any.
    ///
    /// Viewing one's own profile clears any external user instead.
    pub fn begin(&mut self, is_my_profile: bool, username: Option<&str>) -> Option<String> {
        if is_my_profile {
            self.user = None;
            return None;
        }
        let username = username.filter(|u| !u.is_empty())?;
        self.loading = true;
        self.error = None;
        Some(username.to_owned())
    }

    pub fn finish(&mut self, result: Result<UserProfile, ApiError>) {
        match result {
            Ok(user) => self.user = Some(user),
            Err(e) => {
                log::error!("failed to load profile: {e}");
                self.error = Some(NOT_FOUND_MESSAGE.to_owned());
            }
        }
        self.loading = false;
    }
}
