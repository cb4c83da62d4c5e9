//! The signed-in user's club join requests.

#[cfg(test)]
#[path = "join_requests_test.rs"]
mod join_requests_test;

use crate::net::error::ApiError;
use crate::net::types::JoinClubRequest;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load requests";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinRequestsState {
    pub items: Vec<JoinClubRequest>,
    pub loading: bool,
    pub error: Option<String>,
}

impl JoinRequestsState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Failures keep the previous rows and set a user-facing message.
    pub fn finish_fetch(&mut self, result: Result<Vec<JoinClubRequest>, ApiError>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                log::error!("error fetching join requests: {e}");
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
        self.loading = false;
    }

    /// Drop a cancelled request from the list.
    pub fn remove(&mut self, request_id: &str) {
        self.items.retain(|r| r.id != request_id);
    }
}
