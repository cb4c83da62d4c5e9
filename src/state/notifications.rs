//! Unread-notification badge state.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub unread_count: usize,
}

impl NotificationState {
    pub fn set_unread_count(&mut self, count: usize) {
        self.unread_count = count;
    }

    /// One notification was opened; never drops below zero.
    pub fn decrement_unread(&mut self) {
        self.unread_count = self.unread_count.saturating_sub(1);
    }

    /// Apply a refresh result. Failures keep the previous count.
    pub fn apply_fetch(&mut self, result: Result<usize, ApiError>) {
        match result {
            Ok(count) => self.unread_count = count,
            Err(e) => log::error!("failed to load notifications: {e}"),
        }
    }
}
