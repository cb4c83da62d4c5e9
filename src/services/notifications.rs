//! Notification feed calls.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::paging;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Notification, Page};

pub const USER_NOTIFICATIONS_ENDPOINT: &str = "/api/notification/user/notifications";

/// One page of the signed-in user's notifications.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn user_notifications(api: &ApiClient, page_number: u32, page_size: u32) -> Result<Page<Notification>, ApiError> {
    api.get_json(USER_NOTIFICATIONS_ENDPOINT, &paging("pageNumber", "pageSize", page_number, page_size))
        .await
}

/// Number of unchecked notifications within the first `page_size` entries.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn fetch_unread_count(api: &ApiClient, page_size: u32) -> Result<usize, ApiError> {
    let page = user_notifications(api, 1, page_size).await?;
    Ok(count_unread(&page.items))
}

pub fn count_unread(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.is_checked).count()
}
