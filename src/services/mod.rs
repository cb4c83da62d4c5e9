//! Thin per-endpoint wrappers over `ApiClient`.
//!
//! ARCHITECTURE
//! ============
//! One module per API area. Each function is a single HTTP call; endpoint
//! paths are built by small pure helpers so they can be unit-tested without
//! a browser.

pub mod clubs;
pub mod contracts;
pub mod notifications;
pub mod payslips;
pub mod profile;
pub mod tasks;

/// Render a page/size pair as query parameters under the given names.
pub(crate) fn paging(page_key: &'static str, size_key: &'static str, page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![(page_key, page.to_string()), (size_key, size.to_string())]
}
