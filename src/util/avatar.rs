//! Deterministic avatar URLs for users without an uploaded image.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::net::types::UserProfile;

pub const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

const AVATAR_STYLE: &str = "background=0D8ABC&color=fff";
const SESSION_PLACEHOLDER_NAME: &str = "User";
const LIST_PLACEHOLDER_NAME: &str = "Unnamed";

/// Generated avatar URL for a display string.
pub fn generated_avatar_url(display_name: &str) -> String {
    format!("{AVATAR_SERVICE_URL}?name={}&{AVATAR_STYLE}", urlencoding::encode(display_name))
}

/// Avatar for the signed-in user: the uploaded image when present, otherwise
/// a generated one from the full name (or a placeholder).
pub fn session_avatar_url(user: Option<&UserProfile>) -> String {
    if let Some(url) = user.and_then(|u| u.avatar_url.as_deref()).filter(|url| !url.is_empty()) {
        return url.to_owned();
    }
    let full_name = user.map(UserProfile::full_name).unwrap_or_default();
    let display = if full_name.is_empty() { SESSION_PLACEHOLDER_NAME } else { full_name.as_str() };
    generated_avatar_url(display)
}

/// 128px generated avatar for member lists and cards.
pub fn avatar_for_name(name: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(LIST_PLACEHOLDER_NAME);
    format!("{}&size=128", generated_avatar_url(name))
}
