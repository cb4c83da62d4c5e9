//! Client configuration baked in at build time.
//!
//! Values come from `option_env!` so the compiled WASM bundle carries them;
//! `from_lookup` takes any key source so tests never touch process env.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_PROTECTED_PREFIXES: &[&str] = &["/app"];
pub const DEFAULT_NOTIFICATIONS_PAGE_SIZE: u32 = 100;

pub const API_BASE_URL_KEY: &str = "CLUBDESK_API_BASE_URL";
pub const LOGIN_PATH_KEY: &str = "CLUBDESK_LOGIN_PATH";
pub const PROTECTED_PREFIXES_KEY: &str = "CLUBDESK_PROTECTED_PREFIXES";
pub const NOTIFICATIONS_PAGE_SIZE_KEY: &str = "CLUBDESK_NOTIFICATIONS_PAGE_SIZE";

/// Errors produced while reading configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A route path did not start with `/`.
    #[error("invalid route path {value:?} for {key}: must start with '/'")]
    InvalidPath { key: &'static str, value: String },

    /// `/` as a protected prefix would also guard the login path.
    #[error("protected prefix {value:?} for {key} covers the login path")]
    RootPrefix { key: &'static str, value: String },

    /// A numeric value could not be parsed.
    #[error("config parse failed: {key}={value:?}")]
    Parse { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the REST API; empty for same-origin.
    pub api_base_url: String,
    /// Where users without a session are sent.
    pub login_path: String,
    /// Path prefixes that require an established session.
    pub protected_prefixes: Vec<String>,
    /// Page size used when counting unread notifications.
    pub notifications_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            protected_prefixes: DEFAULT_PROTECTED_PREFIXES.iter().map(|p| (*p).to_owned()).collect(),
            notifications_page_size: DEFAULT_NOTIFICATIONS_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `CLUBDESK_API_BASE_URL`: default same-origin
    /// - `CLUBDESK_LOGIN_PATH`: default `/login`
    /// - `CLUBDESK_PROTECTED_PREFIXES`: comma separated, default `/app`
    /// - `CLUBDESK_NOTIFICATIONS_PAGE_SIZE`: default 100
    ///
    /// # Errors
    ///
    /// Returns an error for paths without a leading `/`, a bare `/` protected
    /// prefix, or a non-numeric page size.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        if let Some(url) = non_empty(API_BASE_URL_KEY) {
            config.api_base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(path) = non_empty(LOGIN_PATH_KEY) {
            config.login_path = parse_route_path(LOGIN_PATH_KEY, &path)?;
        }
        if let Some(raw) = non_empty(PROTECTED_PREFIXES_KEY) {
            config.protected_prefixes = parse_prefixes(&raw)?;
        }
        if let Some(raw) = non_empty(NOTIFICATIONS_PAGE_SIZE_KEY) {
            config.notifications_page_size = raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Parse { key: NOTIFICATIONS_PAGE_SIZE_KEY, value: raw })?;
        }
        Ok(config)
    }

    /// Config from values captured at compile time, falling back to
    /// defaults (with a warning) when they are malformed.
    pub fn from_build_env() -> Self {
        let lookup = |key: &str| {
            let value = match key {
                API_BASE_URL_KEY => option_env!("CLUBDESK_API_BASE_URL"),
                LOGIN_PATH_KEY => option_env!("CLUBDESK_LOGIN_PATH"),
                PROTECTED_PREFIXES_KEY => option_env!("CLUBDESK_PROTECTED_PREFIXES"),
                NOTIFICATIONS_PAGE_SIZE_KEY => option_env!("CLUBDESK_NOTIFICATIONS_PAGE_SIZE"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            Self::default()
        })
    }
}

fn parse_route_path(key: &'static str, value: &str) -> Result<String, ConfigError> {
    if value.starts_with('/') {
        Ok(value.to_owned())
    } else {
        Err(ConfigError::InvalidPath { key, value: value.to_owned() })
    }
}

fn parse_prefixes(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let prefix = parse_route_path(PROTECTED_PREFIXES_KEY, p)?;
            if prefix.trim_end_matches('/').is_empty() {
                return Err(ConfigError::RootPrefix { key: PROTECTED_PREFIXES_KEY, value: prefix });
            }
            Ok(prefix)
        })
        .collect()
}
