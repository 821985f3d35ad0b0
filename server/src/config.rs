//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BLOG_API_BASE_URL: &str = "https://apis.ccbp.in";
pub const DEFAULT_BLOG_API_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BLOG_API_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Upstream blog API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub blog_api: BlogApiConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BLOG_API_BASE_URL`: default `https://apis.ccbp.in`
    /// - `BLOG_API_REQUEST_TIMEOUT_SECS`: default 10
    /// - `BLOG_API_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let base_url = lookup("BLOG_API_BASE_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_BLOG_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let request_timeout_secs = parse_or(
            "BLOG_API_REQUEST_TIMEOUT_SECS",
            lookup("BLOG_API_REQUEST_TIMEOUT_SECS"),
            DEFAULT_BLOG_API_REQUEST_TIMEOUT_SECS,
        )?;
        let connect_timeout_secs = parse_or(
            "BLOG_API_CONNECT_TIMEOUT_SECS",
            lookup("BLOG_API_CONNECT_TIMEOUT_SECS"),
            DEFAULT_BLOG_API_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self { port, blog_api: BlogApiConfig { base_url, request_timeout_secs, connect_timeout_secs } })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
