//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid { var: &'static str, expected: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin that `/api/*` is forwarded to, without trailing slash.
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BRICKS_BACKEND_URL`: default `http://localhost:8080`
    /// - `BRICKS_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT, "a port number")?;
        let backend_url = parse_backend_url(lookup("BRICKS_BACKEND_URL"))?;
        let proxy_timeout_secs = parse_or(
            "BRICKS_PROXY_TIMEOUT_SECS",
            lookup("BRICKS_PROXY_TIMEOUT_SECS"),
            DEFAULT_PROXY_TIMEOUT_SECS,
            "a number of seconds",
        )?;
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "BRICKS_PROXY_TIMEOUT_SECS",
                expected: "a number of seconds",
                value: "0".to_owned(),
            });
        }
        Ok(Self { port, backend_url, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| ConfigError::Invalid { var, expected, value: v.to_owned() }),
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let url = raw
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "BRICKS_BACKEND_URL",
            expected: "an http(s) URL",
            value: url.to_owned(),
        });
    }
    Ok(url.to_owned())
}
