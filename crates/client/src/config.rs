//! API base URL resolution.

use std::env;

use reqwest::Url;

use crate::error::ConfigError;

/// Local API server used outside production when nothing is configured.
pub const DEV_API_URL: &str = "http://localhost:3000";

/// Client configuration.
///
/// | Env var              | Default                                                  |
/// |----------------------|----------------------------------------------------------|
/// | `GREENLIGHT_API_URL` | required when `APP_ENV=production`, else `http://localhost:3000` |
/// | `APP_ENV`            | `development`                                            |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL every `api/...` path is joined onto. Always ends in `/`.
    pub api_url: Url,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = env::var("APP_ENV").is_ok_and(|v| v == "production");
        Self::from_parts(env::var("GREENLIGHT_API_URL").ok(), production)
    }

    pub fn from_parts(api_url: Option<String>, production: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: resolve_api_url(api_url, production)?,
        })
    }
}

/// Pick the API base URL: an explicit value wins and the local dev server is
/// the fallback. Production has no fallback.
pub fn resolve_api_url(explicit: Option<String>, production: bool) -> Result<Url, ConfigError> {
    match explicit {
        Some(url) => parse_api_url(&url),
        None if production => Err(ConfigError::MissingApiUrl),
        None => parse_api_url(DEV_API_URL),
    }
}

/// Parse an absolute http(s) base URL, normalised to end in `/` so joining
/// `api/me` keeps any path prefix.
pub fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
