use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Credentials for the account created at startup when it does not exist yet.
#[derive(Debug, Clone)]
pub struct DemoUser {
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// An empty list mirrors the request origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the built browser client (`index.html` + assets).
    pub client_dist_dir: PathBuf,
    /// Mark the session cookie `Secure` (true when `APP_ENV=production`).
    pub secure_cookies: bool,
    /// Session token configuration (secret, lifetime).
    pub jwt: JwtConfig,
    /// Demo account bootstrapped at startup, if any.
    pub demo_user: Option<DemoUser>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `CLIENT_DIST_DIR`      | `../client/dist`           |
    /// | `APP_ENV`              | `development`              |
    /// | `DEMO_USER_EMAIL`      | `ms@mail.com`              |
    /// | `DEMO_USER_PASSWORD`   | `movie`                    |
    ///
    /// Setting `DEMO_USER_EMAIL` to an empty string disables the demo account.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let client_dist_dir = std::env::var("CLIENT_DIST_DIR")
            .unwrap_or_else(|_| "../client/dist".into())
            .into();

        let secure_cookies = std::env::var("APP_ENV").is_ok_and(|v| v == "production");

        let demo_email = std::env::var("DEMO_USER_EMAIL").unwrap_or_else(|_| "ms@mail.com".into());
        let demo_user = (!demo_email.is_empty()).then(|| DemoUser {
            email: demo_email,
            password: std::env::var("DEMO_USER_PASSWORD").unwrap_or_else(|_| "movie".into()),
        });

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            client_dist_dir,
            secure_cookies,
            jwt,
            demo_user,
        }
    }
}
