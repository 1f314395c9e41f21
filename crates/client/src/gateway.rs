//! The identity gateway: who am I, log in, log out.

use async_trait::async_trait;
use greenlight_core::roles::ROLE_ADMIN;
use greenlight_core::types::DbId;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ConfigError, GatewayError};

/// An authenticated identity as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Email/password pair sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Remote authority for the current session.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Identity attached to the current session.
    async fn who_am_i(&self) -> Result<User, GatewayError>;

    /// Exchange credentials for a session.
    async fn login(&self, credentials: &Credentials) -> Result<User, GatewayError>;

    /// End the current session.
    async fn logout(&self) -> Result<(), GatewayError>;
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`IdentityGateway`] over the server's `/api` endpoints.
///
/// The session travels as an HTTP-only cookie, so the underlying client keeps
/// a cookie store.
pub struct HttpIdentityGateway {
    client: reqwest::Client,
    api_url: Url,
}

impl HttpIdentityGateway {
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Reuse an existing client. It must have a cookie store for sessions to
    /// survive between calls. `api_url` should come from
    /// [`parse_api_url`](crate::config::parse_api_url) so it ends in `/`.
    pub fn with_client(client: reqwest::Client, api_url: Url) -> Self {
        Self { client, api_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        let relative = format!("api/{path}");
        self.api_url.join(&relative).map_err(|e| {
            GatewayError::Config(ConfigError::InvalidApiUrl {
                url: relative,
                reason: e.to_string(),
            })
        })
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        if status == StatusCode::UNAUTHORIZED {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(GatewayError::Unauthorized(message));
        }
        Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn parse_user(response: reqwest::Response) -> Result<User, GatewayError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<UserEnvelope>().await?.user)
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn who_am_i(&self) -> Result<User, GatewayError> {
        let response = self.client.get(self.endpoint("me")?).send().await?;
        Self::parse_user(response).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, GatewayError> {
        let response = self
            .client
            .post(self.endpoint("login")?)
            .json(credentials)
            .send()
            .await?;
        let user = Self::parse_user(response).await?;
        tracing::debug!(user_id = user.id, "Logged in");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        let response = self.client.post(self.endpoint("logout")?).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
