//! Cached authentication state for the running client.

use crate::error::GatewayError;
use crate::gateway::{Credentials, IdentityGateway, User};

/// Who is logged in, as last confirmed with the gateway.
///
/// `initialized` flips to `true` after the first [`check_auth`] and never
/// goes back, whatever the outcome.
///
/// [`check_auth`]: AuthSession::check_auth
pub struct AuthSession<G> {
    gateway: G,
    user: Option<User>,
    initialized: bool,
}

impl<G: IdentityGateway> AuthSession<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            user: None,
            initialized: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Ask the gateway who we are. Any failure means anonymous.
    pub async fn check_auth(&mut self) -> Option<&User> {
        self.user = match self.gateway.who_am_i().await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!(error = %e, "No active session");
                None
            }
        };
        self.initialized = true;
        self.user.as_ref()
    }

    /// Record `user` as logged in without contacting the gateway.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Log in through the gateway and cache the returned identity.
    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<&User, GatewayError> {
        let user = self.gateway.login(credentials).await?;
        Ok(self.user.insert(user))
    }

    /// End the session. The local identity is cleared even when the gateway
    /// call fails; that failure is still returned.
    pub async fn logout(&mut self) -> Result<(), GatewayError> {
        let result = self.gateway.logout().await;
        self.user = None;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Logout request failed, cleared local session anyway");
        }
        result
    }
}
