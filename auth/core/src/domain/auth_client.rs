// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Uniform Auth Client (capability contract)
//!
//! [`AuthImplementation`] carries the members every provider offers. Optional
//! members live in their own traits and are reached through query methods that
//! return `None` when the provider lacks them, so callers branch on presence
//! instead of on an "unsupported" error:
//!
//! ```rust,ignore
//! if let Some(reset) = client.reset_password() {
//!     reset.reset_password(json!({ "resetToken": token, "password": pw })).await?;
//! }
//! ```
//!
//! [`AuthClient`] is what callers hold. It is only built by the client factory,
//! which stamps it with the exact native client and tag it was given.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use super::errors::ProviderError;
use super::native_client::SupportedAuthClient;
use super::provider::{Capabilities, ProviderType};
use super::user::UserMetadata;

/// Required members of the uniform contract
///
/// Options and results are provider-specific JSON. `Value::Null` stands for
/// "no options".
#[async_trait]
pub trait AuthImplementation: Send + Sync {
    async fn login(&self, options: Value) -> Result<Value, ProviderError>;

    async fn logout(&self, options: Value) -> Result<Value, ProviderError>;

    async fn signup(&self, options: Value) -> Result<Value, ProviderError>;

    /// `Ok(None)` means there is no authenticated session
    async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError>;

    /// `Ok(None)` means there is no authenticated user
    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError>;

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        None
    }

    fn as_forgot_password(&self) -> Option<&dyn ForgotPassword> {
        None
    }

    fn as_reset_password(&self) -> Option<&dyn ResetPassword> {
        None
    }

    fn as_validate_reset_token(&self) -> Option<&dyn ValidateResetToken> {
        None
    }
}

/// Rehydrate session state from provider-specific storage
#[async_trait]
pub trait RestoreAuthState: Send + Sync {
    async fn restore_auth_state(&self) -> Result<(), ProviderError>;
}

/// Start the provider's password reset flow
#[async_trait]
pub trait ForgotPassword: Send + Sync {
    async fn forgot_password(&self, username: &str) -> Result<Value, ProviderError>;
}

/// Complete a password reset
#[async_trait]
pub trait ResetPassword: Send + Sync {
    async fn reset_password(&self, options: Value) -> Result<Value, ProviderError>;
}

#[async_trait]
pub trait ValidateResetToken: Send + Sync {
    async fn validate_reset_token(&self, token: Option<&str>) -> Result<Value, ProviderError>;
}

/// Provider-agnostic auth client
pub struct AuthClient {
    provider_type: ProviderType,
    client: SupportedAuthClient,
    implementation: Box<dyn AuthImplementation>,
}

impl AuthClient {
    pub(crate) fn new(
        provider_type: ProviderType,
        client: SupportedAuthClient,
        implementation: Box<dyn AuthImplementation>,
    ) -> Self {
        Self {
            provider_type,
            client,
            implementation,
        }
    }

    /// Tag this client was constructed with
    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    /// Native client this client was constructed with
    pub fn client(&self) -> &SupportedAuthClient {
        &self.client
    }

    pub async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.implementation.login(options).await
    }

    pub async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.implementation.logout(options).await
    }

    pub async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.implementation.signup(options).await
    }

    pub async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError> {
        self.implementation.get_token(options).await
    }

    pub async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        self.implementation.get_user_metadata().await
    }

    pub fn restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        self.implementation.as_restore_auth_state()
    }

    pub fn forgot_password(&self) -> Option<&dyn ForgotPassword> {
        self.implementation.as_forgot_password()
    }

    pub fn reset_password(&self) -> Option<&dyn ResetPassword> {
        self.implementation.as_reset_password()
    }

    pub fn validate_reset_token(&self) -> Option<&dyn ValidateResetToken> {
        self.implementation.as_validate_reset_token()
    }

    /// Which optional members this client exposes
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            restore_auth_state: self.restore_auth_state().is_some(),
            forgot_password: self.forgot_password().is_some(),
            reset_password: self.reset_password().is_some(),
            validate_reset_token: self.validate_reset_token().is_some(),
        }
    }
}

impl fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClient")
            .field("provider_type", &self.provider_type)
            .field("client", &self.client)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
