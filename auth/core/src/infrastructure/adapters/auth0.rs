// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Auth0 Adapter
//
// Redirect-based login via the Auth0 SPA SDK. Signup is a login redirect with
// the signup screen hint. Session restore completes a pending redirect callback.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::auth_client::{AuthImplementation, RestoreAuthState};
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{Auth0Client, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::{merge, mismatch};

pub const CAPABILITIES: Capabilities = Capabilities::RESTORE_ONLY;

pub struct Auth0Adapter {
    client: Arc<dyn Auth0Client>,
}

impl Auth0Adapter {
    pub fn new(client: Arc<dyn Auth0Client>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Auth0(native) = client else {
        return Err(mismatch(ProviderType::Auth0, client));
    };
    Ok(Box::new(Auth0Adapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for Auth0Adapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.login_with_redirect(options).await?;
        Ok(Value::Null)
    }

    async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.logout(options).await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        let options = merge(
            options,
            &[("screen_hint", json!("signup")), ("prompt", json!("login"))],
        )?;
        self.client.login_with_redirect(options).await?;
        Ok(Value::Null)
    }

    async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError> {
        if !self.client.is_authenticated().await? {
            return Ok(None);
        }
        self.client.get_token_silently(options).await.map(Some)
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.client.get_user().await?.map(UserMetadata::Auth0))
    }

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        Some(self)
    }
}

#[async_trait]
impl RestoreAuthState for Auth0Adapter {
    async fn restore_auth_state(&self) -> Result<(), ProviderError> {
        if self.client.redirect_callback_pending() {
            self.client.handle_redirect_callback().await?;
        }
        Ok(())
    }
}
