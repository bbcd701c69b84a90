// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// dbAuth Adapter
//
// Talks to the self-hosted dbAuth function through a transport port. Every
// request carries the `DbAuthConfig` this adapter was built with. dbAuth is the
// only built-in provider with the password reset capabilities.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::auth_client::{
    AuthImplementation, ForgotPassword, ResetPassword, ValidateResetToken,
};
use crate::domain::auth_config::{DbAuthConfig, SupportedAuthConfig};
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{
    DbAuthMethod, DbAuthRequest, DbAuthTransport, SupportedAuthClient,
};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::{DbAuthUser, UserMetadata};

use super::options::{merge, mismatch};

pub const CAPABILITIES: Capabilities = Capabilities {
    restore_auth_state: false,
    forgot_password: true,
    reset_password: true,
    validate_reset_token: true,
};

pub struct DbAuthAdapter {
    transport: Arc<dyn DbAuthTransport>,
    config: DbAuthConfig,
}

impl DbAuthAdapter {
    pub fn new(transport: Arc<dyn DbAuthTransport>, config: DbAuthConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &DbAuthConfig {
        &self.config
    }

    async fn post(&self, method: DbAuthMethod, body: Value) -> Result<Value, ProviderError> {
        let body = merge(body, &[("method", json!(method.as_str()))])?;
        self.transport
            .send(DbAuthRequest {
                method,
                body: Some(body),
                config: self.config.clone(),
            })
            .await
    }

    async fn fetch_token(&self) -> Result<Option<String>, ProviderError> {
        let response = self
            .transport
            .send(DbAuthRequest {
                method: DbAuthMethod::GetToken,
                body: None,
                config: self.config.clone(),
            })
            .await?;

        // The handler answers with the session's user id, or an empty body
        Ok(match response {
            Value::String(token) if !token.is_empty() => Some(token),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::DbAuth(transport) = client else {
        return Err(mismatch(ProviderType::DbAuth, client));
    };
    let config = match config {
        Some(SupportedAuthConfig::DbAuth(config)) => config,
        None => DbAuthConfig::default(),
    };
    Ok(Box::new(DbAuthAdapter::new(transport.clone(), config)))
}

#[async_trait]
impl AuthImplementation for DbAuthAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.post(DbAuthMethod::Login, options).await
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        self.post(DbAuthMethod::Logout, Value::Null).await
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.post(DbAuthMethod::Signup, options).await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        self.fetch_token().await
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self
            .fetch_token()
            .await?
            .map(|id| UserMetadata::DbAuth(DbAuthUser { id })))
    }

    fn as_forgot_password(&self) -> Option<&dyn ForgotPassword> {
        Some(self)
    }

    fn as_reset_password(&self) -> Option<&dyn ResetPassword> {
        Some(self)
    }

    fn as_validate_reset_token(&self) -> Option<&dyn ValidateResetToken> {
        Some(self)
    }
}

#[async_trait]
impl ForgotPassword for DbAuthAdapter {
    async fn forgot_password(&self, username: &str) -> Result<Value, ProviderError> {
        self.post(DbAuthMethod::ForgotPassword, json!({ "username": username }))
            .await
    }
}

#[async_trait]
impl ResetPassword for DbAuthAdapter {
    async fn reset_password(&self, options: Value) -> Result<Value, ProviderError> {
        self.post(DbAuthMethod::ResetPassword, options).await
    }
}

#[async_trait]
impl ValidateResetToken for DbAuthAdapter {
    async fn validate_reset_token(&self, token: Option<&str>) -> Result<Value, ProviderError> {
        self.post(DbAuthMethod::ValidateResetToken, json!({ "resetToken": token }))
            .await
    }
}
