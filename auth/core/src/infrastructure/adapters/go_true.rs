// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// GoTrue Adapter

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{GoTrueClient, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::{mismatch, parse_required, to_value};

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

#[derive(Debug, Deserialize)]
struct Credentials {
    email: String,
    password: String,
    #[serde(default)]
    remember: bool,
}

pub struct GoTrueAdapter {
    client: Arc<dyn GoTrueClient>,
}

impl GoTrueAdapter {
    pub fn new(client: Arc<dyn GoTrueClient>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::GoTrue(native) = client else {
        return Err(mismatch(ProviderType::GoTrue, client));
    };
    Ok(Box::new(GoTrueAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for GoTrueAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        let credentials: Credentials = parse_required(options)?;
        let user = self
            .client
            .login(&credentials.email, &credentials.password, credentials.remember)
            .await?;
        to_value(&user)
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        if self.client.current_user().is_some() {
            self.client.logout_current_user().await?;
        }
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        let credentials: Credentials = parse_required(options)?;
        self.client
            .signup(&credentials.email, &credentials.password, credentials.remember)
            .await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        if self.client.current_user().is_none() {
            return Ok(None);
        }
        self.client.jwt().await.map(Some)
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.client.current_user().map(UserMetadata::GoTrue))
    }
}
