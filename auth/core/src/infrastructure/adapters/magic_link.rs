// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Magic Link Adapter
//
// Passwordless email login. Signup and login are the same flow.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{MagicClient, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::{mismatch, parse_or_default, parse_required};

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

/// Default ID token lifespan, matching the Magic SDK
const DEFAULT_TOKEN_LIFESPAN_SECS: u64 = 900;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginOptions {
    email: String,
    #[serde(default = "default_show_ui", rename = "showUI")]
    show_ui: bool,
}

#[derive(Debug, Deserialize)]
struct TokenOptions {
    #[serde(default = "default_lifespan")]
    lifespan: u64,
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            lifespan: DEFAULT_TOKEN_LIFESPAN_SECS,
        }
    }
}

fn default_show_ui() -> bool {
    true
}

fn default_lifespan() -> u64 {
    DEFAULT_TOKEN_LIFESPAN_SECS
}

pub struct MagicLinkAdapter {
    client: Arc<dyn MagicClient>,
}

impl MagicLinkAdapter {
    pub fn new(client: Arc<dyn MagicClient>) -> Self {
        Self { client }
    }

    async fn login_with_link(&self, options: Value) -> Result<Value, ProviderError> {
        let options: LoginOptions = parse_required(options)?;
        let did_token = self
            .client
            .login_with_magic_link(&options.email, options.show_ui)
            .await?;
        Ok(did_token.map(Value::String).unwrap_or(Value::Null))
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::MagicLink(native) = client else {
        return Err(mismatch(ProviderType::MagicLink, client));
    };
    Ok(Box::new(MagicLinkAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for MagicLinkAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.login_with_link(options).await
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        Ok(Value::Bool(self.client.logout().await?))
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.login_with_link(options).await
    }

    async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError> {
        if !self.client.is_logged_in().await? {
            return Ok(None);
        }
        let options: TokenOptions = parse_or_default(options)?;
        self.client.get_id_token(options.lifespan).await.map(Some)
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        if !self.client.is_logged_in().await? {
            return Ok(None);
        }
        Ok(Some(UserMetadata::MagicLink(self.client.get_metadata().await?)))
    }
}
