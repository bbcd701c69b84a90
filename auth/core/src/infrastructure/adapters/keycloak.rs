// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Keycloak Adapter
//
// The Keycloak JS adapter keeps the token and its parsed claims on the client
// object, so token and metadata reads never hit the network.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{KeycloakClient, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::mismatch;

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

pub struct KeycloakAdapter {
    client: Arc<dyn KeycloakClient>,
}

impl KeycloakAdapter {
    pub fn new(client: Arc<dyn KeycloakClient>) -> Self {
        Self { client }
    }

    /// Current token; an empty string means no session
    fn token(&self) -> Option<String> {
        self.client.token().filter(|token| !token.is_empty())
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Keycloak(native) = client else {
        return Err(mismatch(ProviderType::Keycloak, client));
    };
    Ok(Box::new(KeycloakAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for KeycloakAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.login(options).await?;
        Ok(Value::Null)
    }

    async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.logout(options).await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.register(options).await?;
        Ok(Value::Null)
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        Ok(self.token())
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        if self.token().is_none() {
            return Ok(None);
        }
        Ok(self.client.token_parsed().map(UserMetadata::Keycloak))
    }
}
