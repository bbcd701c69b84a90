// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Ethereum Adapter
//
// Wallet-signature login; there is no separate signup step.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{EthereumClient, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::mismatch;

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

pub struct EthereumAdapter {
    client: Arc<dyn EthereumClient>,
}

impl EthereumAdapter {
    pub fn new(client: Arc<dyn EthereumClient>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Ethereum(native) = client else {
        return Err(mismatch(ProviderType::Ethereum, client));
    };
    Ok(Box::new(EthereumAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for EthereumAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.login(options).await
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        self.client.logout().await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.login(options).await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        self.client.get_token().await
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.client.get_user().await?.map(UserMetadata::Ethereum))
    }
}
