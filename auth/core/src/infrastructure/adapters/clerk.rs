// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Clerk Adapter
//
// Clerk keeps application roles in `publicMetadata.roles`; the adapter lifts
// them onto the user so callers can check roles without digging.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{ClerkClient, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::{ClerkUser, UserMetadata};

use super::options::mismatch;

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

pub struct ClerkAdapter {
    client: Arc<dyn ClerkClient>,
}

impl ClerkAdapter {
    pub fn new(client: Arc<dyn ClerkClient>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Clerk(native) = client else {
        return Err(mismatch(ProviderType::Clerk, client));
    };
    Ok(Box::new(ClerkAdapter::new(native.clone())))
}

fn with_roles(mut user: ClerkUser) -> ClerkUser {
    if let Some(Value::Array(roles)) = user.public_metadata.get("roles") {
        let lifted: Option<Vec<String>> = roles
            .iter()
            .map(|role| role.as_str().map(str::to_string))
            .collect();
        if let Some(lifted) = lifted {
            user.roles = lifted;
        }
    }
    user
}

#[async_trait]
impl AuthImplementation for ClerkAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.open_sign_in(options).await?;
        Ok(Value::Null)
    }

    async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.sign_out(options).await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.open_sign_up(options).await?;
        Ok(Value::Null)
    }

    async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError> {
        if !self.client.has_session() {
            return Ok(None);
        }
        self.client.get_session_token(options).await.map(Some)
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self
            .client
            .user()
            .map(|user| UserMetadata::Clerk(with_roles(user))))
    }
}
