// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// SuperTokens Adapter
//
// Login and signup hand off to the hosted auth pages. Token and user are only
// read while a session exists.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{SuperTokensClient, SuperTokensPage, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::{SuperTokensUser, UserMetadata};

use super::options::mismatch;

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

pub struct SuperTokensAdapter {
    client: Arc<dyn SuperTokensClient>,
}

impl SuperTokensAdapter {
    pub fn new(client: Arc<dyn SuperTokensClient>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Supertokens(native) = client else {
        return Err(mismatch(ProviderType::Supertokens, client));
    };
    Ok(Box::new(SuperTokensAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for SuperTokensAdapter {
    async fn login(&self, _options: Value) -> Result<Value, ProviderError> {
        self.client.redirect_to_auth(SuperTokensPage::SignIn).await?;
        Ok(Value::Null)
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        self.client.sign_out().await?;
        Ok(Value::Null)
    }

    async fn signup(&self, _options: Value) -> Result<Value, ProviderError> {
        self.client.redirect_to_auth(SuperTokensPage::SignUp).await?;
        Ok(Value::Null)
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        if !self.client.does_session_exist().await? {
            return Ok(None);
        }
        self.client.get_access_token().await
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        if !self.client.does_session_exist().await? {
            return Ok(None);
        }
        let user_id = self.client.get_user_id().await?;
        let access_token_payload = self.client.get_access_token_payload().await?;
        Ok(Some(UserMetadata::Supertokens(SuperTokensUser {
            user_id,
            access_token_payload,
        })))
    }
}
