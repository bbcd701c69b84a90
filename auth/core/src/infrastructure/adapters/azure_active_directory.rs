// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Azure Active Directory Adapter (MSAL)
//
// Redirect-based login. Tokens come from a silent acquisition against the
// active account and the adapter returns the ID token. A cached account only
// becomes active through `restore_auth_state`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::{AuthImplementation, RestoreAuthState};
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{MsalClient, SilentRequest, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::{mismatch, parse_or_default};

pub const CAPABILITIES: Capabilities = Capabilities::RESTORE_ONLY;

const DEFAULT_SCOPES: [&str; 2] = ["openid", "profile"];

#[derive(Debug, Default, Deserialize)]
struct TokenOptions {
    #[serde(default)]
    scopes: Option<Vec<String>>,
}

pub struct AzureActiveDirectoryAdapter {
    client: Arc<dyn MsalClient>,
}

impl AzureActiveDirectoryAdapter {
    pub fn new(client: Arc<dyn MsalClient>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::AzureActiveDirectory(native) = client else {
        return Err(mismatch(ProviderType::AzureActiveDirectory, client));
    };
    Ok(Box::new(AzureActiveDirectoryAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for AzureActiveDirectoryAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.login_redirect(options).await?;
        Ok(Value::Null)
    }

    async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.logout_redirect(options).await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.login_redirect(options).await?;
        Ok(Value::Null)
    }

    async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError> {
        let Some(account) = self.client.active_account() else {
            return Ok(None);
        };
        let options: TokenOptions = parse_or_default(options)?;
        let scopes = options
            .scopes
            .unwrap_or_else(|| DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect());

        let result = self
            .client
            .acquire_token_silent(SilentRequest { scopes, account })
            .await?;
        Ok(Some(result.id_token))
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self
            .client
            .active_account()
            .map(UserMetadata::AzureActiveDirectory))
    }

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        Some(self)
    }
}

#[async_trait]
impl RestoreAuthState for AzureActiveDirectoryAdapter {
    async fn restore_auth_state(&self) -> Result<(), ProviderError> {
        let redirect = self.client.handle_redirect_promise().await?;
        if let Some(account) = redirect.and_then(|result| result.account) {
            self.client.set_active_account(account);
            return Ok(());
        }

        if self.client.active_account().is_none() {
            if let Some(account) = self.client.all_accounts().into_iter().next() {
                self.client.set_active_account(account);
            }
        }
        Ok(())
    }
}
