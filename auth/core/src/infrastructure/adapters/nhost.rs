// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Nhost Adapter

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::{AuthImplementation, RestoreAuthState};
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{NhostAuth, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::mismatch;

pub const CAPABILITIES: Capabilities = Capabilities::RESTORE_ONLY;

pub struct NhostAdapter {
    auth: Arc<dyn NhostAuth>,
}

impl NhostAdapter {
    pub fn new(auth: Arc<dyn NhostAuth>) -> Self {
        Self { auth }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Nhost(auth) = client else {
        return Err(mismatch(ProviderType::Nhost, client));
    };
    Ok(Box::new(NhostAdapter::new(auth.clone())))
}

#[async_trait]
impl AuthImplementation for NhostAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.auth.sign_in(options).await
    }

    async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.auth.sign_out(options).await
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.auth.sign_up(options).await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        Ok(self.auth.access_token())
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.auth.user().map(UserMetadata::Nhost))
    }

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        Some(self)
    }
}

#[async_trait]
impl RestoreAuthState for NhostAdapter {
    async fn restore_auth_state(&self) -> Result<(), ProviderError> {
        self.auth.refresh_session().await
    }
}
