// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Custom Adapter
//
// Pass-through for callers that bring their own `AuthImplementation`. The
// optional capabilities are whatever the inner implementation exposes.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::{
    AuthImplementation, ForgotPassword, ResetPassword, RestoreAuthState, ValidateResetToken,
};
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::SupportedAuthClient;
use crate::domain::provider::ProviderType;
use crate::domain::user::UserMetadata;

use super::options::mismatch;

pub struct CustomAdapter {
    inner: Arc<dyn AuthImplementation>,
}

impl CustomAdapter {
    pub fn new(inner: Arc<dyn AuthImplementation>) -> Self {
        Self { inner }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Custom(inner) = client else {
        return Err(mismatch(ProviderType::Custom, client));
    };
    Ok(Box::new(CustomAdapter::new(inner.clone())))
}

#[async_trait]
impl AuthImplementation for CustomAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.inner.login(options).await
    }

    async fn logout(&self, options: Value) -> Result<Value, ProviderError> {
        self.inner.logout(options).await
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.inner.signup(options).await
    }

    async fn get_token(&self, options: Value) -> Result<Option<String>, ProviderError> {
        self.inner.get_token(options).await
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        self.inner.get_user_metadata().await
    }

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        self.inner.as_restore_auth_state()
    }

    fn as_forgot_password(&self) -> Option<&dyn ForgotPassword> {
        self.inner.as_forgot_password()
    }

    fn as_reset_password(&self) -> Option<&dyn ResetPassword> {
        self.inner.as_reset_password()
    }

    fn as_validate_reset_token(&self) -> Option<&dyn ValidateResetToken> {
        self.inner.as_validate_reset_token()
    }
}
