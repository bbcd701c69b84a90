// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Firebase Auth Adapter
//
// `providerId: "password"` selects the email/password flows; any other
// provider id goes through the OAuth popup. Options may also be a bare
// provider id string.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::{AuthImplementation, RestoreAuthState};
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{FirebaseAuth, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::{mismatch, parse_or_default};

pub const CAPABILITIES: Capabilities = Capabilities::RESTORE_ONLY;

const PASSWORD_PROVIDER: &str = "password";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInOptions {
    #[serde(default = "default_provider_id")]
    provider_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl Default for SignInOptions {
    fn default() -> Self {
        Self {
            provider_id: default_provider_id(),
            email: None,
            password: None,
        }
    }
}

impl SignInOptions {
    fn from_value(options: Value) -> Result<Self, ProviderError> {
        match options {
            Value::String(provider_id) => Ok(Self {
                provider_id,
                ..Self::default()
            }),
            other => parse_or_default(other),
        }
    }

    fn email_and_password(&self) -> Result<(&str, &str), ProviderError> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(ProviderError::InvalidInput(
                "email and password are required for the password provider".to_string(),
            )),
        }
    }
}

fn default_provider_id() -> String {
    "google.com".to_string()
}

pub struct FirebaseAdapter {
    auth: Arc<dyn FirebaseAuth>,
}

impl FirebaseAdapter {
    pub fn new(auth: Arc<dyn FirebaseAuth>) -> Self {
        Self { auth }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Firebase(auth) = client else {
        return Err(mismatch(ProviderType::Firebase, client));
    };
    Ok(Box::new(FirebaseAdapter::new(auth.clone())))
}

#[async_trait]
impl AuthImplementation for FirebaseAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        let options = SignInOptions::from_value(options)?;
        if options.provider_id == PASSWORD_PROVIDER {
            let (email, password) = options.email_and_password()?;
            return self.auth.sign_in_with_email_and_password(email, password).await;
        }
        self.auth.sign_in_with_popup(&options.provider_id).await
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        self.auth.sign_out().await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        let options = SignInOptions::from_value(options)?;
        if options.provider_id == PASSWORD_PROVIDER {
            let (email, password) = options.email_and_password()?;
            return self
                .auth
                .create_user_with_email_and_password(email, password)
                .await;
        }
        self.auth.sign_in_with_popup(&options.provider_id).await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        if self.auth.current_user().is_none() {
            return Ok(None);
        }
        self.auth.get_id_token().await.map(Some)
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.auth.current_user().map(UserMetadata::Firebase))
    }

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        Some(self)
    }
}

#[async_trait]
impl RestoreAuthState for FirebaseAdapter {
    async fn restore_auth_state(&self) -> Result<(), ProviderError> {
        self.auth.wait_for_auth_state().await?;
        Ok(())
    }
}
