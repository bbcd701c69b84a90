// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Client Factory - Application Layer
//!
//! Builds an [`AuthClient`] from a native client and a provider tag. The tag
//! is resolved against the adapter catalog; the matching adapter wraps the
//! native client and the factory stamps the result with the caller's tag and
//! client handle.
//!
//! Nothing is cached: every call builds a fresh adapter, so two native
//! clients of the same provider never share state.
//!
//! # Architecture
//!
//! - **Layer:** Application Layer
//! - **Purpose:** Resolve provider tags to adapters and assemble uniform clients

use tracing::{debug, instrument};

use crate::domain::auth_client::AuthClient;
use crate::domain::auth_config::{AuthConfigSpec, SupportedAuthConfig};
use crate::domain::errors::AuthClientError;
use crate::domain::native_client::SupportedAuthClient;
use crate::domain::provider::ProviderType;
use crate::infrastructure::adapters::AdapterCatalog;

/// Creates an AuthClient for a wire provider tag
///
/// Unknown tags fail with [`AuthClientError::UnsupportedProvider`], whose
/// message lists every supported tag. Any error raised while the adapter
/// wraps the native client is returned as is.
pub fn create_auth_client(
    client: SupportedAuthClient,
    provider_type: &str,
    config: Option<SupportedAuthConfig>,
) -> Result<AuthClient, AuthClientError> {
    let provider: ProviderType = provider_type.parse()?;
    create_auth_client_for(client, provider, config)
}

/// Creates an AuthClient for an already parsed provider
#[instrument(skip_all, fields(provider = %provider))]
pub fn create_auth_client_for(
    client: SupportedAuthClient,
    provider: ProviderType,
    config: Option<SupportedAuthConfig>,
) -> Result<AuthClient, AuthClientError> {
    let adapter = AdapterCatalog::adapter_for(provider);
    let implementation = adapter(&client, config)?;
    let auth_client = AuthClient::new(provider, client, implementation);

    debug!(
        capabilities = ?auth_client.capabilities().names(),
        "Created auth client"
    );
    Ok(auth_client)
}

/// Creates an AuthClient from the `spec` section of an auth config manifest
pub fn create_auth_client_from_config(
    client: SupportedAuthClient,
    spec: &AuthConfigSpec,
) -> Result<AuthClient, AuthClientError> {
    let provider = spec.provider_type()?;
    create_auth_client_for(client, provider, spec.provider_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth_client::AuthImplementation;
    use crate::domain::errors::ProviderError;
    use crate::domain::user::UserMetadata;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    struct NoopAuth;

    #[async_trait]
    impl AuthImplementation for NoopAuth {
        async fn login(&self, _options: Value) -> Result<Value, ProviderError> {
            Ok(Value::Null)
        }
        async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
            Ok(Value::Null)
        }
        async fn signup(&self, _options: Value) -> Result<Value, ProviderError> {
            Ok(Value::Null)
        }
        async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
            Ok(None)
        }
        async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
            Ok(None)
        }
    }

    fn custom_client() -> SupportedAuthClient {
        SupportedAuthClient::Custom(Arc::new(NoopAuth))
    }

    #[test]
    fn test_custom_tag_keeps_client_and_tag() {
        let client = custom_client();
        let auth = create_auth_client(client.clone(), "custom", None).unwrap();

        assert_eq!(auth.provider_type(), ProviderType::Custom);
        assert!(auth.client().ptr_eq(&client));
        assert!(auth.capabilities().names().is_empty());
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = create_auth_client(custom_client(), "doesNotExist", None).unwrap_err();

        let AuthClientError::UnsupportedProvider(unsupported) = &err else {
            panic!("expected UnsupportedProvider, got {err:?}");
        };
        assert_eq!(unsupported.provider, "doesNotExist");
        assert!(err.to_string().starts_with("Your client doesNotExist is not supported"));
    }

    #[test]
    fn test_wrong_native_client_is_a_mismatch() {
        let err = create_auth_client(custom_client(), "auth0", None).unwrap_err();
        assert!(matches!(
            err,
            AuthClientError::ClientMismatch {
                expected: ProviderType::Auth0,
                actual: ProviderType::Custom,
            }
        ));
    }

    #[test]
    fn test_from_config_spec() {
        let spec = AuthConfigSpec::default();
        let auth = create_auth_client_from_config(custom_client(), &spec).unwrap();
        assert_eq!(auth.provider_type(), ProviderType::Custom);

        let bad = AuthConfigSpec {
            provider: "okta".to_string(),
            ..AuthConfigSpec::default()
        };
        assert!(matches!(
            create_auth_client_from_config(custom_client(), &bad),
            Err(AuthClientError::UnsupportedProvider(_))
        ));
    }
}
