// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Error types for the auth adapter layer
//!
//! [`UnsupportedProviderError`] is the only error the factory raises itself.
//! [`ProviderError`] is what provider ports return; adapters hand it back to the
//! caller untouched.

use thiserror::Error;

use super::provider::ProviderType;

/// A provider tag that is not registered in the adapter catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Your client {provider} is not supported, we only support {}",
    join_tags(.supported)
)]
pub struct UnsupportedProviderError {
    /// The tag that was requested
    pub provider: String,
    /// Every registered tag, in registration order
    pub supported: Vec<ProviderType>,
}

impl UnsupportedProviderError {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            supported: ProviderType::ALL.to_vec(),
        }
    }
}

fn join_tags(tags: &[ProviderType]) -> String {
    tags.iter()
        .map(ProviderType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while constructing an auth client
#[derive(Debug, Error)]
pub enum AuthClientError {
    #[error(transparent)]
    UnsupportedProvider(#[from] UnsupportedProviderError),

    #[error("The {expected} adapter cannot wrap a {actual} client")]
    ClientMismatch {
        expected: ProviderType,
        actual: ProviderType,
    },
}

/// Errors originating from a provider SDK
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_lists_tags_in_order() {
        let err = UnsupportedProviderError::new("doesNotExist");
        assert_eq!(
            err.to_string(),
            "Your client doesNotExist is not supported, we only support netlify, auth0, \
             azureActiveDirectory, dbAuth, goTrue, keycloak, magicLink, firebase, supabase, \
             ethereum, nhost, clerk, supertokens, custom"
        );
    }

    #[test]
    fn test_client_error_is_transparent() {
        let err: AuthClientError = UnsupportedProviderError::new("okta").into();
        assert!(err.to_string().starts_with("Your client okta is not supported"));
    }
}
