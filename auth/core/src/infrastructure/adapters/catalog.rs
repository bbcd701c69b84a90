// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Adapter Catalog - Provider Tag Resolution
//
// Maps every provider tag to the function that wraps its native client. The
// mapping is an exhaustive match over `ProviderType`, so a new tag does not
// compile until it has an adapter.

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::AuthClientError;
use crate::domain::native_client::SupportedAuthClient;
use crate::domain::provider::{Capabilities, ProviderType};

use super::{
    auth0, azure_active_directory, clerk, custom, db_auth, ethereum, firebase, go_true, keycloak,
    magic_link, netlify, nhost, supabase, supertokens,
};

/// Wraps a native client into the uniform contract
pub type AdapterFn = fn(
    &SupportedAuthClient,
    Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError>;

/// Fixed set of provider adapters
pub struct AdapterCatalog;

impl AdapterCatalog {
    /// Registered tags, in registration order
    pub fn supported_tags() -> &'static [ProviderType] {
        &ProviderType::ALL
    }

    /// Wire names of the registered tags, in registration order
    pub fn supported_tag_names() -> Vec<&'static str> {
        Self::supported_tags().iter().map(ProviderType::as_str).collect()
    }

    /// Check if a wire tag has an adapter
    pub fn has_adapter(tag: &str) -> bool {
        Self::supported_tags().iter().any(|provider| provider.as_str() == tag)
    }

    /// Adapter function for a provider
    pub fn adapter_for(provider: ProviderType) -> AdapterFn {
        match provider {
            ProviderType::Netlify => netlify::adapter,
            ProviderType::Auth0 => auth0::adapter,
            ProviderType::AzureActiveDirectory => azure_active_directory::adapter,
            ProviderType::DbAuth => db_auth::adapter,
            ProviderType::GoTrue => go_true::adapter,
            ProviderType::Keycloak => keycloak::adapter,
            ProviderType::MagicLink => magic_link::adapter,
            ProviderType::Firebase => firebase::adapter,
            ProviderType::Supabase => supabase::adapter,
            ProviderType::Ethereum => ethereum::adapter,
            ProviderType::Nhost => nhost::adapter,
            ProviderType::Clerk => clerk::adapter,
            ProviderType::Supertokens => supertokens::adapter,
            ProviderType::Custom => custom::adapter,
        }
    }

    /// Optional capabilities a built-in adapter provides
    ///
    /// `None` for `custom`, whose capabilities come from the caller's implementation.
    pub fn declared_capabilities(provider: ProviderType) -> Option<Capabilities> {
        match provider {
            ProviderType::Netlify => Some(netlify::CAPABILITIES),
            ProviderType::Auth0 => Some(auth0::CAPABILITIES),
            ProviderType::AzureActiveDirectory => Some(azure_active_directory::CAPABILITIES),
            ProviderType::DbAuth => Some(db_auth::CAPABILITIES),
            ProviderType::GoTrue => Some(go_true::CAPABILITIES),
            ProviderType::Keycloak => Some(keycloak::CAPABILITIES),
            ProviderType::MagicLink => Some(magic_link::CAPABILITIES),
            ProviderType::Firebase => Some(firebase::CAPABILITIES),
            ProviderType::Supabase => Some(supabase::CAPABILITIES),
            ProviderType::Ethereum => Some(ethereum::CAPABILITIES),
            ProviderType::Nhost => Some(nhost::CAPABILITIES),
            ProviderType::Clerk => Some(clerk::CAPABILITIES),
            ProviderType::Supertokens => Some(supertokens::CAPABILITIES),
            ProviderType::Custom => None,
        }
    }
}
