// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Provider Type Tags
//!
//! The closed set of authentication backends the adapter catalog knows about.
//! The wire form of each tag (used in configuration files and environment
//! variables) is the camelCase name returned by [`ProviderType::as_str`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnsupportedProviderError;

/// Identifier selecting which third-party authentication backend is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderType {
    Netlify,
    Auth0,
    AzureActiveDirectory,
    DbAuth,
    GoTrue,
    Keycloak,
    MagicLink,
    Firebase,
    Supabase,
    Ethereum,
    Nhost,
    Clerk,
    Supertokens,
    /// Caller-supplied implementation of the uniform contract
    Custom,
}

impl ProviderType {
    /// Every tag, in registration order
    pub const ALL: [ProviderType; 14] = [
        ProviderType::Netlify,
        ProviderType::Auth0,
        ProviderType::AzureActiveDirectory,
        ProviderType::DbAuth,
        ProviderType::GoTrue,
        ProviderType::Keycloak,
        ProviderType::MagicLink,
        ProviderType::Firebase,
        ProviderType::Supabase,
        ProviderType::Ethereum,
        ProviderType::Nhost,
        ProviderType::Clerk,
        ProviderType::Supertokens,
        ProviderType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Netlify => "netlify",
            ProviderType::Auth0 => "auth0",
            ProviderType::AzureActiveDirectory => "azureActiveDirectory",
            ProviderType::DbAuth => "dbAuth",
            ProviderType::GoTrue => "goTrue",
            ProviderType::Keycloak => "keycloak",
            ProviderType::MagicLink => "magicLink",
            ProviderType::Firebase => "firebase",
            ProviderType::Supabase => "supabase",
            ProviderType::Ethereum => "ethereum",
            ProviderType::Nhost => "nhost",
            ProviderType::Clerk => "clerk",
            ProviderType::Supertokens => "supertokens",
            ProviderType::Custom => "custom",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = UnsupportedProviderError;

    /// Tags are matched exactly; `"DbAuth"` is not `"dbAuth"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderType::ALL
            .iter()
            .copied()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| UnsupportedProviderError::new(s))
    }
}

/// Presence summary of the optional members of an auth client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub restore_auth_state: bool,
    pub forgot_password: bool,
    pub reset_password: bool,
    pub validate_reset_token: bool,
}

impl Capabilities {
    /// No optional capability
    pub const NONE: Capabilities = Capabilities {
        restore_auth_state: false,
        forgot_password: false,
        reset_password: false,
        validate_reset_token: false,
    };

    /// Only session restoration
    pub const RESTORE_ONLY: Capabilities = Capabilities {
        restore_auth_state: true,
        forgot_password: false,
        reset_password: false,
        validate_reset_token: false,
    };

    /// Names of the capabilities that are present, for display
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.restore_auth_state {
            names.push("restoreAuthState");
        }
        if self.forgot_password {
            names.push("forgotPassword");
        }
        if self.reset_password {
            names.push("resetPassword");
        }
        if self.validate_reset_token {
            names.push("validateResetToken");
        }
        names
    }
}
