// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! User Metadata
//!
//! Per-provider user shapes, unified as a tagged union keyed by provider.
//! Shapes are never interchangeable: consumers match on the variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::provider::ProviderType;

/// User data reported by the configured provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "user", rename_all = "camelCase")]
pub enum UserMetadata {
    Netlify(NetlifyUser),
    Auth0(Auth0User),
    AzureActiveDirectory(AzureActiveDirectoryUser),
    DbAuth(DbAuthUser),
    GoTrue(GoTrueUser),
    Keycloak(KeycloakUser),
    MagicLink(MagicUser),
    Firebase(FirebaseUser),
    Supabase(SupabaseUser),
    Ethereum(EthereumUser),
    Nhost(NhostUser),
    Clerk(ClerkUser),
    Supertokens(SuperTokensUser),
    /// Free-form metadata from a custom implementation
    Custom(Value),
}

impl UserMetadata {
    /// Provider that produced this shape
    pub fn provider_type(&self) -> ProviderType {
        match self {
            UserMetadata::Netlify(_) => ProviderType::Netlify,
            UserMetadata::Auth0(_) => ProviderType::Auth0,
            UserMetadata::AzureActiveDirectory(_) => ProviderType::AzureActiveDirectory,
            UserMetadata::DbAuth(_) => ProviderType::DbAuth,
            UserMetadata::GoTrue(_) => ProviderType::GoTrue,
            UserMetadata::Keycloak(_) => ProviderType::Keycloak,
            UserMetadata::MagicLink(_) => ProviderType::MagicLink,
            UserMetadata::Firebase(_) => ProviderType::Firebase,
            UserMetadata::Supabase(_) => ProviderType::Supabase,
            UserMetadata::Ethereum(_) => ProviderType::Ethereum,
            UserMetadata::Nhost(_) => ProviderType::Nhost,
            UserMetadata::Clerk(_) => ProviderType::Clerk,
            UserMetadata::Supertokens(_) => ProviderType::Supertokens,
            UserMetadata::Custom(_) => ProviderType::Custom,
        }
    }

    /// Best-effort email lookup across shapes
    pub fn email(&self) -> Option<&str> {
        match self {
            UserMetadata::Netlify(u) => u.email.as_deref(),
            UserMetadata::Auth0(u) => u.email.as_deref(),
            UserMetadata::AzureActiveDirectory(u) => Some(u.username.as_str()),
            UserMetadata::GoTrue(u) => u.email.as_deref(),
            UserMetadata::Keycloak(u) => u.email.as_deref(),
            UserMetadata::MagicLink(u) => u.email.as_deref(),
            UserMetadata::Firebase(u) => u.email.as_deref(),
            UserMetadata::Supabase(u) => u.email.as_deref(),
            UserMetadata::Nhost(u) => u.email.as_deref(),
            UserMetadata::Clerk(u) => u.primary_email_address.as_deref(),
            UserMetadata::Custom(v) => v.get("email").and_then(Value::as_str),
            UserMetadata::DbAuth(_) | UserMetadata::Ethereum(_) | UserMetadata::Supertokens(_) => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetlifyToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetlifyUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: Map<String, Value>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<NetlifyToken>,
}

/// OIDC standard claims as returned by the Auth0 SPA SDK
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auth0User {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// MSAL account info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureActiveDirectoryUser {
    pub home_account_id: String,
    pub environment: String,
    pub tenant_id: String,
    pub username: String,
    pub local_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub id_token_claims: Map<String, Value>,
}

/// dbAuth exposes the session's user id and nothing else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbAuthUser {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoTrueUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub aud: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub app_metadata: Map<String, Value>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Parsed Keycloak access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeycloakUser {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm_access: Option<KeycloakRoles>,
    #[serde(default)]
    pub resource_access: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycloakRoles {
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseUser {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub provider_data: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupabaseUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub aud: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub app_metadata: Map<String, Value>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthereumUser {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NhostUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_role: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClerkUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_address: Option<String>,
    #[serde(default)]
    pub public_metadata: Map<String, Value>,
    /// Lifted from `public_metadata.roles` by the adapter
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperTokensUser {
    pub user_id: String,
    #[serde(default)]
    pub access_token_payload: Value,
}
