// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Native Client Ports (Anti-Corruption Layer)
//!
//! Each trait here is the slice of a vendor SDK that its adapter needs. The
//! SDK bindings themselves live outside this crate: callers implement these
//! ports over whatever client they already hold and hand the result in as a
//! [`SupportedAuthClient`].
//!
//! Implementations in `infrastructure/adapters/`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::auth_client::AuthImplementation;
use super::auth_config::DbAuthConfig;
use super::errors::ProviderError;
use super::provider::ProviderType;
use super::user::{
    Auth0User, AzureActiveDirectoryUser, ClerkUser, EthereumUser, FirebaseUser, GoTrueUser,
    KeycloakUser, MagicUser, NetlifyUser, NhostUser, SupabaseUser,
};

// ============================================================================
// Netlify Identity widget
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetlifyModal {
    Login,
    Signup,
}

#[async_trait]
pub trait NetlifyIdentity: Send + Sync {
    /// Open the widget and resolve once the user logs in or closes it
    async fn open(&self, modal: NetlifyModal) -> Result<Option<NetlifyUser>, ProviderError>;

    async fn logout(&self) -> Result<(), ProviderError>;

    fn current_user(&self) -> Option<NetlifyUser>;

    /// Refresh the current user's JWT and return it
    async fn refresh(&self) -> Result<String, ProviderError>;
}

// ============================================================================
// Auth0 SPA SDK
// ============================================================================

#[async_trait]
pub trait Auth0Client: Send + Sync {
    /// True when the current location carries `code` and `state` from a redirect
    fn redirect_callback_pending(&self) -> bool;

    async fn handle_redirect_callback(&self) -> Result<Value, ProviderError>;

    async fn login_with_redirect(&self, options: Value) -> Result<(), ProviderError>;

    async fn logout(&self, options: Value) -> Result<(), ProviderError>;

    async fn is_authenticated(&self) -> Result<bool, ProviderError>;

    async fn get_token_silently(&self, options: Value) -> Result<String, ProviderError>;

    async fn get_user(&self) -> Result<Option<Auth0User>, ProviderError>;
}

// ============================================================================
// MSAL (Azure Active Directory)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MsalAuthenticationResult {
    pub account: Option<AzureActiveDirectoryUser>,
    pub id_token: String,
    pub access_token: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SilentRequest {
    pub scopes: Vec<String>,
    pub account: AzureActiveDirectoryUser,
}

#[async_trait]
pub trait MsalClient: Send + Sync {
    async fn handle_redirect_promise(
        &self,
    ) -> Result<Option<MsalAuthenticationResult>, ProviderError>;

    fn all_accounts(&self) -> Vec<AzureActiveDirectoryUser>;

    fn active_account(&self) -> Option<AzureActiveDirectoryUser>;

    fn set_active_account(&self, account: AzureActiveDirectoryUser);

    async fn login_redirect(&self, options: Value) -> Result<(), ProviderError>;

    async fn logout_redirect(&self, options: Value) -> Result<(), ProviderError>;

    async fn acquire_token_silent(
        &self,
        request: SilentRequest,
    ) -> Result<MsalAuthenticationResult, ProviderError>;
}

// ============================================================================
// dbAuth
// ============================================================================

/// Value of the `method` field understood by the dbAuth handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DbAuthMethod {
    Login,
    Logout,
    Signup,
    GetToken,
    ForgotPassword,
    ResetPassword,
    ValidateResetToken,
}

impl DbAuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbAuthMethod::Login => "login",
            DbAuthMethod::Logout => "logout",
            DbAuthMethod::Signup => "signup",
            DbAuthMethod::GetToken => "getToken",
            DbAuthMethod::ForgotPassword => "forgotPassword",
            DbAuthMethod::ResetPassword => "resetPassword",
            DbAuthMethod::ValidateResetToken => "validateResetToken",
        }
    }
}

/// One call to the dbAuth function
///
/// `body: None` is a `GET {api_url}?method=…`; otherwise a JSON `POST`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbAuthRequest {
    pub method: DbAuthMethod,
    pub body: Option<Value>,
    pub config: DbAuthConfig,
}

/// Transport to the dbAuth serverless function
#[async_trait]
pub trait DbAuthTransport: Send + Sync {
    async fn send(&self, request: DbAuthRequest) -> Result<Value, ProviderError>;
}

// ============================================================================
// GoTrue
// ============================================================================

#[async_trait]
pub trait GoTrueClient: Send + Sync {
    async fn login(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<GoTrueUser, ProviderError>;

    async fn signup(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<Value, ProviderError>;

    fn current_user(&self) -> Option<GoTrueUser>;

    /// Log out the current user
    async fn logout_current_user(&self) -> Result<(), ProviderError>;

    /// JWT of the current user
    async fn jwt(&self) -> Result<String, ProviderError>;
}

// ============================================================================
// Keycloak
// ============================================================================

#[async_trait]
pub trait KeycloakClient: Send + Sync {
    async fn login(&self, options: Value) -> Result<(), ProviderError>;

    async fn logout(&self, options: Value) -> Result<(), ProviderError>;

    async fn register(&self, options: Value) -> Result<(), ProviderError>;

    fn token(&self) -> Option<String>;

    fn token_parsed(&self) -> Option<KeycloakUser>;
}

// ============================================================================
// Magic
// ============================================================================

#[async_trait]
pub trait MagicClient: Send + Sync {
    /// Returns the DID token on success
    async fn login_with_magic_link(
        &self,
        email: &str,
        show_ui: bool,
    ) -> Result<Option<String>, ProviderError>;

    async fn logout(&self) -> Result<bool, ProviderError>;

    async fn is_logged_in(&self) -> Result<bool, ProviderError>;

    async fn get_id_token(&self, lifespan_secs: u64) -> Result<String, ProviderError>;

    async fn get_metadata(&self) -> Result<MagicUser, ProviderError>;
}

// ============================================================================
// Firebase
// ============================================================================

#[async_trait]
pub trait FirebaseAuth: Send + Sync {
    /// Resolve on the first `onAuthStateChanged` event
    async fn wait_for_auth_state(&self) -> Result<Option<FirebaseUser>, ProviderError>;

    async fn sign_in_with_popup(&self, provider_id: &str) -> Result<Value, ProviderError>;

    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Value, ProviderError>;

    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Value, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    fn current_user(&self) -> Option<FirebaseUser>;

    /// ID token of the current user
    async fn get_id_token(&self) -> Result<String, ProviderError>;
}

// ============================================================================
// Supabase
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupabaseSession {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SupabaseUser>,
}

#[async_trait]
pub trait SupabaseClient: Send + Sync {
    async fn sign_in(&self, credentials: Value) -> Result<Value, ProviderError>;

    async fn sign_up(&self, credentials: Value) -> Result<Value, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    fn session(&self) -> Option<SupabaseSession>;

    fn user(&self) -> Option<SupabaseUser>;

    /// True when the current location carries a session fragment
    fn session_in_url(&self) -> bool;

    async fn get_session_from_url(&self) -> Result<Option<SupabaseSession>, ProviderError>;
}

// ============================================================================
// Ethereum
// ============================================================================

#[async_trait]
pub trait EthereumClient: Send + Sync {
    async fn login(&self, options: Value) -> Result<Value, ProviderError>;

    async fn logout(&self) -> Result<(), ProviderError>;

    async fn get_token(&self) -> Result<Option<String>, ProviderError>;

    async fn get_user(&self) -> Result<Option<EthereumUser>, ProviderError>;
}

// ============================================================================
// Nhost
// ============================================================================

#[async_trait]
pub trait NhostAuth: Send + Sync {
    async fn sign_in(&self, params: Value) -> Result<Value, ProviderError>;

    async fn sign_up(&self, params: Value) -> Result<Value, ProviderError>;

    async fn sign_out(&self, params: Value) -> Result<Value, ProviderError>;

    fn access_token(&self) -> Option<String>;

    fn user(&self) -> Option<NhostUser>;

    async fn refresh_session(&self) -> Result<(), ProviderError>;
}

// ============================================================================
// Clerk
// ============================================================================

#[async_trait]
pub trait ClerkClient: Send + Sync {
    async fn open_sign_in(&self, options: Value) -> Result<(), ProviderError>;

    async fn open_sign_up(&self, options: Value) -> Result<(), ProviderError>;

    async fn sign_out(&self, options: Value) -> Result<(), ProviderError>;

    fn has_session(&self) -> bool;

    async fn get_session_token(&self, options: Value) -> Result<String, ProviderError>;

    fn user(&self) -> Option<ClerkUser>;
}

// ============================================================================
// SuperTokens
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperTokensPage {
    SignIn,
    SignUp,
}

#[async_trait]
pub trait SuperTokensClient: Send + Sync {
    async fn redirect_to_auth(&self, page: SuperTokensPage) -> Result<(), ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    async fn does_session_exist(&self) -> Result<bool, ProviderError>;

    async fn get_access_token(&self) -> Result<Option<String>, ProviderError>;

    async fn get_user_id(&self) -> Result<String, ProviderError>;

    async fn get_access_token_payload(&self) -> Result<Value, ProviderError>;
}

// ============================================================================
// Tagged union of native clients
// ============================================================================

/// Shared handle to a provider SDK, tagged by provider
///
/// Cloning clones the `Arc`, never the SDK client.
#[derive(Clone)]
pub enum SupportedAuthClient {
    Netlify(Arc<dyn NetlifyIdentity>),
    Auth0(Arc<dyn Auth0Client>),
    AzureActiveDirectory(Arc<dyn MsalClient>),
    DbAuth(Arc<dyn DbAuthTransport>),
    GoTrue(Arc<dyn GoTrueClient>),
    Keycloak(Arc<dyn KeycloakClient>),
    MagicLink(Arc<dyn MagicClient>),
    Firebase(Arc<dyn FirebaseAuth>),
    Supabase(Arc<dyn SupabaseClient>),
    Ethereum(Arc<dyn EthereumClient>),
    Nhost(Arc<dyn NhostAuth>),
    Clerk(Arc<dyn ClerkClient>),
    Supertokens(Arc<dyn SuperTokensClient>),
    Custom(Arc<dyn AuthImplementation>),
}

impl SupportedAuthClient {
    /// Provider this handle belongs to
    pub fn provider_type(&self) -> ProviderType {
        match self {
            SupportedAuthClient::Netlify(_) => ProviderType::Netlify,
            SupportedAuthClient::Auth0(_) => ProviderType::Auth0,
            SupportedAuthClient::AzureActiveDirectory(_) => ProviderType::AzureActiveDirectory,
            SupportedAuthClient::DbAuth(_) => ProviderType::DbAuth,
            SupportedAuthClient::GoTrue(_) => ProviderType::GoTrue,
            SupportedAuthClient::Keycloak(_) => ProviderType::Keycloak,
            SupportedAuthClient::MagicLink(_) => ProviderType::MagicLink,
            SupportedAuthClient::Firebase(_) => ProviderType::Firebase,
            SupportedAuthClient::Supabase(_) => ProviderType::Supabase,
            SupportedAuthClient::Ethereum(_) => ProviderType::Ethereum,
            SupportedAuthClient::Nhost(_) => ProviderType::Nhost,
            SupportedAuthClient::Clerk(_) => ProviderType::Clerk,
            SupportedAuthClient::Supertokens(_) => ProviderType::Supertokens,
            SupportedAuthClient::Custom(_) => ProviderType::Custom,
        }
    }

    /// True when both handles point at the same SDK client
    pub fn ptr_eq(&self, other: &SupportedAuthClient) -> bool {
        self.provider_type() == other.provider_type()
            && std::ptr::eq(self.data_ptr(), other.data_ptr())
    }

    fn data_ptr(&self) -> *const () {
        match self {
            SupportedAuthClient::Netlify(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Auth0(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::AzureActiveDirectory(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::DbAuth(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::GoTrue(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Keycloak(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::MagicLink(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Firebase(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Supabase(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Ethereum(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Nhost(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Clerk(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Supertokens(c) => Arc::as_ptr(c) as *const (),
            SupportedAuthClient::Custom(c) => Arc::as_ptr(c) as *const (),
        }
    }
}

impl fmt::Debug for SupportedAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SupportedAuthClient::{}({:p})", self.provider_type(), self.data_ptr())
    }
}
