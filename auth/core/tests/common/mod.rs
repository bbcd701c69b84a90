// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Signed-out native clients for every provider
//!
//! `SignedOut` implements every port as a client with no session: logins and
//! logouts succeed and return nothing, token and user lookups come back empty.

#![allow(dead_code)]

use aegis_auth_core::domain::native_client::{
    Auth0Client, ClerkClient, DbAuthRequest, DbAuthTransport, EthereumClient, FirebaseAuth,
    GoTrueClient, KeycloakClient, MagicClient, MsalAuthenticationResult, MsalClient,
    NetlifyIdentity, NetlifyModal, NhostAuth, SilentRequest, SupabaseClient, SupabaseSession,
    SuperTokensClient, SuperTokensPage,
};
use aegis_auth_core::domain::user::{
    Auth0User, AzureActiveDirectoryUser, ClerkUser, EthereumUser, FirebaseUser, GoTrueUser,
    KeycloakUser, MagicUser, NetlifyUser, NhostUser, SupabaseUser,
};
use aegis_auth_core::{
    AuthImplementation, ProviderError, ProviderType, SupportedAuthClient, UserMetadata,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub struct SignedOut;

/// Fresh signed-out native client for a provider
pub fn client_for(provider: ProviderType) -> SupportedAuthClient {
    match provider {
        ProviderType::Netlify => SupportedAuthClient::Netlify(Arc::new(SignedOut)),
        ProviderType::Auth0 => SupportedAuthClient::Auth0(Arc::new(SignedOut)),
        ProviderType::AzureActiveDirectory => {
            SupportedAuthClient::AzureActiveDirectory(Arc::new(SignedOut))
        }
        ProviderType::DbAuth => {
            SupportedAuthClient::DbAuth(Arc::new(RecordingTransport::default()))
        }
        ProviderType::GoTrue => SupportedAuthClient::GoTrue(Arc::new(SignedOut)),
        ProviderType::Keycloak => SupportedAuthClient::Keycloak(Arc::new(SignedOut)),
        ProviderType::MagicLink => SupportedAuthClient::MagicLink(Arc::new(SignedOut)),
        ProviderType::Firebase => SupportedAuthClient::Firebase(Arc::new(SignedOut)),
        ProviderType::Supabase => SupportedAuthClient::Supabase(Arc::new(SignedOut)),
        ProviderType::Ethereum => SupportedAuthClient::Ethereum(Arc::new(SignedOut)),
        ProviderType::Nhost => SupportedAuthClient::Nhost(Arc::new(SignedOut)),
        ProviderType::Clerk => SupportedAuthClient::Clerk(Arc::new(SignedOut)),
        ProviderType::Supertokens => SupportedAuthClient::Supertokens(Arc::new(SignedOut)),
        ProviderType::Custom => SupportedAuthClient::Custom(Arc::new(SignedOut)),
    }
}

/// dbAuth transport that records every request and answers `null`
#[derive(Default)]
pub struct RecordingTransport {
    pub requests: Mutex<Vec<DbAuthRequest>>,
}

#[async_trait]
impl DbAuthTransport for RecordingTransport {
    async fn send(&self, request: DbAuthRequest) -> Result<Value, ProviderError> {
        self.requests.lock().unwrap().push(request);
        Ok(Value::Null)
    }
}

fn signed_out() -> ProviderError {
    ProviderError::Authentication("no session".to_string())
}

#[async_trait]
impl NetlifyIdentity for SignedOut {
    async fn open(&self, _modal: NetlifyModal) -> Result<Option<NetlifyUser>, ProviderError> {
        Ok(None)
    }
    async fn logout(&self) -> Result<(), ProviderError> {
        Ok(())
    }
    fn current_user(&self) -> Option<NetlifyUser> {
        None
    }
    async fn refresh(&self) -> Result<String, ProviderError> {
        Err(signed_out())
    }
}

#[async_trait]
impl Auth0Client for SignedOut {
    fn redirect_callback_pending(&self) -> bool {
        false
    }
    async fn handle_redirect_callback(&self) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn login_with_redirect(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn logout(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn is_authenticated(&self) -> Result<bool, ProviderError> {
        Ok(false)
    }
    async fn get_token_silently(&self, _options: Value) -> Result<String, ProviderError> {
        Err(signed_out())
    }
    async fn get_user(&self) -> Result<Option<Auth0User>, ProviderError> {
        Ok(None)
    }
}

#[async_trait]
impl MsalClient for SignedOut {
    async fn handle_redirect_promise(
        &self,
    ) -> Result<Option<MsalAuthenticationResult>, ProviderError> {
        Ok(None)
    }
    fn all_accounts(&self) -> Vec<AzureActiveDirectoryUser> {
        Vec::new()
    }
    fn active_account(&self) -> Option<AzureActiveDirectoryUser> {
        None
    }
    fn set_active_account(&self, _account: AzureActiveDirectoryUser) {}
    async fn login_redirect(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn logout_redirect(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn acquire_token_silent(
        &self,
        _request: SilentRequest,
    ) -> Result<MsalAuthenticationResult, ProviderError> {
        Err(signed_out())
    }
}

#[async_trait]
impl GoTrueClient for SignedOut {
    async fn login(
        &self,
        _email: &str,
        _password: &str,
        _remember: bool,
    ) -> Result<GoTrueUser, ProviderError> {
        Err(signed_out())
    }
    async fn signup(
        &self,
        _email: &str,
        _password: &str,
        _remember: bool,
    ) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    fn current_user(&self) -> Option<GoTrueUser> {
        None
    }
    async fn logout_current_user(&self) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn jwt(&self) -> Result<String, ProviderError> {
        Err(signed_out())
    }
}

#[async_trait]
impl KeycloakClient for SignedOut {
    async fn login(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn logout(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn register(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    fn token(&self) -> Option<String> {
        None
    }
    fn token_parsed(&self) -> Option<KeycloakUser> {
        None
    }
}

#[async_trait]
impl MagicClient for SignedOut {
    async fn login_with_magic_link(
        &self,
        _email: &str,
        _show_ui: bool,
    ) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
    async fn logout(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }
    async fn is_logged_in(&self) -> Result<bool, ProviderError> {
        Ok(false)
    }
    async fn get_id_token(&self, _lifespan_secs: u64) -> Result<String, ProviderError> {
        Err(signed_out())
    }
    async fn get_metadata(&self) -> Result<MagicUser, ProviderError> {
        Err(signed_out())
    }
}

#[async_trait]
impl FirebaseAuth for SignedOut {
    async fn wait_for_auth_state(&self) -> Result<Option<FirebaseUser>, ProviderError> {
        Ok(None)
    }
    async fn sign_in_with_popup(&self, _provider_id: &str) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn sign_in_with_email_and_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn create_user_with_email_and_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn sign_out(&self) -> Result<(), ProviderError> {
        Ok(())
    }
    fn current_user(&self) -> Option<FirebaseUser> {
        None
    }
    async fn get_id_token(&self) -> Result<String, ProviderError> {
        Err(signed_out())
    }
}

#[async_trait]
impl SupabaseClient for SignedOut {
    async fn sign_in(&self, _credentials: Value) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn sign_up(&self, _credentials: Value) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn sign_out(&self) -> Result<(), ProviderError> {
        Ok(())
    }
    fn session(&self) -> Option<SupabaseSession> {
        None
    }
    fn user(&self) -> Option<SupabaseUser> {
        None
    }
    fn session_in_url(&self) -> bool {
        false
    }
    async fn get_session_from_url(&self) -> Result<Option<SupabaseSession>, ProviderError> {
        Ok(None)
    }
}

#[async_trait]
impl EthereumClient for SignedOut {
    async fn login(&self, _options: Value) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn logout(&self) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn get_token(&self) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
    async fn get_user(&self) -> Result<Option<EthereumUser>, ProviderError> {
        Ok(None)
    }
}

#[async_trait]
impl NhostAuth for SignedOut {
    async fn sign_in(&self, _params: Value) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn sign_up(&self, _params: Value) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    async fn sign_out(&self, _params: Value) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
    fn access_token(&self) -> Option<String> {
        None
    }
    fn user(&self) -> Option<NhostUser> {
        None
    }
    async fn refresh_session(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

#[async_trait]
impl ClerkClient for SignedOut {
    async fn open_sign_in(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn open_sign_up(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn sign_out(&self, _options: Value) -> Result<(), ProviderError> {
        Ok(())
    }
    fn has_session(&self) -> bool {
        false
    }
    async fn get_session_token(&self, _options: Value) -> Result<String, ProviderError> {
        Err(signed_out())
    }
    fn user(&self) -> Option<ClerkUser> {
        None
    }
}

#[async_trait]
impl SuperTokensClient for SignedOut {
    async fn redirect_to_auth(&self, _page: SuperTokensPage) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn sign_out(&self) -> Result<(), ProviderError> {
        Ok(())
    }
    async fn does_session_exist(&self) -> Result<bool, ProviderError> {
        Ok(false)
    }
    async fn get_access_token(&self) -> Result<Option<String>, ProviderError> {
        Ok(None)
    }
    async fn get_user_id(&self) -> Result<String, ProviderError> {
        Err(signed_out())
    }
    async fn get_access_token_payload(&self) -> Result<Value, ProviderError> {
        Ok(Value::Null)
    }
}

#[async_trait]
impl AuthImplementation for SignedOut {
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
