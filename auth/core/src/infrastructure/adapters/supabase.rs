// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Supabase Adapter
//
// Session restore picks up the session an OAuth or magic-link redirect left in
// the URL.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::{AuthImplementation, RestoreAuthState};
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{SupabaseClient, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::mismatch;

pub const CAPABILITIES: Capabilities = Capabilities::RESTORE_ONLY;

pub struct SupabaseAdapter {
    client: Arc<dyn SupabaseClient>,
}

impl SupabaseAdapter {
    pub fn new(client: Arc<dyn SupabaseClient>) -> Self {
        Self { client }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Supabase(native) = client else {
        return Err(mismatch(ProviderType::Supabase, client));
    };
    Ok(Box::new(SupabaseAdapter::new(native.clone())))
}

#[async_trait]
impl AuthImplementation for SupabaseAdapter {
    async fn login(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.sign_in(options).await
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        self.client.sign_out().await?;
        Ok(Value::Null)
    }

    async fn signup(&self, options: Value) -> Result<Value, ProviderError> {
        self.client.sign_up(options).await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        Ok(self.client.session().map(|session| session.access_token))
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.client.user().map(UserMetadata::Supabase))
    }

    fn as_restore_auth_state(&self) -> Option<&dyn RestoreAuthState> {
        Some(self)
    }
}

#[async_trait]
impl RestoreAuthState for SupabaseAdapter {
    async fn restore_auth_state(&self) -> Result<(), ProviderError> {
        if self.client.session_in_url() {
            self.client.get_session_from_url().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::native_client::SupabaseSession;
    use crate::domain::user::SupabaseUser;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSupabase {
        session: Option<SupabaseSession>,
        session_in_url: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockSupabase {
        fn record(&self, call: &str) {
            self.calls.lock().unwrap().push(call.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn session(access_token: &str) -> SupabaseSession {
        SupabaseSession {
            access_token: access_token.to_string(),
            token_type: "bearer".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_in: Some(3600),
            user: None,
        }
    }

    #[async_trait]
    impl SupabaseClient for MockSupabase {
        async fn sign_in(&self, credentials: Value) -> Result<Value, ProviderError> {
            self.record("sign_in");
            Ok(credentials)
        }
        async fn sign_up(&self, credentials: Value) -> Result<Value, ProviderError> {
            self.record("sign_up");
            Ok(credentials)
        }
        async fn sign_out(&self) -> Result<(), ProviderError> {
            self.record("sign_out");
            Ok(())
        }
        fn session(&self) -> Option<SupabaseSession> {
            self.session.clone()
        }
        fn user(&self) -> Option<SupabaseUser> {
            None
        }
        fn session_in_url(&self) -> bool {
            self.session_in_url
        }
        async fn get_session_from_url(&self) -> Result<Option<SupabaseSession>, ProviderError> {
            self.record("get_session_from_url");
            Ok(Some(session("from-url")))
        }
    }

    #[tokio::test]
    async fn test_restore_reads_session_from_url() {
        let mock = Arc::new(MockSupabase {
            session_in_url: true,
            ..MockSupabase::default()
        });
        let adapter = SupabaseAdapter::new(mock.clone());

        adapter.restore_auth_state().await.unwrap();

        assert_eq!(mock.calls(), vec!["get_session_from_url"]);
    }

    #[tokio::test]
    async fn test_restore_skips_url_without_session() {
        let mock = Arc::new(MockSupabase::default());
        let adapter = SupabaseAdapter::new(mock.clone());

        adapter.restore_auth_state().await.unwrap();

        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_token_is_session_access_token() {
        let signed_in = SupabaseAdapter::new(Arc::new(MockSupabase {
            session: Some(session("access-123")),
            ..MockSupabase::default()
        }));
        let signed_out = SupabaseAdapter::new(Arc::new(MockSupabase::default()));

        assert_eq!(
            signed_in.get_token(Value::Null).await.unwrap().as_deref(),
            Some("access-123")
        );
        assert_eq!(signed_out.get_token(Value::Null).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_credentials_pass_through() {
        let mock = Arc::new(MockSupabase::default());
        let adapter = SupabaseAdapter::new(mock.clone());
        let credentials = json!({ "email": "ada@example.com", "password": "pw" });

        assert_eq!(adapter.login(credentials.clone()).await.unwrap(), credentials);
        assert_eq!(adapter.signup(credentials.clone()).await.unwrap(), credentials);
        assert_eq!(adapter.logout(Value::Null).await.unwrap(), Value::Null);
        assert_eq!(mock.calls(), vec!["sign_in", "sign_up", "sign_out"]);
    }
}
