// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Netlify Identity Adapter
//
// Login and signup open the identity widget; tokens are refreshed on demand.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::auth_client::AuthImplementation;
use crate::domain::auth_config::SupportedAuthConfig;
use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::{NetlifyIdentity, NetlifyModal, SupportedAuthClient};
use crate::domain::provider::{Capabilities, ProviderType};
use crate::domain::user::UserMetadata;

use super::options::{mismatch, to_value};

pub const CAPABILITIES: Capabilities = Capabilities::NONE;

pub struct NetlifyAdapter {
    identity: Arc<dyn NetlifyIdentity>,
}

impl NetlifyAdapter {
    pub fn new(identity: Arc<dyn NetlifyIdentity>) -> Self {
        Self { identity }
    }

    async fn open(&self, modal: NetlifyModal) -> Result<Value, ProviderError> {
        match self.identity.open(modal).await? {
            Some(user) => to_value(&user),
            None => Ok(Value::Null),
        }
    }
}

pub fn adapter(
    client: &SupportedAuthClient,
    _config: Option<SupportedAuthConfig>,
) -> Result<Box<dyn AuthImplementation>, AuthClientError> {
    let SupportedAuthClient::Netlify(identity) = client else {
        return Err(mismatch(ProviderType::Netlify, client));
    };
    Ok(Box::new(NetlifyAdapter::new(identity.clone())))
}

#[async_trait]
impl AuthImplementation for NetlifyAdapter {
    async fn login(&self, _options: Value) -> Result<Value, ProviderError> {
        self.open(NetlifyModal::Login).await
    }

    async fn logout(&self, _options: Value) -> Result<Value, ProviderError> {
        self.identity.logout().await?;
        Ok(Value::Null)
    }

    async fn signup(&self, _options: Value) -> Result<Value, ProviderError> {
        self.open(NetlifyModal::Signup).await
    }

    async fn get_token(&self, _options: Value) -> Result<Option<String>, ProviderError> {
        if self.identity.current_user().is_none() {
            return Ok(None);
        }
        self.identity.refresh().await.map(Some)
    }

    async fn get_user_metadata(&self) -> Result<Option<UserMetadata>, ProviderError> {
        Ok(self.identity.current_user().map(UserMetadata::Netlify))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::NetlifyUser;
    use serde_json::Map;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockIdentity {
        user: Option<NetlifyUser>,
        calls: Mutex<Vec<String>>,
    }

    impl MockIdentity {
        fn signed_in() -> Self {
            Self {
                user: Some(NetlifyUser {
                    id: "user-1".to_string(),
                    email: Some("ada@example.com".to_string()),
                    app_metadata: Map::new(),
                    user_metadata: Map::new(),
                    token: None,
                }),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NetlifyIdentity for MockIdentity {
        async fn open(&self, modal: NetlifyModal) -> Result<Option<NetlifyUser>, ProviderError> {
            self.calls.lock().unwrap().push(format!("open:{modal:?}"));
            Ok(self.user.clone())
        }
        async fn logout(&self) -> Result<(), ProviderError> {
            self.calls.lock().unwrap().push("logout".to_string());
            Ok(())
        }
        fn current_user(&self) -> Option<NetlifyUser> {
            self.user.clone()
        }
        async fn refresh(&self) -> Result<String, ProviderError> {
            self.calls.lock().unwrap().push("refresh".to_string());
            Ok("fresh-jwt".to_string())
        }
    }

    #[tokio::test]
    async fn test_token_refreshes_for_current_user() {
        let mock = Arc::new(MockIdentity::signed_in());
        let adapter = NetlifyAdapter::new(mock.clone());

        let token = adapter.get_token(Value::Null).await.unwrap();

        assert_eq!(token.as_deref(), Some("fresh-jwt"));
        assert_eq!(mock.calls(), vec!["refresh"]);
        assert!(matches!(
            adapter.get_user_metadata().await.unwrap(),
            Some(UserMetadata::Netlify(user)) if user.id == "user-1"
        ));
    }

    #[tokio::test]
    async fn test_no_refresh_without_current_user() {
        let mock = Arc::new(MockIdentity::default());
        let adapter = NetlifyAdapter::new(mock.clone());

        assert_eq!(adapter.get_token(Value::Null).await.unwrap(), None);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_and_signup_open_the_widget() {
        let mock = Arc::new(MockIdentity::signed_in());
        let adapter = NetlifyAdapter::new(mock.clone());

        let user = adapter.login(Value::Null).await.unwrap();
        adapter.signup(Value::Null).await.unwrap();
        adapter.logout(Value::Null).await.unwrap();

        assert_eq!(user["id"], "user-1");
        assert_eq!(mock.calls(), vec!["open:Login", "open:Signup", "logout"]);
    }
}
