// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

mod common;

use aegis_auth_core::domain::native_client::DbAuthMethod;
use aegis_auth_core::{
    create_auth_client_from_config, AuthClientError, AuthConfigManifest, Credentials,
    ProviderType, SupportedAuthClient,
};
use common::{client_for, RecordingTransport};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

const DB_AUTH_MANIFEST: &str = r#"
apiVersion: 100monkeys.ai/v1
kind: AuthConfig
metadata:
  name: storefront
  labels:
    team: web
spec:
  provider: dbAuth
  dbAuth:
    apiUrl: /api/auth
    fetchConfig:
      credentials: include
"#;

#[tokio::test]
async fn test_manifest_file_drives_the_factory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aegis-auth.yaml");
    std::fs::write(&path, DB_AUTH_MANIFEST).unwrap();

    let manifest = AuthConfigManifest::from_yaml_file(&path).unwrap();
    manifest.validate().unwrap();
    assert_eq!(manifest.metadata.name, "storefront");

    let transport = Arc::new(RecordingTransport::default());
    let client = SupportedAuthClient::DbAuth(transport.clone());
    let auth = create_auth_client_from_config(client, &manifest.spec).unwrap();
    assert_eq!(auth.provider_type(), ProviderType::DbAuth);

    auth.signup(json!({ "username": "ada", "password": "pw" }))
        .await
        .unwrap();

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests[0].method, DbAuthMethod::Signup);
    assert_eq!(requests[0].config.api_url, "/api/auth");
    assert_eq!(requests[0].config.fetch_config.credentials, Credentials::Include);
}

#[test]
fn test_manifest_round_trips_through_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("auth.yaml");

    let mut manifest = AuthConfigManifest::default();
    manifest.spec.provider = "clerk".to_string();
    manifest.to_yaml_file(&path).unwrap();

    let loaded = AuthConfigManifest::load_or_default(Some(path)).unwrap();
    assert_eq!(loaded.spec.provider, "clerk");
    assert!(loaded.spec.db_auth.is_none());
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");

    let err = AuthConfigManifest::load_or_default(Some(missing)).unwrap_err();
    assert!(err.to_string().contains("Failed to load auth config"));
}

#[test]
fn test_unknown_provider_fails_validation_and_construction() {
    let manifest = AuthConfigManifest::from_yaml_str(
        r#"
apiVersion: 100monkeys.ai/v1
kind: AuthConfig
metadata:
  name: legacy
spec:
  provider: okta
"#,
    )
    .unwrap();

    let err = manifest.validate().unwrap_err();
    assert!(err.to_string().starts_with("Your client okta is not supported"));

    let err = create_auth_client_from_config(client_for(ProviderType::Custom), &manifest.spec)
        .unwrap_err();
    assert!(matches!(err, AuthClientError::UnsupportedProvider(_)));
}

#[test]
fn test_db_auth_section_requires_db_auth_provider() {
    let manifest = AuthConfigManifest::from_yaml_str(
        r#"
apiVersion: 100monkeys.ai/v1
kind: AuthConfig
metadata:
  name: confused
spec:
  provider: auth0
  dbAuth:
    apiUrl: /api/auth
"#,
    )
    .unwrap();

    assert!(manifest.validate().is_err());
}
