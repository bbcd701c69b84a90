// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! AEGIS Auth Core
//!
//! Wraps third-party authentication SDKs behind one capability-based client.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Adapter catalog, client factory and the uniform auth client contract
//!
//! ```rust,ignore
//! use aegis_auth_core::{create_auth_client, SupportedAuthClient};
//!
//! let client = create_auth_client(SupportedAuthClient::Auth0(sdk), "auth0", None)?;
//! if let Some(token) = client.get_token(serde_json::Value::Null).await? {
//!     // authenticated
//! }
//! if let Some(recovery) = client.forgot_password() {
//!     recovery.forgot_password("alice@example.com").await?;
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::client_factory::{
    create_auth_client, create_auth_client_for, create_auth_client_from_config,
};
pub use domain::*;
pub use infrastructure::adapters::AdapterCatalog;
