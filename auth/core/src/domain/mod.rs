// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Domain
//!
//! Provider-independent types for the auth adapter layer.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Tags, ports, capability contract, user metadata and configuration

pub mod auth_client;
pub mod auth_config;
pub mod errors;
pub mod native_client;
pub mod provider;
pub mod user;

pub use auth_client::{
    AuthClient, AuthImplementation, ForgotPassword, ResetPassword, RestoreAuthState,
    ValidateResetToken,
};
pub use auth_config::{
    AuthConfigManifest, AuthConfigSpec, Credentials, DbAuthConfig, FetchConfig,
    SupportedAuthConfig,
};
pub use errors::{AuthClientError, ProviderError, UnsupportedProviderError};
pub use native_client::SupportedAuthClient;
pub use provider::{Capabilities, ProviderType};
pub use user::UserMetadata;
