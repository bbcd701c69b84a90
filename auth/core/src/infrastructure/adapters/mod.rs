// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Auth Provider Adapters - Anti-Corruption Layer Implementations
//
// Each adapter translates between the uniform auth contract and one provider's
// native client port. Adapters never catch or rewrite provider errors.

pub mod auth0;
pub mod azure_active_directory;
pub mod catalog;
pub mod clerk;
pub mod custom;
pub mod db_auth;
pub mod ethereum;
pub mod firebase;
pub mod go_true;
pub mod keycloak;
pub mod magic_link;
pub mod netlify;
pub mod nhost;
pub mod supabase;
pub mod supertokens;

mod options;

pub use catalog::{AdapterCatalog, AdapterFn};
