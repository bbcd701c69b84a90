// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod client_factory;

pub use client_factory::{
    create_auth_client, create_auth_client_for, create_auth_client_from_config,
};
