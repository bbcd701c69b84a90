// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for AEGIS Auth CLI

pub mod config;
pub mod providers;

pub use self::config::ConfigCommand;
pub use self::providers::ProvidersCommand;
