// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Provider catalog commands
//!
//! Commands: list, check

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use serde::Serialize;

use aegis_auth_core::{AdapterCatalog, Capabilities, ProviderType};

#[derive(Subcommand)]
pub enum ProvidersCommand {
    /// List supported provider tags in registration order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a provider tag is supported
    Check {
        /// Provider tag, e.g. "auth0"
        #[arg(value_name = "TAG")]
        tag: String,
    },
}

/// One row of `providers list`
#[derive(Debug, Serialize, PartialEq)]
pub struct ProviderEntry {
    pub tag: &'static str,
    /// `None` when the capabilities come from the caller's implementation
    pub capabilities: Option<Vec<&'static str>>,
}

pub async fn handle_command(command: ProvidersCommand) -> Result<()> {
    match command {
        ProvidersCommand::List { json } => list(json),
        ProvidersCommand::Check { tag } => check(&tag),
    }
}

pub fn provider_entries() -> Vec<ProviderEntry> {
    AdapterCatalog::supported_tags()
        .iter()
        .map(|provider| ProviderEntry {
            tag: provider.as_str(),
            capabilities: AdapterCatalog::declared_capabilities(*provider)
                .as_ref()
                .map(Capabilities::names),
        })
        .collect()
}

fn list(json: bool) -> Result<()> {
    let entries = provider_entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Supported auth providers:".bold());
    for entry in &entries {
        let capabilities = match &entry.capabilities {
            None => "(from implementation)".dimmed().to_string(),
            Some(names) if names.is_empty() => "-".dimmed().to_string(),
            Some(names) => names.join(", "),
        };
        println!("  {:<22} {}", entry.tag.bold(), capabilities);
    }

    Ok(())
}

fn check(tag: &str) -> Result<()> {
    let provider: ProviderType = tag.parse()?;

    println!("{}", format!("✓ {} is supported", provider).green());
    if let Some(capabilities) = AdapterCatalog::declared_capabilities(provider) {
        let names = capabilities.names();
        if !names.is_empty() {
            println!("  Optional capabilities: {}", names.join(", "));
        }
    }

    Ok(())
}
