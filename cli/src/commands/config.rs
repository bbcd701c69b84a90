// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Auth configuration commands
//!
//! Commands: show, validate, generate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::{Path, PathBuf};

use aegis_auth_core::{AdapterCatalog, AuthConfigManifest, SupportedAuthConfig};

const MINIMAL_TEMPLATE: &str = include_str!("../../templates/auth-config-minimal.yaml");
const EXAMPLES_TEMPLATE: &str = include_str!("../../templates/auth-config-with-examples.yaml");

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current auth configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,
    },

    /// Validate auth configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate sample auth configuration
    Generate {
        /// Output path
        #[arg(short, long, default_value = "./aegis-auth.yaml")]
        output: PathBuf,

        /// Include examples and comments
        #[arg(long)]
        examples: bool,
    },
}

pub async fn handle_command(
    command: ConfigCommand,
    config_override: Option<PathBuf>,
) -> Result<()> {
    match command {
        ConfigCommand::Show { paths } => show(config_override, paths).await,
        ConfigCommand::Validate { file } => validate(file.or(config_override)).await,
        ConfigCommand::Generate { output, examples } => generate(&output, examples).await,
    }
}

async fn show(config_override: Option<PathBuf>, show_paths: bool) -> Result<()> {
    let config = AuthConfigManifest::load_or_default(config_override.clone())
        .context("Failed to load auth configuration")?;

    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        if let Some(path) = &config_override {
            println!("  1. --config flag: {}", path.display());
        } else {
            println!("  1. --config flag: {}", "(not set)".dimmed());
        }
        println!(
            "  2. AEGIS_AUTH_CONFIG_PATH: {}",
            std::env::var("AEGIS_AUTH_CONFIG_PATH")
                .unwrap_or_else(|_| "(not set)".to_string())
                .dimmed()
        );
        println!("  3. ./aegis-auth.yaml");
        println!("  4. ~/.aegis/auth.yaml");
        println!("  5. /etc/aegis/auth.yaml");
        println!();
    }

    println!("{}", "Current auth configuration:".bold());
    println!("  Name: {}", config.metadata.name);
    if let Some(labels) = &config.metadata.labels {
        let mut labels: Vec<_> = labels.iter().collect();
        labels.sort();
        for (key, value) in labels {
            println!("  Label: {}={}", key, value);
        }
    }

    let supported = AdapterCatalog::has_adapter(&config.spec.provider);
    let marker = if supported {
        config.spec.provider.green()
    } else {
        format!("{} (unsupported)", config.spec.provider).red()
    };
    println!("  Provider: {}", marker);

    if let Some(SupportedAuthConfig::DbAuth(db_auth)) = config.spec.provider_config() {
        println!();
        println!("{}", "dbAuth:".bold());
        println!("  API URL: {}", db_auth.api_url);
        println!("  Credentials: {:?}", db_auth.fetch_config.credentials);
    }

    Ok(())
}

async fn validate(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating auth configuration...");

    let config = AuthConfigManifest::load_or_default(config_path)
        .context("Failed to load auth configuration")?;

    config
        .validate()
        .context("Auth configuration validation failed")?;

    println!("{}", "✓ Auth configuration is valid".green());

    Ok(())
}

async fn generate(output: &Path, with_examples: bool) -> Result<()> {
    let sample = if with_examples {
        EXAMPLES_TEMPLATE
    } else {
        MINIMAL_TEMPLATE
    };

    std::fs::write(output, sample)
        .with_context(|| format!("Failed to write auth config to {:?}", output))?;

    println!(
        "{}",
        format!("✓ Auth configuration generated: {}", output.display()).green()
    );

    Ok(())
}
