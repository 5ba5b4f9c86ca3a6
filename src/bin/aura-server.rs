// ABOUTME: Server binary for the AURA BMI advisor HTTP API
// ABOUTME: Loads configuration, initializes logging and the database, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

//! # AURA BMI Advisor Server Binary

use std::sync::Arc;

use anyhow::{Context, Result};
use aura_bmi_server::{
    config::{DatabaseUrl, ServerConfig},
    logging,
    resources::ServerResources,
    server,
};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "aura-server")]
#[command(about = "AURA BMI Advisor - BMI classification, energy targets and diet guidance API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./data/aura.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // LOG_FORMAT and RUST_LOG may come from .env
    dotenvy::dotenv().ok();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url =
            DatabaseUrl::parse_url(&database_url).context("Invalid --database-url value")?;
    }
    config.validate()?;
    config.log_summary();

    info!("Starting AURA BMI Advisor server");

    let resources = Arc::new(
        ServerResources::from_config(config)
            .await
            .context("Failed to initialize server resources")?,
    );

    if let Err(e) = server::serve(resources).await {
        error!(error = %e, "Server terminated with an error");
        return Err(e.into());
    }

    Ok(())
}
