//! Subcommand implementations.

pub mod login;
pub mod whoami;

use anyhow::{Context, Result};
use clap::Args;

use syncano::{ApiRoot, SyncanoConfig};

/// Connection flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// API root URL
    #[arg(long, default_value = "https://api.syncano.rocks")]
    pub api_root: String,

    /// Server name for TLS peer verification
    #[arg(long, default_value = "api.syncano.rocks")]
    pub server_name: String,

    /// Skip TLS certificate validation
    #[arg(long)]
    pub insecure: bool,
}

impl ConnectionArgs {
    pub fn config(&self) -> Result<SyncanoConfig> {
        let root = ApiRoot::new(&self.api_root).context("Invalid API root")?;
        Ok(SyncanoConfig::new(root, &self.server_name))
    }
}
