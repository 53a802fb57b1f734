//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use syncano::{Credentials, Session};

use crate::output;

use super::ConnectionArgs;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// API key to authenticate with (falls back to SYNCANO_* env vars)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Print the account as pretty JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: WhoamiArgs) -> Result<()> {
    let credentials = match &args.api_key {
        Some(key) => Credentials::new().with_api_key(key),
        None => Credentials::from_env(),
    };
    // --insecure only ever widens; env-resolved credentials keep their flag.
    let credentials = if args.connection.insecure {
        credentials.with_skip_tls_verification(true)
    } else {
        credentials
    };

    let config = args.connection.config()?;
    debug!(api_root = %config.api_root(), "connecting");
    let session = Session::connect(&config, credentials)
        .await
        .context("Failed to authenticate")?;

    let account = session
        .account_details()
        .await
        .context("Failed to fetch account details")?;

    if args.json {
        output::json_pretty(&account)?;
    } else {
        output::field("ID", &account.id.to_string());
        output::field("Email", &account.email);
        output::field("Name", &format!("{} {}", account.first_name, account.last_name));
    }

    Ok(())
}
