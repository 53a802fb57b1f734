//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::debug;

use syncano::{Credentials, Session};

use crate::output;

use super::ConnectionArgs;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let config = args.connection.config()?;
    debug!(api_root = %config.api_root(), "connecting");
    let credentials = Credentials::new()
        .with_login(&args.email, &args.password)
        .with_skip_tls_verification(args.connection.insecure);

    eprintln!("{}", "Logging in...".dimmed());

    let session = Session::connect(&config, credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", session.email());
    // The issued key is printed so it can be exported as SYNCANO_API_KEY.
    output::field("API key", session.api_key());

    Ok(())
}
