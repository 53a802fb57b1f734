//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::login::LoginArgs;
use crate::commands::whoami::WhoamiArgs;

/// Syncano CLI for credential checks and account inspection.
#[derive(Parser, Debug)]
#[command(name = "syncano")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange an email/password pair for an API key
    Login(LoginArgs),

    /// Show the account behind an API key
    Whoami(WhoamiArgs),
}
