//! syncano - Syncano backend-as-a-service client
//!
//! This library authenticates against the Syncano API with a session-centric
//! API. A [`Session`] is obtained via [`Session::connect()`] from a set of
//! [`Credentials`] (a pre-issued API key, or an email/password pair) and is
//! only ever returned fully authenticated.
//!
//! # Example
//!
//! ```no_run
//! use syncano::{Credentials, Session, SyncanoConfig};
//!
//! # async fn example() -> Result<(), syncano::Error> {
//! let config = SyncanoConfig::default();
//! let credentials = Credentials::new().with_login("alice@example.com", "hunter2");
//! let session = Session::connect(&config, credentials).await?;
//!
//! let account = session.account_details().await?;
//! println!("Logged in as {} {}", account.first_name, account.last_name);
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod transport;

// Re-export primary types at crate root for convenience
pub use account::AccountDetails;
pub use auth::{Credentials, Session};
pub use config::{ApiRoot, SyncanoConfig};
pub use error::Error;
pub use transport::{TlsSettings, Transport};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
