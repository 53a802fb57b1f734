//! Session establishment and authenticated operations.

use tracing::{debug, info, instrument, warn};

use crate::account::AccountDetails;
use crate::api::ApiClient;
use crate::config::SyncanoConfig;
use crate::error::Error;
use crate::transport::Transport;

use super::credentials::Credentials;

/// An authenticated connection to the Syncano API.
///
/// A `Session` is only ever handed out fully authenticated: [`connect`]
/// returns it with `is_authenticated() == true` and a non-empty API key, or
/// fails with the error that prevented authentication — never a
/// partially-initialized session.
///
/// # Concurrency
///
/// Each session independently owns its HTTP client, so two sessions may be
/// used from different tasks without coordination. Authentication mutates
/// the session and takes `&mut self`; the borrow checker enforces that it
/// cannot race other calls on the same session.
///
/// # Example
///
/// ```no_run
/// use syncano::{Credentials, Session, SyncanoConfig};
///
/// # async fn example() -> Result<(), syncano::Error> {
/// let config = SyncanoConfig::default();
/// let session = Session::connect(&config, Credentials::from_env()).await?;
/// let account = session.account_details().await?;
/// # Ok(())
/// # }
/// ```
///
/// [`connect`]: Session::connect
pub struct Session {
    api: ApiClient,
    api_key: String,
    instance_name: String,
    instance_key: String,
    email: String,
    password: String,
    authenticated: bool,
}

impl Session {
    /// Provision a transport, build a session, and authenticate it.
    ///
    /// # Errors
    ///
    /// Returns the authentication error as-is; on `Err` no session exists.
    #[instrument(skip(credentials), fields(api_root = %config.api_root()))]
    pub async fn connect(config: &SyncanoConfig, credentials: Credentials) -> Result<Self, Error> {
        info!("establishing session");

        let transport = Transport::provision(
            config.server_name(),
            credentials.skip_tls_verification(),
        )?;
        let api = ApiClient::new(transport.client().clone(), config.api_root().clone());

        let mut session = Session {
            api,
            api_key: credentials.api_key().to_string(),
            instance_name: credentials.instance_name().to_string(),
            instance_key: credentials.instance_key().to_string(),
            email: credentials.email().to_string(),
            password: credentials.password().to_string(),
            authenticated: false,
        };

        session.authenticate().await?;
        Ok(session)
    }

    /// Run the one-shot authentication state machine.
    ///
    /// Exactly one branch applies, in this order of precedence:
    ///
    /// 1. Already authenticated: no-op.
    /// 2. An API key is present: validate it with a live account lookup. A
    ///    failure propagates as-is and never falls through to the
    ///    email/password path, even if both are set.
    /// 3. Both email and password are present: perform the login exchange
    ///    and adopt the issued API key.
    /// 4. Nothing usable: fail with a missing-credentials error.
    ///
    /// API keys are never validated locally; only the remote round-trip
    /// establishes validity.
    #[instrument(skip(self))]
    pub async fn authenticate(&mut self) -> Result<(), Error> {
        if self.authenticated {
            debug!("session already authenticated");
            return Ok(());
        }

        if !self.api_key.is_empty() {
            match self.api.account_details(&self.api_key).await {
                Ok(_) => {
                    self.authenticated = true;
                    debug!("API key validated");
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "authentication failed for the configured API key");
                    Err(err)
                }
            }
        } else if !self.email.is_empty() && !self.password.is_empty() {
            let api_key = self.api.login(&self.email, &self.password).await?;
            self.api_key = api_key;
            self.authenticated = true;
            debug!("login exchange succeeded");
            Ok(())
        } else {
            Err(Error::infrastructure(
                "missing credentials: provide an API key or an email/password pair",
            ))
        }
    }

    /// Returns whether this session is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the API key the session authenticated with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the instance name carried on the session, empty if unset.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Returns the instance key carried on the session, empty if unset.
    pub fn instance_key(&self) -> &str {
        &self.instance_key
    }

    /// Returns the account email, empty if the session was keyed directly.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Fetch the account details for this session's API key.
    ///
    /// Always issues a live remote call; the result is never cached.
    #[instrument(skip(self))]
    pub async fn account_details(&self) -> Result<AccountDetails, Error> {
        debug!("fetching account details");
        self.api.account_details(&self.api_key).await
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("instance_name", &self.instance_name)
            .field("api_key", &"[REDACTED]")
            .field("authenticated", &self.authenticated)
            .finish()
    }
}
