//! Connection credentials.

use std::env;
use std::fmt;

/// Environment variable holding the account email.
pub const ENV_EMAIL: &str = "SYNCANO_EMAIL";

/// Environment variable holding the account password.
pub const ENV_PASSWORD: &str = "SYNCANO_PASSWORD";

/// Environment variable holding a pre-issued API key.
pub const ENV_API_KEY: &str = "SYNCANO_API_KEY";

/// Environment variable controlling TLS verification; the literal `"1"`
/// disables certificate validation, any other value leaves it on.
pub const ENV_SSL_ENABLED: &str = "SYNCANO_SSL_ENABLED";

/// Credentials for establishing a Syncano session.
///
/// No combination of fields is required at construction; which fields are
/// usable is resolved by the authenticator when [`Session::connect`] runs.
/// Absent values are empty strings. Immutable once built.
///
/// # Security
///
/// The password and API key are never exposed in Debug output to prevent
/// accidental logging.
///
/// # Example
///
/// ```
/// use syncano::Credentials;
///
/// let creds = Credentials::new()
///     .with_login("alice@example.com", "hunter2")
///     .with_skip_tls_verification(true);
/// assert_eq!(creds.email(), "alice@example.com");
/// ```
///
/// [`Session::connect`]: crate::Session::connect
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: String,
    instance_name: String,
    instance_key: String,
    email: String,
    password: String,
    skip_tls_verification: bool,
}

impl Credentials {
    /// Create an empty credential set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a pre-issued API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set an email/password pair for the login exchange.
    pub fn with_login(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.email = email.into();
        self.password = password.into();
        self
    }

    /// Set the instance name and key to carry on the session.
    pub fn with_instance(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
        self.instance_name = name.into();
        self.instance_key = key.into();
        self
    }

    /// Disable TLS certificate validation for this session.
    pub fn with_skip_tls_verification(mut self, skip: bool) -> Self {
        self.skip_tls_verification = skip;
        self
    }

    /// Resolve credentials from the process environment.
    ///
    /// Reads `SYNCANO_EMAIL`, `SYNCANO_PASSWORD`, `SYNCANO_API_KEY`, and
    /// `SYNCANO_SSL_ENABLED`. Performs no validation; unset variables
    /// become empty strings.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(ENV_EMAIL).unwrap_or_default(),
            env::var(ENV_PASSWORD).unwrap_or_default(),
            env::var(ENV_API_KEY).unwrap_or_default(),
            &env::var(ENV_SSL_ENABLED).unwrap_or_default(),
        )
    }

    /// Build credentials from raw environment-style values.
    ///
    /// Only the literal `"1"` for `ssl_flag` turns TLS-skip on.
    pub(crate) fn from_values(
        email: String,
        password: String,
        api_key: String,
        ssl_flag: &str,
    ) -> Self {
        Self {
            api_key,
            instance_name: String::new(),
            instance_key: String::new(),
            email,
            password,
            skip_tls_verification: ssl_flag == "1",
        }
    }

    /// Returns the API key, empty if absent.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the instance name, empty if absent.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Returns the instance key, empty if absent.
    pub fn instance_key(&self) -> &str {
        &self.instance_key
    }

    /// Returns the email, empty if absent.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password, empty if absent.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Returns whether TLS certificate validation should be skipped.
    pub fn skip_tls_verification(&self) -> bool {
        self.skip_tls_verification
    }
}

// Intentionally hide secrets in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("instance_name", &self.instance_name)
            .field("instance_key", &"[REDACTED]")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("skip_tls_verification", &self.skip_tls_verification)
            .finish()
    }
}
