//! HTTP transport provisioning.
//!
//! Builds the configured `reqwest` client a session uses for every request
//! and keeps the TLS settings it was built with inspectable.

use std::time::Duration;

use crate::error::Error;

/// HTTP request timeout in seconds. No retries are layered on top; the
/// timeout is the only bound on a request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// TLS settings a [`Transport`] was provisioned with.
///
/// `reqwest` offers no direct override of the TLS peer name, so the
/// `server_name` recorded here is the host the caller intends certificate
/// verification to run against; it is what [`SyncanoConfig::server_name`]
/// supplied at provisioning time.
///
/// [`SyncanoConfig::server_name`]: crate::SyncanoConfig::server_name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsSettings {
    pub server_name: String,
    pub skip_verification: bool,
    pub timeout: Duration,
}

/// A provisioned HTTP client plus the settings it was built with.
///
/// Cheap to clone; `reqwest::Client` shares its connection pool internally.
/// Provisioning is idempotent with respect to its inputs and has no side
/// effects beyond allocating the client.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    settings: TlsSettings,
}

impl Transport {
    /// Build a client for the given server name.
    ///
    /// Certificate validation is disabled only when `skip_verification` is
    /// true; the request timeout is fixed at 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend cannot be initialized.
    pub fn provision(server_name: &str, skip_verification: bool) -> Result<Self, Error> {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

        // Redirects are never followed: 3xx responses belong to the
        // response classifier, not the transport.
        let client = reqwest::Client::builder()
            .user_agent(concat!("syncano/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(skip_verification)
            .build()
            .map_err(|e| Error::infrastructure(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            settings: TlsSettings {
                server_name: server_name.to_string(),
                skip_verification,
                timeout,
            },
        })
    }

    /// Returns the provisioned client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Returns the settings this transport was built with.
    pub fn settings(&self) -> &TlsSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provision_records_tls_settings() {
        let transport = Transport::provision("api.syncano.rocks", true).unwrap();
        let settings = transport.settings();
        assert_eq!(settings.server_name, "api.syncano.rocks");
        assert!(settings.skip_verification);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn provision_defaults_to_verifying() {
        let transport = Transport::provision("api.syncano.rocks", false).unwrap();
        assert!(!transport.settings().skip_verification);
    }

    #[test]
    fn provision_is_idempotent() {
        let a = Transport::provision("api.syncano.rocks", true).unwrap();
        let b = Transport::provision("api.syncano.rocks", true).unwrap();
        assert_eq!(a.settings(), b.settings());
    }
}
