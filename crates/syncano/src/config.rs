//! API root and connection configuration.
//!
//! The original Syncano clients kept the API root and TLS server name in
//! process-wide globals; here they live in an explicit [`SyncanoConfig`]
//! value owned by the caller and passed to [`Session::connect`].
//!
//! [`Session::connect`]: crate::Session::connect

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::Error;

/// Default API root for the Syncano service.
pub const DEFAULT_API_ROOT: &str = "https://api.syncano.rocks";

/// Default server name used for TLS peer verification.
pub const DEFAULT_SERVER: &str = "api.syncano.rocks";

/// API version segment prefixed to every resource path.
pub const API_VERSION: &str = "v1";

/// A validated Syncano API root URL.
///
/// Ensures the URL is absolute, uses HTTPS (or HTTP for localhost, which
/// tests against a local mock server rely on), and is normalized for
/// endpoint construction.
///
/// # Example
///
/// ```
/// use syncano::ApiRoot;
///
/// let root = ApiRoot::new("https://api.syncano.rocks").unwrap();
/// assert_eq!(root.endpoint_url("account/auth/"),
///            "https://api.syncano.rocks/v1/account/auth/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiRoot(Url);

impl ApiRoot {
    /// Create a new API root from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute, has no host, or uses a
    /// scheme other than HTTPS (HTTP is allowed only for localhost).
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s)
            .map_err(|e| Error::infrastructure(format!("invalid API root '{s}': {e}")))?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full endpoint URL for a resource path.
    ///
    /// Joins the root, the fixed version segment, and the resource path.
    pub fn endpoint_url(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}/{}", base, API_VERSION, path)
    }

    /// Returns the root URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(Error::infrastructure(format!(
                "invalid API root '{original}': must be an absolute URL"
            )));
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(Error::infrastructure(format!(
                "invalid API root '{original}': must use HTTPS (HTTP allowed only for localhost)"
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::infrastructure(format!(
                "invalid API root '{original}': must have a host"
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiRoot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiRoot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiRoot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiRoot::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Connection configuration for a Syncano session.
///
/// Owned by the caller and passed to [`Session::connect`]; the defaults
/// point at the public Syncano service.
///
/// [`Session::connect`]: crate::Session::connect
#[derive(Clone, Debug)]
pub struct SyncanoConfig {
    api_root: ApiRoot,
    server_name: String,
}

impl SyncanoConfig {
    /// Create a configuration for a custom API root and TLS server name.
    pub fn new(api_root: ApiRoot, server_name: impl Into<String>) -> Self {
        Self {
            api_root,
            server_name: server_name.into(),
        }
    }

    /// Returns the API root.
    pub fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the server name used for TLS peer verification.
    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}

impl Default for SyncanoConfig {
    fn default() -> Self {
        let api_root = ApiRoot::new(DEFAULT_API_ROOT).expect("default API root is valid");
        Self {
            api_root,
            server_name: DEFAULT_SERVER.to_string(),
        }
    }
}
