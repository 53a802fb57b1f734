//! Request plumbing for the two Syncano account operations.

use tracing::{debug, instrument};

use crate::config::ApiRoot;
use crate::error::Error;

use super::endpoints::{ACCOUNT_PATH, AUTH_PATH, AuthRequest, AuthResponse};
use super::response::read_json;
use crate::account::AccountDetails;

/// HTTP client bound to an API root.
///
/// Issues the login exchange and the account lookup; both run through the
/// response classifier and perform no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_root: ApiRoot,
}

impl ApiClient {
    /// Create a client from a provisioned transport client and an API root.
    pub fn new(client: reqwest::Client, api_root: ApiRoot) -> Self {
        Self { client, api_root }
    }

    /// Exchange an email/password pair for an API key.
    ///
    /// `POST {root}/v1/account/auth/` with a JSON body `{"email","password"}`;
    /// a success response wraps the issued key as `{"account_key": ...}`.
    #[instrument(skip(self, password), fields(api_root = %self.api_root))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, Error> {
        let url = self.api_root.endpoint_url(AUTH_PATH);
        debug!(%email, "login exchange");

        let body = AuthRequest { email, password };
        let response = self.client.post(&url).json(&body).send().await?;

        let auth: AuthResponse = read_json(response).await?;
        Ok(auth.account_key)
    }

    /// Fetch the account details for an API key.
    ///
    /// `GET {root}/v1/account/?api_key={key}`. The result is a live snapshot;
    /// nothing is cached.
    #[instrument(skip(self, api_key), fields(api_root = %self.api_root))]
    pub async fn account_details(&self, api_key: &str) -> Result<AccountDetails, Error> {
        let url = self.api_root.endpoint_url(ACCOUNT_PATH);
        debug!("fetching account details");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        read_json(response).await
    }
}
