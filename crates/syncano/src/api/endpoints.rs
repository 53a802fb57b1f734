//! Syncano endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Resource Paths
// ============================================================================

/// Login exchange: `POST {root}/v1/account/auth/`
pub const AUTH_PATH: &str = "account/auth/";

/// Account lookup: `GET {root}/v1/account/`
pub const ACCOUNT_PATH: &str = "account/";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for the login exchange.
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from the login exchange, wrapping the issued API key.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub account_key: String,
}
