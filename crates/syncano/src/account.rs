//! Account data returned by the Syncano API.

use serde::{Deserialize, Serialize};

/// Details of the account an API key belongs to.
///
/// An immutable snapshot taken at fetch time; the library never caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
