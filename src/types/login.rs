use serde::{Deserialize, Serialize};

/// Permission tier of an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiScope {
    /// Full end-user permissions.
    Native,
    /// Limited permissions for third-party integrations.
    Public,
}

/// Result of a credential exchange: user id, bearer token and its scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoginResult {
    /// Bearer token for subsequent authorized requests.
    pub access_token: Option<String>,
    /// Token lifetime in seconds.
    pub expires_in: f64,
    /// Token type, typically `bearer`.
    pub token_type: Option<String>,
    /// Id of the logged-in user.
    pub user_id: Option<String>,
    /// Scopes granted to the token.
    pub scope: Vec<ApiScope>,
}
