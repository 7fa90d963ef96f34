use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::bucket::RateLimit;
use crate::error::RequestError;
use crate::retry::RetryPolicy;

/// Connection parameters for one logical session.
///
/// There are no baked-in defaults for the host or application id; callers
/// supply them explicitly (a configuration-loading layer, if any, lives
/// outside this crate).
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    application_id: String,
    host: String,
    api_version: u32,
    environment: String,
    base_url: Option<String>,
    rate: RateLimit,
    retry: RetryPolicy,
}

impl ConnectionConfig {
    /// Creates a configuration for the given application id, host, and
    /// environment tag.
    ///
    /// Defaults: API version 1, the service's published rate limit of 100
    /// requests per 10 seconds, retries disabled.
    #[must_use]
    pub fn new(
        application_id: impl Into<String>,
        host: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            application_id: application_id.into(),
            host: host.into(),
            api_version: 1,
            environment: environment.into(),
            base_url: None,
            rate: RateLimit::new(100, Duration::from_secs(10)),
            retry: RetryPolicy::disabled(),
        }
    }

    /// Overrides the API version in the base URL.
    #[must_use]
    pub const fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Overrides the `https://{host}` root, e.g. to point at a local test
    /// server. Takes a scheme-qualified URL without a trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the rate limit shared by all operations on the connection.
    #[must_use]
    pub const fn with_rate_limit(mut self, rate: RateLimit) -> Self {
        self.rate = rate;
        self
    }

    /// Overrides the retry policy.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Application id sent during login.
    #[must_use]
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// API host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Environment tag used by the release endpoints.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Configured rate limit.
    #[must_use]
    pub const fn rate(&self) -> RateLimit {
        self.rate
    }

    /// Configured retry policy.
    #[must_use]
    pub const fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Base URL for API endpoints: `https://{host}/api/v{version}/`.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}/api/v{}/", self.root(), self.api_version)
    }

    /// Base URL for OAuth endpoints: `https://{host}/oauth/`.
    #[must_use]
    pub fn oauth_url(&self) -> String {
        format!("{}/oauth/", self.root())
    }

    fn root(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}", self.host))
    }

    /// Default headers for every request: wildcard accept, gzip advertised,
    /// plus `Authorization: Bearer {token}` when a token is given.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Config`] if the token is not a legal header
    /// value.
    pub(crate) fn headers(&self, token: Option<&str>) -> Result<HeaderMap, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| RequestError::Config("access token is not a valid header value".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectionConfig {
        ConnectionConfig::new("app-id", "api.example.test", "lkg")
    }

    #[test]
    fn api_url_includes_version() {
        assert_eq!(config().api_url(), "https://api.example.test/api/v1/");
        assert_eq!(
            config().with_api_version(3).api_url(),
            "https://api.example.test/api/v3/"
        );
    }

    #[test]
    fn oauth_url_skips_version() {
        assert_eq!(config().oauth_url(), "https://api.example.test/oauth/");
    }

    #[test]
    fn base_url_override_replaces_scheme_and_host() {
        let cfg = config().with_base_url("http://127.0.0.1:8080");
        assert_eq!(cfg.api_url(), "http://127.0.0.1:8080/api/v1/");
        assert_eq!(cfg.oauth_url(), "http://127.0.0.1:8080/oauth/");
    }

    #[test]
    fn headers_carry_bearer_token() {
        let headers = config().headers(Some("tok123")).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
        assert_eq!(headers.get(ACCEPT).unwrap(), "*/*");
        assert_eq!(headers.get(ACCEPT_ENCODING).unwrap(), "gzip");
    }

    #[test]
    fn headers_without_token_have_no_authorization() {
        let headers = config().headers(None).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn invalid_token_is_a_config_error() {
        let err = config().headers(Some("bad\ntoken")).unwrap_err();
        assert!(matches!(err, RequestError::Config(_)));
    }
}
