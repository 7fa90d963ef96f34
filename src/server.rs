use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::config::ConnectionConfig;
use crate::connection::AuthorizedApiConnection;
use crate::error::{RequestError, map_deser};
use crate::reader;
use crate::resources::release::{ClientRelease, Patcher};
use crate::types::LoginResult;

/// The most basic connection to the Shardbound server, permitting only
/// operations that need no authorization.
///
/// Bootstrap operations (release lookups, login) run directly and
/// sequentially: they bypass the worker pool and the rate limiter, which
/// only govern steady-state traffic on the token-bearing connections.
///
/// Construction performs no network I/O.
#[derive(Debug, Clone)]
pub struct ShardboundServer {
    config: ConnectionConfig,
    http: reqwest::Client,
}

impl ShardboundServer {
    /// Creates a server handle from explicit connection parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ConnectionConfig) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self { config, http })
    }

    /// The connection parameters this server handle was built with.
    #[must_use]
    pub const fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Patcher release operations (version, download url).
    #[must_use]
    pub const fn patcher(&self) -> Patcher<'_> {
        Patcher::new(self)
    }

    /// Game client release operations (version, download url).
    #[must_use]
    pub const fn client(&self) -> ClientRelease<'_> {
        ClientRelease::new(self)
    }

    /// Exchanges a Steam session ticket for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::Unauthorized`] (as a classified error) if
    /// the ticket is rejected.
    pub async fn login(&self, steam_ticket: &str) -> Result<LoginResult, RequestError> {
        let url = format!("{}login/steam", self.config.api_url());
        let body = format!(
            "application_id={}&steam_ticket={}",
            urlencoding::encode(self.config.application_id()),
            urlencoding::encode(steam_ticket),
        );

        let response = self
            .http
            .post(&url)
            .headers(self.config.headers(None)?)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        let bytes = reader::read_body(response, &url).await?;
        serde_json::from_slice(&bytes).map_err(|err| map_deser(&err, &bytes))
    }

    /// Logs in and upgrades to an authorized connection in one step.
    ///
    /// Equivalent to [`Self::login`] followed by
    /// [`AuthorizedApiConnection::new`] with the returned access token.
    ///
    /// # Errors
    ///
    /// Returns an error if login fails or the reply carries no access token.
    pub async fn authorize(&self, steam_ticket: &str) -> Result<AuthorizedApiConnection, RequestError> {
        let login = self.login(steam_ticket).await?;
        let token = login
            .access_token
            .ok_or_else(|| RequestError::Decode("login reply carried no access token".into()))?;
        AuthorizedApiConnection::new(self.config.clone(), &token)
    }

    pub(crate) async fn fetch_json<O: DeserializeOwned>(&self, path: &str) -> Result<O, RequestError> {
        let bytes = self.fetch(path).await?;
        serde_json::from_slice(&bytes).map_err(|err| map_deser(&err, &bytes))
    }

    async fn fetch(&self, path: &str) -> Result<Bytes, RequestError> {
        let url = format!("{}{}", self.config.api_url(), path);
        let response = self
            .http
            .get(&url)
            .headers(self.config.headers(None)?)
            .send()
            .await?;
        reader::read_body(response, &url).await
    }
}
