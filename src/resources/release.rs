use crate::error::RequestError;
use crate::resources::enc;
use crate::server::ShardboundServer;
use crate::types::misc::{DownloadUrl, VersionInfo};

/// Patcher release lookups.
///
/// These ride the direct bootstrap path on [`ShardboundServer`] rather than
/// the pooled execution core.
pub struct Patcher<'s> {
    server: &'s ShardboundServer,
}

impl<'s> Patcher<'s> {
    pub(crate) const fn new(server: &'s ShardboundServer) -> Self {
        Self { server }
    }

    /// Retrieves the current patcher version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be parsed.
    pub async fn version(&self) -> Result<String, RequestError> {
        let info: VersionInfo = self.server.fetch_json("patcher/version/show").await?;
        Ok(info.version)
    }

    /// Retrieves the download URL of the latest patcher version for the
    /// configured environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be parsed.
    pub async fn download_url(&self) -> Result<String, RequestError> {
        let path = format!(
            "patcher/{}/download_url/show",
            enc(self.server.config().environment())
        );
        let reply: DownloadUrl = self.server.fetch_json(&path).await?;
        Ok(reply.url)
    }
}

/// Game client release lookups, on the same direct path as [`Patcher`].
pub struct ClientRelease<'s> {
    server: &'s ShardboundServer,
}

impl<'s> ClientRelease<'s> {
    pub(crate) const fn new(server: &'s ShardboundServer) -> Self {
        Self { server }
    }

    /// Retrieves the current client version for the configured environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be parsed.
    pub async fn version(&self) -> Result<String, RequestError> {
        let path = format!(
            "client/version/{}/show",
            enc(self.server.config().environment())
        );
        let info: VersionInfo = self.server.fetch_json(&path).await?;
        Ok(info.version)
    }

    /// Retrieves the download URL for the specified client version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be parsed.
    pub async fn download_url(&self, version: &str) -> Result<String, RequestError> {
        let path = format!("client/Win64/{}/download_url/show", enc(version));
        let reply: DownloadUrl = self.server.fetch_json(&path).await?;
        Ok(reply.url)
    }
}
